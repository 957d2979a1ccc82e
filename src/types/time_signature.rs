use crate::error::{Result, TonalError};
use crate::types::note_length::NoteLength;
use num_rational::Rational64;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

/// The length of one measure, as written.
///
/// The written numerator and denominator are kept, so `6/8` and `3/4` render
/// differently even though they compare equal. An optional beat grouping
/// such as `2+2+3/8` can be attached.
#[derive(Clone)]
pub struct TimeSignature {
    numerator: i64,
    denominator: i64,
    grouping: Option<Vec<i64>>,
}

impl TimeSignature {
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator <= 0 {
            return Err(TonalError::MalformedInput(format!(
                "Time signature denominator must be positive, got {numerator}/{denominator}"
            )));
        }
        Ok(Self {
            numerator,
            denominator,
            grouping: None,
        })
    }

    /// Attaches a beat grouping. The groups must add up to the numerator.
    pub fn with_grouping(mut self, grouping: Vec<i64>) -> Result<Self> {
        let total: i64 = grouping.iter().sum();
        if grouping.iter().any(|&beats| beats <= 0) || total != self.numerator {
            return Err(TonalError::MalformedInput(format!(
                "Beat grouping {:?} does not divide {}/{}",
                grouping, self.numerator, self.denominator
            )));
        }
        self.grouping = Some(grouping);
        Ok(self)
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn grouping(&self) -> Option<&[i64]> {
        self.grouping.as_deref()
    }

    pub fn value(&self) -> Rational64 {
        Rational64::new(self.numerator, self.denominator)
    }

    pub fn as_note_length(&self) -> NoteLength {
        NoteLength::from_ratio(self.value())
    }

    /// Writes `value` over the largest of `denominators` that can carry it,
    /// or over its own reduced denominator if none can.
    fn written(value: Rational64, denominators: &[i64]) -> Self {
        let reduced = *value.denom();
        let denominator = denominators
            .iter()
            .copied()
            .filter(|d| d % reduced == 0)
            .max()
            .unwrap_or(reduced);
        Self {
            numerator: value.numer() * (denominator / reduced),
            denominator,
            grouping: None,
        }
    }

    fn checked_quotient(&self, divisor: Rational64, denominators: &[i64]) -> Result<Self> {
        if *divisor.numer() == 0 {
            return Err(TonalError::MalformedInput(format!(
                "Cannot divide {self} by zero"
            )));
        }
        Ok(Self::written(self.value() / divisor, denominators))
    }
}

impl PartialEq for TimeSignature {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for TimeSignature {}

impl Hash for TimeSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for TimeSignature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeSignature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper = match &self.grouping {
            Some(groups) => groups
                .iter()
                .map(|beats| beats.to_string())
                .collect::<Vec<_>>()
                .join("+"),
            None => self.numerator.to_string(),
        };
        f.pad(&format!("{}/{}", upper, self.denominator))
    }
}

impl fmt::Debug for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeSignature({})", self)
    }
}

impl FromStr for TimeSignature {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let malformed = || TonalError::MalformedInput(format!("Invalid time signature: {s}"));

        let (upper, lower) = s.split_once('/').ok_or_else(malformed)?;
        let denominator: i64 = lower.trim().parse().map_err(|_e| malformed())?;
        let groups = upper
            .split('+')
            .map(|beats| beats.trim().parse::<i64>().map_err(|_e| malformed()))
            .collect::<Result<Vec<_>>>()?;

        let signature = Self::new(groups.iter().sum(), denominator)?;
        if groups.len() > 1 {
            signature.with_grouping(groups)
        } else {
            Ok(signature)
        }
    }
}

impl Add for TimeSignature {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::written(
            self.value() + other.value(),
            &[self.denominator, other.denominator],
        )
    }
}

impl Add<Rational64> for TimeSignature {
    type Output = Self;

    fn add(self, other: Rational64) -> Self::Output {
        Self::written(self.value() + other, &[self.denominator])
    }
}

impl Add<i64> for TimeSignature {
    type Output = Self;

    fn add(self, other: i64) -> Self::Output {
        self + Rational64::from_integer(other)
    }
}

impl Add<NoteLength> for TimeSignature {
    type Output = Self;

    fn add(self, other: NoteLength) -> Self::Output {
        self + other.value()
    }
}

impl Sub for TimeSignature {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::written(
            self.value() - other.value(),
            &[self.denominator, other.denominator],
        )
    }
}

impl Sub<Rational64> for TimeSignature {
    type Output = Self;

    fn sub(self, other: Rational64) -> Self::Output {
        Self::written(self.value() - other, &[self.denominator])
    }
}

impl Sub<i64> for TimeSignature {
    type Output = Self;

    fn sub(self, other: i64) -> Self::Output {
        self - Rational64::from_integer(other)
    }
}

impl Sub<NoteLength> for TimeSignature {
    type Output = Self;

    fn sub(self, other: NoteLength) -> Self::Output {
        self - other.value()
    }
}

impl Mul for TimeSignature {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self::written(
            self.value() * other.value(),
            &[self.denominator, other.denominator],
        )
    }
}

impl Mul<Rational64> for TimeSignature {
    type Output = Self;

    fn mul(self, other: Rational64) -> Self::Output {
        Self::written(self.value() * other, &[self.denominator])
    }
}

impl Mul<i64> for TimeSignature {
    type Output = Self;

    fn mul(self, other: i64) -> Self::Output {
        self * Rational64::from_integer(other)
    }
}

impl Div for TimeSignature {
    type Output = Result<Self>;

    fn div(self, other: Self) -> Self::Output {
        self.checked_quotient(other.value(), &[self.denominator, other.denominator])
    }
}

impl Div<Rational64> for TimeSignature {
    type Output = Result<Self>;

    fn div(self, other: Rational64) -> Self::Output {
        self.checked_quotient(other, &[self.denominator])
    }
}

impl Div<i64> for TimeSignature {
    type Output = Result<Self>;

    fn div(self, other: i64) -> Self::Output {
        self / Rational64::from_integer(other)
    }
}
