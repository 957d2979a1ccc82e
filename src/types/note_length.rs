use crate::error::{Result, TonalError};
use crate::types::time_signature::TimeSignature;
use crate::util::{floor_pow2, is_pow2, is_pow2_ratio, odd_part};
use num_rational::Rational64;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// A rhythmic duration in whole notes, kept as an exact fraction.
///
/// A quarter note is `1/4`, a dotted quarter `3/8`, a quarter-note triplet
/// member `1/6`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteLength(Rational64);

impl NoteLength {
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(TonalError::MalformedInput(format!(
                "Note length {numerator}/0 has a zero denominator"
            )));
        }
        Ok(Self(Rational64::new(numerator, denominator)))
    }

    pub fn from_ratio(value: Rational64) -> Self {
        Self(value)
    }

    pub fn from_integer(value: i64) -> Self {
        Self(Rational64::from_integer(value))
    }

    pub fn value(&self) -> Rational64 {
        self.0
    }

    pub fn numerator(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denominator(&self) -> i64 {
        *self.0.denom()
    }

    /// Whether this is a plain written length: whole, half, quarter and so on,
    /// or a breve or longer.
    pub fn is_power_of_two(&self) -> bool {
        is_pow2_ratio(&self.0)
    }

    /// The length with `dots` dots: `self + self/2 + ... + self/2^dots`,
    /// which is `self * (2^(dots+1) - 1) / 2^dots`.
    ///
    /// Fails when the dotted length no longer fits in 64-bit terms.
    pub fn dot(&self, dots: u32) -> Result<Self> {
        let overflow = || {
            TonalError::MalformedInput(format!("{self} with {dots} dots cannot be represented"))
        };

        let scale = 2i64.checked_pow(dots).ok_or_else(overflow)?;
        let factor = scale
            .checked_mul(2)
            .and_then(|f| f.checked_sub(1))
            .ok_or_else(overflow)?;
        let numerator = self.numerator().checked_mul(factor).ok_or_else(overflow)?;
        let denominator = self.denominator().checked_mul(scale).ok_or_else(overflow)?;
        Ok(Self(Rational64::new(numerator, denominator)))
    }

    /// Splits a dotted length into its undotted base and dot count.
    ///
    /// The base is the unique length with a power-of-two denominator that
    /// gives `self` when dotted, so `7/16` is a double-dotted quarter and
    /// `1/8` an undotted eighth. Lengths like `5/8` have no dotted spelling.
    pub fn undot(&self) -> Result<(Self, u32)> {
        let not_dottable = || TonalError::NotDottable(self.to_string());

        if self.0 <= Rational64::from_integer(0) || !is_pow2(self.denominator()) {
            return Err(not_dottable());
        }

        // A length with n dots is base * (2^(n+1) - 1) / 2^n, so the odd part
        // of the numerator must be one less than a power of two.
        let target = odd_part(self.numerator());
        let mut dots = 0;
        let mut factor: i64 = 1;
        while factor < target {
            factor = factor
                .checked_mul(2)
                .and_then(|f| f.checked_add(1))
                .ok_or_else(not_dottable)?;
            dots += 1;
        }
        if factor != target {
            return Err(not_dottable());
        }

        let base = self.0 * Rational64::new(1 << dots, factor);
        Ok((Self(base), dots))
    }

    pub fn can_undot(&self) -> bool {
        self.undot().is_ok()
    }

    /// Splits a tuplet member into its written length and tuplet type.
    ///
    /// Lengths whose denominator is already a power of two are not tuplets.
    /// Otherwise the smallest odd tuplet type that explains the denominator
    /// wins, so `1/6` is a quarter-note triplet member and `1/9` an eighth in
    /// a nonuplet.
    pub fn untuple(&self) -> (Self, Option<i64>) {
        if is_pow2(self.denominator()) {
            return (*self, None);
        }

        let mut tuplet_type = 3;
        loop {
            let nominal = self.0 * Rational64::new(tuplet_type, floor_pow2(tuplet_type));
            if is_pow2(*nominal.denom()) {
                if tuplet_type > 3 {
                    log::debug!("{} untupled as {}:{}", self, tuplet_type, floor_pow2(tuplet_type));
                }
                return (Self(nominal), Some(tuplet_type));
            }
            tuplet_type += 2;
        }
    }

    /// The sounding length of `units` divisions of a tuplet whose divisions
    /// are written as `nominal`, e.g. one member of a quarter-note triplet.
    ///
    /// A tuplet of type `n` squeezes `n` divisions into the time of the
    /// largest power of two below `n`.
    pub fn tuplet_member(nominal: NoteLength, tuplet_type: i64, units: i64) -> Result<Self> {
        if tuplet_type <= 0 {
            return Err(TonalError::MalformedInput(format!(
                "Tuplet type must be positive, got {tuplet_type}"
            )));
        }
        if !nominal.is_power_of_two() {
            log::warn!(
                "Tuplet written in {} lengths may not untuple back to the same spelling",
                nominal
            );
        }

        Ok(Self(
            nominal.0 * Rational64::new(units * floor_pow2(tuplet_type), tuplet_type),
        ))
    }

    /// The simplest written form of this length.
    pub fn canonical(&self) -> Result<LengthForm> {
        if self.is_power_of_two() {
            return Ok(LengthForm::Plain(*self));
        }
        if let (nominal, Some(tuplet_type)) = self.untuple() {
            return Ok(LengthForm::Tuplet {
                nominal,
                tuplet_type,
            });
        }
        let (base, dots) = self.undot()?;
        Ok(LengthForm::Dotted { base, dots })
    }
}

/// How a length is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthForm {
    Plain(NoteLength),
    Dotted { base: NoteLength, dots: u32 },
    Tuplet { nominal: NoteLength, tuplet_type: i64 },
}

impl fmt::Display for LengthForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(length) => f.pad(&length.to_string()),
            Self::Dotted { base, dots } => {
                f.pad(&format!("{}{}", base, ".".repeat(*dots as usize)))
            }
            Self::Tuplet {
                nominal,
                tuplet_type,
            } => f.pad(&format!(
                "{} {}:{}",
                nominal,
                tuplet_type,
                floor_pow2(*tuplet_type)
            )),
        }
    }
}

impl fmt::Display for NoteLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}/{}", self.numerator(), self.denominator()))
    }
}

impl fmt::Debug for NoteLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteLength({})", self)
    }
}

impl FromStr for NoteLength {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let malformed = || TonalError::MalformedInput(format!("Invalid note length: {s}"));

        match s.split_once('/') {
            Some((n, d)) => {
                let n = n.trim().parse().map_err(|_e| malformed())?;
                let d = d.trim().parse().map_err(|_e| malformed())?;
                Self::new(n, d)
            }
            None => Ok(Self::from_integer(s.parse().map_err(|_e| malformed())?)),
        }
    }
}

impl From<Rational64> for NoteLength {
    fn from(value: Rational64) -> Self {
        Self(value)
    }
}

impl From<NoteLength> for Rational64 {
    fn from(length: NoteLength) -> Self {
        length.0
    }
}

impl Add for NoteLength {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl Add<Rational64> for NoteLength {
    type Output = Self;

    fn add(self, other: Rational64) -> Self::Output {
        Self(self.0 + other)
    }
}

impl Add<i64> for NoteLength {
    type Output = Self;

    fn add(self, other: i64) -> Self::Output {
        Self(self.0 + Rational64::from_integer(other))
    }
}

impl Add<TimeSignature> for NoteLength {
    type Output = Self;

    fn add(self, other: TimeSignature) -> Self::Output {
        Self(self.0 + other.value())
    }
}

impl Sub for NoteLength {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl Sub<Rational64> for NoteLength {
    type Output = Self;

    fn sub(self, other: Rational64) -> Self::Output {
        Self(self.0 - other)
    }
}

impl Sub<i64> for NoteLength {
    type Output = Self;

    fn sub(self, other: i64) -> Self::Output {
        Self(self.0 - Rational64::from_integer(other))
    }
}

impl Sub<TimeSignature> for NoteLength {
    type Output = Self;

    fn sub(self, other: TimeSignature) -> Self::Output {
        Self(self.0 - other.value())
    }
}

impl Mul<Rational64> for NoteLength {
    type Output = Self;

    fn mul(self, other: Rational64) -> Self::Output {
        Self(self.0 * other)
    }
}

impl Mul<i64> for NoteLength {
    type Output = Self;

    fn mul(self, other: i64) -> Self::Output {
        Self(self.0 * Rational64::from_integer(other))
    }
}

impl Mul<TimeSignature> for NoteLength {
    type Output = Self;

    fn mul(self, other: TimeSignature) -> Self::Output {
        Self(self.0 * other.value())
    }
}

impl Add<NoteLength> for Rational64 {
    type Output = NoteLength;

    fn add(self, other: NoteLength) -> Self::Output {
        other + self
    }
}

impl Sub<NoteLength> for Rational64 {
    type Output = NoteLength;

    fn sub(self, other: NoteLength) -> Self::Output {
        NoteLength(self - other.0)
    }
}

impl Add<NoteLength> for i64 {
    type Output = NoteLength;

    fn add(self, other: NoteLength) -> Self::Output {
        other + self
    }
}

impl Sub<NoteLength> for i64 {
    type Output = NoteLength;

    fn sub(self, other: NoteLength) -> Self::Output {
        NoteLength(Rational64::from_integer(self) - other.0)
    }
}

impl Mul<NoteLength> for i64 {
    type Output = NoteLength;

    fn mul(self, other: NoteLength) -> Self::Output {
        other * self
    }
}

impl Mul<NoteLength> for Rational64 {
    type Output = NoteLength;

    fn mul(self, other: NoteLength) -> Self::Output {
        other * self
    }
}

impl Sum for NoteLength {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::from_integer(0), |acc, length| acc + length)
    }
}
