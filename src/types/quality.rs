//! Interval qualities on a half-integer number line.
//!
//! Perfect-class intervals (unison, fourth, fifth) sit on the integers and
//! major/minor-class intervals on the halves, so "augmented" and "diminished"
//! each appear twice:
//!
//! ```text
//! -2.5  double diminished (major/minor)
//! -2    double diminished (perfect)
//! -1.5  diminished (major/minor)
//! -1    diminished (perfect)
//! -0.5  minor
//!  0    perfect
//!  0.5  major
//!  1    augmented (perfect)
//!  1.5  augmented (major/minor)
//!  2    double augmented (perfect)
//!  2.5  double augmented (major/minor)
//! ```
//!
//! Relative numbers are stored as whole "half units" (twice the relative number).

use crate::arithmetic::UNMODULO_THRESHOLD;
use crate::error::{Result, TonalError};
use crate::types::scale::{C_LEN, QualityClass, degree};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntervalQuality {
    DoubleDiminishedFromMajorMinor,
    DoubleDiminishedFromPerfect,
    DiminishedFromMajorMinor,
    DiminishedFromPerfect,
    Minor,
    Perfect,
    Major,
    AugmentedFromPerfect,
    AugmentedFromMajorMinor,
    DoubleAugmentedFromPerfect,
    DoubleAugmentedFromMajorMinor,
}

const MIN_HALF_UNITS: i32 = -5;

impl IntervalQuality {
    /// Every quality, ordered by relative number.
    pub const ALL: [IntervalQuality; 11] = [
        IntervalQuality::DoubleDiminishedFromMajorMinor,
        IntervalQuality::DoubleDiminishedFromPerfect,
        IntervalQuality::DiminishedFromMajorMinor,
        IntervalQuality::DiminishedFromPerfect,
        IntervalQuality::Minor,
        IntervalQuality::Perfect,
        IntervalQuality::Major,
        IntervalQuality::AugmentedFromPerfect,
        IntervalQuality::AugmentedFromMajorMinor,
        IntervalQuality::DoubleAugmentedFromPerfect,
        IntervalQuality::DoubleAugmentedFromMajorMinor,
    ];

    pub fn from_half_units(half_units: i32) -> Result<Self> {
        usize::try_from(half_units - MIN_HALF_UNITS)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(TonalError::UnregisteredQuality { half_units })
    }

    pub fn half_units(self) -> i32 {
        self as i32 + MIN_HALF_UNITS
    }

    pub fn relative_number(self) -> f64 {
        f64::from(self.half_units()) / 2.0
    }

    /// Half steps added to the major-scale interval of the same number.
    pub fn chromatic_modifier(self) -> i32 {
        self.half_units().div_euclid(2)
    }

    pub fn class(self) -> QualityClass {
        if self.half_units() % 2 == 0 {
            QualityClass::Perfect
        } else {
            QualityClass::MajorMinor
        }
    }

    /// Raises the quality by `halfsteps` half steps. Negative values diminish.
    pub fn augment(self, halfsteps: i32) -> Result<Self> {
        Self::from_half_units(self.half_units() + 2 * halfsteps)
    }

    pub fn diminish(self, halfsteps: i32) -> Result<Self> {
        self.augment(-halfsteps)
    }

    pub fn name(self) -> QualityName {
        match self {
            Self::DoubleDiminishedFromMajorMinor | Self::DoubleDiminishedFromPerfect => {
                QualityName::DoubleDiminished
            }
            Self::DiminishedFromMajorMinor | Self::DiminishedFromPerfect => QualityName::Diminished,
            Self::Minor => QualityName::Minor,
            Self::Perfect => QualityName::Perfect,
            Self::Major => QualityName::Major,
            Self::AugmentedFromPerfect | Self::AugmentedFromMajorMinor => QualityName::Augmented,
            Self::DoubleAugmentedFromPerfect | Self::DoubleAugmentedFromMajorMinor => {
                QualityName::DoubleAugmented
            }
        }
    }

    pub fn abbr(self) -> &'static str {
        self.name().abbr()
    }
}

impl fmt::Display for IntervalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name().as_str())
    }
}

/// A quality as it is spoken, without the perfect or major/minor axis it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityName {
    DoubleDiminished,
    Diminished,
    Minor,
    Perfect,
    Major,
    Augmented,
    DoubleAugmented,
}

impl QualityName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DoubleDiminished => "double diminished",
            Self::Diminished => "diminished",
            Self::Minor => "minor",
            Self::Perfect => "perfect",
            Self::Major => "major",
            Self::Augmented => "augmented",
            Self::DoubleAugmented => "double augmented",
        }
    }

    pub fn abbr(self) -> &'static str {
        match self {
            Self::DoubleDiminished => "dbl dim",
            Self::Diminished => "dim",
            Self::Minor => "min",
            Self::Perfect => "per",
            Self::Major => "maj",
            Self::Augmented => "aug",
            Self::DoubleAugmented => "dbl aug",
        }
    }

    /// The quality this name denotes on the given axis, if the name applies to it.
    pub fn on_axis(self, class: QualityClass) -> Option<IntervalQuality> {
        use IntervalQuality as Q;
        match (class, self) {
            (QualityClass::Perfect, Self::DoubleDiminished) => Some(Q::DoubleDiminishedFromPerfect),
            (QualityClass::Perfect, Self::Diminished) => Some(Q::DiminishedFromPerfect),
            (QualityClass::Perfect, Self::Perfect) => Some(Q::Perfect),
            (QualityClass::Perfect, Self::Augmented) => Some(Q::AugmentedFromPerfect),
            (QualityClass::Perfect, Self::DoubleAugmented) => Some(Q::DoubleAugmentedFromPerfect),
            (QualityClass::Perfect, Self::Minor | Self::Major) => None,
            (QualityClass::MajorMinor, Self::DoubleDiminished) => {
                Some(Q::DoubleDiminishedFromMajorMinor)
            }
            (QualityClass::MajorMinor, Self::Diminished) => Some(Q::DiminishedFromMajorMinor),
            (QualityClass::MajorMinor, Self::Minor) => Some(Q::Minor),
            (QualityClass::MajorMinor, Self::Major) => Some(Q::Major),
            (QualityClass::MajorMinor, Self::Augmented) => Some(Q::AugmentedFromMajorMinor),
            (QualityClass::MajorMinor, Self::DoubleAugmented) => {
                Some(Q::DoubleAugmentedFromMajorMinor)
            }
            (QualityClass::MajorMinor, Self::Perfect) => None,
        }
    }
}

impl fmt::Display for QualityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for QualityName {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self> {
        // Single letters are case sensitive where major and minor would collide.
        match s {
            "M" => return Ok(Self::Major),
            "m" => return Ok(Self::Minor),
            _ => {}
        }

        let name = match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "p" | "per" | "perf" | "perfect" => Self::Perfect,
            "maj" | "major" => Self::Major,
            "min" | "minor" => Self::Minor,
            "a" | "aug" | "augmented" => Self::Augmented,
            "d" | "dim" | "diminished" => Self::Diminished,
            "aa" | "dblaug" | "doubleaugmented" => Self::DoubleAugmented,
            "dd" | "dbldim" | "doublediminished" => Self::DoubleDiminished,
            _ => {
                return Err(TonalError::MalformedInput(format!(
                    "Unknown interval quality: {s}"
                )));
            }
        };
        Ok(name)
    }
}

/// The ways a quality can be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityKey {
    /// A diatonic value and the chromatic offset from its major-scale value.
    RawOffset { diatonic: i32, offset: i32 },
    /// A diatonic value and the chromatic value spelled on it.
    DegreeOffset { diatonic: i32, chromatic: i32 },
    /// A quality name applied to the interval built on a diatonic value.
    Named { diatonic: i32, name: QualityName },
}

/// Looks up the quality that explains `key`.
///
/// Offsets more than six half steps from the major-scale value wrap by an
/// octave first, so `(0, 11)` is a diminished unison and not a
/// many-times-augmented one.
pub fn get_quality(key: QualityKey) -> Result<IntervalQuality> {
    match key {
        QualityKey::RawOffset { diatonic, offset } => {
            let offset = if offset > UNMODULO_THRESHOLD {
                offset - C_LEN
            } else if offset < -UNMODULO_THRESHOLD {
                offset + C_LEN
            } else {
                offset
            };
            let half_units = match degree(diatonic).class {
                QualityClass::Perfect => 2 * offset,
                QualityClass::MajorMinor => 2 * offset + 1,
            };
            IntervalQuality::from_half_units(half_units)
        }
        QualityKey::DegreeOffset {
            diatonic,
            chromatic,
        } => get_quality(QualityKey::RawOffset {
            diatonic,
            offset: chromatic - degree(diatonic).chromatic,
        }),
        QualityKey::Named { diatonic, name } => name
            .on_axis(degree(diatonic).class)
            .ok_or(TonalError::QualityNotForDegree {
                quality: name,
                number: diatonic + 1,
            }),
    }
}
