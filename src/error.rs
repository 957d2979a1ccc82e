//! Error type shared by the tonal and rhythmic algebras.

use crate::types::quality::QualityName;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TonalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TonalError {
    /// Input that cannot be turned into a tonal or rhythmic value.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// An octave-bearing value was added onto an octave-free one.
    #[error("An octave designation cannot be added to an octave-free tonal value")]
    ArityMismatch,

    /// No interval quality sits at the requested relative number.
    #[error("No interval quality is registered at relative number {}", relative_number(.half_units))]
    UnregisteredQuality { half_units: i32 },

    /// A quality name that does not apply to the interval number, e.g. "major 5".
    #[error("There is no {quality} {number}")]
    QualityNotForDegree { quality: QualityName, number: i32 },

    /// The chromatic octave carry is more than an octave away from the diatonic one.
    #[error("Diatonic value {diatonic} and chromatic value {chromatic} are not in the same octave")]
    DegenerateOctaveCarry { diatonic: i32, chromatic: i32 },

    /// The note needs an accidental beyond quadruple flat or quadruple sharp.
    #[error("No accidental spells an offset of {offset} half steps")]
    UnspelledAccidental { offset: i32 },

    /// The length has no dotted spelling.
    #[error("{0} cannot be written as a dotted note length")]
    NotDottable(String),
}

fn relative_number(half_units: &i32) -> f64 {
    f64::from(*half_units) / 2.0
}
