//! Tonal - diatonic/chromatic pitch arithmetic and exact rhythmic lengths
//!
//! Pitches and intervals are `(d, c[, o])` tonal primitives: a diatonic value
//! (letter name), a chromatic value (half steps) and an optional octave.
//! Durations are exact fractions of a whole note.

pub mod arithmetic;
pub mod error;
pub mod parser;
pub mod types;
pub mod util;

// Re-export commonly used types
pub use error::{Result, TonalError};
pub use parser::{parse_interval, parse_pitch, parse_primitive};
pub use types::note_length::{LengthForm, NoteLength};
pub use types::primitive::TonalPrimitive;
pub use types::quality::{IntervalQuality, QualityKey, QualityName, get_quality};
pub use types::time_signature::TimeSignature;
pub use types::tonal_vector::{IntervalView, NoteView, OctaveConvention, TonalVector};
