use crate::error::{Result, TonalError};
use crate::types::primitive::TonalPrimitive;
use crate::types::quality::{QualityKey, QualityName, get_quality};
use crate::types::scale::{D_LEN, accidental_by_glyph, degree, degree_by_letter};
use crate::types::tonal_vector::TonalVector;
use std::str::FromStr;

fn malformed(kind: &str, s: &str) -> TonalError {
    TonalError::MalformedInput(format!("Invalid {}: {}", kind, s))
}

/// Splits a trailing signed octave number off `s`.
fn split_octave<'a>(s: &'a str, kind: &str, input: &str) -> Result<(&'a str, Option<i32>)> {
    let digits_start = s.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits_start == s.len() {
        return Ok((s, None));
    }

    let start = if s[..digits_start].ends_with(['+', '-']) {
        digits_start - 1
    } else {
        digits_start
    };
    let octave = s[start..].parse().map_err(|_e| malformed(kind, input))?;
    Ok((&s[..start], Some(octave)))
}

/// Parses a pitch name such as `Bb3`, `C♯`, `gsharp` or LilyPond's `eis`.
///
/// The octave is optional; without it the result is a pitch class.
///
/// ```
/// # use tonal::parser::parse_pitch;
/// assert_eq!(parse_pitch("Bb3").unwrap().primitive(), (6, 10, 3).into());
/// assert_eq!(parse_pitch("gsharp").unwrap().primitive(), (4, 8).into());
/// ```
pub fn parse_pitch(s: &str) -> Result<TonalVector> {
    let input = s.trim();
    let mut chars = input.chars();
    let letter = chars.next().ok_or_else(|| malformed("pitch", s))?;
    let degree = degree_by_letter(letter).ok_or_else(|| malformed("pitch", s))?;

    let (glyph, octave) = split_octave(chars.as_str(), "pitch", s)?;
    let accidental = accidental_by_glyph(glyph.trim()).ok_or_else(|| malformed("pitch", s))?;

    let chromatic = degree.chromatic + accidental.offset;
    match octave {
        Some(o) => TonalVector::new((degree.diatonic, chromatic, o)),
        None => TonalVector::new((degree.diatonic, chromatic)),
    }
}

/// Parses an interval such as `P5`, `aug2, +1`, `maj 7 -3` or `m6+2`.
///
/// Compound numbers fold their extra octaves into the octave when one is
/// given, so `M10, 0` is a major third an octave up.
///
/// ```
/// # use tonal::parser::parse_interval;
/// assert_eq!(parse_interval("P5").unwrap().primitive(), (4, 7).into());
/// assert_eq!(parse_interval("aug2, +1").unwrap().primitive(), (1, 3, 1).into());
/// ```
pub fn parse_interval(s: &str) -> Result<TonalVector> {
    let input = s.trim();
    let number_start = input
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| malformed("interval", s))?;
    let name: QualityName = input[..number_start].trim().parse()?;

    let rest = &input[number_start..];
    let number_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let number: i32 = rest[..number_end]
        .parse()
        .map_err(|_e| malformed("interval", s))?;
    if number < 1 {
        return Err(malformed("interval", s));
    }

    let suffix = rest[number_end..].trim_start();
    let suffix = suffix.strip_prefix(',').unwrap_or(suffix).trim();
    let octave: Option<i32> = if suffix.is_empty() {
        None
    } else {
        Some(suffix.parse().map_err(|_e| malformed("interval", s))?)
    };

    let diatonic = (number - 1) % D_LEN;
    let extra_octaves = (number - 1) / D_LEN;

    let quality = match get_quality(QualityKey::Named { diatonic, name }) {
        Err(TonalError::QualityNotForDegree { quality, .. }) => {
            return Err(TonalError::QualityNotForDegree { quality, number });
        }
        other => other?,
    };
    let chromatic = degree(diatonic).chromatic + quality.chromatic_modifier();

    match octave {
        Some(o) => TonalVector::new((diatonic, chromatic, o + extra_octaves)),
        None => TonalVector::new((diatonic, chromatic)),
    }
}

/// Parses a primitive literal, `(d, c)` or `(d, c, o)`. Parentheses are optional.
pub fn parse_primitive(s: &str) -> Result<TonalPrimitive> {
    let input = s.trim();
    let inner = input
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(input);

    let values = inner
        .split(',')
        .map(|part| part.trim().parse::<i32>().map_err(|_e| malformed("primitive", s)))
        .collect::<Result<Vec<_>>>()?;
    TonalPrimitive::try_from(values.as_slice())
}

impl FromStr for TonalPrimitive {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self> {
        parse_primitive(s)
    }
}
