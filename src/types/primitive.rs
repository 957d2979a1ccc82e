use crate::error::{Result, TonalError};
use std::fmt;
use std::ops::Neg;

/// A `(d, c[, o])` tonal primitive.
///
/// `d` is a diatonic value (letter name / scale degree), `c` a chromatic value
/// in half steps and `o` an optional octave. Primitives without an octave are
/// octave-free pitch classes or interval classes. Values are not normalized on
/// construction; see [`crate::arithmetic::normalize`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TonalPrimitive {
    pub d: i32,
    pub c: i32,
    pub o: Option<i32>,
}

impl TonalPrimitive {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(d: i32, c: i32) -> Self {
        Self { d, c, o: None }
    }

    pub const fn with_octave(d: i32, c: i32, o: i32) -> Self {
        Self { d, c, o: Some(o) }
    }

    pub fn has_octave(&self) -> bool {
        self.o.is_some()
    }

    /// Number of components, 2 or 3.
    pub fn arity(&self) -> usize {
        if self.has_octave() { 3 } else { 2 }
    }

    /// The same primitive, placed in octave 0 if it has no octave.
    pub fn qualified(self) -> Self {
        Self {
            o: Some(self.o.unwrap_or(0)),
            ..self
        }
    }

    pub fn without_octave(self) -> Self {
        Self { o: None, ..self }
    }

    pub fn is_normalized(&self) -> bool {
        (0..super::scale::D_LEN).contains(&self.d) && (0..super::scale::C_LEN).contains(&self.c)
    }
}

impl From<(i32, i32)> for TonalPrimitive {
    fn from((d, c): (i32, i32)) -> Self {
        Self::new(d, c)
    }
}

impl From<(i32, i32, i32)> for TonalPrimitive {
    fn from((d, c, o): (i32, i32, i32)) -> Self {
        Self::with_octave(d, c, o)
    }
}

impl TryFrom<&[i32]> for TonalPrimitive {
    type Error = TonalError;

    fn try_from(values: &[i32]) -> Result<Self> {
        match *values {
            [d, c] => Ok(Self::new(d, c)),
            [d, c, o] => Ok(Self::with_octave(d, c, o)),
            _ => Err(TonalError::MalformedInput(format!(
                "Tonal primitives have two or three values, got {}",
                values.len()
            ))),
        }
    }
}

impl Neg for TonalPrimitive {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            d: -self.d,
            c: -self.c,
            o: self.o.map(|o| -o),
        }
    }
}

impl fmt::Display for TonalPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.o {
            Some(o) => f.pad(&format!("({}, {}, {})", self.d, self.c, o)),
            None => f.pad(&format!("({}, {})", self.d, self.c)),
        }
    }
}

impl fmt::Debug for TonalPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tonal{}", self)
    }
}
