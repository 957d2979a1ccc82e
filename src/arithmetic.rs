//! Add, subtract, invert and measure tonal primitives.
//!
//! These functions operate on `(d, c[, o])` primitives, where `d` is a
//! diatonic value, `c` a chromatic value and `o` an optional octave. Results
//! are always normalized: `0 <= d < 7`, `0 <= c < 12`, with any diatonic
//! overflow carried into the octave.

use crate::error::{Result, TonalError};
use crate::types::primitive::TonalPrimitive;
use crate::types::scale::{C_LEN, D_LEN, degree};

/// Half steps a chromatic value may stray from its degree's natural value
/// before [`to_signed_int`] reads an octave-bearing value as having crossed
/// the octave boundary. C♭ reads as -1 rather than 11, B♯ as 12 rather than 0.
pub const SIGNED_INT_THRESHOLD: i32 = 3;

/// Half steps a chromatic value may stray from its degree's natural value
/// before [`unmodulo`] folds it by an octave. Also used by octave-free signed
/// values, interval quality lookup and accidental selection.
pub const UNMODULO_THRESHOLD: i32 = 6;

/// Returns the octave-normalized form of `x`.
///
/// The diatonic overflow is carried into the octave of an octave-bearing
/// value and discarded for an octave-free one.
///
/// ```
/// # use tonal::arithmetic::normalize;
/// # use tonal::TonalPrimitive;
/// assert_eq!(normalize((7, 12).into()), Ok((0, 0).into()));
/// assert_eq!(normalize((7, 12, 0).into()), Ok((0, 0, 1).into()));
/// assert_eq!(normalize((-1, -1, 0).into()), Ok((6, 11, -1).into()));
/// ```
pub fn normalize(x: TonalPrimitive) -> Result<TonalPrimitive> {
    if x.is_normalized() {
        return Ok(x);
    }

    let d_val = x.d.rem_euclid(D_LEN);
    let d_oct = x.d.div_euclid(D_LEN);
    let c_val = x.c.rem_euclid(C_LEN);
    let c_oct = x.c.div_euclid(C_LEN);

    // Neighbouring carries are ordinary (C♭ + M2, B♯ - m2); anything further
    // apart cannot come from a spelled pitch.
    if (c_oct - d_oct).abs() > 1 {
        return Err(TonalError::DegenerateOctaveCarry {
            diatonic: x.d,
            chromatic: x.c,
        });
    }

    Ok(TonalPrimitive {
        d: d_val,
        c: c_val,
        o: x.o.map(|o| o + d_oct),
    })
}

/// Returns `x` augmented by `y`.
///
/// An octave-free `y` may be added to an octave-bearing `x`, but not the
/// other way around.
pub fn sum(x: TonalPrimitive, y: TonalPrimitive) -> Result<TonalPrimitive> {
    if !x.has_octave() && y.has_octave() {
        return Err(TonalError::ArityMismatch);
    }

    normalize(TonalPrimitive {
        d: x.d + y.d,
        c: x.c + y.c,
        o: x.o.map(|o| o + y.o.unwrap_or(0)),
    })
}

/// Returns `x` diminished by `y`.
pub fn diff(x: TonalPrimitive, y: TonalPrimitive) -> Result<TonalPrimitive> {
    sum(x, -y)
}

/// Brings two primitives to the same arity by placing the octave-free one in octave 0.
pub fn qualify_pair(x: TonalPrimitive, y: TonalPrimitive) -> (TonalPrimitive, TonalPrimitive) {
    if x.has_octave() == y.has_octave() {
        (x, y)
    } else {
        (x.qualified(), y.qualified())
    }
}

/// Returns the reflection of `x` through `y`: the value as far below `y`
/// as `x` is above it.
///
/// ```
/// # use tonal::arithmetic::invert;
/// # use tonal::TonalPrimitive;
/// // A major third inverts to a minor sixth.
/// assert_eq!(invert((2, 4).into(), TonalPrimitive::ORIGIN), Ok((5, 8).into()));
/// // G is a minor third above E; a minor third below E is C♯.
/// assert_eq!(invert((4, 7).into(), (2, 4).into()), Ok((0, 1).into()));
/// ```
pub fn invert(x: TonalPrimitive, y: TonalPrimitive) -> Result<TonalPrimitive> {
    let (x, y) = qualify_pair(x, y);
    diff(y, diff(x, y)?)
}

/// Folds any diatonic overflow into the octave, keeping the chromatic value
/// relative to the folded degree.
fn fold_diatonic(x: TonalPrimitive) -> TonalPrimitive {
    let carry = x.d.div_euclid(D_LEN);
    TonalPrimitive {
        d: x.d.rem_euclid(D_LEN),
        c: x.c - carry * C_LEN,
        o: x.o.map(|o| o + carry),
    }
}

// The downward fold is checked after the upward one, so with a narrow
// threshold a value folded too far down comes back up.
fn fold_chromatic(d: i32, mut c: i32, threshold: i32) -> i32 {
    let natural = degree(d).chromatic;
    if c - natural > threshold {
        c -= C_LEN;
    }
    if c - natural < -threshold {
        c += C_LEN;
    }
    c
}

/// Undoes the chromatic modulo: moves `c` to within six half steps of its
/// degree's natural chromatic value, so C♭ becomes `(0, -1)` and B♯ `(6, 12)`.
pub fn unmodulo(x: TonalPrimitive) -> TonalPrimitive {
    let x = fold_diatonic(x);
    TonalPrimitive {
        c: fold_chromatic(x.d, x.c, UNMODULO_THRESHOLD),
        ..x
    }
}

/// Maps `x` to a signed number of half steps from the origin.
///
/// ```
/// # use tonal::arithmetic::to_signed_int;
/// assert_eq!(to_signed_int((4, 7, 2).into()), 31);
/// assert_eq!(to_signed_int((0, 11, 0).into()), -1); // C♭
/// assert_eq!(to_signed_int((6, 0, 0).into()), 12); // B♯
/// assert_eq!(to_signed_int((0, 11).into()), -1);
/// ```
pub fn to_signed_int(x: TonalPrimitive) -> i32 {
    let x = fold_diatonic(x);
    match x.o {
        None => fold_chromatic(x.d, x.c, UNMODULO_THRESHOLD),
        Some(o) => fold_chromatic(x.d, x.c, SIGNED_INT_THRESHOLD) + o * C_LEN,
    }
}

/// The absolute distance in half steps from the origin.
pub fn tonal_abs(x: TonalPrimitive) -> i32 {
    to_signed_int(x).abs()
}

/// The higher of two primitives; on equal height the higher diatonic value wins.
pub fn greater_of(x: TonalPrimitive, y: TonalPrimitive) -> TonalPrimitive {
    let (xi, yi) = (to_signed_int(x), to_signed_int(y));
    if xi == yi {
        return if x.d > y.d { x } else { y };
    }
    if xi > yi { x } else { y }
}

/// The lower of two primitives; on equal height the lower diatonic value wins.
pub fn lesser_of(x: TonalPrimitive, y: TonalPrimitive) -> TonalPrimitive {
    let (xi, yi) = (to_signed_int(x), to_signed_int(y));
    if xi == yi {
        return if x.d < y.d { x } else { y };
    }
    if xi < yi { x } else { y }
}

/// Chooses between `x` and its inversion, returning the spelling that
/// measures upward from the origin.
///
/// ```
/// # use tonal::arithmetic::abs_value;
/// assert_eq!(abs_value((4, 7).into()), Ok((3, 5).into()));
/// assert_eq!(abs_value((6, 11, -1).into()), Ok((1, 1, 0).into()));
/// assert_eq!(abs_value((0, 11, 0).into()), Ok((0, 1, 0).into()));
/// ```
pub fn abs_value(x: TonalPrimitive) -> Result<TonalPrimitive> {
    let y = invert(x, TonalPrimitive::ORIGIN)?;

    match (x.o, y.o) {
        (Some(xo), Some(yo)) => {
            if xo < 0 {
                return Ok(y);
            }
            if yo < 0 {
                return Ok(x);
            }
            if !(x.d == y.d && xo == 0 && yo == 0) {
                return Ok(lesser_of(x, y));
            }
        }
        _ => {
            if x.d != y.d {
                return Ok(lesser_of(x, y));
            }
        }
    }

    // Unisons and octaves: the spelling whose raw chromatic value is negative
    // points downward.
    if unmodulo(x).c < 0 {
        return Ok(y);
    }
    if unmodulo(y).c < 0 {
        return Ok(x);
    }
    Ok(lesser_of(x, y))
}

/// The smallest difference between two primitives.
///
/// ```
/// # use tonal::arithmetic::abs_diff;
/// // A minor sixth up is reached sooner as a major third down.
/// assert_eq!(abs_diff((0, 0).into(), (5, 9).into()), Ok((2, 3).into()));
/// assert_eq!(abs_diff((0, 0, 0).into(), (6, 11, -1).into()), Ok((1, 1, 0).into()));
/// ```
pub fn abs_diff(x: TonalPrimitive, y: TonalPrimitive) -> Result<TonalPrimitive> {
    let (x, y) = qualify_pair(x, y);
    let a = abs_value(diff(x, y)?)?;
    let b = abs_value(diff(y, x)?)?;
    normalize(lesser_of(a, b))
}

/// The distance between two primitives in half steps.
pub fn abs_int_diff(x: TonalPrimitive, y: TonalPrimitive) -> Result<i32> {
    let (x, y) = qualify_pair(x, y);
    if x.has_octave() {
        return Ok((to_signed_int(x) - to_signed_int(y)).abs());
    }
    Ok(to_signed_int(abs_diff(x, y)?).abs())
}

/// Returns the placement of `y`'s pitch class closest to `x`.
///
/// Only the octave of `x` and its two neighbours are searched. Candidates at
/// the same half-step distance are settled by diatonic distance, so a tritone
/// above C resolves to F♯ above and G♭ below. Search order never decides: a
/// search that lets the last equally distant candidate win would place F♯
/// below C instead.
///
/// ```
/// # use tonal::arithmetic::nearest_instance;
/// assert_eq!(nearest_instance((0, 0, 0).into(), (6, 11, 3).into()), Ok((6, 11, -1).into()));
/// assert_eq!(nearest_instance((0, 0).into(), (6, 11, -1).into()), Ok((6, 11).into()));
/// ```
pub fn nearest_instance(x: TonalPrimitive, y: TonalPrimitive) -> Result<TonalPrimitive> {
    let Some(o) = x.o else {
        return Ok(y.without_octave());
    };

    let steps = |p: TonalPrimitive| p.d + p.o.unwrap_or(0) * D_LEN;
    let rank = |candidate: TonalPrimitive| -> Result<(i32, i32)> {
        Ok((
            abs_int_diff(x, candidate)?,
            (steps(candidate) - steps(x)).abs(),
        ))
    };

    let mut nearest = TonalPrimitive::with_octave(y.d, y.c, o);
    let mut best = rank(nearest)?;

    for octave in [o - 1, o + 1] {
        let candidate = TonalPrimitive::with_octave(y.d, y.c, octave);
        let key = rank(candidate)?;
        if key < best {
            if key.0 == best.0 {
                log::debug!(
                    "nearest instance of {} to {}: {} wins on diatonic distance",
                    y,
                    x,
                    candidate
                );
            }
            nearest = candidate;
            best = key;
        }
    }

    Ok(nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn t2(d: i32, c: i32) -> TonalPrimitive {
        TonalPrimitive::new(d, c)
    }

    fn t3(d: i32, c: i32, o: i32) -> TonalPrimitive {
        TonalPrimitive::with_octave(d, c, o)
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(t2(0, 0), t2(2, 3)), Ok(t2(2, 3)));
        assert_eq!(sum(t2(3, 6), t2(4, 6)), Ok(t2(0, 0)));
        assert_eq!(sum(t3(0, 0, 0), t2(2, 3)), Ok(t3(2, 3, 0)));
        assert_eq!(sum(t3(3, 6, 0), t2(4, 6)), Ok(t3(0, 0, 1)));
        assert_eq!(sum(t3(6, 11, 1), t2(2, 4)), Ok(t3(1, 3, 2)));
        assert_eq!(sum(t3(6, 11, 1), t3(1, 1, 0)), Ok(t3(0, 0, 2)));
    }

    #[test]
    fn test_sum_rejects_octave_onto_octave_free() {
        assert_eq!(sum(t2(0, 0), t3(2, 3, 0)), Err(TonalError::ArityMismatch));
        assert_eq!(diff(t2(0, 0), t3(2, 3, 1)), Err(TonalError::ArityMismatch));
    }

    #[test]
    fn test_diff() {
        assert_eq!(diff(t2(2, 3), t2(2, 3)), Ok(t2(0, 0)));
        assert_eq!(diff(t2(0, 0), t2(1, 1)), Ok(t2(6, 11)));
        assert_eq!(diff(t3(0, 0, 0), t2(1, 1)), Ok(t3(6, 11, -1)));
        assert_eq!(diff(t2(0, 1), t2(1, 1)), Ok(t2(6, 0)));
        assert_eq!(diff(t3(0, 1, 0), t3(6, 10, -1)), Ok(t3(1, 3, 0)));
        assert_eq!(diff(t3(0, 0, 0), t3(0, 10, 0)), Ok(t3(0, 2, 0)));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(t2(7, 12)), Ok(t2(0, 0)));
        assert_eq!(normalize(t3(7, 12, 0)), Ok(t3(0, 0, 1)));
        assert_eq!(normalize(t2(-1, -1)), Ok(t2(6, 11)));
        assert_eq!(normalize(t3(-1, -1, 0)), Ok(t3(6, 11, -1)));
        assert_eq!(normalize(t2(-1, 0)), Ok(t2(6, 0)));
        assert_eq!(normalize(t3(7, 12, 1)), Ok(t3(0, 0, 2)));
        // Already normalized values come back untouched.
        assert_eq!(normalize(t3(4, 7, -3)), Ok(t3(4, 7, -3)));
    }

    #[test]
    fn test_normalize_degenerate_carry() {
        assert_eq!(
            normalize(t2(0, 30)),
            Err(TonalError::DegenerateOctaveCarry {
                diatonic: 0,
                chromatic: 30
            })
        );
        assert!(normalize(t3(14, 0, 0)).is_err());
        // One octave of disagreement is an ordinary enharmonic spelling.
        assert_eq!(normalize(t3(1, 13, 0)), Ok(t3(1, 1, 0)));
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(t2(2, 4), TonalPrimitive::ORIGIN), Ok(t2(5, 8)));
        assert_eq!(invert(t2(5, 8), TonalPrimitive::ORIGIN), Ok(t2(2, 4)));
        assert_eq!(invert(t2(3, 6), TonalPrimitive::ORIGIN), Ok(t2(4, 6)));
        assert_eq!(invert(t2(4, 7), t2(2, 4)), Ok(t2(0, 1)));
        assert_eq!(invert(t3(0, 1, 0), TonalPrimitive::ORIGIN), Ok(t3(0, 11, 0)));
        // The octave-free pivot is promoted, never the other way around.
        assert_eq!(invert(t2(4, 7), t3(0, 0, 1)), Ok(t3(3, 5, 1)));
    }

    #[test]
    fn test_to_signed_int() {
        assert_eq!(to_signed_int(t2(4, 7)), 7);
        assert_eq!(to_signed_int(t3(4, 7, 2)), 31);
        assert_eq!(to_signed_int(t3(6, 11, -1)), -1);
        assert_eq!(to_signed_int(t3(0, -1, -1)), -13);
        assert_eq!(to_signed_int(t3(6, 0, 0)), 12);
        assert_eq!(to_signed_int(t3(0, 11, 0)), -1);
        assert_eq!(to_signed_int(t2(0, 11)), -1);
        assert_eq!(to_signed_int(t2(2, 0)), 0);
        assert_eq!(tonal_abs(t3(6, 11, -1)), 1);
        assert_eq!(tonal_abs(t3(0, 1, 0)), 1);
    }

    #[test]
    fn test_signed_int_threshold_boundary() {
        // Only values nine or more half steps above the natural value
        // read in the octave below.
        assert_eq!(to_signed_int(t3(0, 3, 0)), 3);
        assert_eq!(to_signed_int(t3(0, 4, 0)), 4);
        assert_eq!(to_signed_int(t3(0, 8, 0)), 8);
        assert_eq!(to_signed_int(t3(0, 9, 0)), -3);
        assert_eq!(to_signed_int(t3(4, 3, 0)), 15);
        // Octave-free values use the wider unmodulo threshold.
        assert_eq!(to_signed_int(t2(0, 4)), 4);
        assert_eq!(to_signed_int(t2(0, 6)), 6);
        assert_eq!(to_signed_int(t2(0, 7)), -5);
    }

    #[test]
    fn test_unmodulo() {
        assert_eq!(unmodulo(t3(0, 10, 0)), t3(0, -2, 0));
        assert_eq!(unmodulo(t3(6, 0, 0)), t3(6, 12, 0));
        assert_eq!(unmodulo(t2(2, 0)), t2(2, 0));
    }

    #[test]
    fn test_greater_and_lesser() {
        assert_eq!(greater_of(t3(0, 0, 0), t3(0, 11, -1)), t3(0, 0, 0));
        assert_eq!(greater_of(t3(0, 0, 0), t3(0, 10, 0)), t3(0, 0, 0));
        assert_eq!(lesser_of(t3(0, 0, 0), t3(0, 11, -1)), t3(0, 11, -1));
        assert_eq!(lesser_of(t3(0, 1, 0), t3(0, 10, 0)), t3(0, 10, 0));
        // B♯ and C' sound alike; the diatonic value breaks the tie.
        assert_eq!(greater_of(t3(6, 0, 0), t3(0, 0, 1)), t3(6, 0, 0));
        assert_eq!(lesser_of(t3(6, 0, 0), t3(0, 0, 1)), t3(0, 0, 1));
    }

    #[test]
    fn test_abs_value() {
        assert_eq!(abs_value(t2(4, 7)), Ok(t2(3, 5)));
        assert_eq!(abs_value(t3(6, 11, -1)), Ok(t3(1, 1, 0)));
        assert_eq!(abs_value(t3(1, 1, 0)), Ok(t3(1, 1, 0)));
        assert_eq!(abs_value(t3(6, 0, -1)), Ok(t3(1, 0, 0)));
        assert_eq!(abs_value(t3(0, 11, 0)), Ok(t3(0, 1, 0)));
    }

    #[test]
    fn test_abs_diff() {
        assert_eq!(abs_diff(t2(0, 0), t2(5, 9)), Ok(t2(2, 3)));
        assert_eq!(
            abs_diff(t2(0, 0), t2(4, 6)),
            abs_diff(t2(0, 0), invert(t2(4, 6), TonalPrimitive::ORIGIN).unwrap())
        );
        assert_eq!(abs_diff(t3(0, 0, 0), t3(6, 11, -1)), Ok(t3(1, 1, 0)));
        assert_eq!(abs_diff(t3(6, 0, 0), t3(0, 0, 1)), Ok(t3(1, 0, 0)));
        assert_eq!(abs_diff(t3(0, 0, 0), t3(0, 11, 0)), Ok(t3(0, 1, 0)));
        assert_eq!(abs_diff(t3(0, 0, 0), t3(0, 11, -1)), Ok(t3(0, 1, 1)));
        assert_eq!(abs_diff(t2(0, 0), t2(0, 1)), Ok(t2(0, 1)));
        assert_eq!(abs_diff(t2(0, 0), t2(0, 11)), Ok(t2(0, 1)));
        assert_eq!(abs_diff(t2(1, 3), t2(3, 3)), Ok(t2(2, 0)));
        assert_eq!(abs_diff(t3(0, 0, 0), t3(4, 7, 0)), Ok(t3(4, 7, 0)));
        assert_eq!(abs_diff(t3(4, 7, 0), t3(0, 0, 0)), Ok(t3(4, 7, 0)));
        assert_eq!(abs_diff(t2(0, 0), t2(4, 7)), Ok(t2(3, 5)));
    }

    #[test]
    fn test_abs_int_diff() {
        assert_eq!(abs_int_diff(t3(0, 1, 0), t3(0, 11, 0)), Ok(2));
        assert_eq!(abs_int_diff(t3(0, 1, 0), t3(6, 11, -1)), Ok(2));
        assert_eq!(abs_int_diff(t2(0, 0), t2(5, 9)), Ok(3));
    }

    #[test]
    fn test_nearest_instance() {
        assert_eq!(nearest_instance(t3(0, 0, 0), t3(1, 2, -1)), Ok(t3(1, 2, 0)));
        assert_eq!(nearest_instance(t3(0, 1, 1), t3(6, 10, -3)), Ok(t3(6, 10, 0)));
        assert_eq!(nearest_instance(t3(0, 0, 0), t3(6, 11, 3)), Ok(t3(6, 11, -1)));
        assert_eq!(nearest_instance(t2(0, 0), t3(6, 11, -1)), Ok(t2(6, 11)));
        assert_eq!(nearest_instance(t3(0, 0, 0), t3(0, 11, 0)), Ok(t3(0, 11, 0)));
        assert_eq!(nearest_instance(t3(0, 0, 0), t2(1, 1)), Ok(t3(1, 1, 0)));
    }

    #[test]
    fn test_nearest_instance_tritone_ties() {
        assert_eq!(nearest_instance(t3(0, 0, 0), t2(3, 6)), Ok(t3(3, 6, 0)));
        assert_eq!(nearest_instance(t3(0, 0, 0), t2(4, 6)), Ok(t3(4, 6, -1)));
    }
}
