use crate::arithmetic::{self, UNMODULO_THRESHOLD};
use crate::error::{Result, TonalError};
use crate::types::primitive::TonalPrimitive;
use crate::types::quality::{IntervalQuality, QualityKey, get_quality};
use crate::types::scale::{
    Accidental, C_LEN, D_LEN, ScaleDegree, accidental_for, degree, ordinal_for,
};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A normalized tonal primitive: a pitch or pitch class, or equally an
/// interval or interval class measured from C.
///
/// Values are immutable; every operation returns a new vector.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TonalVector {
    p: TonalPrimitive,
}

impl TonalVector {
    pub fn new(p: impl Into<TonalPrimitive>) -> Result<Self> {
        Ok(Self {
            p: arithmetic::normalize(p.into())?,
        })
    }

    pub fn primitive(&self) -> TonalPrimitive {
        self.p
    }

    pub fn d(&self) -> i32 {
        self.p.d
    }

    pub fn c(&self) -> i32 {
        self.p.c
    }

    pub fn o(&self) -> Option<i32> {
        self.p.o
    }

    pub fn has_octave(&self) -> bool {
        self.p.has_octave()
    }

    pub fn without_octave(&self) -> Self {
        Self {
            p: self.p.without_octave(),
        }
    }

    pub fn with_octave(&self, o: i32) -> Self {
        Self {
            p: TonalPrimitive::with_octave(self.p.d, self.p.c, o),
        }
    }

    /// The smallest interval between `self` and `other`.
    pub fn distance(&self, other: &Self) -> Result<Self> {
        Self::new(arithmetic::abs_diff(self.p, other.p)?)
    }

    /// The inversion about C.
    pub fn inversion(&self) -> Result<Self> {
        self.inversion_about(&Self::default())
    }

    pub fn inversion_about(&self, pivot: &Self) -> Result<Self> {
        Self::new(arithmetic::invert(self.p, pivot.p)?)
    }

    /// The placement of `other`'s pitch class closest to `self`.
    pub fn nearest_instance(&self, other: &Self) -> Result<Self> {
        Self::new(arithmetic::nearest_instance(self.p, other.p)?)
    }

    pub fn signed_int(&self) -> i32 {
        arithmetic::to_signed_int(self.p)
    }

    /// Distance from the origin in half steps.
    pub fn magnitude(&self) -> i32 {
        arithmetic::tonal_abs(self.p)
    }

    /// Whether the vector sits `value` half steps from the origin.
    ///
    /// C♯ and D♭ both equal 1 here while remaining distinct vectors.
    pub fn equals_value(&self, value: i32) -> bool {
        self.signed_int() == value
    }

    pub fn compare_value(&self, value: i32) -> Ordering {
        self.signed_int().cmp(&value)
    }

    pub fn note(&self) -> NoteView {
        NoteView { v: *self }
    }

    pub fn interval(&self) -> IntervalView {
        IntervalView { v: *self }
    }
}

impl Default for TonalVector {
    fn default() -> Self {
        Self {
            p: TonalPrimitive::ORIGIN,
        }
    }
}

impl TryFrom<TonalPrimitive> for TonalVector {
    type Error = TonalError;

    fn try_from(p: TonalPrimitive) -> Result<Self> {
        Self::new(p)
    }
}

impl From<TonalVector> for TonalPrimitive {
    fn from(v: TonalVector) -> Self {
        v.p
    }
}

impl From<TonalVector> for i32 {
    fn from(v: TonalVector) -> Self {
        v.signed_int()
    }
}

impl Add for TonalVector {
    type Output = Result<TonalVector>;

    fn add(self, other: Self) -> Self::Output {
        Self::new(arithmetic::sum(self.p, other.p)?)
    }
}

impl Sub for TonalVector {
    type Output = Result<TonalVector>;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(arithmetic::diff(self.p, other.p)?)
    }
}

impl Neg for TonalVector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        // Negating a normalized value never carries more than one octave.
        let d = -self.p.d;
        Self {
            p: TonalPrimitive {
                d: d.rem_euclid(D_LEN),
                c: (-self.p.c).rem_euclid(C_LEN),
                o: self.p.o.map(|o| d.div_euclid(D_LEN) - o),
            },
        }
    }
}

impl PartialEq<TonalPrimitive> for TonalVector {
    fn eq(&self, other: &TonalPrimitive) -> bool {
        self.p == *other
    }
}

// Ordered by height alone. Enharmonic spellings such as C♯ and D♭ are
// unordered; `greater_of` and `lesser_of` break those ties on diatonic value.
impl PartialOrd for TonalVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.signed_int().cmp(&other.signed_int()) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl PartialOrd<TonalPrimitive> for TonalVector {
    fn partial_cmp(&self, other: &TonalPrimitive) -> Option<Ordering> {
        match self.signed_int().cmp(&arithmetic::to_signed_int(*other)) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for TonalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.note().unicode(), self.interval().unicode()) {
            (Ok(note), Ok(interval)) => f.pad(&format!("{} # {} | {}", self.p, note, interval)),
            _ => f.pad(&self.p.to_string()),
        }
    }
}

impl fmt::Debug for TonalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TonalVector{}", self.p)
    }
}

/// Which octave number middle C is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OctaveConvention {
    /// Middle C is C0.
    #[default]
    MiddleC0,
    /// Scientific pitch notation, middle C is C4.
    MiddleC4,
}

impl OctaveConvention {
    pub fn offset(self) -> i32 {
        match self {
            Self::MiddleC0 => 0,
            Self::MiddleC4 => 4,
        }
    }
}

/// A tonal vector read as a note name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteView {
    v: TonalVector,
}

impl NoteView {
    fn degree(&self) -> &'static ScaleDegree {
        degree(self.v.d())
    }

    /// The uppercase letter name, without accidental.
    pub fn letter(&self) -> char {
        self.degree().letter.to_ascii_uppercase()
    }

    /// Half steps between the note and the natural note of the same letter.
    pub fn modifier_value(&self) -> i32 {
        let modifier = self.v.c() - self.degree().chromatic;
        if modifier > UNMODULO_THRESHOLD {
            modifier - C_LEN
        } else if modifier < -UNMODULO_THRESHOLD {
            modifier + C_LEN
        } else {
            modifier
        }
    }

    pub fn accidental(&self) -> Result<&'static Accidental> {
        let offset = self.modifier_value();
        accidental_for(offset).ok_or(TonalError::UnspelledAccidental { offset })
    }

    fn octave_with(&self, convention: OctaveConvention) -> String {
        self.v
            .o()
            .map(|o| (o + convention.offset()).to_string())
            .unwrap_or_default()
    }

    fn render(&self, glyph: &str, convention: OctaveConvention) -> String {
        format!("{}{}{}", self.letter(), glyph, self.octave_with(convention))
    }

    /// Note name with ♯/♭ glyphs, e.g. `D♭0`. Naturals are not marked.
    pub fn unicode(&self) -> Result<String> {
        self.unicode_with(OctaveConvention::MiddleC0)
    }

    pub fn unicode_c4(&self) -> Result<String> {
        self.unicode_with(OctaveConvention::MiddleC4)
    }

    pub fn unicode_with(&self, convention: OctaveConvention) -> Result<String> {
        let acc = self.accidental()?;
        let glyph = if acc.offset == 0 { "" } else { acc.unicode };
        Ok(self.render(glyph, convention))
    }

    /// Note name with `#`/`b`, e.g. `Db0`.
    pub fn ascii(&self) -> Result<String> {
        self.ascii_with(OctaveConvention::MiddleC0)
    }

    pub fn ascii_c4(&self) -> Result<String> {
        self.ascii_with(OctaveConvention::MiddleC4)
    }

    pub fn ascii_with(&self, convention: OctaveConvention) -> Result<String> {
        Ok(self.render(self.accidental()?.ascii, convention))
    }

    /// LilyPond note name without octave marks, e.g. `bes`.
    pub fn ly_chroma(&self) -> Result<String> {
        Ok(format!(
            "{}{}",
            self.degree().letter,
            self.accidental()?.lilypond
        ))
    }

    /// LilyPond note name with absolute octave marks. Octave 0 carries no marks.
    pub fn ly_abs8ve(&self) -> Result<String> {
        let chroma = self.ly_chroma()?;
        Ok(match self.v.o() {
            Some(o) => format!("{}{}", chroma, octave_marks(o)),
            None => chroma,
        })
    }

    /// LilyPond note name in relative octave mode following `prev`.
    ///
    /// Without a previous note this is the absolute form. Octave marks count
    /// how far this note lies from the instance of its pitch class nearest to
    /// `prev` in half steps.
    ///
    /// LilyPond itself places a relative note by letter distance, so the two
    /// only disagree when a double accidental pushes the half-step distance
    /// past a tritone: after `c`, F𝄪0 is written `fisis'` and G𝄫0 `geses`.
    pub fn ly_rel8ve(&self, prev: Option<&TonalVector>) -> Result<String> {
        let Some(prev) = prev else {
            return self.ly_abs8ve();
        };
        let chroma = self.ly_chroma()?;
        let Some(o) = self.v.o() else {
            return Ok(chroma);
        };
        if !prev.has_octave() {
            return Ok(chroma);
        }

        let inferred = prev.nearest_instance(&self.v)?;
        let shift = o - inferred.o().unwrap_or(o);
        Ok(format!("{}{}", chroma, octave_marks(shift)))
    }

    /// Spelled-out name, e.g. `Csharp1` or `Bdoubleflat`.
    pub fn verbose(&self) -> Result<String> {
        let acc = self.accidental()?;
        let modifier = if acc.offset == 0 {
            String::new()
        } else {
            acc.verbose.replace(' ', "")
        };
        Ok(format!(
            "{}{}{}",
            self.letter(),
            modifier,
            self.octave_with(OctaveConvention::MiddleC0)
        ))
    }

    pub fn solfege(&self) -> &'static str {
        self.degree().solfege
    }

    /// Harmonic function of the letter's degree in C major, e.g. `dominant`.
    pub fn function_name(&self) -> &'static str {
        self.degree().function
    }
}

fn octave_marks(shift: i32) -> String {
    let mark = if shift < 0 { "," } else { "'" };
    mark.repeat(shift.unsigned_abs() as usize)
}

impl fmt::Display for NoteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unicode() {
            Ok(name) => f.pad(&format!("{} | {}", name, self.v.p)),
            Err(_) => f.pad(&self.v.p.to_string()),
        }
    }
}

/// A tonal vector read as an interval above C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalView {
    v: TonalVector,
}

impl IntervalView {
    pub fn quality(&self) -> Result<IntervalQuality> {
        get_quality(QualityKey::DegreeOffset {
            diatonic: self.v.d(),
            chromatic: self.v.c(),
        })
    }

    /// The simple interval number, 1 to 7.
    pub fn number(&self) -> i32 {
        self.v.d() + 1
    }

    pub fn octave(&self) -> i32 {
        self.v.o().unwrap_or(0)
    }

    /// `+1`, `-2`, or empty for the first octave.
    pub fn octave_suffix(&self) -> String {
        match self.octave() {
            0 => String::new(),
            o if o > 0 => format!("+{o}"),
            o => o.to_string(),
        }
    }

    /// e.g. `minor 3, +1`
    pub fn unicode(&self) -> Result<String> {
        let quality = self.quality()?;
        Ok(match self.octave() {
            0 => format!("{} {}", quality, self.number()),
            _ => format!("{} {}, {}", quality, self.number(), self.octave_suffix()),
        })
    }

    /// e.g. `min3+1`
    pub fn abbr(&self) -> Result<String> {
        Ok(format!(
            "{}{}{}",
            self.quality()?.abbr(),
            self.number(),
            self.octave_suffix()
        ))
    }

    /// The interval's name in words, e.g. `major tenth`.
    ///
    /// Compound intervals up to a thirteenth get their own ordinal; anything
    /// wider or descending keeps the simple name and an octave suffix.
    pub fn name(&self) -> Result<String> {
        let quality = self.quality()?;
        let compound = match self.octave() {
            o @ 0..=1 => ordinal_for(self.number() + o * D_LEN),
            _ => None,
        };
        match compound {
            Some(ordinal) => Ok(format!("{} {}", quality, ordinal.interval_name)),
            None => {
                let simple = degree(self.v.d()).interval_name;
                Ok(format!("{} {}, {}", quality, simple, self.octave_suffix()))
            }
        }
    }
}

impl fmt::Display for IntervalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unicode() {
            Ok(name) => f.pad(&format!("{} | {}", name, self.v.p)),
            Err(_) => f.pad(&self.v.p.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tv(p: impl Into<TonalPrimitive>) -> TonalVector {
        TonalVector::new(p).unwrap()
    }

    #[test]
    fn test_construction_normalizes() {
        assert_eq!(tv((7, 12)), TonalPrimitive::from((0, 0)));
        assert_eq!(tv((7, 12, 0)), TonalPrimitive::from((0, 0, 1)));
        assert_eq!(tv((-1, -1, 0)), TonalPrimitive::from((6, 11, -1)));
        assert!(TonalVector::new((0, 30)).is_err());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(tv((0, 1)) + tv((1, 1)), Ok(tv((1, 2))));
        assert_eq!(tv((6, 11, 1)) + tv((1, 1)), Ok(tv((0, 0, 2))));
        assert_eq!(tv((0, 1)) - tv((1, 1)), Ok(tv((6, 0))));
        assert_eq!(tv((6, 11, 1)) - tv((1, 1)), Ok(tv((5, 10, 1))));
        assert_eq!(tv((0, 1)) + tv((1, 1, 0)), Err(TonalError::ArityMismatch));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-tv((2, 4)), tv((5, 8)));
        assert_eq!(-tv((0, 0, 1)), tv((0, 0, -1)));
        assert_eq!(-tv((2, 4, 1)), tv((5, 8, -2)));
        assert_eq!(-tv((0, 0)), tv((0, 0)));
    }

    #[test]
    fn test_distance() {
        assert_eq!(tv((0, 0, 0)).distance(&tv((4, 7, 0))), Ok(tv((4, 7, 0))));
        assert_eq!(tv((4, 7, 0)).distance(&tv((0, 0, 0))), Ok(tv((4, 7, 0))));
        assert_eq!(tv((0, 0)).distance(&tv((4, 7))), Ok(tv((3, 5))));
        assert_eq!(
            (tv((6, 11, 1)) - tv((1, 1, 0))).map(|v| v.magnitude()),
            (tv((1, 1, 0)) - tv((6, 11, 1))).map(|v| v.magnitude())
        );
    }

    #[test]
    fn test_inversion() {
        assert_eq!(tv((2, 4)).inversion(), Ok(tv((5, 8))));
        assert_eq!(tv((5, 8)).inversion(), Ok(tv((2, 4))));
        assert_eq!(tv((3, 6)).inversion(), Ok(tv((4, 6))));
        assert_eq!(
            tv((0, 1, 0)).inversion_about(&tv((0, 0, 0))),
            Ok(tv((0, 11, 0)))
        );
        assert_eq!(tv((4, 7)).inversion_about(&tv((2, 4))), Ok(tv((0, 1))));
    }

    #[test]
    fn test_nearest_instance() {
        assert_eq!(tv((0, 0)).nearest_instance(&tv((1, 1, -3))), Ok(tv((1, 1))));
        assert_eq!(tv((0, 0)).nearest_instance(&tv((6, 11, 3))), Ok(tv((6, 11))));
        assert_eq!(
            tv((0, 0, 0)).nearest_instance(&tv((1, 1, -3))),
            Ok(tv((1, 1, 0)))
        );
        assert_eq!(
            tv((0, 0, 0)).nearest_instance(&tv((6, 11, 3))),
            Ok(tv((6, 11, -1)))
        );
    }

    #[test]
    fn test_integer_views() {
        assert_eq!(tv((0, 0, -1)).magnitude(), 12);
        assert_eq!(tv((0, 0, 1)).magnitude(), 12);
        assert_eq!(i32::from(tv((0, 0, -1))), -12);
        assert_eq!(tv((0, 0, 1)).signed_int(), 12);

        assert!(tv((0, 1)).equals_value(1));
        assert!(tv((1, 1)).equals_value(1));
        assert_ne!(tv((0, 1)), tv((1, 1)));
        assert_eq!(tv((3, 6, 1)).compare_value(6), Ordering::Greater);
        assert_eq!(tv((0, 11, 0)).compare_value(-1), Ordering::Equal);
    }

    #[test]
    fn test_ordering() {
        assert!(tv((1, 1, 0)) > tv((0, 0, 0)));
        assert!(!(tv((1, 1, 0)) < tv((0, 0, 0))));
        assert!(tv((2, 4, 1)) < TonalPrimitive::from((3, 5, 1)));
        assert!(!(tv((2, 4, 1)) > TonalPrimitive::from((3, 5, 1))));
        // Enharmonic spellings sound alike and are neither above nor below.
        assert_eq!(tv((6, 0, 0)).partial_cmp(&tv((0, 0, 1))), None);
        assert!(!(tv((6, 0, 0)) > tv((0, 0, 1))));
        assert!(!(tv((6, 0, 0)) < tv((0, 0, 1))));
        assert!(!(tv((1, 1)) > tv((0, 1))));
        assert_eq!(tv((1, 1)).partial_cmp(&TonalPrimitive::from((0, 1))), None);
        assert!(tv((6, 0, 0)) <= tv((6, 0, 0)));
        assert_eq!(tv((0, 0)).partial_cmp(&tv((0, 0, 0))), None);
        assert_eq!(tv((2, 4)).partial_cmp(&tv((2, 4))), Some(Ordering::Equal));
    }

    #[test]
    fn test_octave_helpers() {
        assert_eq!(tv((4, 7, 2)).without_octave(), tv((4, 7)));
        assert_eq!(tv((4, 7)).with_octave(-1), tv((4, 7, -1)));
        assert_eq!(TonalVector::default(), tv((0, 0)));
        assert_eq!(TonalPrimitive::from(tv((4, 7, 2))), (4, 7, 2).into());
    }

    #[test]
    fn test_note_modifiers() {
        assert_eq!(tv((0, 0)).note().letter(), 'C');
        assert_eq!(tv((0, 1)).note().letter(), 'C');
        assert_eq!(tv((0, 1)).note().modifier_value(), 1);
        assert_eq!(tv((0, 11)).note().modifier_value(), -1);
        assert_eq!(tv((4, 6, 1)).note().modifier_value(), -1);
        assert_eq!(tv((6, 0)).note().modifier_value(), 1);
        assert_eq!(tv((0, 0)).note().accidental().map(|a| a.verbose), Ok("natural"));
    }

    #[test]
    fn test_note_unspellable() {
        assert_eq!(
            tv((0, 5)).note().accidental(),
            Err(TonalError::UnspelledAccidental { offset: 5 })
        );
        assert_eq!(
            tv((0, 7)).note().unicode(),
            Err(TonalError::UnspelledAccidental { offset: -5 })
        );
        assert_eq!(tv((1, 6)).note().ascii(), Ok("D####".to_string()));
    }

    #[test]
    fn test_note_names() {
        assert_eq!(tv((0, 1)).note().unicode(), Ok("C♯".to_string()));
        assert_eq!(tv((1, 1, 0)).note().unicode(), Ok("D♭0".to_string()));
        assert_eq!(tv((1, 1, 0)).note().unicode_c4(), Ok("D♭4".to_string()));
        assert_eq!(tv((0, 0, 0)).note().unicode(), Ok("C0".to_string()));
        assert_eq!(tv((0, 1)).note().ascii(), Ok("C#".to_string()));
        assert_eq!(tv((1, 1, 0)).note().ascii(), Ok("Db0".to_string()));
        assert_eq!(
            tv((1, 1, -1)).note().ascii_with(OctaveConvention::MiddleC4),
            Ok("Db3".to_string())
        );
        assert_eq!(tv((0, 0)).note().verbose(), Ok("C".to_string()));
        assert_eq!(tv((0, 1)).note().verbose(), Ok("Csharp".to_string()));
        assert_eq!(tv((0, 1, 1)).note().verbose(), Ok("Csharp1".to_string()));
        assert_eq!(tv((6, 9)).note().verbose(), Ok("Bdoubleflat".to_string()));
        assert_eq!(tv((4, 7)).note().solfege(), "sol");
        assert_eq!(tv((4, 7)).note().function_name(), "dominant");
        assert_eq!(tv((0, 1, 0)).note().to_string(), "C♯0 | (0, 1, 0)");
    }

    #[test]
    fn test_lilypond_absolute() {
        assert_eq!(tv((0, 1)).note().ly_chroma(), Ok("cis".to_string()));
        assert_eq!(tv((6, 10, 1)).note().ly_chroma(), Ok("bes".to_string()));
        assert_eq!(tv((0, 0, 1)).note().ly_abs8ve(), Ok("c'".to_string()));
        assert_eq!(tv((6, 10, -1)).note().ly_abs8ve(), Ok("bes,".to_string()));
        assert_eq!(tv((3, 6, 0)).note().ly_abs8ve(), Ok("fis".to_string()));
        assert_eq!(tv((3, 6)).note().ly_abs8ve(), Ok("fis".to_string()));
        assert_eq!(tv((1, 1, 4)).note().ly_abs8ve(), Ok("des''''".to_string()));
        assert_eq!(tv((1, 1, -4)).note().ly_abs8ve(), Ok("des,,,,".to_string()));
        assert_eq!(tv((2, 2, 0)).note().ly_chroma(), Ok("eeses".to_string()));
    }

    #[test]
    fn test_lilypond_relative() {
        let c = tv((0, 0, 0));
        assert_eq!(tv((3, 5, 0)).note().ly_rel8ve(Some(&c)), Ok("f".to_string()));
        assert_eq!(tv((4, 7, 0)).note().ly_rel8ve(Some(&c)), Ok("g'".to_string()));
        assert_eq!(tv((3, 5, -1)).note().ly_rel8ve(Some(&c)), Ok("f,".to_string()));
        assert_eq!(tv((4, 7, -1)).note().ly_rel8ve(Some(&c)), Ok("g".to_string()));
        assert_eq!(tv((0, 0, 2)).note().ly_rel8ve(Some(&c)), Ok("c''".to_string()));
        assert_eq!(tv((4, 7, 1)).note().ly_rel8ve(None), Ok("g'".to_string()));
        assert_eq!(tv((4, 7)).note().ly_rel8ve(Some(&c)), Ok("g".to_string()));
    }

    #[test]
    fn test_lilypond_relative_double_accidentals() {
        // Marks follow half-step distance, not letter distance.
        let c = tv((0, 0, 0));
        assert_eq!(
            tv((3, 7, 0)).note().ly_rel8ve(Some(&c)),
            Ok("fisis'".to_string())
        );
        assert_eq!(
            tv((4, 5, 0)).note().ly_rel8ve(Some(&c)),
            Ok("geses".to_string())
        );
        assert_eq!(
            tv((4, 5, -1)).note().ly_rel8ve(Some(&c)),
            Ok("geses,".to_string())
        );
    }

    #[test]
    fn test_interval_view() {
        assert_eq!(tv((1, 2)).interval().quality(), Ok(IntervalQuality::Major));
        assert_eq!(tv((2, 3)).interval().number(), 3);
        assert_eq!(tv((0, 0, 1)).interval().octave_suffix(), "+1");
        assert_eq!(tv((0, 0, 0)).interval().octave_suffix(), "");
        assert_eq!(tv((2, 3, 1)).interval().unicode(), Ok("minor 3, +1".to_string()));
        assert_eq!(tv((0, 0)).interval().unicode(), Ok("perfect 1".to_string()));
        assert_eq!(
            tv((6, 9, -1)).interval().unicode(),
            Ok("diminished 7, -1".to_string())
        );
        assert_eq!(tv((2, 4, 1)).interval().abbr(), Ok("maj3+1".to_string()));
        assert_eq!(tv((4, 7)).interval().abbr(), Ok("per5".to_string()));
        assert_eq!(tv((0, 0, 0)).interval().to_string(), "perfect 1 | (0, 0, 0)");
    }

    #[test]
    fn test_interval_names() {
        assert_eq!(tv((2, 4)).interval().name(), Ok("major third".to_string()));
        assert_eq!(tv((0, 0)).interval().name(), Ok("perfect unison".to_string()));
        assert_eq!(tv((0, 0, 1)).interval().name(), Ok("perfect octave".to_string()));
        assert_eq!(tv((2, 4, 1)).interval().name(), Ok("major tenth".to_string()));
        assert_eq!(
            tv((6, 11, 1)).interval().name(),
            Ok("major seventh, +1".to_string())
        );
        assert_eq!(
            tv((4, 7, -1)).interval().name(),
            Ok("perfect fifth, -1".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(tv((0, 1)).to_string(), "(0, 1) # C♯ | augmented 1");
        assert_eq!(tv((2, 3, 1)).to_string(), "(2, 3, 1) # E♭1 | minor 3, +1");
        assert_eq!(tv((0, 5)).to_string(), "(0, 5)");
        assert_eq!(format!("{:?}", tv((2, 3, 1))), "TonalVector(2, 3, 1)");
    }
}
