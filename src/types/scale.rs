//! Read-only tables describing the diatonic major scale skeleton,
//! interval ordinals and accidental glyphs.

/// Number of tones in a diatonic scale.
pub const D_LEN: i32 = 7;
/// Number of tones in a chromatic scale.
pub const C_LEN: i32 = 12;

/// Whether the intervals built on a degree are perfect or major/minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityClass {
    Perfect,
    MajorMinor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDegree {
    pub diatonic: i32,
    pub chromatic: i32,
    pub class: QualityClass,
    pub interval_name: &'static str,
    pub letter: char,
    pub solfege: &'static str,
    pub function: &'static str,
    pub dissonance: u8,
}

pub const MAJOR_SCALE: [ScaleDegree; 7] = [
    ScaleDegree {
        diatonic: 0,
        chromatic: 0,
        class: QualityClass::Perfect,
        interval_name: "unison",
        letter: 'c',
        solfege: "do",
        function: "tonic",
        dissonance: 0,
    },
    ScaleDegree {
        diatonic: 1,
        chromatic: 2,
        class: QualityClass::MajorMinor,
        interval_name: "second",
        letter: 'd',
        solfege: "re",
        function: "supertonic",
        dissonance: 2,
    },
    ScaleDegree {
        diatonic: 2,
        chromatic: 4,
        class: QualityClass::MajorMinor,
        interval_name: "third",
        letter: 'e',
        solfege: "mi",
        function: "mediant",
        dissonance: 1,
    },
    ScaleDegree {
        diatonic: 3,
        chromatic: 5,
        class: QualityClass::Perfect,
        interval_name: "fourth",
        letter: 'f',
        solfege: "fa",
        function: "subdominant",
        dissonance: 2,
    },
    ScaleDegree {
        diatonic: 4,
        chromatic: 7,
        class: QualityClass::Perfect,
        interval_name: "fifth",
        letter: 'g',
        solfege: "sol",
        function: "dominant",
        dissonance: 0,
    },
    ScaleDegree {
        diatonic: 5,
        chromatic: 9,
        class: QualityClass::MajorMinor,
        interval_name: "sixth",
        letter: 'a',
        solfege: "la",
        function: "submediant",
        dissonance: 1,
    },
    ScaleDegree {
        diatonic: 6,
        chromatic: 11,
        class: QualityClass::MajorMinor,
        interval_name: "seventh",
        letter: 'b',
        solfege: "ti",
        function: "leading tone",
        dissonance: 3,
    },
];

/// The scale degree of a diatonic value, folded into `0..7`.
pub fn degree(diatonic: i32) -> &'static ScaleDegree {
    &MAJOR_SCALE[diatonic.rem_euclid(D_LEN) as usize]
}

/// The degree whose letter name is `letter`, case-insensitive.
pub fn degree_by_letter(letter: char) -> Option<&'static ScaleDegree> {
    let letter = letter.to_ascii_lowercase();
    MAJOR_SCALE.iter().find(|degree| degree.letter == letter)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordinal {
    pub number: i32,
    pub interval_name: &'static str,
    pub ordinal: &'static str,
    pub suffix: &'static str,
    pub roman: &'static str,
}

const fn ordinal(
    number: i32,
    interval_name: &'static str,
    ordinal: &'static str,
    suffix: &'static str,
    roman: &'static str,
) -> Ordinal {
    Ordinal {
        number,
        interval_name,
        ordinal,
        suffix,
        roman,
    }
}

pub const ORDINALS: [Ordinal; 13] = [
    ordinal(1, "unison", "first", "st", "i"),
    ordinal(2, "second", "second", "nd", "ii"),
    ordinal(3, "third", "third", "rd", "iii"),
    ordinal(4, "fourth", "fourth", "th", "iv"),
    ordinal(5, "fifth", "fifth", "th", "v"),
    ordinal(6, "sixth", "sixth", "th", "vi"),
    ordinal(7, "seventh", "seventh", "th", "vii"),
    ordinal(8, "octave", "eighth", "th", "viii"),
    ordinal(9, "ninth", "ninth", "th", "ix"),
    ordinal(10, "tenth", "tenth", "th", "x"),
    ordinal(11, "eleventh", "eleventh", "th", "xi"),
    ordinal(12, "twelfth", "twelfth", "th", "xii"),
    ordinal(13, "thirteenth", "thirteenth", "th", "xiii"),
];

/// Ordinal data for a 1-based interval number, if it is within a compound thirteenth.
pub fn ordinal_for(number: i32) -> Option<&'static Ordinal> {
    ORDINALS.iter().find(|o| o.number == number)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accidental {
    pub offset: i32,
    pub verbose: &'static str,
    pub unicode: &'static str,
    pub ascii: &'static str,
    pub lilypond: &'static str,
}

const fn accidental(
    offset: i32,
    verbose: &'static str,
    unicode: &'static str,
    ascii: &'static str,
    lilypond: &'static str,
) -> Accidental {
    Accidental {
        offset,
        verbose,
        unicode,
        ascii,
        lilypond,
    }
}

pub const MAX_ACCIDENTAL: i32 = 4;

/// Accidentals from quadruple flat to quadruple sharp, indexed by `offset + 4`.
pub const ACCIDENTALS: [Accidental; 9] = [
    accidental(-4, "quadruple flat", "𝄫𝄫", "bbbb", "eseseses"),
    accidental(-3, "triple flat", "♭𝄫", "bbb", "eseses"),
    accidental(-2, "double flat", "𝄫", "bb", "eses"),
    accidental(-1, "flat", "♭", "b", "es"),
    accidental(0, "natural", "♮", "", ""),
    accidental(1, "sharp", "♯", "#", "is"),
    accidental(2, "double sharp", "𝄪", "##", "isis"),
    accidental(3, "triple sharp", "♯𝄪", "###", "isisis"),
    accidental(4, "quadruple sharp", "𝄪𝄪", "####", "isisisis"),
];

pub fn accidental_for(offset: i32) -> Option<&'static Accidental> {
    if offset.abs() > MAX_ACCIDENTAL {
        return None;
    }
    Some(&ACCIDENTALS[(offset + MAX_ACCIDENTAL) as usize])
}

/// Finds the accidental written as `glyph` in any of its forms.
///
/// Verbose names match with or without their inner spaces, so both
/// `"double sharp"` and `"doublesharp"` are accepted. The empty string is natural.
pub fn accidental_by_glyph(glyph: &str) -> Option<&'static Accidental> {
    let lowered = glyph.to_lowercase();
    ACCIDENTALS.iter().find(|acc| {
        glyph == acc.unicode
            || glyph == acc.ascii
            || lowered == acc.lilypond
            || lowered == acc.verbose
            || lowered == acc.verbose.replace(' ', "")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_degree_lookup() {
        assert_eq!(degree(0).letter, 'c');
        assert_eq!(degree(7).letter, 'c');
        assert_eq!(degree(-1).letter, 'b');
        assert_eq!(degree(4).chromatic, 7);
        assert_eq!(degree_by_letter('G').map(|d| d.diatonic), Some(4));
        assert_eq!(degree_by_letter('h'), None);
    }

    #[test]
    fn test_table_is_indexed_by_diatonic_value() {
        for (idx, degree) in MAJOR_SCALE.iter().enumerate() {
            assert_eq!(degree.diatonic, idx as i32);
        }
        for (idx, acc) in ACCIDENTALS.iter().enumerate() {
            assert_eq!(acc.offset, idx as i32 - MAX_ACCIDENTAL);
        }
    }

    #[test]
    fn test_accidental_lookup() {
        assert_eq!(accidental_for(-1).map(|a| a.unicode), Some("♭"));
        assert_eq!(accidental_for(2).map(|a| a.lilypond), Some("isis"));
        assert_eq!(accidental_for(5), None);

        assert_eq!(accidental_by_glyph("#").map(|a| a.offset), Some(1));
        assert_eq!(accidental_by_glyph("b").map(|a| a.offset), Some(-1));
        assert_eq!(accidental_by_glyph("es").map(|a| a.offset), Some(-1));
        assert_eq!(accidental_by_glyph("Sharp").map(|a| a.offset), Some(1));
        assert_eq!(accidental_by_glyph("doubleflat").map(|a| a.offset), Some(-2));
        assert_eq!(accidental_by_glyph("𝄪").map(|a| a.offset), Some(2));
        assert_eq!(accidental_by_glyph("").map(|a| a.offset), Some(0));
        assert_eq!(accidental_by_glyph("x"), None);
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal_for(8).map(|o| o.interval_name), Some("octave"));
        assert_eq!(ordinal_for(3).map(|o| o.suffix), Some("rd"));
        assert_eq!(ordinal_for(14), None);
    }
}
