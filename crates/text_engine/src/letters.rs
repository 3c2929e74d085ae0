//! Arabic letter tables
//!
//! Maps base Arabic code points to their contextual presentation forms
//! (Unicode Arabic Presentation Forms-A and -B).

/// Zero width joiner
pub const ZWJ: char = '\u{200D}';
/// Arabic tatweel (kashida)
pub const TATWEEL: char = '\u{0640}';
/// Arabic letter lam
pub const LAM: char = '\u{0644}';

/// Contextual forms of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterForms {
    pub isolated: char,
    pub initial: Option<char>,
    pub medial: Option<char>,
    pub final_: Option<char>,
}

impl LetterForms {
    const fn isolated_only(isolated: char) -> Self {
        Self {
            isolated,
            initial: None,
            medial: None,
            final_: None,
        }
    }

    /// Right-joining letter: joins the previous letter only
    const fn two(isolated: char, final_: char) -> Self {
        Self {
            isolated,
            initial: None,
            medial: None,
            final_: Some(final_),
        }
    }

    /// Dual-joining letter, forms in Unicode order (isolated, final, initial, medial)
    const fn four(isolated: char, final_: char, initial: char, medial: char) -> Self {
        Self {
            isolated,
            initial: Some(initial),
            medial: Some(medial),
            final_: Some(final_),
        }
    }

    /// Forms used for a character that joins on both sides with no glyph change
    pub const fn joiner(ch: char) -> Self {
        Self::four(ch, ch, ch, ch)
    }
}

/// Look up the presentation forms of a base letter
pub fn forms(ch: char) -> Option<LetterForms> {
    let forms = match ch {
        '\u{0621}' => LetterForms::isolated_only('\u{FE80}'),
        '\u{0622}' => LetterForms::two('\u{FE81}', '\u{FE82}'),
        '\u{0623}' => LetterForms::two('\u{FE83}', '\u{FE84}'),
        '\u{0624}' => LetterForms::two('\u{FE85}', '\u{FE86}'),
        '\u{0625}' => LetterForms::two('\u{FE87}', '\u{FE88}'),
        '\u{0626}' => LetterForms::four('\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'),
        '\u{0627}' => LetterForms::two('\u{FE8D}', '\u{FE8E}'),
        '\u{0628}' => LetterForms::four('\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'),
        '\u{0629}' => LetterForms::two('\u{FE93}', '\u{FE94}'),
        '\u{062A}' => LetterForms::four('\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'),
        '\u{062B}' => LetterForms::four('\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'),
        '\u{062C}' => LetterForms::four('\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'),
        '\u{062D}' => LetterForms::four('\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'),
        '\u{062E}' => LetterForms::four('\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'),
        '\u{062F}' => LetterForms::two('\u{FEA9}', '\u{FEAA}'),
        '\u{0630}' => LetterForms::two('\u{FEAB}', '\u{FEAC}'),
        '\u{0631}' => LetterForms::two('\u{FEAD}', '\u{FEAE}'),
        '\u{0632}' => LetterForms::two('\u{FEAF}', '\u{FEB0}'),
        '\u{0633}' => LetterForms::four('\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'),
        '\u{0634}' => LetterForms::four('\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'),
        '\u{0635}' => LetterForms::four('\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'),
        '\u{0636}' => LetterForms::four('\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'),
        '\u{0637}' => LetterForms::four('\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'),
        '\u{0638}' => LetterForms::four('\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'),
        '\u{0639}' => LetterForms::four('\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'),
        '\u{063A}' => LetterForms::four('\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'),
        TATWEEL => LetterForms::joiner(TATWEEL),
        '\u{0641}' => LetterForms::four('\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'),
        '\u{0642}' => LetterForms::four('\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'),
        '\u{0643}' => LetterForms::four('\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'),
        LAM => LetterForms::four('\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'),
        '\u{0645}' => LetterForms::four('\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'),
        '\u{0646}' => LetterForms::four('\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'),
        '\u{0647}' => LetterForms::four('\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'),
        '\u{0648}' => LetterForms::two('\u{FEED}', '\u{FEEE}'),
        // Alef maksura borrows the Forms-A initial/medial glyphs
        '\u{0649}' => LetterForms::four('\u{FEEF}', '\u{FEF0}', '\u{FBE8}', '\u{FBE9}'),
        '\u{064A}' => LetterForms::four('\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'),
        '\u{0671}' => LetterForms::two('\u{FB50}', '\u{FB51}'),
        '\u{067E}' => LetterForms::four('\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'),
        '\u{0686}' => LetterForms::four('\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'),
        '\u{0698}' => LetterForms::two('\u{FB8A}', '\u{FB8B}'),
        '\u{06A9}' => LetterForms::four('\u{FB8E}', '\u{FB8F}', '\u{FB90}', '\u{FB91}'),
        '\u{06AF}' => LetterForms::four('\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'),
        '\u{06CC}' => LetterForms::four('\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'),
        _ => return None,
    };
    Some(forms)
}

/// Lam-alef ligature (isolated, final) for an alef variant following lam
pub fn lam_alef_ligature(alef: char) -> Option<(char, char)> {
    match alef {
        '\u{0622}' => Some(('\u{FEF5}', '\u{FEF6}')),
        '\u{0623}' => Some(('\u{FEF7}', '\u{FEF8}')),
        '\u{0625}' => Some(('\u{FEF9}', '\u{FEFA}')),
        '\u{0627}' => Some(('\u{FEFB}', '\u{FEFC}')),
        _ => None,
    }
}

/// Whether the character is a harakah (combining vowel or Quranic mark).
///
/// The non-combining characters in U+06D6..=U+06ED (end of ayah, rub el
/// hizb, small waw, small yeh, place of sajdah) are excluded.
pub fn is_harakah(ch: char) -> bool {
    matches!(
        ch,
        '\u{0610}'..='\u{061A}'
            | '\u{064B}'..='\u{065F}'
            | '\u{0670}'
            | '\u{06D6}'..='\u{06DC}'
            | '\u{06DF}'..='\u{06E4}'
            | '\u{06E7}'..='\u{06E8}'
            | '\u{06EA}'..='\u{06ED}'
    )
}
