//! Arabic reshaping
//!
//! Replaces Arabic letters with the contextual presentation form that joins
//! correctly with their neighbours. Renderers without an OpenType shaping
//! stage draw each code point on its own, so the joined forms have to be
//! selected before the text reaches them.
//!
//! Input is expected in logical order. Visual reordering is a separate step
//! (see [`crate::bidi`]).

use crate::letters::{self, LetterForms, LAM, TATWEEL, ZWJ};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling the reshaper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReshaperConfig {
    /// Drop harakat (vowel marks) from the output
    pub delete_harakat: bool,
    /// Drop tatweel (kashida) characters
    pub delete_tatweel: bool,
    /// Treat ZWJ as joining on both sides, then drop it
    pub support_zwj: bool,
    /// Combine lam followed by alef into a single ligature glyph
    pub support_ligatures: bool,
    /// Emit the base code point instead of the isolated presentation form
    pub use_unshaped_instead_of_isolated: bool,
}

impl Default for ReshaperConfig {
    fn default() -> Self {
        Self {
            delete_harakat: true,
            delete_tatweel: false,
            support_zwj: true,
            support_ligatures: true,
            use_unshaped_instead_of_isolated: false,
        }
    }
}

impl ReshaperConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Isolated,
    Initial,
    Medial,
    Final,
    /// Emitted as-is; breaks joining
    Literal,
}

#[derive(Debug, Clone)]
struct Slot {
    ch: char,
    forms: Option<LetterForms>,
    form: Form,
    marks: Vec<char>,
}

impl Slot {
    fn literal(ch: char) -> Self {
        Self {
            ch,
            forms: None,
            form: Form::Literal,
            marks: Vec::new(),
        }
    }

    fn connects_forward(&self) -> bool {
        match (self.form, self.forms) {
            (Form::Isolated, Some(forms)) => forms.initial.is_some(),
            (Form::Final, Some(forms)) => forms.medial.is_some(),
            _ => false,
        }
    }

    fn glyph(&self, use_unshaped_isolated: bool) -> char {
        let Some(forms) = self.forms else {
            return self.ch;
        };
        match self.form {
            Form::Isolated if use_unshaped_isolated => self.ch,
            Form::Isolated => forms.isolated,
            Form::Initial => forms.initial.unwrap_or(forms.isolated),
            Form::Medial => forms.medial.unwrap_or(forms.isolated),
            Form::Final => forms.final_.unwrap_or(forms.isolated),
            Form::Literal => self.ch,
        }
    }
}

/// Arabic glyph reshaper
#[derive(Debug, Clone, Default)]
pub struct Reshaper {
    config: ReshaperConfig,
}

impl Reshaper {
    /// Create a reshaper with the given options
    pub fn new(config: ReshaperConfig) -> Self {
        Self { config }
    }

    /// The options in effect
    pub fn config(&self) -> &ReshaperConfig {
        &self.config
    }

    /// Reshape `text`, returning a new string in logical order
    pub fn reshape(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut slots = self.join(text);
        if self.config.support_ligatures {
            slots = Self::ligate(slots);
        }

        let mut output = String::with_capacity(text.len());
        for slot in &slots {
            if !(slot.ch == ZWJ && self.config.support_zwj) {
                output.push(slot.glyph(self.config.use_unshaped_instead_of_isolated));
            }
            output.extend(slot.marks.iter());
        }
        output
    }

    fn join(&self, text: &str) -> Vec<Slot> {
        let mut slots: Vec<Slot> = Vec::with_capacity(text.len());

        for ch in text.chars() {
            if letters::is_harakah(ch) {
                if self.config.delete_harakat {
                    continue;
                }
                // Marks ride on the preceding letter and never break a join
                match slots.last_mut() {
                    Some(last) => last.marks.push(ch),
                    None => slots.push(Slot::literal(ch)),
                }
                continue;
            }

            if ch == TATWEEL && self.config.delete_tatweel {
                continue;
            }

            let forms = if ch == ZWJ && self.config.support_zwj {
                Some(LetterForms::joiner(ZWJ))
            } else {
                letters::forms(ch)
            };

            let Some(forms) = forms else {
                slots.push(Slot::literal(ch));
                continue;
            };

            let form = match slots.last_mut() {
                Some(prev) if prev.connects_forward() && forms.final_.is_some() => {
                    prev.form = match prev.form {
                        Form::Isolated => Form::Initial,
                        Form::Final => Form::Medial,
                        other => other,
                    };
                    Form::Final
                }
                _ => Form::Isolated,
            };

            slots.push(Slot {
                ch,
                forms: Some(forms),
                form,
                marks: Vec::new(),
            });
        }

        slots
    }

    fn ligate(slots: Vec<Slot>) -> Vec<Slot> {
        let mut output: Vec<Slot> = Vec::with_capacity(slots.len());
        let mut iter = slots.into_iter().peekable();

        while let Some(slot) = iter.next() {
            let joined_alef = iter.peek().and_then(|next| {
                let joined = next.form == Form::Final
                    && matches!(slot.form, Form::Initial | Form::Medial);
                if slot.ch == LAM && joined {
                    letters::lam_alef_ligature(next.ch)
                } else {
                    None
                }
            });

            match joined_alef {
                Some((isolated, final_)) => {
                    let glyph = if slot.form == Form::Initial { isolated } else { final_ };
                    let mut ligature = Slot::literal(glyph);
                    ligature.marks = slot.marks;
                    if let Some(alef) = iter.next() {
                        ligature.marks.extend(alef.marks);
                    }
                    output.push(ligature);
                }
                None => output.push(slot),
            }
        }

        output
    }
}

/// Reshape with the default options
pub fn reshape(text: &str) -> String {
    Reshaper::default().reshape(text)
}
