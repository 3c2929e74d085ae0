//! Visual reordering for right-to-left text
//!
//! Runs the Unicode Bidirectional Algorithm (UAX #9) through `unicode-bidi`
//! and flattens each paragraph into visual (left-to-right display) order, so
//! that renderers without bidi support draw mixed Arabic/Latin text correctly.

use unicode_bidi::{bidi_class, BidiClass, BidiInfo, Level};

/// Paragraph base direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    fn level(self) -> Level {
        match self {
            Direction::Ltr => Level::ltr(),
            Direction::Rtl => Level::rtl(),
        }
    }
}

/// Detect the base direction from the first strong character.
///
/// Text without any strong character is treated as LTR.
pub fn base_direction(text: &str) -> Direction {
    match unicode_bidi::get_base_direction(text) {
        unicode_bidi::Direction::Rtl => Direction::Rtl,
        _ => Direction::Ltr,
    }
}

/// Reorder `text` from logical to visual order.
///
/// `base` forces the paragraph direction; `None` auto-detects it per
/// paragraph. Paragraph separators stay where they were in the input.
pub fn reorder_for_display(text: &str, base: Option<Direction>) -> String {
    if text.is_empty() {
        return String::new();
    }

    let info = BidiInfo::new(text, base.map(Direction::level));
    if !info.has_rtl() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    for para in &info.paragraphs {
        let range = para.range.clone();
        let separator_len = text[range.clone()]
            .chars()
            .next_back()
            .filter(|&ch| bidi_class(ch) == BidiClass::B)
            .map_or(0, char::len_utf8);
        let line = range.start..range.end - separator_len;

        if !line.is_empty() {
            let (levels, runs) = info.visual_runs(para, line.clone());
            for run in runs {
                let segment = &text[run.clone()];
                if levels[run.start].is_rtl() {
                    output.extend(segment.chars().rev().map(mirror));
                } else {
                    output.push_str(segment);
                }
            }
        }

        output.push_str(&text[line.end..range.end]);
    }

    output
}

/// Mirror paired punctuation that flips in right-to-left runs
fn mirror(ch: char) -> char {
    match ch {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '\u{00AB}' => '\u{00BB}',
        '\u{00BB}' => '\u{00AB}',
        '\u{2039}' => '\u{203A}',
        '\u{203A}' => '\u{2039}',
        '\u{FD3E}' => '\u{FD3F}',
        '\u{FD3F}' => '\u{FD3E}',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltr_unchanged() {
        assert_eq!(reorder_for_display("Hello world", None), "Hello world");
        assert_eq!(reorder_for_display("", None), "");
    }

    #[test]
    fn test_pure_rtl_reversed() {
        // alef beh teh
        let text = "\u{0627}\u{0628}\u{062A}";
        assert_eq!(reorder_for_display(text, None), "\u{062A}\u{0628}\u{0627}");
    }

    #[test]
    fn test_numbers_keep_order_in_rtl() {
        // alef, space, 123
        let text = "\u{0627} 123";
        assert_eq!(reorder_for_display(text, None), "123 \u{0627}");
    }

    #[test]
    fn test_ltr_paragraph_with_rtl_word() {
        let text = "abc \u{0627}\u{0628} def";
        assert_eq!(
            reorder_for_display(text, None),
            "abc \u{0628}\u{0627} def"
        );
    }

    #[test]
    fn test_brackets_mirrored_in_rtl() {
        let text = "\u{0627}(\u{0628})";
        assert_eq!(reorder_for_display(text, None), "(\u{0628})\u{0627}");
    }

    #[test]
    fn test_paragraph_separator_kept_in_place() {
        let text = "\u{0627}\u{0628}\n\u{062A}\u{062B}";
        assert_eq!(
            reorder_for_display(text, None),
            "\u{0628}\u{0627}\n\u{062B}\u{062A}"
        );
    }

    #[test]
    fn test_base_direction_detection() {
        assert_eq!(base_direction("abc"), Direction::Ltr);
        assert_eq!(base_direction("\u{0627}bc"), Direction::Rtl);
        assert_eq!(base_direction("123"), Direction::Ltr);
    }
}
