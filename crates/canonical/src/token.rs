use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

/// A raw-text segment with its UTF-8 byte offsets in the input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    /// The segment text, exactly as it appears in the input.
    pub text: String,
    /// Byte offset (inclusive) in the input.
    pub start: usize,
    /// Byte offset (exclusive) in the input.
    pub end: usize,
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits a raw name into surface segments.
///
/// Whitespace and separating punctuation (commas, slashes, brackets, quotes)
/// end a segment. Hyphens, apostrophes and periods stay inside, so
/// "Mary-Jane", "O'Connor" and "Dr." each remain a single segment. Segments
/// made only of punctuation are dropped.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if is_separator(ch) {
            if let Some(seg_start) = start.take() {
                push_segment(&mut segments, text, seg_start, idx);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(seg_start) = start {
        push_segment(&mut segments, text, seg_start, text.len());
    }

    segments
}

fn is_separator(ch: char) -> bool {
    if ch.is_whitespace() {
        return true;
    }
    ch.is_punctuation()
        && !ch.is_punctuation_dash()
        && !matches!(ch, '\'' | '\u{2019}' | '\u{02BC}' | '.')
}

fn push_segment(segments: &mut Vec<Segment>, text: &str, start: usize, end: usize) {
    let slice = &text[start..end];
    if slice.chars().any(|c| c.is_alphanumeric()) {
        segments.push(Segment {
            text: slice.to_string(),
            start,
            end,
        });
    }
}
