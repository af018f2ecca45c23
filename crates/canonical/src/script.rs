//! Writing-system classification for name tokens.

use serde::{Deserialize, Serialize};

/// Writing system a character or token belongs to.
///
/// Only the scripts the name tables know about are distinguished; everything
/// else collapses to [`Script::Other`]. Digits, punctuation and whitespace are
/// [`Script::Common`] and never decide the script of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Arabic,
    Han,
    Greek,
    Other,
    Common,
}

impl Script {
    /// Classifies a single character by code-point block.
    pub fn of(ch: char) -> Script {
        match ch as u32 {
            0x0041..=0x005A | 0x0061..=0x007A => Script::Latin,
            0x00C0..=0x00D6 | 0x00D8..=0x00F6 | 0x00F8..=0x024F => Script::Latin,
            0x1E00..=0x1EFF | 0x2C60..=0x2C7F | 0xA720..=0xA7FF => Script::Latin,
            0xFF21..=0xFF3A | 0xFF41..=0xFF5A => Script::Latin,
            0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
            0x0400..=0x052F | 0x1C80..=0x1C8F | 0x2DE0..=0x2DFF | 0xA640..=0xA69F => {
                Script::Cyrillic
            }
            0x0600..=0x06FF
            | 0x0750..=0x077F
            | 0x08A0..=0x08FF
            | 0xFB50..=0xFDFF
            | 0xFE70..=0xFEFF => Script::Arabic,
            0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x2A6DF => {
                Script::Han
            }
            // Combining marks inherit the script of their base character.
            0x0300..=0x036F => Script::Common,
            _ if ch.is_alphabetic() => Script::Other,
            _ => Script::Common,
        }
    }

    /// Whether keys in this script need a transliteration pass to become
    /// comparable with Latin keys.
    pub fn is_latin(self) -> bool {
        matches!(self, Script::Latin | Script::Common)
    }
}

/// Returns the script covering most letters of `text`.
///
/// Ties resolve to the script seen first. Text with no letters at all is
/// [`Script::Common`].
pub fn dominant_script(text: &str) -> Script {
    let mut counts: Vec<(Script, usize)> = Vec::with_capacity(2);
    for ch in text.chars() {
        let script = Script::of(ch);
        if script == Script::Common {
            continue;
        }
        match counts.iter_mut().find(|(s, _)| *s == script) {
            Some((_, n)) => *n += 1,
            None => counts.push((script, 1)),
        }
    }

    let mut best = Script::Common;
    let mut best_count = 0;
    for (script, count) in counts {
        if count > best_count {
            best = script;
            best_count = count;
        }
    }
    best
}

/// Whether `text` contains at least one character of `script`.
pub fn contains_script(text: &str, script: Script) -> bool {
    text.chars().any(|ch| Script::of(ch) == script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_blocks() {
        assert_eq!(Script::of('a'), Script::Latin);
        assert_eq!(Script::of('é'), Script::Latin);
        assert_eq!(Script::of('ж'), Script::Cyrillic);
        assert_eq!(Script::of('م'), Script::Arabic);
        assert_eq!(Script::of('王'), Script::Han);
        assert_eq!(Script::of('λ'), Script::Greek);
        assert_eq!(Script::of('-'), Script::Common);
        assert_eq!(Script::of('7'), Script::Common);
    }

    #[test]
    fn dominant_script_ignores_common() {
        assert_eq!(dominant_script("Петров-2"), Script::Cyrillic);
        assert_eq!(dominant_script("  -- "), Script::Common);
        assert_eq!(dominant_script("Al Thani محمد"), Script::Latin);
        assert_eq!(dominant_script("王伟"), Script::Han);
    }
}
