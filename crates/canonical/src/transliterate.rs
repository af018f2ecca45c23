//! Deterministic transliteration tables.
//!
//! A [`TransliterationTable`] maps whole words and single graphemes of a
//! source script onto lowercase Latin text. Whole-word entries win over the
//! per-character map, which lets a table carry conventional romanizations for
//! frequent names (where letter-by-letter output would drop unwritten vowels)
//! while still covering everything else.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::NormalizeConfig;
use crate::normalize::lookup_form;

/// Mapping from source-script text onto a Latin comparison form.
///
/// All outputs are folded to lowercase ASCII on insertion so that applying a
/// table never produces input that another pass could map again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationTable {
    words: FxHashMap<String, String>,
    chars: FxHashMap<char, String>,
    /// Insert a space after each mapped character (syllabic scripts).
    #[serde(default)]
    syllabic: bool,
}

impl TransliterationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from static `(char, latin)` pairs.
    pub fn from_chars(pairs: &[(char, &str)]) -> Self {
        let mut table = Self::new();
        for (ch, latin) in pairs {
            table.insert_char(*ch, latin);
        }
        table
    }

    /// Marks the table as syllabic: every mapped character becomes its own
    /// space-separated syllable in the output.
    pub fn syllabic(mut self) -> Self {
        self.syllabic = true;
        self
    }

    pub fn with_words(mut self, pairs: &[(&str, &str)]) -> Self {
        for (word, latin) in pairs {
            self.insert_word(word, latin);
        }
        self
    }

    pub fn insert_char(&mut self, ch: char, latin: &str) {
        let folded = fold_output(latin);
        for lower in ch.to_lowercase() {
            self.chars.insert(lower, folded.clone());
        }
        self.chars.insert(ch, folded);
    }

    /// Keys are stored in [`lookup_form`], so entries may be authored with
    /// any casing or letter variant.
    pub fn insert_word(&mut self, word: &str, latin: &str) {
        let key = lookup_form(word, &NormalizeConfig::default());
        self.words.insert(key, fold_output(latin));
    }

    /// Merges `other` into `self`; entries from `other` win.
    pub fn extend(&mut self, other: &TransliterationTable) {
        self.words
            .extend(other.words.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.chars.extend(other.chars.iter().map(|(k, v)| (*k, v.clone())));
        self.syllabic |= other.syllabic;
    }

    pub fn lookup_word(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn lookup_char(&self, ch: char) -> Option<&str> {
        self.chars.get(&ch).map(String::as_str)
    }

    pub fn is_syllabic(&self) -> bool {
        self.syllabic
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len() + self.chars.len()
    }
}

fn fold_output(latin: &str) -> String {
    latin
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect()
}
