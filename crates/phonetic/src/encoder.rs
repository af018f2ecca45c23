use std::collections::BTreeSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use lexicon::Language;
use rphonetic::{DoubleMetaphone, Encoder};
use tracing::{trace, warn};

use crate::arabic::skeleton;
use crate::soundex::soundex;

/// Unordered phonetic keys of one token. Two tokens sound alike when their
/// key sets intersect.
pub type PhoneticKeys = BTreeSet<String>;

/// Which algorithm produced a token's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    DoubleMetaphone,
    Soundex,
    None,
}

/// Phonetic encoder for normalized name keys.
///
/// Double metaphone (primary and alternate code) handles plain ASCII keys.
/// Keys with letters outside ASCII, and the rare input the metaphone
/// implementation panics on, fall back to Soundex over the ASCII letters.
/// Arabic tokens additionally get a consonant skeleton.
#[derive(Default)]
pub struct PhoneticEncoder {
    metaphone: DoubleMetaphone,
}

impl fmt::Debug for PhoneticEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneticEncoder").finish_non_exhaustive()
    }
}

impl PhoneticEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode(&self, key: &str, language: Language) -> PhoneticKeys {
        self.encode_with_algorithm(key, language).0
    }

    pub fn encode_with_algorithm(&self, key: &str, language: Language) -> (PhoneticKeys, Algorithm) {
        let letters: String = key.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
        let mut keys = PhoneticKeys::new();
        if letters.is_empty() {
            return (keys, Algorithm::None);
        }

        let algorithm = if letters.bytes().all(|b| b.is_ascii_lowercase()) {
            match self.metaphone(&letters) {
                Some((primary, alternate)) => {
                    keys.extend([primary, alternate].into_iter().filter(|k| !k.is_empty()));
                    Algorithm::DoubleMetaphone
                }
                None => {
                    keys.extend(soundex(&letters));
                    Algorithm::Soundex
                }
            }
        } else {
            trace!(key = %key, "phonetic_soundex_fallback");
            keys.extend(soundex(&letters));
            if keys.is_empty() {
                Algorithm::None
            } else {
                Algorithm::Soundex
            }
        };

        if language == Language::Arabic {
            keys.extend(skeleton(&letters));
        }
        (keys, algorithm)
    }

    fn metaphone(&self, letters: &str) -> Option<(String, String)> {
        let encoded = panic::catch_unwind(AssertUnwindSafe(|| {
            (
                self.metaphone.encode(letters),
                self.metaphone.encode_alternate(letters),
            )
        }));
        match encoded {
            Ok(codes) => Some(codes),
            Err(_) => {
                warn!(key = %letters, "double_metaphone_panicked");
                None
            }
        }
    }
}

/// Whether two key sets share a key.
pub fn agree(a: &PhoneticKeys, b: &PhoneticKeys) -> bool {
    a.iter().any(|k| b.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(key: &str, language: Language) -> PhoneticKeys {
        PhoneticEncoder::new().encode(key, language)
    }

    #[test]
    fn spelling_variants_agree() {
        assert!(agree(&keys("john", Language::English), &keys("jon", Language::English)));
        assert!(agree(&keys("smith", Language::English), &keys("smyth", Language::English)));
        assert!(agree(&keys("catherine", Language::English), &keys("kathryn", Language::English)));
    }

    #[test]
    fn unrelated_names_disagree() {
        assert!(!agree(&keys("robert", Language::English), &keys("michael", Language::English)));
        assert!(!agree(&keys("doe", Language::English), &keys("smith", Language::English)));
    }

    #[test]
    fn arabic_spellings_meet_on_the_skeleton() {
        let a = keys("muhammad", Language::Arabic);
        let b = keys("mohammed", Language::Arabic);
        assert!(a.contains("MHMD"));
        assert!(agree(&a, &b));
    }

    #[test]
    fn non_ascii_keys_use_soundex() {
        let encoder = PhoneticEncoder::new();
        let (keys, algorithm) = encoder.encode_with_algorithm("王wang", Language::Mandarin);
        assert_eq!(algorithm, Algorithm::Soundex);
        assert!(keys.contains("W520"));

        let (keys, algorithm) = encoder.encode_with_algorithm("王", Language::Mandarin);
        assert_eq!(algorithm, Algorithm::None);
        assert!(keys.is_empty());
    }

    #[test]
    fn hyphens_and_spaces_are_ignored() {
        assert_eq!(keys("mary-jane", Language::English), keys("maryjane", Language::English));
        assert!(keys("", Language::English).is_empty());
    }
}
