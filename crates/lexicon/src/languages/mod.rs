//! Built-in language rule sets.
//!
//! Each submodule exposes `spec()`, returning its tables and a constructor
//! for its [`LanguageRules`] implementation. [`builtin`] registers them in
//! [`Language::ALL`] order.

mod arabic;
mod english;
mod french;
mod german;
mod italian;
mod mandarin;
mod portuguese;
mod russian;
mod spanish;

use crate::equivalence::EquivalenceGraph;
use crate::language::Language;
use crate::rules::{LanguageRules, RuleTables};
use crate::sets::{HonorificSet, ParticleSet};

pub(crate) use arabic::{ARABIC_GIVEN_NAMES, ARABIC_MARKERS};
pub(crate) use mandarin::{given_syllables, is_pinyin_tone_mark, romanized_surnames};
pub(crate) use russian::ROMANIZED_PATRONYMIC_ENDINGS;

/// Tables for one language plus the constructor that turns them into rules
/// once overlays have been merged.
pub struct LanguageSpec {
    pub language: Language,
    pub tables: RuleTables,
    pub(crate) build: fn(RuleTables) -> Box<dyn LanguageRules>,
}

impl LanguageSpec {
    pub(crate) fn into_rules(self) -> Box<dyn LanguageRules> {
        (self.build)(self.tables)
    }
}

/// Honorifics recognized regardless of language.
pub const COMMON_HONORIFICS: &[&str] = &[
    "mr", "mrs", "miss", "ms", "mx", "dr", "prof", "professor", "sir", "lady",
];

/// Trailing generational and academic suffixes, recognized regardless of
/// language.
pub const COMMON_SUFFIXES: &[&str] = &[
    "jr", "sr", "junior", "senior", "ii", "iii", "iv", "phd", "md", "esq", "dds", "mba",
];

pub fn common_honorifics() -> HonorificSet {
    HonorificSet::new(COMMON_HONORIFICS.iter().copied(), COMMON_SUFFIXES.iter().copied())
}

/// All built-in languages, in [`Language::ALL`] order.
pub fn builtin() -> Vec<LanguageSpec> {
    vec![
        english::spec(),
        french::spec(),
        german::spec(),
        italian::spec(),
        spanish::spec(),
        portuguese::spec(),
        arabic::spec(),
        russian::spec(),
        mandarin::spec(),
    ]
}

pub(crate) fn tables(
    honorifics: &[&str],
    particles: &[&str],
    diminutives: &[&[&str]],
    equivalences: &[&[&str]],
) -> RuleTables {
    RuleTables {
        honorifics: HonorificSet::new(honorifics.iter().copied(), []),
        particles: ParticleSet::new(particles.iter().copied()),
        diminutives: EquivalenceGraph::from_classes(diminutives),
        equivalences: EquivalenceGraph::from_classes(equivalences),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_follows_language_order() {
        let specs = builtin();
        assert_eq!(specs.len(), Language::ALL.len());
        for (spec, lang) in specs.iter().zip(Language::ALL) {
            assert_eq!(spec.language, lang);
        }
    }

    #[test]
    fn every_builtin_satisfies_its_required_tables() {
        for spec in builtin() {
            let rules = spec.into_rules();
            for kind in rules.required_tables() {
                assert!(
                    !rules.tables().is_table_empty(*kind),
                    "{} is missing {}",
                    rules.language(),
                    kind.name()
                );
            }
        }
    }
}
