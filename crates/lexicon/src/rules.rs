//! The per-language rule capability.
//!
//! Every language is one [`LanguageRules`] implementation over a
//! [`RuleTables`] bundle. The parser and matcher only ever talk to the
//! trait, so adding a language means adding one module and registering it
//! in [`crate::languages`].

use std::fmt;

use canonical::{Segment, TransliterationTable};
use fxhash::FxHashMap;

use crate::equivalence::{DiminutiveGraph, EquivalenceGraph};
use crate::language::Language;
use crate::sets::{HonorificSet, ParticleSet};

/// Data tables backing one language's rules.
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    pub honorifics: HonorificSet,
    pub particles: ParticleSet,
    pub diminutives: DiminutiveGraph,
    /// Spelling variants of one name element across romanization standards
    /// ("bin"/"ibn", "mohammed"/"muhammad").
    pub equivalences: EquivalenceGraph,
    pub transliteration: TransliterationTable,
    /// Regional surname spellings folded onto one canonical key
    /// ("wong" to "wang").
    pub surname_variants: FxHashMap<String, String>,
}

/// Names of the tables a language may require at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Honorifics,
    Particles,
    Diminutives,
    Equivalences,
    Transliteration,
}

impl TableKind {
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Honorifics => "honorifics",
            TableKind::Particles => "particles",
            TableKind::Diminutives => "diminutives",
            TableKind::Equivalences => "equivalences",
            TableKind::Transliteration => "transliteration",
        }
    }
}

impl RuleTables {
    pub fn is_table_empty(&self, kind: TableKind) -> bool {
        match kind {
            TableKind::Honorifics => self.honorifics.is_empty(),
            TableKind::Particles => self.particles.is_empty(),
            TableKind::Diminutives => self.diminutives.is_empty(),
            TableKind::Equivalences => self.equivalences.is_empty(),
            TableKind::Transliteration => self.transliteration.is_empty(),
        }
    }
}

/// Source order of given and family names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    /// Given name(s) first, family name last ("John Smith").
    GivenFirst,
    /// Family name first, then given name, then any further given or
    /// patronymic tokens ("Wang Wei", "Petrov Ivan Sergeyevich").
    FamilyFirst,
}

/// Language-specific behavior queried by the parser and matcher.
pub trait LanguageRules: Send + Sync + fmt::Debug {
    fn language(&self) -> Language;

    fn tables(&self) -> &RuleTables;

    /// Tables that must be non-empty for this language to load.
    fn required_tables(&self) -> &'static [TableKind] {
        &[
            TableKind::Honorifics,
            TableKind::Particles,
            TableKind::Diminutives,
        ]
    }

    /// Splits a raw name into surface segments.
    fn segment(&self, raw: &str) -> Vec<Segment> {
        canonical::segment(raw)
    }

    /// Decides the source order of the name tokens left after honorifics
    /// and particles are classified. `surfaces` and `keys` run in parallel.
    fn name_order(&self, _surfaces: &[&str], _keys: &[&str]) -> NameOrder {
        NameOrder::GivenFirst
    }

    /// Whether a non-initial particle starts the surname, pulling every
    /// following token into it ("Ludwig van der Rohe").
    fn particle_starts_surname(&self) -> bool {
        true
    }

    fn is_patronymic(&self, _key: &str) -> bool {
        false
    }

    /// Strips a particle glued to its surname by a hyphen ("al-thani").
    fn strip_glued_particle<'a>(&self, key: &'a str) -> &'a str {
        match key.split_once('-') {
            Some((head, tail)) if !tail.is_empty() && self.tables().particles.contains(head) => {
                tail
            }
            _ => key,
        }
    }

    /// Canonical key for a family-name token.
    fn surname_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.tables()
            .surname_variants
            .get(key)
            .map(String::as_str)
            .unwrap_or(key)
    }
}

/// Rule set driven purely by its tables.
///
/// Used by every language whose only specifics are its data.
#[derive(Debug)]
pub struct StandardRules {
    language: Language,
    tables: RuleTables,
}

impl StandardRules {
    pub fn new(language: Language, tables: RuleTables) -> Self {
        Self { language, tables }
    }
}

impl LanguageRules for StandardRules {
    fn language(&self) -> Language {
        self.language
    }

    fn tables(&self) -> &RuleTables {
        &self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> StandardRules {
        let tables = RuleTables {
            particles: ParticleSet::new(["al", "bin"]),
            surname_variants: [("wong".to_string(), "wang".to_string())]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        StandardRules::new(Language::Arabic, tables)
    }

    #[test]
    fn strips_glued_particles_only() {
        let rules = rules();
        assert_eq!(rules.strip_glued_particle("al-thani"), "thani");
        assert_eq!(rules.strip_glued_particle("mary-jane"), "mary-jane");
        assert_eq!(rules.strip_glued_particle("al-"), "al-");
    }

    #[test]
    fn surname_variants_fold() {
        let rules = rules();
        assert_eq!(rules.surname_key("wong"), "wang");
        assert_eq!(rules.surname_key("smith"), "smith");
    }

    #[test]
    fn emptiness_by_kind() {
        let rules = rules();
        assert!(!rules.tables().is_table_empty(TableKind::Particles));
        assert!(rules.tables().is_table_empty(TableKind::Honorifics));
        assert_eq!(TableKind::Diminutives.name(), "diminutives");
    }
}
