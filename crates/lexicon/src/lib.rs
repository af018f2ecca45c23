//! Dictionary access layer for name matching.
//!
//! This crate owns everything language-specific:
//!
//! * [`Language`] tags and their resolution from caller hints,
//! * the [`LanguageRules`] capability with one implementation per built-in
//!   language (see [`languages`]),
//! * the [`EquivalenceGraph`] used for diminutives and transliteration
//!   equivalence,
//! * the immutable [`Dictionaries`] handle, loaded once and then shared,
//! * a default [`LanguageDetector`].
//!
//! ```
//! use lexicon::{Dictionaries, Language};
//!
//! let dicts = Dictionaries::load().unwrap();
//! let en = dicts.rules(Language::English);
//! assert!(en.tables().diminutives.equivalent("bob", "robert"));
//! assert_eq!(dicts.normalize("Саша", Language::Russian), "sasha");
//! ```

pub mod detect;
mod equivalence;
mod error;
mod language;
pub mod languages;
mod rules;
mod sets;
mod store;

pub use detect::{LanguageDetector, ScriptDetector};
pub use equivalence::{DiminutiveGraph, EquivalenceBuilder, EquivalenceGraph};
pub use error::LexiconError;
pub use language::Language;
pub use languages::{common_honorifics, LanguageSpec, COMMON_HONORIFICS, COMMON_SUFFIXES};
pub use rules::{LanguageRules, NameOrder, RuleTables, StandardRules, TableKind};
pub use sets::{HonorificSet, ParticleSet};
pub use store::{
    Dictionaries, DictionariesBuilder, LanguageOverlay, Overlay, TransliterationOverlay,
};
