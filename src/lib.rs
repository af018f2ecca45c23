//! Workspace umbrella crate for multilingual personal-name matching.
//!
//! This crate re-exports the stage crates so callers can work from a single
//! dependency:
//!
//! - [`canonical`]: normalization to comparison keys, script detection and
//!   transliteration tables.
//! - [`lexicon`]: per-language honorifics, particles, diminutives and
//!   transliteration equivalences behind the [`LanguageRules`] trait.
//! - [`parser`]: splits a raw name into honorifics, particles and
//!   first/middle/last tokens.
//! - [`phonetic`]: double metaphone with Soundex and Arabic-skeleton
//!   companions.
//! - [`similarity`]: token similarity including the cross-script path.
//! - [`matcher`]: diminutive expansion, composite scoring and the match
//!   entry points.
//!
//! ```
//! let confidence = namematch::quick_match("John Smith", "Jon Smith");
//! assert!(confidence > 0.9);
//!
//! let options = namematch::MatchOptions::default().with_threshold(0.9);
//! let result = namematch::match_names("Wáng Wěi", "Wei Wang", &options).expect("dictionaries");
//! assert!(result.is_match());
//! ```
//!
//! Configuration can also be loaded from YAML through [`NamematchConfig`].

pub mod config;

pub use canonical;
pub use lexicon;
pub use matcher;
pub use parser;
pub use phonetic;
pub use similarity;

pub use canonical::{NormalizeConfig, Script};
pub use lexicon::{
    Dictionaries, DictionariesBuilder, DiminutiveGraph, Language, LanguageDetector,
    LanguageRules, LexiconError, Overlay, ScriptDetector,
};
pub use matcher::{
    AppliedWeights, BestPair, DEFAULT_MATCH_THRESHOLD, DiminutiveResolver, DisagreementConfig,
    MatchError, MatchOptions, MatchResult, Matcher, MatcherConfig, RoleScores, ScoringConfig,
    Side, Weights, default_matcher, match_names, quick_match,
};
pub use parser::{LanguageSource, Name, Parser, Role, Token};
pub use phonetic::{PhoneticEncoder, PhoneticKeys};
pub use similarity::{SimilarityConfig, SimilarityEngine};

pub use crate::config::{ConfigLoadError, NamematchConfig};

/// Normalizes `text` to a comparison key under `language`'s rules using
/// the built-in dictionaries.
///
/// Returns the input lowercased if the dictionaries failed to load.
pub fn normalize(text: &str, language: Language) -> String {
    match default_matcher() {
        Ok(matcher) => matcher.dictionaries().normalize(text, language),
        Err(_) => text.to_lowercase(),
    }
}
