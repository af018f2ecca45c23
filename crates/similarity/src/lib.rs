//! Token similarity for name matching.
//!
//! The score of two tokens is the best of:
//!
//! - exact key equality (1.0),
//! - a transliteration-equivalence override ("bin" / "ibn"),
//! - Jaro-Winkler over the comparison keys, falling back to plain Jaro for
//!   short keys or keys far apart by Levenshtein distance,
//! - a phonetic floor when the phonetic keys intersect,
//! - for non-Latin tokens, the same metrics over loose transliteration keys.
//!
//! Each token carries its diminutive variants; token similarity is the
//! maximum over all cross pairs, discounted when a variant is involved.

mod config;
mod engine;
mod error;
mod metrics;

pub use crate::config::SimilarityConfig;
pub use crate::engine::{phonetic_agreement, PairScore, SimilarityEngine, TokenProfile, Variant};
pub use crate::error::SimilarityError;
pub use crate::metrics::{lexical, Lexical};
