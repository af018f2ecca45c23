//! # Name matcher (`matcher`)
//!
//! Decides whether two personal-name strings are consistent with the same
//! person and explains the decision.
//!
//! A match runs the stages of the sibling crates in order:
//!
//! 1. [`parser`] splits each name into honorifics, particles and
//!    first/middle/last tokens under a detected or hinted language.
//! 2. [`DiminutiveResolver`] expands given names into their nickname
//!    classes ("Bob" into "Robert", "Саша" into "aleksandr").
//! 3. [`similarity`] scores every token pair lexically, phonetically and
//!    across scripts.
//! 4. The composite scorer weighs the role scores, redistributes the weight
//!    of absent roles and applies the length and disagreement penalties.
//!
//! ## Example
//!
//! ```
//! use matcher::{MatchOptions, Matcher, MatcherConfig};
//!
//! let matcher = Matcher::new(MatcherConfig::default()).expect("built-in dictionaries");
//! let result = matcher.match_names("Robert A. Smith", "Bob Smith", &MatchOptions::default());
//! assert!(result.is_match());
//! assert!(matcher.quick_match("Jane Doe", "John Smith") < 0.2);
//! ```
//!
//! ## Shared default
//!
//! [`quick_match`] and [`match_names`] use a process-wide matcher built on
//! first use from the built-in dictionaries. Build a [`Matcher`] yourself to
//! use overlays, a custom detector or tuned weights.

mod engine;
mod resolver;
mod scorer;
mod types;

use once_cell::sync::Lazy;
use tracing::error;

pub use crate::engine::Matcher;
pub use crate::resolver::DiminutiveResolver;
pub use crate::types::{
    AppliedWeights, BestPair, DisagreementConfig, MatchError, MatchOptions, MatchResult,
    MatcherConfig, RoleScores, ScoringConfig, Side, Weights, DEFAULT_MATCH_THRESHOLD,
};

static DEFAULT_MATCHER: Lazy<Result<Matcher, MatchError>> =
    Lazy::new(|| Matcher::new(MatcherConfig::default()));

/// The shared default matcher.
pub fn default_matcher() -> Result<&'static Matcher, MatchError> {
    Lazy::force(&DEFAULT_MATCHER).as_ref().map_err(Clone::clone)
}

/// Matches two names with the shared default matcher.
pub fn match_names(
    name1: &str,
    name2: &str,
    options: &MatchOptions,
) -> Result<MatchResult, MatchError> {
    Ok(default_matcher()?.match_names(name1, name2, options))
}

/// Confidence from the shared default matcher. Returns 0.0 if the built-in
/// dictionaries failed to load.
pub fn quick_match(name1: &str, name2: &str) -> f64 {
    match default_matcher() {
        Ok(matcher) => matcher.quick_match(name1, name2),
        Err(err) => {
            error!(error = %err, "default_matcher_unavailable");
            0.0
        }
    }
}
