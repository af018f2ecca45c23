use std::fmt;

use canonical::NormalizeConfig;
use lexicon::LexiconError;
use parser::{Name, Role};
use serde::{Deserialize, Serialize, Serializer};
use similarity::SimilarityConfig;
use thiserror::Error;

/// Confidence [`MatchResult::is_match`] compares against when the caller
/// set no threshold.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.8;

/// Base weights of the composite score.
///
/// Weights of absent roles are redistributed over the present ones, so only
/// their ratios matter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Weights {
    pub first: f64,
    pub middle: f64,
    pub last: f64,
    pub phonetic: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            first: 0.35,
            middle: 0.15,
            last: 0.35,
            phonetic: 0.15,
        }
    }
}

impl Weights {
    fn all(&self) -> [(&'static str, f64); 4] {
        [
            ("first", self.first),
            ("middle", self.middle),
            ("last", self.last),
            ("phonetic", self.phonetic),
        ]
    }
}

/// Multipliers applied when the first and last name scores disagree with a
/// match. Checked in order; the first tier that applies wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisagreementConfig {
    /// Both anchors below `severe_below`: multiply by `severe_factor`.
    pub severe_below: f64,
    pub severe_factor: f64,
    /// Weakest anchor below `weak_below` while the strongest is below
    /// `strong_below`: multiply by `weak_factor`.
    pub weak_below: f64,
    pub strong_below: f64,
    pub weak_factor: f64,
    /// Both anchors below `mild_below`: multiply by `mild_factor`.
    pub mild_below: f64,
    pub mild_factor: f64,
}

impl Default for DisagreementConfig {
    fn default() -> Self {
        Self {
            severe_below: 0.3,
            severe_factor: 0.2,
            weak_below: 0.5,
            strong_below: 0.85,
            weak_factor: 0.3,
            mild_below: 0.7,
            mild_factor: 0.6,
        }
    }
}

impl DisagreementConfig {
    /// Multiplier for the given weakest and strongest anchor scores.
    pub fn factor(&self, weakest: f64, strongest: f64) -> f64 {
        if strongest < self.severe_below {
            self.severe_factor
        } else if weakest < self.weak_below && strongest < self.strong_below {
            self.weak_factor
        } else if strongest < self.mild_below {
            self.mild_factor
        } else {
            1.0
        }
    }
}

/// Composite scorer tunables.
///
/// ```json
/// {
///   "weights": { "first": 0.35, "middle": 0.15, "last": 0.35, "phonetic": 0.15 },
///   "variant_discount": 0.95,
///   "length_threshold": 1,
///   "length_step": 0.05,
///   "length_floor": 0.7,
///   "hyphen_equivalence_score": 0.95,
///   "swapped_order_factor": 0.95
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: Weights,
    /// Multiplier on scores reached through a diminutive variant rather
    /// than the token itself.
    pub variant_discount: f64,
    /// Token-count differences up to this are not penalized.
    pub length_threshold: usize,
    /// Penalty per token of difference beyond the threshold.
    pub length_step: f64,
    /// The length penalty never goes below this.
    pub length_floor: f64,
    pub disagreement: DisagreementConfig,
    /// Confidence floor for names equal once hyphens read as spaces.
    pub hyphen_equivalence_score: f64,
    /// Multiplier on the order-swapped reading of family-first names.
    pub swapped_order_factor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            variant_discount: 0.95,
            length_threshold: 1,
            length_step: 0.05,
            length_floor: 0.7,
            disagreement: DisagreementConfig::default(),
            hyphen_equivalence_score: 0.95,
            swapped_order_factor: 0.95,
        }
    }
}

impl ScoringConfig {
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_length_penalty(mut self, threshold: usize, step: f64, floor: f64) -> Self {
        self.length_threshold = threshold;
        self.length_step = step;
        self.length_floor = floor;
        self
    }

    pub fn with_variant_discount(mut self, discount: f64) -> Self {
        self.variant_discount = discount;
        self
    }

    /// Multiplier for a comparable token-count difference of `diff`.
    /// Non-increasing in `diff` and never below `length_floor`.
    pub fn length_penalty(&self, diff: usize) -> f64 {
        if diff <= self.length_threshold {
            return 1.0;
        }
        let excess = (diff - self.length_threshold) as f64;
        (1.0 - self.length_step * excess).max(self.length_floor)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        let mut total = 0.0;
        for (field, weight) in self.weights.all() {
            if !(weight >= 0.0 && weight.is_finite()) {
                return Err(MatchError::InvalidConfig(format!(
                    "weights.{field} must be a non-negative number, got {weight}"
                )));
            }
            total += weight;
        }
        if total <= 0.0 {
            return Err(MatchError::InvalidConfig(
                "weights must sum to more than zero".into(),
            ));
        }

        let d = &self.disagreement;
        let unit = [
            ("length_step", self.length_step),
            ("length_floor", self.length_floor),
            ("hyphen_equivalence_score", self.hyphen_equivalence_score),
            ("disagreement.severe_below", d.severe_below),
            ("disagreement.weak_below", d.weak_below),
            ("disagreement.strong_below", d.strong_below),
            ("disagreement.mild_below", d.mild_below),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "{field} must be in [0, 1], got {value}"
                )));
            }
        }

        let factors = [
            ("variant_discount", self.variant_discount),
            ("swapped_order_factor", self.swapped_order_factor),
            ("disagreement.severe_factor", d.severe_factor),
            ("disagreement.weak_factor", d.weak_factor),
            ("disagreement.mild_factor", d.mild_factor),
        ];
        for (field, value) in factors {
            if !(value > 0.0 && value <= 1.0) {
                return Err(MatchError::InvalidConfig(format!(
                    "{field} must be in (0, 1], got {value}"
                )));
            }
        }
        if self.length_floor <= 0.0 {
            return Err(MatchError::InvalidConfig(
                "length_floor must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Full matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatcherConfig {
    pub version: u32,
    pub normalize: NormalizeConfig,
    pub similarity: SimilarityConfig,
    pub scoring: ScoringConfig,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize: NormalizeConfig::default(),
            similarity: SimilarityConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl MatcherConfig {
    pub fn with_similarity(mut self, similarity: SimilarityConfig) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_normalize(mut self, normalize: NormalizeConfig) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "matcher config version must be >= 1".into(),
            ));
        }
        self.normalize
            .validate()
            .map_err(|err| MatchError::InvalidConfig(err.to_string()))?;
        self.similarity
            .validate()
            .map_err(|err| MatchError::InvalidConfig(err.to_string()))?;
        self.scoring.validate()
    }
}

/// Per-call options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchOptions {
    /// Language tag for the first name; overrides detection.
    pub language_hint1: Option<String>,
    /// Language tag for the second name; overrides detection.
    pub language_hint2: Option<String>,
    /// Caller-side cutoff used only by [`MatchResult::is_match`].
    pub min_confidence_threshold: Option<f64>,
    /// Disables transliteration-equivalence overrides and the cross-script
    /// comparison path.
    pub strict_script_matching: bool,
}

impl MatchOptions {
    pub fn with_language_hints(
        mut self,
        hint1: Option<impl Into<String>>,
        hint2: Option<impl Into<String>>,
    ) -> Self {
        self.language_hint1 = hint1.map(Into::into);
        self.language_hint2 = hint2.map(Into::into);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.min_confidence_threshold = Some(threshold);
        self
    }

    pub fn with_strict_script_matching(mut self, strict: bool) -> Self {
        self.strict_script_matching = strict;
        self
    }
}

/// Which of the two inputs a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Name1,
    Name2,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Name1 => f.write_str("name1"),
            Side::Name2 => f.write_str("name2"),
        }
    }
}

/// Errors and degradations of the matching layer.
///
/// Construction failures are returned as `Err`. During a match the same
/// type is only collected in [`MatchResult::diagnostics`]; a match call
/// itself always produces a result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The name was empty or whitespace-only after normalization.
    #[error("{side} is empty after normalization")]
    EmptyInput { side: Side },
    /// A language hint named an unsupported language; default rules were
    /// used instead.
    #[error("unsupported language `{requested}`, using `{fallback}` rules")]
    UnsupportedLanguage { requested: String, fallback: String },
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    #[error("dictionary error: {0}")]
    Dictionary(#[from] LexiconError),
}

/// Per-role similarity scores. `None` marks a role that was absent on at
/// least one side and so did not take part.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct RoleScores {
    pub first: Option<f64>,
    pub middle: Option<f64>,
    pub last: Option<f64>,
    pub phonetic: Option<f64>,
}

/// Weights actually applied after redistribution. Sums to 1 unless no role
/// was compared.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct AppliedWeights {
    pub first: f64,
    pub middle: f64,
    pub last: f64,
    pub phonetic: f64,
}

/// The spellings that produced a role's score.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BestPair {
    pub role: Role,
    pub left: String,
    pub right: String,
    pub score: f64,
}

/// Outcome of matching two names.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult {
    pub name1: Name,
    pub name2: Name,
    pub scores: RoleScores,
    pub weights: AppliedWeights,
    /// Final confidence in [0, 1].
    pub confidence: f64,
    pub best_pairs: Vec<BestPair>,
    /// True when the family/given-swapped reading scored better.
    pub swapped_order: bool,
    /// Multiplier from the token-count difference.
    pub length_penalty: f64,
    /// Multiplier from disagreeing first/last scores.
    pub disagreement_penalty: f64,
    pub min_confidence_threshold: Option<f64>,
    #[serde(serialize_with = "display_all")]
    pub diagnostics: Vec<MatchError>,
}

impl MatchResult {
    /// Whether the confidence reaches the caller's threshold, or
    /// [`DEFAULT_MATCH_THRESHOLD`] when none was given.
    pub fn is_match(&self) -> bool {
        self.confidence >= self.min_confidence_threshold.unwrap_or(DEFAULT_MATCH_THRESHOLD)
    }

    pub fn best_pair(&self, role: Role) -> Option<&BestPair> {
        self.best_pairs.iter().find(|p| p.role == role)
    }
}

fn display_all<S: Serializer>(errors: &[MatchError], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}
