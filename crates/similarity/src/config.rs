//! Tunables for token similarity.
//!
//! # Examples
//!
//! ```rust
//! use similarity::SimilarityConfig;
//!
//! let config = SimilarityConfig::default().with_phonetic_floor(0.85);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.min_prefix_len, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// Configuration for [`SimilarityEngine`](crate::SimilarityEngine).
///
/// ```json
/// {
///   "version": 1,
///   "min_prefix_len": 4,
///   "prefix_scale": 0.1,
///   "levenshtein_floor": 0.5,
///   "phonetic_floor": 0.9,
///   "phonetic_min_jaro": 0.8,
///   "equivalence_score": 0.98,
///   "cross_script_factor": 0.97,
///   "initial_match_score": 1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimilarityConfig {
    pub version: u32,

    /// Keys shorter than this are compared with plain Jaro; prefix
    /// weighting is unstable on very short strings.
    pub min_prefix_len: usize,

    /// Jaro-Winkler prefix scale. At most four prefix characters count, so
    /// this must stay at or below 0.25.
    pub prefix_scale: f64,

    /// Below this normalized Levenshtein similarity the prefix bonus is
    /// withheld and the phonetic floor needs a strong Jaro score instead.
    pub levenshtein_floor: f64,

    /// Score guaranteed to tokens whose phonetic keys intersect.
    pub phonetic_floor: f64,

    /// Jaro score that lets the phonetic floor apply despite a low
    /// Levenshtein similarity.
    pub phonetic_min_jaro: f64,

    /// Fixed score for keys in one transliteration-equivalence class
    /// ("bin" / "ibn").
    pub equivalence_score: f64,

    /// Multiplier on the loose-key score of the cross-script path.
    pub cross_script_factor: f64,

    /// Score for a single-letter initial against a name it abbreviates.
    pub initial_match_score: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            version: 1,
            min_prefix_len: 4,
            prefix_scale: 0.1,
            levenshtein_floor: 0.5,
            phonetic_floor: 0.9,
            phonetic_min_jaro: 0.8,
            equivalence_score: 0.98,
            cross_script_factor: 0.97,
            initial_match_score: 1.0,
        }
    }
}

impl SimilarityConfig {
    pub fn with_phonetic_floor(mut self, floor: f64) -> Self {
        self.phonetic_floor = floor;
        self
    }

    pub fn with_equivalence_score(mut self, score: f64) -> Self {
        self.equivalence_score = score;
        self
    }

    pub fn with_cross_script_factor(mut self, factor: f64) -> Self {
        self.cross_script_factor = factor;
        self
    }

    pub fn with_min_prefix_len(mut self, len: usize) -> Self {
        self.min_prefix_len = len;
        self
    }

    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.version == 0 {
            return Err(SimilarityError::InvalidConfig(
                "similarity config version must be >= 1".into(),
            ));
        }
        if !(0.0..=0.25).contains(&self.prefix_scale) {
            return Err(SimilarityError::InvalidConfig(format!(
                "prefix_scale must be in [0, 0.25], got {}",
                self.prefix_scale
            )));
        }
        let unit = [
            ("levenshtein_floor", self.levenshtein_floor),
            ("phonetic_floor", self.phonetic_floor),
            ("phonetic_min_jaro", self.phonetic_min_jaro),
            ("equivalence_score", self.equivalence_score),
            ("initial_match_score", self.initial_match_score),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimilarityError::InvalidConfig(format!(
                    "{field} must be in [0, 1], got {value}"
                )));
            }
        }
        if !(self.cross_script_factor > 0.0 && self.cross_script_factor <= 1.0) {
            return Err(SimilarityError::InvalidConfig(format!(
                "cross_script_factor must be in (0, 1], got {}",
                self.cross_script_factor
            )));
        }
        Ok(())
    }
}
