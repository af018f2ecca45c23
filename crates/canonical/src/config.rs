//! Configuration types for the name normalizer.
//!
//! [`NormalizeConfig`] controls which folding passes run when a raw name is
//! turned into a comparison key.
//!
//! # Versioning
//!
//! The `version` field tracks key-producing behavior. Any change that alters
//! keys for the same input must be accompanied by a version bump so that keys
//! stored by callers can be told apart.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.transliterate);
//! assert!(config.fold_diacritics);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the name normalizer.
///
/// ```json
/// {
///   "version": 1,
///   "transliterate": true,
///   "fold_diacritics": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Version of the key-producing behavior. Must be >= 1.
    pub version: u32,

    /// Apply transliteration tables to non-Latin scripts (and to the
    /// language-specific Latin digraph folds such as German umlauts).
    ///
    /// When disabled, non-Latin characters pass through unchanged.
    pub transliterate: bool,

    /// Strip combining marks after canonical decomposition.
    pub fold_diacritics: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            transliterate: true,
            fold_diacritics: true,
        }
    }
}

impl NormalizeConfig {
    pub fn with_transliterate(mut self, transliterate: bool) -> Self {
        self.transliterate = transliterate;
        self
    }

    pub fn with_fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    /// Rejects the reserved version 0.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "normalize config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(NormalizeConfig::default().validate().is_ok());
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn builders_toggle_passes() {
        let cfg = NormalizeConfig::default()
            .with_transliterate(false)
            .with_fold_diacritics(false);
        assert!(!cfg.transliterate);
        assert!(!cfg.fold_diacritics);
        assert_eq!(cfg.version, 1);
    }
}
