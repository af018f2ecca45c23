//! YAML configuration for the name matcher.
//!
//! The whole matcher tree (normalization, token similarity, composite
//! scoring) loads from one YAML document; every section and field is
//! optional and falls back to the built-in defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "kyc-screening"
//!
//! # JSON dictionary overlay merged over the built-in tables.
//! dictionaries: "/etc/namematch/overlay.json"
//!
//! matcher:
//!   version: 1
//!   normalize:
//!     transliterate: true
//!     fold_diacritics: true
//!   similarity:
//!     phonetic_floor: 0.9
//!     equivalence_score: 0.98
//!   scoring:
//!     weights: { first: 0.35, middle: 0.15, last: 0.35, phonetic: 0.15 }
//!     length_threshold: 1
//!     length_step: 0.05
//!     length_floor: 0.7
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lexicon::{Dictionaries, LexiconError};
use matcher::{MatchError, Matcher, MatcherConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("dictionary error: {0}")]
    Dictionary(#[from] LexiconError),
}

impl From<MatchError> for ConfigLoadError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::Dictionary(err) => ConfigLoadError::Dictionary(err),
            other => ConfigLoadError::Validation(other.to_string()),
        }
    }
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NamematchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// JSON dictionary overlay applied on top of the built-in tables.
    /// Relative paths resolve against the working directory.
    #[serde(default)]
    pub dictionaries: Option<PathBuf>,

    #[serde(default)]
    pub matcher: MatcherConfig,
}

impl NamematchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: NamematchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }

    /// Loads the dictionaries, including the overlay if one is configured.
    pub fn load_dictionaries(&self) -> Result<Dictionaries, ConfigLoadError> {
        let mut builder = Dictionaries::builder().with_normalize(self.matcher.normalize.clone());
        if let Some(path) = &self.dictionaries {
            debug!(path = %path.display(), "dictionary_overlay");
            builder = builder.with_overlay_file(path)?;
        }
        Ok(builder.build()?)
    }

    /// Builds a matcher from this configuration.
    pub fn build_matcher(&self) -> Result<Matcher, ConfigLoadError> {
        self.validate()?;
        let dicts = self.load_dictionaries()?;
        Ok(Matcher::with_dictionaries(
            Arc::new(dicts),
            self.matcher.clone(),
        )?)
    }
}

impl Default for NamematchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            dictionaries: None,
            matcher: MatcherConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matcher:
  scoring:
    length_floor: 0.8
  similarity:
    phonetic_floor: 0.85
"#;

        let config = NamematchConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.matcher.scoring.length_floor, 0.8);
        assert_eq!(config.matcher.similarity.phonetic_floor, 0.85);
        assert_eq!(config.matcher.scoring.weights.first, 0.35);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = "version: \"1\"\n";
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = NamematchConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config, NamematchConfig {
            version: "1".into(),
            ..Default::default()
        });
    }

    #[test]
    fn test_unsupported_version() {
        let err = NamematchConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_scoring_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  scoring:
    weights: { first: -1.0 }
"#;
        let err = NamematchConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("weights.first"));
    }

    #[test]
    fn test_missing_file() {
        let err = NamematchConfig::from_file("/nonexistent/namematch.yaml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileRead(_)));
    }

    #[test]
    fn test_overlay_is_applied() {
        let overlay = r#"{ "languages": { "en": { "diminutives": [["ignatius", "iggy"]] } } }"#;
        let mut overlay_file = NamedTempFile::new().unwrap();
        overlay_file.write_all(overlay.as_bytes()).unwrap();

        let config = NamematchConfig {
            dictionaries: Some(overlay_file.path().to_path_buf()),
            ..Default::default()
        };
        let matcher = config.build_matcher().unwrap();
        assert!(matcher.quick_match("Iggy Pop", "Ignatius Pop") >= 0.9);
    }

    #[test]
    fn test_broken_overlay_is_a_dictionary_error() {
        let mut overlay_file = NamedTempFile::new().unwrap();
        overlay_file.write_all(b"{ not json").unwrap();
        let config = NamematchConfig {
            dictionaries: Some(overlay_file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            config.build_matcher(),
            Err(ConfigLoadError::Dictionary(_))
        ));
    }
}
