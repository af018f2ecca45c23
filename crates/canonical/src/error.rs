use thiserror::Error;

/// Errors raised while validating normalizer configuration.
///
/// Normalization itself never fails; only a malformed config is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
