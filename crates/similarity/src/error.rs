use thiserror::Error;

/// Errors raised while validating similarity configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
