use thiserror::Error;

/// Errors raised while loading dictionaries.
///
/// All of these are initialization-time failures: a [`Dictionaries`]
/// handle only exists once every required table is present.
///
/// [`Dictionaries`]: crate::Dictionaries
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LexiconError {
    #[error("dictionary unavailable: {language} has no {table} table")]
    DictionaryUnavailable { language: String, table: String },
    #[error("invalid dictionary: {0}")]
    InvalidDictionary(String),
    #[error("failed to read dictionary source: {0}")]
    Io(String),
    #[error("failed to parse dictionary source: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LexiconError {
    fn from(err: serde_json::Error) -> Self {
        LexiconError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for LexiconError {
    fn from(err: std::io::Error) -> Self {
        LexiconError::Io(err.to_string())
    }
}
