//! Error types for the Localefill core library.

use thiserror::Error;

/// All errors that can occur within the Localefill core library.
#[derive(Debug, Error)]
pub enum LocalefillError {
    /// An I/O operation on a catalog file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file could not be parsed or serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The parsed document is not usable as a catalog (e.g. the root is
    /// not a JSON object).
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A target language has no phrase table in the glossary.
    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),
}

/// Convenience alias that pins the error type to [`LocalefillError`].
pub type Result<T> = std::result::Result<T, LocalefillError>;
