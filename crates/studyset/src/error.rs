//! Error types for studyset.

use thiserror::Error;

/// Result type for studyset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating a term set.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The file extension does not name a known set format.
    #[error("unsupported set format: {0}")]
    UnsupportedFormat(String),

    /// The set has no terms to study.
    #[error("set '{0}' has no terms")]
    EmptySet(String),

    /// Two terms in the set share an id.
    #[error("duplicate term id {id} in set '{set}'")]
    DuplicateTermId {
        /// Set name.
        set: String,
        /// The repeated id.
        id: i64,
    },

    /// Invalid set definition.
    #[error("invalid set definition: {0}")]
    InvalidDefinition(String),
}
