//! Configuration errors.

/// Errors raised while loading configuration or building a feature catalog.
///
/// All of these surface before any detection call runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Duplicate feature id: {id}")]
    DuplicateFeature { id: String },

    #[error("Unknown feature id: {id}")]
    UnknownFeature { id: String },

    #[error("Feature descriptor is missing required field: {field}")]
    MissingField { field: String },
}
