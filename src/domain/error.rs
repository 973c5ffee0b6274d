//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 30s, 2m, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when a categorical scene value is not one of the known values.
/// Never surfaced by prompt composition, which falls back to the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {field}: \"{input}\"")]
pub struct UnknownSceneValue {
    pub field: &'static str,
    pub input: String,
}

/// Error when a reference image cannot be accepted for upload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaValidationError {
    #[error("\"{name}\" is not an image (declared type: {media_type})")]
    NotAnImage { name: String, media_type: String },

    #[error("\"{name}\" is empty")]
    Empty { name: String },

    #[error("\"{name}\" is too large ({size}); the limit is {limit}")]
    TooLarge {
        name: String,
        size: String,
        limit: String,
    },

    #[error("Failed to read \"{name}\": {message}")]
    Unreadable { name: String, message: String },

    #[error("Failed to write \"{name}\": {message}")]
    Unwritable { name: String, message: String },

    #[error("Invalid image data URL: {0}")]
    InvalidDataUrl(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),

    #[error("Missing API key. Set GEMINI_API_KEY environment variable or run 'persona-lens config set api_key <key>'")]
    MissingApiKey,
}
