//! Error types for the bili-picker application.

use thiserror::Error;

use crate::selection::SelectionError;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Unrecognised address or id: {0}")]
    InvalidUrl(String),

    // Catalog errors
    #[error("Invalid metadata: {0}")]
    Metadata(String),

    // Selection errors
    #[error(transparent)]
    Selection(#[from] SelectionError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
            Error::InvalidUrl(_) => exit_codes::INVALID_TARGET,
            Error::Api(_) | Error::Http(_) | Error::Metadata(_) => exit_codes::API_ERROR,
            Error::Selection(SelectionError::EmptySelection) => exit_codes::EMPTY_SELECTION,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const EMPTY_SELECTION: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const INVALID_TARGET: i32 = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_config_file_is_a_config_error() {
        let parse_error = toml::from_str::<toml::Value>("[user\nsessdata = ").unwrap_err();
        assert_eq!(
            Error::TomlParse(parse_error).exit_code(),
            exit_codes::CONFIG_ERROR
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::Config("x".into()).exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(
            Error::InvalidUrl("x".into()).exit_code(),
            exit_codes::INVALID_TARGET
        );
        assert_eq!(Error::Api("x".into()).exit_code(), exit_codes::API_ERROR);
        assert_eq!(
            Error::Selection(SelectionError::EmptySelection).exit_code(),
            exit_codes::EMPTY_SELECTION
        );
        assert_eq!(
            Error::Selection(SelectionError::InternalConsistency {
                group: "g".into(),
                leaf: "1".into(),
            })
            .exit_code(),
            exit_codes::UNEXPECTED_ERROR
        );
        assert_eq!(
            Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")).exit_code(),
            exit_codes::UNEXPECTED_ERROR
        );
    }
}
