//! Error types for wallet-locale.
//!
//! Library operations return these errors internally; the resolver's public
//! surface degrades them to absent bundles or empty strings. The CLI maps them
//! to semantic exit codes.

use std::io;
use thiserror::Error;

/// Crate error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (invalid config file, missing required values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error while fetching a bundle.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A bundle source could not produce a bundle for a locale.
    #[error("Failed to fetch bundle for '{locale}': {reason}")]
    Fetch {
        /// Locale that was requested.
        locale: String,
        /// Why the fetch failed.
        reason: String,
    },

    /// Placeholder descriptor whose `content` is not a `$N` position.
    #[error("Invalid placeholder '{name}' in message '{key}': content '{content}'")]
    Placeholder {
        /// Message key declaring the placeholder.
        key: String,
        /// Placeholder name.
        name: String,
        /// Raw descriptor content.
        content: String,
    },

    /// Malformed message template.
    #[error("Malformed template at byte {offset}: {reason}")]
    Template {
        /// Byte offset of the offending character.
        offset: usize,
        /// What was wrong.
        reason: &'static str,
    },

    /// IO error (file operations).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No bundle holds the requested message key.
    #[error("Message '{0}' not found in the target or fallback bundle")]
    MessageNotFound(String),

    /// Bundle coverage check failed in strict mode.
    #[error(
        "Bundle verification failed: {missing} missing, {mismatched} mismatched, {malformed} malformed"
    )]
    VerificationFailed {
        /// Keys missing from the target bundle.
        missing: usize,
        /// Keys with disagreeing placeholders.
        mismatched: usize,
        /// Keys with malformed templates.
        malformed: usize,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the exit code for this error type.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments or configuration
    /// - 5: Bundle or message not found
    /// - 6: Bundle verification failed
    /// - 10: Network or IO error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::InvalidArgument(_) => 2,
            Error::Fetch { .. } | Error::MessageNotFound(_) => 5,
            Error::VerificationFailed { .. } => 6,
            Error::Http(_) | Error::Io(_) => 10,
            Error::Placeholder { .. }
            | Error::Template { .. }
            | Error::Json(_)
            | Error::Yaml(_) => 1,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a fetch error for a locale.
    pub fn fetch(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Fetch { locale: locale.into(), reason: reason.into() }
    }

    /// Create a template error.
    pub fn template(offset: usize, reason: &'static str) -> Self {
        Error::Template { offset, reason }
    }
}
