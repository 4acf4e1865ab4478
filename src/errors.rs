/*!
 * Error types for the termbridge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Module-specific lints configuration
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to an external translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while loading or indexing the glossary.
///
/// Only problems with the glossary as a whole are fatal. A single malformed
/// entry or an uncompilable variant is skipped with a warning during the
/// build and never aborts indexing of the remaining entries.
#[derive(Error, Debug)]
pub enum GlossaryError {
    /// The glossary file could not be read at all
    #[error("Glossary file could not be read: {0}")]
    FileUnreadable(String),

    /// The glossary root is neither a list of entries nor a term-keyed table
    #[error("Glossary root must be a list of entries or a table keyed by term")]
    UnsupportedShape,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a configuration file
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the glossary
    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
