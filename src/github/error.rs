//! Error types exposed by the GitHub credits layer.

use thiserror::Error;

use crate::local::LocalDiscoveryError;

/// Errors surfaced while parsing input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CreditsError {
    /// The authentication token was blank.
    #[error("personal access token must not be blank")]
    MissingToken,

    /// The provided URL could not be parsed.
    #[error("repository URL is invalid: {0}")]
    InvalidUrl(String),

    /// The repository owner contains characters outside the accepted set.
    #[error("repository owner must contain only alphanumerics or underscores: {value}")]
    InvalidOwner {
        /// The rejected owner segment.
        value: String,
    },

    /// The repository name contains characters outside the accepted set.
    #[error("repository name must contain only alphanumerics, hyphens, or underscores: {value}")]
    InvalidRepositoryName {
        /// The rejected name segment.
        value: String,
    },

    /// The `since` bound could not be parsed as a date or timestamp.
    #[error("since value is not a date or RFC 3339 timestamp: {value}")]
    InvalidSince {
        /// The unparseable input.
        value: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local repository discovery failed.
    #[error("local discovery: {message}")]
    LocalDiscovery {
        /// Details about the discovery failure.
        message: String,
    },
}

impl From<LocalDiscoveryError> for CreditsError {
    fn from(error: LocalDiscoveryError) -> Self {
        Self::LocalDiscovery {
            message: error.to_string(),
        }
    }
}
