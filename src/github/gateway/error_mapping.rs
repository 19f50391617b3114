//! Error mapping helpers for the Octocrab gateway implementations.

use http::StatusCode;

use crate::github::error::CreditsError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Returns the response status when the error is a GitHub application error.
///
/// Non-success application responses are distinct from transport failures:
/// inside pagination they stop the walk with partial results instead of
/// failing the run.
pub(super) fn github_status(error: &octocrab::Error) -> Option<StatusCode> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code),
        _ => None,
    }
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> CreditsError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return if is_auth_failure(source.status_code) {
            CreditsError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            CreditsError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return CreditsError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    CreditsError::Api {
        message: format!("{operation} failed: {error}"),
    }
}
