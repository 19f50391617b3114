//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::CreditsError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given API base URL.
///
/// When a token is supplied the client authenticates with it; otherwise an
/// anonymous client is built, which GitHub serves at a lower rate limit.
///
/// # Errors
///
/// Returns `CreditsError::InvalidUrl` when the base URI cannot be parsed or
/// `CreditsError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, CreditsError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| CreditsError::InvalidUrl(error.to_string()))?;

    let mut builder = Octocrab::builder();
    if let Some(value) = token {
        builder = builder.personal_token(value.as_ref());
    }

    builder
        .base_uri(base_uri)
        .map_err(|error| CreditsError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
