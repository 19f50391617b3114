//! Octocrab-backed gateway for user profile lookups.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::CreditsError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{ApiUserProfile, UserProfile};

use super::ProfileGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed profile gateway.
pub struct OctocrabProfileGateway {
    client: Octocrab,
}

impl OctocrabProfileGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway for the given optional token and repository locator.
    ///
    /// # Errors
    ///
    /// Returns `CreditsError::InvalidUrl` when the base URI cannot be parsed
    /// or `CreditsError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: Option<&PersonalAccessToken>,
        locator: &RepositoryLocator,
    ) -> Result<Self, CreditsError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl ProfileGateway for OctocrabProfileGateway {
    async fn display_name(&self, login: &str) -> Result<Option<String>, CreditsError> {
        let path = format!("/users/{login}");
        let profile: UserProfile = self
            .client
            .get::<ApiUserProfile, _, _>(&path, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("load user profile", &error))?
            .into();

        Ok(profile.name)
    }
}
