//! Display name enrichment for the contributor set.

use futures::future::try_join_all;

use crate::github::error::CreditsError;
use crate::github::gateway::ProfileGateway;

use super::aggregate::ContributorSet;

/// A contributor login paired with its resolved display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContributor {
    /// Account login.
    pub login: String,
    /// Profile display name, falling back to the login when unset or empty.
    pub display_name: String,
}

/// Resolves a display name for every contributor, concurrently.
///
/// One lookup is issued per contributor with no concurrency cap, so large
/// contributor sets accept the request-burst cost. Results are recombined
/// in the original set order regardless of completion order. A profile
/// without a display name (or with an empty one) falls back to the login.
///
/// # Errors
///
/// The first lookup failure aborts the whole resolution; there is no
/// per-contributor partial-failure tolerance.
pub async fn resolve_display_names<Gateway>(
    client: &Gateway,
    contributors: &ContributorSet,
) -> Result<Vec<ResolvedContributor>, CreditsError>
where
    Gateway: ProfileGateway,
{
    let lookups = contributors.iter().map(|login| async move {
        let name = client.display_name(login).await?;
        let display_name = name
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| login.to_owned());
        Ok(ResolvedContributor {
            login: login.to_owned(),
            display_name,
        })
    });

    try_join_all(lookups).await
}
