//! High-level credits collection facade used by the CLI.

use crate::github::error::CreditsError;
use crate::github::gateway::ContributionGateway;
use crate::github::locator::RepositoryLocator;
use crate::github::models::Review;
use crate::github::since::SinceBound;

use super::aggregate::{ContributorSet, ExclusionList, collect_contributors};

/// Aggregates a repository's contribution history using a gateway.
pub struct CreditsEngine<'client, Gateway>
where
    Gateway: ContributionGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> CreditsEngine<'client, Gateway>
where
    Gateway: ContributionGateway,
{
    /// Create a new engine facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Collects the ordered, deduplicated contributor set for a repository.
    ///
    /// Fetches closed issues first, derives the pull subset, then loads
    /// reviews one pull at a time before gathering issue and review
    /// comments. Reviews are fetched strictly sequentially: one pull is
    /// fully processed before the next request is issued.
    ///
    /// # Errors
    ///
    /// Propagates any transport failure from the underlying gateway.
    /// Non-success list responses are absorbed inside pagination and
    /// surface here only as shorter lists.
    pub async fn collect(
        &self,
        locator: &RepositoryLocator,
        since: Option<&SinceBound>,
        exclude: &ExclusionList,
    ) -> Result<ContributorSet, CreditsError> {
        let issues = self
            .client
            .list_closed_issues(locator, since.cloned())
            .await?;

        let mut reviews: Vec<Review> = Vec::new();
        for pull in issues.iter().filter(|issue| issue.is_pull_request()) {
            reviews.extend(self.client.list_reviews(locator, pull.number).await?);
        }

        let comments = self
            .client
            .list_issue_comments(locator, since.cloned())
            .await?;
        let review_comments = self
            .client
            .list_review_comments(locator, since.cloned())
            .await?;

        tracing::debug!(
            issues = issues.len(),
            reviews = reviews.len(),
            comments = comments.len(),
            review_comments = review_comments.len(),
            "collected contribution history"
        );

        Ok(collect_contributors(
            &issues,
            &reviews,
            &comments,
            &review_comments,
            exclude,
        ))
    }
}
