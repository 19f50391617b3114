//! Octocrab-backed gateway for the contribution list endpoints.
//!
//! Four retrieval operations feed the aggregation engine: closed issues
//! (which include the pull subset), repository-wide issue comments,
//! repository-wide review comments, and per-pull reviews. The three listing
//! operations paginate exhaustively; the reviews endpoint is a single
//! request per pull.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;

use crate::github::error::CreditsError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ApiIssue, ApiIssueComment, ApiReview, ApiReviewComment, Issue, IssueComment, Review,
    ReviewComment,
};
use crate::github::pagination::{PAGE_SIZE, PageOutcome, fetch_exhaustively};
use crate::github::since::SinceBound;

use super::ContributionGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{github_status, map_octocrab_error};

/// Octocrab-backed contribution gateway.
pub struct OctocrabContributionGateway {
    client: Octocrab,
}

impl OctocrabContributionGateway {
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

    /// Fetches one page from a list endpoint.
    ///
    /// A GitHub application error (any non-success status) halts pagination;
    /// transport failures propagate.
    async fn fetch_page<R>(
        &self,
        operation: &str,
        route: &str,
        params: &[(&str, String)],
    ) -> Result<PageOutcome<R>, CreditsError>
    where
        R: DeserializeOwned,
    {
        match self.client.get::<Vec<R>, _, _>(route, Some(params)).await {
            Ok(records) => Ok(PageOutcome::Records(records)),
            Err(error) => github_status(&error).map_or_else(
                || Err(map_octocrab_error(operation, &error)),
                |status| {
                    tracing::debug!(
                        %status,
                        route,
                        "list endpoint returned non-success; keeping partial results"
                    );
                    Ok(PageOutcome::Halt)
                },
            ),
        }
    }
}

/// Builds the shared pagination parameters for one page request.
fn page_params(page: u32, since: Option<&SinceBound>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("per_page", PAGE_SIZE.to_string()),
        ("page", page.to_string()),
    ];
    // The key is omitted entirely when no bound was supplied; GitHub treats
    // an empty value differently from an absent one.
    if let Some(bound) = since {
        params.push(("since", bound.as_str().to_owned()));
    }
    params
}

#[async_trait]
impl ContributionGateway for OctocrabContributionGateway {
    async fn list_closed_issues(
        &self,
        locator: &RepositoryLocator,
        since: Option<SinceBound>,
    ) -> Result<Vec<Issue>, CreditsError> {
        let path = locator.issues_path();
        let records: Vec<ApiIssue> = fetch_exhaustively(|page| {
            let route = path.clone();
            let mut params = vec![
                ("state", "closed".to_owned()),
                ("sort", "created".to_owned()),
                ("direction", "asc".to_owned()),
            ];
            params.extend(page_params(page, since.as_ref()));
            async move { self.fetch_page("list issues", &route, &params).await }
        })
        .await?;

        tracing::debug!(count = records.len(), "collected closed issues");
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn list_issue_comments(
        &self,
        locator: &RepositoryLocator,
        since: Option<SinceBound>,
    ) -> Result<Vec<IssueComment>, CreditsError> {
        let path = locator.issue_comments_path();
        let records: Vec<ApiIssueComment> = fetch_exhaustively(|page| {
            let route = path.clone();
            let params = page_params(page, since.as_ref());
            async move { self.fetch_page("list issue comments", &route, &params).await }
        })
        .await?;

        tracing::debug!(count = records.len(), "collected issue comments");
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn list_review_comments(
        &self,
        locator: &RepositoryLocator,
        since: Option<SinceBound>,
    ) -> Result<Vec<ReviewComment>, CreditsError> {
        let path = locator.review_comments_path();
        let records: Vec<ApiReviewComment> = fetch_exhaustively(|page| {
            let route = path.clone();
            let params = page_params(page, since.as_ref());
            async move {
                self.fetch_page("list review comments", &route, &params)
                    .await
            }
        })
        .await?;

        tracing::debug!(count = records.len(), "collected review comments");
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn list_reviews(
        &self,
        locator: &RepositoryLocator,
        pull_number: u64,
    ) -> Result<Vec<Review>, CreditsError> {
        let path = locator.reviews_path(pull_number);
        let records: Vec<ApiReview> = self
            .client
            .get(&path, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("list reviews", &error))?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
