//! Gateways for loading contribution history through Octocrab.
//!
//! This module provides trait-based gateways for communicating with the
//! GitHub API. The trait-based design enables mocking in tests while the
//! Octocrab implementations handle real HTTP requests.

mod client;
mod contributions;
mod error_mapping;
mod profiles;

pub use contributions::OctocrabContributionGateway;
pub use profiles::OctocrabProfileGateway;

use async_trait::async_trait;

use crate::github::error::CreditsError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{Issue, IssueComment, Review, ReviewComment};
use crate::github::since::SinceBound;

/// Gateway that can load the contribution lists for one repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContributionGateway: Send + Sync {
    /// Fetch every closed issue and pull request, ascending by creation
    /// time, optionally bounded by an inclusive last-updated timestamp.
    async fn list_closed_issues(
        &self,
        locator: &RepositoryLocator,
        since: Option<SinceBound>,
    ) -> Result<Vec<Issue>, CreditsError>;

    /// Fetch every repository-wide issue comment.
    async fn list_issue_comments(
        &self,
        locator: &RepositoryLocator,
        since: Option<SinceBound>,
    ) -> Result<Vec<IssueComment>, CreditsError>;

    /// Fetch every repository-wide pull review comment.
    async fn list_review_comments(
        &self,
        locator: &RepositoryLocator,
        since: Option<SinceBound>,
    ) -> Result<Vec<ReviewComment>, CreditsError>;

    /// Fetch all reviews for one pull request in a single request.
    async fn list_reviews(
        &self,
        locator: &RepositoryLocator,
        pull_number: u64,
    ) -> Result<Vec<Review>, CreditsError>;
}

/// Gateway that can resolve a login to a profile display name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Fetch the profile display name for a login, `None` when unset.
    async fn display_name(&self, login: &str) -> Result<Option<String>, CreditsError>;
}
