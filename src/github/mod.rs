//! GitHub contribution retrieval.
//!
//! This module wraps Octocrab to page through a repository's closed issues,
//! comments, and reviews, exposing the results as domain models the credits
//! engine aggregates. Errors are mapped into user-friendly variants so that
//! callers can surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod since;

pub use error::CreditsError;
pub use gateway::{
    ContributionGateway, OctocrabContributionGateway, OctocrabProfileGateway, ProfileGateway,
};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{Issue, IssueComment, Review, ReviewComment, UserProfile};
pub use since::SinceBound;

#[cfg(test)]
pub use gateway::{MockContributionGateway, MockProfileGateway};
