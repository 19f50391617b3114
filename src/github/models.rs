//! Data models for the contribution history returned by the GitHub API.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types. Logins keep the platform's canonical
//! casing; they are never normalised.

use serde::Deserialize;

/// A closed issue or pull request.
///
/// GitHub's issues endpoint returns pull requests as issues carrying a
/// `pull_request` link; an issue with `pull_request_url` present is the pull
/// subset of the listing. No separate pull listing is fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    /// Issue number, used as the pull number for review listing.
    pub number: u64,
    /// Canonical API URL of the issue.
    pub url: String,
    /// API URL of the pull request, present when this issue is a pull.
    pub pull_request_url: Option<String>,
    /// Author login.
    pub author: Option<String>,
}

impl Issue {
    /// Returns true when this issue record is also a pull request.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request_url.is_some()
    }
}

/// A comment on an issue or on a pull request's discussion thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueComment {
    /// Author login.
    pub author: Option<String>,
    /// API URL of the parent issue.
    pub issue_url: Option<String>,
}

/// An inline comment attached to a pull request review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewComment {
    /// Author login.
    pub author: Option<String>,
    /// API URL of the parent pull request.
    pub pull_request_url: Option<String>,
}

/// One reviewer pass over a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    /// Reviewer login.
    pub author: Option<String>,
}

/// A user profile as returned by the users endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Account login.
    pub login: Option<String>,
    /// Display name, absent or empty when the user has not set one.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequestLink {
    pub(super) url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) number: u64,
    pub(super) url: String,
    pub(super) user: Option<ApiUser>,
    pub(super) pull_request: Option<ApiPullRequestLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssueComment {
    pub(super) user: Option<ApiUser>,
    pub(super) issue_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiReviewComment {
    pub(super) user: Option<ApiUser>,
    pub(super) pull_request_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiReview {
    pub(super) user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUserProfile {
    pub(super) login: Option<String>,
    pub(super) name: Option<String>,
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            url: value.url,
            pull_request_url: value.pull_request.and_then(|link| link.url),
            author: value.user.and_then(|user| user.login),
        }
    }
}

impl From<ApiIssueComment> for IssueComment {
    fn from(value: ApiIssueComment) -> Self {
        Self {
            author: value.user.and_then(|user| user.login),
            issue_url: value.issue_url,
        }
    }
}

impl From<ApiReviewComment> for ReviewComment {
    fn from(value: ApiReviewComment) -> Self {
        Self {
            author: value.user.and_then(|user| user.login),
            pull_request_url: value.pull_request_url,
        }
    }
}

impl From<ApiReview> for Review {
    fn from(value: ApiReview) -> Self {
        Self {
            author: value.user.and_then(|user| user.login),
        }
    }
}

impl From<ApiUserProfile> for UserProfile {
    fn from(value: ApiUserProfile) -> Self {
        Self {
            login: value.login,
            name: value.name,
        }
    }
}
