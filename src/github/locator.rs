//! URL parsing and identity wrappers for repository-scoped credits queries.

use url::Url;

use super::error::CreditsError;
use crate::local::GitHubOrigin;
use crate::local::remote::{is_valid_owner, is_valid_repository_name};

/// Repository owner wrapper to avoid stringly typed parameters.
///
/// Owners are restricted to alphanumerics and underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, CreditsError> {
        if !is_valid_owner(value) {
            return Err(CreditsError::InvalidOwner {
                value: value.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
///
/// Names are restricted to alphanumerics, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, CreditsError> {
        if !is_valid_repository_name(value) {
            return Err(CreditsError::InvalidRepositoryName {
                value: value.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CreditsError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, CreditsError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CreditsError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, CreditsError> {
    if host.eq_ignore_ascii_case("github.com") {
        Url::parse("https://api.github.com")
            .map_err(|error| CreditsError::InvalidUrl(error.to_string()))
    } else {
        let authority = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| CreditsError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| CreditsError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api/v3");
        Ok(api_url)
    }
}

/// Derives the GitHub API base URL from a parsed URL.
fn derive_api_base(parsed: &Url) -> Result<Url, CreditsError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| CreditsError::InvalidUrl("URL must include a host".to_owned()))?;

    derive_api_base_from_host(parsed.scheme(), host, parsed.port())
}

/// Parsed repository reference with derived API base.
///
/// Every contribution query in a run is scoped to one locator; the locator is
/// immutable once parsed.
///
/// # Example
///
/// ```
/// use accolade::github::locator::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_owner_repo("acme", "widget")
///     .expect("should create locator");
/// assert_eq!(locator.owner().as_str(), "acme");
/// assert_eq!(locator.repository().as_str(), "widget");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator from owner and repository name strings.
    ///
    /// Uses `github.com` as the default host.
    ///
    /// # Errors
    ///
    /// Returns `CreditsError::InvalidOwner` or
    /// `CreditsError::InvalidRepositoryName` when a segment fails validation.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, CreditsError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let api_base = Url::parse("https://api.github.com")
            .map_err(|error| CreditsError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base,
            owner: validated_owner,
            repository,
        })
    }

    /// Parses a GitHub repository URL in the form
    /// `https://github.com/<owner>/<repo>`.
    ///
    /// # Errors
    ///
    /// Returns `CreditsError::InvalidUrl` when parsing fails, or an owner or
    /// name validation error when a path segment is malformed.
    pub fn parse(input: &str) -> Result<Self, CreditsError> {
        let parsed =
            Url::parse(input).map_err(|error| CreditsError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or_else(|| CreditsError::InvalidUrl("URL has no path".to_owned()))?;

        let owner_segment = segments
            .next()
            .ok_or_else(|| CreditsError::InvalidUrl("URL must include an owner".to_owned()))?;
        let repository_segment = segments
            .next()
            .ok_or_else(|| CreditsError::InvalidUrl("URL must include a repository".to_owned()))?;

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let api_base = derive_api_base(&parsed)?;

        Ok(Self {
            api_base,
            owner,
            repository,
        })
    }

    /// Creates a repository locator from a discovered GitHub origin.
    ///
    /// For standard `github.com` origins, uses the public API base. For GitHub
    /// Enterprise origins, derives the API base from the host and port.
    ///
    /// # Errors
    ///
    /// Returns `CreditsError::InvalidOwner` or
    /// `CreditsError::InvalidRepositoryName` if a segment is malformed, or
    /// `CreditsError::InvalidUrl` if the URL cannot be built.
    pub fn from_github_origin(origin: &GitHubOrigin) -> Result<Self, CreditsError> {
        match origin {
            GitHubOrigin::GitHubCom { owner, repository } => {
                Self::from_owner_repo(owner, repository)
            }
            GitHubOrigin::Enterprise {
                host,
                port,
                owner,
                repository,
            } => {
                let url = port.map_or_else(
                    || format!("https://{host}/{owner}/{repository}"),
                    |value| format!("https://{host}:{value}/{owner}/{repository}"),
                );
                Self::parse(&url)
            }
        }
    }

    /// API base URL derived from the repository host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Returns the API path for listing issues and pull requests.
    pub(crate) fn issues_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// Returns the API path for listing repository-wide issue comments.
    pub(crate) fn issue_comments_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/comments",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// Returns the API path for listing repository-wide review comments.
    pub(crate) fn review_comments_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/comments",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// Returns the API path for listing reviews on one pull request.
    pub(crate) fn reviews_path(&self, pull_number: u64) -> String {
        format!(
            "/repos/{}/{}/pulls/{}/reviews",
            self.owner.as_str(),
            self.repository.as_str(),
            pull_number
        )
    }
}
