//! Git remote URL parsing with GitHub origin detection.
//!
//! This module handles parsing of the Git remote URL formats that identify a
//! GitHub repository, extracting the owner and repository name that every
//! contribution query is scoped to.

use super::error::LocalDiscoveryError;

/// Represents a parsed GitHub origin with owner and repository.
///
/// Distinguishes between standard `github.com` repositories and GitHub
/// Enterprise installations on custom hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubOrigin {
    /// Standard `github.com` repository.
    GitHubCom {
        /// Repository owner (user or organisation).
        owner: String,
        /// Repository name.
        repository: String,
    },
    /// GitHub Enterprise repository on a custom host.
    Enterprise {
        /// The GitHub Enterprise host (e.g., `ghe.example.com`).
        host: String,
        /// Optional port number for non-default HTTPS ports.
        port: Option<u16>,
        /// Repository owner (user or organisation).
        owner: String,
        /// Repository name.
        repository: String,
    },
}

impl GitHubOrigin {
    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        match self {
            Self::GitHubCom { owner, .. } | Self::Enterprise { owner, .. } => owner,
        }
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::GitHubCom { repository, .. } | Self::Enterprise { repository, .. } => repository,
        }
    }

    /// Returns the host for this origin.
    #[must_use]
    pub fn host(&self) -> &str {
        match self {
            Self::GitHubCom { .. } => "github.com",
            Self::Enterprise { host, .. } => host,
        }
    }

    /// Returns true if this is a standard `github.com` origin.
    #[must_use]
    pub const fn is_github_com(&self) -> bool {
        matches!(self, Self::GitHubCom { .. })
    }
}

/// Returns true when every character is valid in a repository owner.
///
/// Owners are restricted to alphanumerics and underscores.
pub(crate) fn is_valid_owner(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || character == '_')
}

/// Returns true when every character is valid in a repository name.
///
/// Names are restricted to alphanumerics, hyphens, and underscores.
pub(crate) fn is_valid_repository_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || character == '-' || character == '_')
}

/// Parses a Git remote URL and extracts GitHub origin information.
///
/// Parsing attempts, in order:
/// 1. SCP/SSH-style: `git@github.com:owner/repo.git` (the `user@` prefix is
///    optional)
/// 2. URL-style: `https://github.com/owner/repo.git`, `ssh://git@host/owner/repo`
///
/// The `.git` suffix is optional and stripped if present. Owner segments are
/// restricted to alphanumerics and underscores, names additionally allow
/// hyphens; anything else fails to parse.
///
/// # Errors
///
/// Returns `LocalDiscoveryError::InvalidRemoteUrl` if the URL matches neither
/// pattern. Never panics on malformed input.
pub fn parse_github_remote(url: &str) -> Result<GitHubOrigin, LocalDiscoveryError> {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return Err(LocalDiscoveryError::InvalidRemoteUrl {
            url: url.to_owned(),
        });
    }

    if let Some(origin) = try_parse_scp_style(trimmed) {
        return Ok(origin);
    }

    if let Some(origin) = try_parse_url_style(trimmed) {
        return Ok(origin);
    }

    Err(LocalDiscoveryError::InvalidRemoteUrl {
        url: url.to_owned(),
    })
}

/// Attempts to parse an SCP-style SSH URL: `[user@]host:owner/repo.git`.
///
/// SCP-style URLs do not support port numbers, so port is always `None`.
fn try_parse_scp_style(url: &str) -> Option<GitHubOrigin> {
    let colon_pos = url.find(':')?;

    // A :// marks a URL-style remote, not an SCP-style one.
    if url.get(colon_pos..colon_pos.saturating_add(3)) == Some("://") {
        return None;
    }

    let authority = url.get(..colon_pos)?;
    let path = url.get(colon_pos.saturating_add(1)..)?;

    // The user@ prefix is optional in SCP syntax.
    let host = authority
        .split_once('@')
        .map_or(authority, |(_, host)| host);

    if host.is_empty() {
        return None;
    }

    extract_owner_repo_from_path(host, None, path)
}

/// Attempts to parse a URL-style remote: `https://host/owner/repo.git`.
fn try_parse_url_style(url: &str) -> Option<GitHubOrigin> {
    let parsed = url::Url::parse(url).ok()?;

    let host = parsed.host_str()?;
    let port = parsed.port();
    let path_stripped = parsed.path().strip_prefix('/')?;

    extract_owner_repo_from_path(host, port, path_stripped)
}

/// Extracts owner and repository from a path like `owner/repo.git`.
fn extract_owner_repo_from_path(
    host: &str,
    port: Option<u16>,
    raw_path: &str,
) -> Option<GitHubOrigin> {
    let trimmed_path = raw_path.trim_matches('/');

    if trimmed_path.is_empty() {
        return None;
    }

    let mut parts = trimmed_path.split('/');
    let owner_segment = parts.next()?;
    let repo_with_suffix = parts.next()?;

    // Only owner/repo is accepted; a trailing slash leaves one empty part.
    let extra = parts.next();
    if extra.is_some_and(|segment| !segment.is_empty()) {
        return None;
    }

    let repo_name = repo_with_suffix
        .strip_suffix(".git")
        .unwrap_or(repo_with_suffix);

    if !is_valid_owner(owner_segment) || !is_valid_repository_name(repo_name) {
        return None;
    }

    let owner = owner_segment.to_owned();
    let repository = repo_name.to_owned();

    if host.eq_ignore_ascii_case("github.com") {
        Some(GitHubOrigin::GitHubCom { owner, repository })
    } else {
        Some(GitHubOrigin::Enterprise {
            host: host.to_owned(),
            port,
            owner,
            repository,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{GitHubOrigin, parse_github_remote};
    use crate::local::error::LocalDiscoveryError;

    #[rstest]
    #[case::scp_with_git_suffix("git@github.com:acme/widget.git", "acme", "widget")]
    #[case::scp_without_suffix("git@github.com:acme/widget", "acme", "widget")]
    #[case::scp_without_user("github.com:acme/widget.git", "acme", "widget")]
    #[case::https_with_git_suffix("https://github.com/acme/widget.git", "acme", "widget")]
    #[case::https_without_suffix("https://github.com/acme/widget", "acme", "widget")]
    #[case::https_trailing_slash("https://github.com/acme/widget/", "acme", "widget")]
    #[case::hyphenated_name("git@github.com:acme/widget_kit-2.git", "acme", "widget_kit-2")]
    fn parses_github_com_remotes(
        #[case] url: &str,
        #[case] owner: &str,
        #[case] repository: &str,
    ) {
        let origin = parse_github_remote(url).expect("URL should parse");
        assert!(origin.is_github_com(), "expected github.com origin");
        assert_eq!(origin.owner(), owner);
        assert_eq!(origin.repository(), repository);
    }

    #[test]
    fn parses_enterprise_remote_with_port() {
        let origin = parse_github_remote("https://ghe.example.com:8443/team/tool.git")
            .expect("URL should parse");
        match origin {
            GitHubOrigin::Enterprise {
                host,
                port,
                owner,
                repository,
            } => {
                assert_eq!(host, "ghe.example.com");
                assert_eq!(port, Some(8443));
                assert_eq!(owner, "team");
                assert_eq!(repository, "tool");
            }
            GitHubOrigin::GitHubCom { .. } => panic!("expected Enterprise origin"),
        }
    }

    #[test]
    fn parses_ssh_protocol_remote() {
        let origin = parse_github_remote("ssh://git@ghe.example.com/team/tool.git")
            .expect("URL should parse");
        assert_eq!(origin.host(), "ghe.example.com");
        assert_eq!(origin.owner(), "team");
        assert_eq!(origin.repository(), "tool");
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    #[case::no_path("git@github.com")]
    #[case::missing_repo("git@github.com:acme")]
    #[case::extra_segments("https://github.com/acme/widget/tree/main")]
    #[case::hyphenated_owner("git@github.com:my-org/widget.git")]
    #[case::invalid_owner_chars("git@github.com:ac.me/widget.git")]
    #[case::invalid_name_chars("git@github.com:acme/wid%get.git")]
    #[case::not_a_url("just some text")]
    fn rejects_unparseable_remotes(#[case] url: &str) {
        let error = parse_github_remote(url).expect_err("URL should not parse");
        assert!(
            matches!(error, LocalDiscoveryError::InvalidRemoteUrl { .. }),
            "expected InvalidRemoteUrl, got {error:?}"
        );
    }

    #[test]
    fn preserves_owner_casing() {
        let origin =
            parse_github_remote("git@github.com:AcmeCo/Widget.git").expect("URL should parse");
        assert_eq!(origin.owner(), "AcmeCo");
        assert_eq!(origin.repository(), "Widget");
    }
}
