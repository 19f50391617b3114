//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.accolade.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ACCOLADE_TOKEN`, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--since`, `--exclude`, and friends

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::credits::aggregate::ExclusionList;
use crate::github::error::CreditsError;
use crate::github::locator::PersonalAccessToken;
use crate::github::since::SinceBound;
use crate::local::DEFAULT_REMOTE_NAME;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `ACCOLADE_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `ACCOLADE_SINCE` or `--since`: Lower bound on item update times
/// - `ACCOLADE_EXCLUDE` or `--exclude`: Comma-separated logins to drop
/// - `ACCOLADE_REMOTE` or `--remote`: Git remote to resolve (default `origin`)
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ACCOLADE",
    discovery(
        dotfile_name = ".accolade.toml",
        config_file_name = "accolade.toml",
        app_name = "accolade"
    )
)]
pub struct AccoladeConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Optional; without a token requests are made anonymously at GitHub's
    /// lower unauthenticated rate limit.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `ACCOLADE_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Date to query contributions from, as `YYYY-MM-DD` or RFC 3339.
    ///
    /// Can be provided via:
    /// - CLI: `--since <DATE>` or `-s <DATE>`
    /// - Environment: `ACCOLADE_SINCE`
    /// - Config file: `since = "..."`
    #[ortho_config(cli_short = 's')]
    pub since: Option<String>,

    /// Disables display name enrichment in the output.
    ///
    /// When set, credit lines are bare `@login` handles and no profile
    /// lookups are issued.
    ///
    /// Can be provided via:
    /// - CLI: `--no-full-name`
    /// - Config file: `no_full_name = true`
    ///
    /// Note: Environment variable `ACCOLADE_NO_FULL_NAME` is not supported
    /// because `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config()]
    pub no_full_name: bool,

    /// Comma-separated logins to exclude from the output.
    ///
    /// Can be provided via:
    /// - CLI: `--exclude <LOGINS>` or `-x <LOGINS>`
    /// - Environment: `ACCOLADE_EXCLUDE`
    /// - Config file: `exclude = "..."`
    #[ortho_config(cli_short = 'x')]
    pub exclude: Option<String>,

    /// Git remote whose URL identifies the repository (default `origin`).
    ///
    /// Can be provided via:
    /// - CLI: `--remote <NAME>` or `-r <NAME>`
    /// - Environment: `ACCOLADE_REMOTE`
    /// - Config file: `remote = "..."`
    #[ortho_config(cli_short = 'r')]
    pub remote: Option<String>,
}

impl AccoladeConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Blank values are treated as absent; an absent token selects an
    /// anonymous client rather than failing the run.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` mirrors the other accessors so the
    /// caller can use `?` uniformly.
    pub fn resolve_token(&self) -> Result<Option<PersonalAccessToken>, CreditsError> {
        self.token
            .clone()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| {
                env::var("GITHUB_TOKEN")
                    .ok()
                    .filter(|value| !value.trim().is_empty())
            })
            .map(PersonalAccessToken::new)
            .transpose()
    }

    /// Parses the configured since date into a canonical bound.
    ///
    /// An unset or blank value means no bound: no `since` key is sent at
    /// all, which GitHub treats differently from an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`CreditsError::InvalidSince`] when the value is present but
    /// unparseable.
    pub fn since_bound(&self) -> Result<Option<SinceBound>, CreditsError> {
        self.since
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(SinceBound::parse)
            .transpose()
    }

    /// Builds the exclusion list from the comma-separated specification.
    #[must_use]
    pub fn exclusions(&self) -> ExclusionList {
        ExclusionList::from_spec(self.exclude.as_deref().unwrap_or(""))
    }

    /// Returns the remote name to resolve, defaulting to `origin`.
    #[must_use]
    pub fn remote_name(&self) -> &str {
        self.remote
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_REMOTE_NAME)
    }

    /// Returns true when credit lines should carry resolved display names.
    #[must_use]
    pub const fn full_name(&self) -> bool {
        !self.no_full_name
    }
}
