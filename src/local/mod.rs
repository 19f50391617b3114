//! Local Git repository discovery and remote URL parsing.
//!
//! This module resolves the repository the credits run targets: it locates the
//! enclosing Git repository, reads the configured remote, and parses the
//! remote URL into a GitHub origin.

pub mod discovery;
pub mod error;
pub mod remote;

pub use discovery::{
    DEFAULT_REMOTE_NAME, LocalRepository, discover_repository, discover_repository_with_remote,
};
pub use error::LocalDiscoveryError;
pub use remote::{GitHubOrigin, parse_github_remote};
