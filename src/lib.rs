//! Accolade library crate for generating contributor credit lines.
//!
//! The library discovers the local repository's GitHub origin, pages
//! exhaustively through its closed issues, comments, and reviews via
//! Octocrab, classifies contribution roles, and renders a single ordered,
//! deduplicated line of credits suitable for release notes.

pub mod config;
pub mod credits;
pub mod github;
pub mod local;

pub use config::AccoladeConfig;
pub use credits::{
    ContributorSet, CreditsEngine, ExclusionList, credit_line, render_credits,
    resolve_display_names,
};
pub use github::{
    CreditsError, OctocrabContributionGateway, OctocrabProfileGateway, PersonalAccessToken,
    RepositoryLocator, SinceBound,
};
pub use local::{GitHubOrigin, LocalRepository, discover_repository_with_remote};
