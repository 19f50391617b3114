//! Contributor aggregation, enrichment, and rendering.
//!
//! The engine walks a repository's closed issues, reviews, and comments,
//! classifies each login's contribution roles, and produces the ordered
//! credit line used in release notes.

pub mod aggregate;
pub mod engine;
pub mod render;
pub mod resolve;

pub use aggregate::{ContributorSet, ExclusionList, collect_contributors};
pub use engine::CreditsEngine;
pub use render::{credit_line, render_credits};
pub use resolve::{ResolvedContributor, resolve_display_names};
