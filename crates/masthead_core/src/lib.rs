//! Core domain logic for Masthead.
//! This crate is the single source of truth for the author/magazine/article
//! relationship invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::article::Article;
pub use model::author::Author;
pub use model::ids::{ArticleId, AuthorId, MagazineId};
pub use model::magazine::Magazine;
pub use model::validation::{ImmutableFieldError, ValidationError};
pub use repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository, RepoError, RepoResult};
pub use service::catalog_service::{CatalogError, CatalogResult, CatalogService};
pub use service::views::{AuthorView, MagazineView};

/// Minimal health-check API for smoke checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
