//! Collaborator implementations for the gh-clone repository picker
//!
//! `gh-clone-core` consumes its fetch/clone/path/avatar capabilities through
//! traits; this crate provides the production implementations:
//!
//! - [`OctocrabFetcher`]: the authenticated user's repositories from the
//!   GitHub API, emitted page by page.
//! - [`GitCloner`]: `git clone` via subprocess.
//! - [`ConfigClonePathResolver`]: default clone root from `.gh-clone.toml`,
//!   falling back to `<home>/github`.
//! - [`AvatarUrlResolver`]: avatar references as advertised by the API.
//!
//! Composition (building an `Octocrab` instance, assembling a
//! `Collaborators` value) is left to the embedding application.

pub mod avatar;
pub mod cloner;
pub mod config;
pub mod octocrab_fetcher;
pub mod paths;

pub use avatar::AvatarUrlResolver;
pub use cloner::GitCloner;
pub use config::AppConfig;
pub use octocrab_fetcher::OctocrabFetcher;
pub use paths::ConfigClonePathResolver;

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
