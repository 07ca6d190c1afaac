//! Repository fetch contract
//!
//! The fetch collaborator emits the user's repositories as a lazy sequence
//! of pages. The coordinator consumes the first emitted page only and drops
//! the stream; honoring that rule is the core's job, not the fetcher's.

use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

/// One repository as emitted by the fetch collaborator, before conversion
/// to a [`crate::domain_models::RepositoryRecord`]. Kept separate from the
/// domain model so the wire shape can evolve without touching the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub clone_url: String,
    pub owner: RawAccount,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The owning account as emitted by the fetch collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAccount {
    pub id: u64,
    pub login: String,
    pub avatar_url: Option<String>,
}

/// Fetches the authenticated user's repositories.
///
/// Implementations must be `Send + Sync`: the stream is consumed from a
/// spawned task. Transport or auth failures surface as an `Err` item; an
/// exhausted stream with no items at all is treated by the coordinator as a
/// failed fetch.
pub trait RepositoryFetcher: Send + Sync {
    /// Lazily emit pages of repositories.
    fn fetch_user_repositories(&self) -> BoxStream<'static, anyhow::Result<Vec<RawRepository>>>;
}
