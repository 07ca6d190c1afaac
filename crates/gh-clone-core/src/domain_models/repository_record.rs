//! Repository record model
//!
//! One remote repository as perceived by this system. Identity across
//! fetches is the `(owner id, name)` pair, never reference identity and
//! never the remaining fields.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Opaque avatar image reference.
///
/// The default value is the empty reference, used when avatar resolution
/// fails: a missing picture never fails list population.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarImage(String);

impl AvatarImage {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn reference(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The account owning a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Stable account id from the remote host
    pub id: u64,
    /// Display/login name
    pub login: String,
    /// Resolved avatar reference
    pub avatar: AvatarImage,
}

impl AccountSummary {
    pub fn new(id: u64, login: impl Into<String>, avatar: AvatarImage) -> Self {
        Self {
            id,
            login: login.into(),
            avatar,
        }
    }
}

/// A remote repository the user may clone.
///
/// Immutable once constructed. `name` is the display and match key for
/// filtering (compared case-insensitively there); `clone_url` is opaque to
/// the core and passed through to the clone delegate verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub clone_url: String,
    pub owner: AccountSummary,
}

impl RepositoryRecord {
    pub fn new(
        name: impl Into<String>,
        clone_url: impl Into<String>,
        owner: AccountSummary,
    ) -> Self {
        Self {
            name: name.into(),
            clone_url: clone_url.into(),
            owner,
        }
    }

    /// Display name in the usual `owner/name` form.
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

// Identity is (owner id, name): two records from different fetches are the
// same repository even when clone URL or avatar differ.
impl PartialEq for RepositoryRecord {
    fn eq(&self, other: &Self) -> bool {
        self.owner.id == other.owner.id && self.name == other.name
    }
}

impl Eq for RepositoryRecord {}

impl Hash for RepositoryRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.id.hash(state);
        self.name.hash(state);
    }
}
