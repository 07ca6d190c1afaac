//! Default clone path contract

/// Resolves the user's default clone root.
///
/// Called exactly once, at coordinator construction, to seed the
/// `base_repository_path` property. The user may overwrite the property at
/// any time before cloning.
pub trait ClonePathResolver: Send + Sync {
    fn resolve_default_clone_path(&self) -> Option<String>;
}
