//! Default clone path resolution
//!
//! Resolves where clones land when the user has not picked a base path:
//! the configured `clone_root` when present, otherwise `<home>/github`.

use gh_clone_core::ClonePathResolver;

use crate::config::AppConfig;

pub struct ConfigClonePathResolver {
    config: AppConfig,
}

impl ConfigClonePathResolver {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl ClonePathResolver for ConfigClonePathResolver {
    fn resolve_default_clone_path(&self) -> Option<String> {
        if let Some(root) = &self.config.clone_root {
            return Some(root.clone());
        }
        dirs::home_dir().map(|home| home.join("github").to_string_lossy().into_owned())
    }
}
