//! Application configuration
//!
//! Configuration loaded from a `.gh-clone.toml` file, searched in the
//! current working directory first and the home directory second. Every
//! field has a default, so a missing or partial file is never an error.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_FILE: &str = ".gh-clone.toml";

/// Configuration for the gh-clone collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory repositories are cloned into. When unset, the path
    /// resolver falls back to `<home>/github`.
    #[serde(default)]
    pub clone_root: Option<String>,

    /// Quiet interval for the filter box, in milliseconds.
    #[serde(default = "default_filter_debounce_ms")]
    pub filter_debounce_ms: u64,
}

fn default_filter_debounce_ms() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clone_root: None,
            filter_debounce_ms: default_filter_debounce_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    pub fn load() -> Self {
        if let Some(content) = load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// The configured debounce interval as a `Duration`.
    pub fn quiet_interval(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }
}

/// Candidate config file locations, in priority order.
fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(CONFIG_FILE));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    candidates
}

fn load_config_file() -> Option<String> {
    for path in config_file_candidates() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Read config from {}", path.display());
            return Some(content);
        }
    }
    None
}
