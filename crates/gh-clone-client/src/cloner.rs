//! Git clone delegate
//!
//! Implements the core's `RepositoryCloner` contract by shelling out to
//! `git clone`. The destination root is guaranteed to exist by the caller;
//! this delegate clones into `<destination_root>/<name>` and reports any
//! failure with the subprocess's stderr attached.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::Context;
use async_trait::async_trait;
use gh_clone_core::RepositoryCloner;
use log::info;
use tokio::process::Command;

/// Subprocess-based clone delegate.
pub struct GitCloner {
    git_binary: String,
}

impl GitCloner {
    pub fn new() -> Self {
        Self::with_binary("git")
    }

    /// Use a specific binary instead of `git` from `PATH`.
    pub fn with_binary(git_binary: impl Into<String>) -> Self {
        Self {
            git_binary: git_binary.into(),
        }
    }
}

impl Default for GitCloner {
    fn default() -> Self {
        Self::new()
    }
}

/// Target directory for one clone.
fn target_path(destination_root: &Path, name: &str) -> PathBuf {
    destination_root.join(name)
}

#[async_trait]
impl RepositoryCloner for GitCloner {
    async fn clone_repository(
        &self,
        clone_url: &str,
        name: &str,
        destination_root: &Path,
    ) -> anyhow::Result<()> {
        let target = target_path(destination_root, name);
        info!("Cloning {} into {}", clone_url, target.display());

        let output = Command::new(&self.git_binary)
            .arg("clone")
            .arg(clone_url)
            .arg(&target)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("failed to run {}", self.git_binary))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "git clone exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }
        Ok(())
    }
}
