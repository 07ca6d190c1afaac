//! Clone delegate contract

use async_trait::async_trait;
use std::path::Path;

/// Performs the actual repository clone.
///
/// The core guarantees `destination_root` exists before this is called. The
/// delegate owns everything below that: target layout, transport, timeouts.
/// Failures are reported through the returned error; the core surfaces the
/// message verbatim as the command outcome.
#[async_trait]
pub trait RepositoryCloner: Send + Sync {
    async fn clone_repository(
        &self,
        clone_url: &str,
        name: &str,
        destination_root: &Path,
    ) -> anyhow::Result<()>;
}
