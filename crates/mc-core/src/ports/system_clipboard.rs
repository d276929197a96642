//! System clipboard port - the host's native copy/cut/paste actions.

use anyhow::Result;
use async_trait::async_trait;

/// Invokes the host's own clipboard commands, keeping the single-slot
/// system clipboard in step with the history.
#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    async fn native_copy(&self) -> Result<()>;
    async fn native_cut(&self) -> Result<()>;
    async fn native_paste(&self) -> Result<()>;
}
