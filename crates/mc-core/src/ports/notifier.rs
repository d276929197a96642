use anyhow::Result;
use async_trait::async_trait;

/// Transient user-facing messages surfaced by the host.
#[async_trait]
pub trait NotifierPort: Send + Sync {
    /// Short-lived status line, e.g. in a status bar.
    async fn status(&self, message: &str) -> Result<()>;

    /// Warning the user should notice.
    async fn warn(&self, message: &str) -> Result<()>;
}
