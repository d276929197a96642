//! Editor port - abstracts the host's text buffer access.

use anyhow::Result;
use async_trait::async_trait;

use crate::editor::EditorContext;

/// Host text-editor surface.
///
/// Edits run as two independent steps against the focused editor; the
/// host may reject either step, and callers abandon the operation when it
/// does.
#[async_trait]
pub trait EditorPort: Send + Sync {
    /// Snapshot of the focused editor, or `None` when no editor is open.
    async fn active_context(&self) -> Result<Option<EditorContext>>;

    /// Deletes the current selection, collapsing it to a caret. Deleting
    /// an empty selection leaves the buffer alone and succeeds.
    async fn delete_selection(&self) -> Result<()>;

    /// Inserts text at the caret.
    async fn insert_at_cursor(&self, text: &str) -> Result<()>;
}
