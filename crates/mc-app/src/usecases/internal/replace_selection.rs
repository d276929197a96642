use anyhow::Result;

use mc_core::ports::EditorPort;

/// Two-step edit shared by every paste path: drop the selected range,
/// then insert at the collapsed caret. A failed delete abandons the
/// insert; whatever the host already applied stays as-is, with no retry
/// and no rollback.
pub(crate) async fn replace_selection(editor: &dyn EditorPort, text: &str) -> Result<()> {
    editor.delete_selection().await?;
    editor.insert_at_cursor(text).await?;
    Ok(())
}
