use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use mc_core::ports::EditorPort;

use super::internal::replace_selection;
use super::SharedHistory;

/// Pastes the clip held in a numbered slot over the current selection.
pub struct PasteFromSlot {
    editor: Arc<dyn EditorPort>,
    history: SharedHistory,
}

impl PasteFromSlot {
    pub fn from_ports(editor: Arc<dyn EditorPort>, history: SharedHistory) -> Self {
        Self { editor, history }
    }

    /// Slot `n` is 1-based over the unfiltered history: slot 1 holds the
    /// oldest clip. A slot with no clip behind it (slot 0 included) is a
    /// silent no-op and performs no edit.
    #[tracing::instrument(name = "usecase.paste_from_slot.execute", skip(self))]
    pub async fn execute(&self, slot: usize) -> Result<()> {
        let Some(index) = slot.checked_sub(1) else {
            return Ok(());
        };

        let text = {
            let history = super::lock(&self.history);
            history.get(index).map(|clip| clip.text().to_string())
        };

        match text {
            Some(text) => replace_selection(self.editor.as_ref(), &text).await,
            None => {
                debug!(slot, "no clip in slot");
                Ok(())
            }
        }
    }
}
