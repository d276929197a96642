use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use mc_core::ports::{EditorPort, NotifierPort};
use mc_core::Clip;

use super::{SharedHistory, NO_EDITOR_WARNING};

/// Records the active editor's selections into the history, one clip per
/// disjoint selection, in selection order.
pub struct CaptureSelection {
    editor: Arc<dyn EditorPort>,
    notifier: Arc<dyn NotifierPort>,
    history: SharedHistory,
}

impl CaptureSelection {
    pub fn from_ports(
        editor: Arc<dyn EditorPort>,
        notifier: Arc<dyn NotifierPort>,
        history: SharedHistory,
    ) -> Self {
        Self {
            editor,
            notifier,
            history,
        }
    }

    /// Captures every current selection verbatim, empty selections
    /// included. Without an active editor this warns the user and leaves
    /// the history untouched; that is a reported condition, not an error.
    #[tracing::instrument(name = "usecase.capture_selection.execute", skip(self))]
    pub async fn execute(&self) -> Result<()> {
        let Some(context) = self.editor.active_context().await? else {
            self.notifier.warn(NO_EDITOR_WARNING).await?;
            return Ok(());
        };

        let clips: Vec<Clip> = context
            .selections
            .iter()
            .map(|text| {
                Clip::new(
                    text.clone(),
                    context.document.file_name.clone(),
                    context.document.language_id.clone(),
                )
            })
            .collect();

        let mut history = super::lock(&self.history);
        for clip in clips {
            debug!(clip_id = %clip.id(), "captured selection");
            history.add(clip);
        }
        info!(total = history.len(), "capture complete");
        Ok(())
    }
}
