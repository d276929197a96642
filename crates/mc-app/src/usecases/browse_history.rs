use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use mc_core::ports::{EditorPort, MenuPort, NotifierPort};
use mc_core::settings::MenuSettings;
use mc_core::{filter_clips, Clip, FilterMode};

use super::internal::{present_history_menu, replace_selection, HistoryChoice};
use super::{SharedHistory, CLEARED_STATUS};

/// Interactive browse-and-paste over the filtered history.
pub struct BrowseHistory {
    editor: Arc<dyn EditorPort>,
    menu: Arc<dyn MenuPort>,
    notifier: Arc<dyn NotifierPort>,
    history: SharedHistory,
    menu_settings: MenuSettings,
}

impl BrowseHistory {
    pub fn from_ports(
        editor: Arc<dyn EditorPort>,
        menu: Arc<dyn MenuPort>,
        notifier: Arc<dyn NotifierPort>,
        history: SharedHistory,
        menu_settings: MenuSettings,
    ) -> Self {
        Self {
            editor,
            menu,
            notifier,
            history,
            menu_settings,
        }
    }

    /// Offers the clips `mode` admits (plus the clear row) and pastes the
    /// chosen clip over the current selection. Dismissal changes nothing.
    /// The clear row empties the whole history, not just the filtered
    /// view.
    #[tracing::instrument(name = "usecase.browse_history.execute", skip(self))]
    pub async fn execute(&self, mode: FilterMode) -> Result<()> {
        // Filtering needs the active document, and a paste needs a cursor;
        // with no editor open there is nothing to offer against.
        let Some(context) = self.editor.active_context().await? else {
            debug!("no active editor, nothing to browse against");
            return Ok(());
        };

        let offered: Vec<Clip> = {
            let history = super::lock(&self.history);
            filter_clips(history.clips(), mode, &context.document)
                .into_iter()
                .cloned()
                .collect()
        };

        match present_history_menu(self.menu.as_ref(), offered, &self.menu_settings).await? {
            None => {
                debug!("menu dismissed");
                Ok(())
            }
            Some(HistoryChoice::Clip(clip)) => {
                info!(clip_id = %clip.id(), "pasting clip from history");
                replace_selection(self.editor.as_ref(), clip.text()).await
            }
            Some(HistoryChoice::ClearAll) => {
                super::lock(&self.history).clear();
                info!("history cleared from browse menu");
                self.notifier.status(CLEARED_STATUS).await
            }
        }
    }
}
