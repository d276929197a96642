use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use mc_core::ports::{MenuPort, NotifierPort};
use mc_core::settings::MenuSettings;
use mc_core::Clip;

use super::internal::{present_history_menu, HistoryChoice};
use super::{SharedHistory, CLEARED_STATUS};

/// Interactive removal over the unfiltered history. Nothing is pasted.
pub struct RemoveClip {
    menu: Arc<dyn MenuPort>,
    notifier: Arc<dyn NotifierPort>,
    history: SharedHistory,
    menu_settings: MenuSettings,
}

impl RemoveClip {
    pub fn from_ports(
        menu: Arc<dyn MenuPort>,
        notifier: Arc<dyn NotifierPort>,
        history: SharedHistory,
        menu_settings: MenuSettings,
    ) -> Self {
        Self {
            menu,
            notifier,
            history,
            menu_settings,
        }
    }

    /// Offers every clip and removes exactly the chosen one, by id, so a
    /// clip whose fields match another entry's never takes the other down
    /// with it. The clear row and dismissal behave as in browsing.
    #[tracing::instrument(name = "usecase.remove_clip.execute", skip(self))]
    pub async fn execute(&self) -> Result<()> {
        let offered: Vec<Clip> = super::lock(&self.history).clips().to_vec();

        match present_history_menu(self.menu.as_ref(), offered, &self.menu_settings).await? {
            None => {
                debug!("menu dismissed");
                Ok(())
            }
            Some(HistoryChoice::Clip(clip)) => {
                // The clip may already be gone if the history was cleared
                // while the menu was pending; removal is a no-op then.
                let removed = super::lock(&self.history).remove(clip.id());
                info!(clip_id = %clip.id(), removed = removed.is_some(), "removed clip");
                Ok(())
            }
            Some(HistoryChoice::ClearAll) => {
                super::lock(&self.history).clear();
                info!("history cleared from remove menu");
                self.notifier.status(CLEARED_STATUS).await
            }
        }
    }
}
