//! Session facade: owns the history and routes commands to use cases.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use mc_core::ports::SystemClipboardPort;
use mc_core::{ClipHistory, FilterMode};

use crate::commands::Command;
use crate::deps::HostDeps;
use crate::usecases::{
    BrowseHistory, CaptureSelection, PasteFromSlot, RemoveClip, SharedHistory,
};

/// One controller per editing session.
///
/// Sole owner of the clip history; every mutation funnels through the use
/// cases wired here, and the history dies with the session.
pub struct Controller {
    capture: CaptureSelection,
    paste_slot: PasteFromSlot,
    browse: BrowseHistory,
    remove: RemoveClip,
    system_clipboard: Arc<dyn SystemClipboardPort>,
    history: SharedHistory,
}

impl Controller {
    pub fn new(deps: HostDeps) -> Self {
        let HostDeps {
            editor,
            menu,
            system_clipboard,
            notifier,
            settings,
        } = deps;
        let history: SharedHistory = Arc::new(Mutex::new(ClipHistory::new()));

        Self {
            capture: CaptureSelection::from_ports(
                editor.clone(),
                notifier.clone(),
                history.clone(),
            ),
            paste_slot: PasteFromSlot::from_ports(editor.clone(), history.clone()),
            browse: BrowseHistory::from_ports(
                editor,
                menu.clone(),
                notifier.clone(),
                history.clone(),
                settings.menu.clone(),
            ),
            remove: RemoveClip::from_ports(menu, notifier, history.clone(), settings.menu),
            system_clipboard,
            history,
        }
    }

    /// Routes a bound command. Copy, cut and the slot pastes chain the
    /// host's native clipboard action after the history work, mirroring
    /// the stock commands they wrap.
    pub async fn dispatch(&self, command: Command) -> Result<()> {
        match command {
            Command::Copy => {
                self.capture.execute().await?;
                self.system_clipboard.native_copy().await
            }
            Command::Cut => {
                self.capture.execute().await?;
                self.system_clipboard.native_cut().await
            }
            Command::PasteSlot(slot) => {
                self.paste_slot.execute(slot).await?;
                self.system_clipboard.native_paste().await
            }
            Command::ShowHistory => self.browse.execute(FilterMode::All).await,
            Command::ShowHistoryByLanguage => self.browse.execute(FilterMode::Language).await,
            Command::ShowHistoryByFile => self.browse.execute(FilterMode::File).await,
            Command::RemoveClip => self.remove.execute().await,
        }
    }

    /// Number of clips currently held.
    pub fn clip_count(&self) -> usize {
        crate::usecases::lock(&self.history).len()
    }
}
