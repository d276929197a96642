pub mod browse_history;
pub mod capture_selection;
mod internal;
pub mod paste_from_slot;
pub mod remove_clip;

pub use browse_history::BrowseHistory;
pub use capture_selection::CaptureSelection;
pub use paste_from_slot::PasteFromSlot;
pub use remove_clip::RemoveClip;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mc_core::ClipHistory;

/// Warning shown when capture runs without an active editor.
pub const NO_EDITOR_WARNING: &str = "No editor is open!";

/// Status flashed after the history is cleared from a menu.
pub const CLEARED_STATUS: &str = "Clipboard cleared!";

/// Shared handle to the session's clip history.
///
/// The lock is only ever taken for short synchronous sections and never
/// held across an await, so a pending menu cannot block captures or
/// pastes.
pub type SharedHistory = Arc<Mutex<ClipHistory>>;

pub(crate) fn lock(history: &SharedHistory) -> MutexGuard<'_, ClipHistory> {
    history.lock().unwrap_or_else(PoisonError::into_inner)
}
