//! Dependency grouping for controller construction.
//!
//! Not a builder - just parameter packing. Every port is required; there
//! are no defaults and no hidden wiring.

use std::sync::Arc;

use mc_core::ports::{EditorPort, MenuPort, NotifierPort, SystemClipboardPort};
use mc_core::Settings;

pub struct HostDeps {
    pub editor: Arc<dyn EditorPort>,
    pub menu: Arc<dyn MenuPort>,
    pub system_clipboard: Arc<dyn SystemClipboardPort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub settings: Settings,
}
