//! Picker port - abstracts the host's cancelable single-choice menu.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One selectable row: primary label, secondary label, optional detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub description: String,
    pub detail: Option<String>,
}

/// A menu to present, with host-side matching behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRequest {
    pub items: Vec<MenuItem>,
    pub placeholder: String,
    pub match_on_description: bool,
}

/// How the user resolved a pending menu.
///
/// Dismissal is an ordinary outcome, not an error: a cancelled menu must
/// leave history and document untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuOutcome {
    Chosen(usize),
    Cancelled,
}

#[async_trait]
pub trait MenuPort: Send + Sync {
    /// Presents the menu and suspends until the user picks a row or
    /// dismisses the menu. May stay pending indefinitely; other clipboard
    /// operations are free to run in the meantime.
    async fn pick(&self, request: MenuRequest) -> Result<MenuOutcome>;
}
