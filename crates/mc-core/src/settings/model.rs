use serde::{Deserialize, Serialize};

/// Slot commands are generated for `1..=slots` unless configured.
pub const DEFAULT_PASTE_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteSettings {
    /// How many numbered paste-slot commands the host binds.
    pub slots: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    /// Prompt shown while the history picker is open.
    pub placeholder: String,

    /// Whether typed text also matches the language tag column.
    pub match_on_description: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub paste: PasteSettings,

    #[serde(default)]
    pub menu: MenuSettings,
}
