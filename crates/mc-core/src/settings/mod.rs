//! User-tunable configuration, TOML on disk.

mod defaults;
mod model;

pub use model::{MenuSettings, PasteSettings, Settings, DEFAULT_PASTE_SLOTS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Settings {
    /// Parses settings from TOML text. Absent sections and fields fall
    /// back to their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(raw)?)
    }
}
