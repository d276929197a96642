use super::model::*;

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            slots: DEFAULT_PASTE_SLOTS,
        }
    }
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            placeholder: "Select your clip to copy!".to_string(),
            match_on_description: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paste: PasteSettings::default(),
            menu: MenuSettings::default(),
        }
    }
}
