use serde::{Deserialize, Serialize};

use crate::ids::ClipId;

/// Characters of clip text shown in a menu row before truncation.
pub const PREVIEW_MAX_CHARS: usize = 70;

/// A single captured selection.
///
/// The stored fields are fixed at capture time. The presentation strings
/// are derived fresh on each access so they always reflect the stored
/// fields and nothing can mutate them from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    id: ClipId,
    text: String,
    filename: String,
    language: String,
}

impl Clip {
    /// Builds a clip from a selection's text plus the source document's
    /// file name and language id. Any strings are valid, including empty
    /// ones; construction cannot fail.
    pub fn new(
        text: impl Into<String>,
        filename: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: ClipId::new(),
            text: text.into(),
            filename: filename.into(),
            language: language.into(),
        }
    }

    pub fn id(&self) -> &ClipId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Single-line menu label: newlines and carriage returns flattened to
    /// spaces, trimmed, cut at [`PREVIEW_MAX_CHARS`] characters. `...` is
    /// appended when the full text runs past the cut.
    pub fn preview_label(&self) -> String {
        let flat = self.text.replace(['\n', '\r'], " ");
        let mut label: String = flat.trim().chars().take(PREVIEW_MAX_CHARS).collect();
        if self.text.chars().count() > PREVIEW_MAX_CHARS {
            label.push_str("...");
        }
        label
    }

    /// Upper-cased language id, the menu row's secondary text.
    pub fn language_tag(&self) -> String {
        self.language.to_uppercase()
    }

    /// Source file path verbatim, the menu row's detail text.
    pub fn detail_line(&self) -> &str {
        &self.filename
    }
}
