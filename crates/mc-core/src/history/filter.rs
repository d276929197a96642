use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::editor::DocumentMeta;

/// Which slice of the history a browse menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Every clip, oldest first.
    All,
    /// Clips whose language matches the active document's language id.
    Language,
    /// Clips whose filename matches the active document's path.
    File,
}

/// Picks the clips `mode` admits against the active document.
///
/// Pure view selection: comparison is case-insensitive, insertion order is
/// preserved, and the history itself is never touched.
pub fn filter_clips<'a>(
    clips: &'a [Clip],
    mode: FilterMode,
    document: &DocumentMeta,
) -> Vec<&'a Clip> {
    match mode {
        FilterMode::All => clips.iter().collect(),
        FilterMode::File => {
            let wanted = document.file_name.to_lowercase();
            clips
                .iter()
                .filter(|clip| clip.filename().to_lowercase() == wanted)
                .collect()
        }
        FilterMode::Language => {
            let wanted = document.language_id.to_lowercase();
            clips
                .iter()
                .filter(|clip| clip.language().to_lowercase() == wanted)
                .collect()
        }
    }
}
