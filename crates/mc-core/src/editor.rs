use serde::{Deserialize, Serialize};

/// Metadata of the document backing an editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Absolute path of the document.
    pub file_name: String,
    /// Short language identifier, e.g. `rust` or `typescript`.
    pub language_id: String,
}

/// Snapshot of the focused editor at the moment an operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorContext {
    pub document: DocumentMeta,
    /// Text of each disjoint selection, in selection order. An empty
    /// (caret-only) selection contributes an empty string.
    pub selections: Vec<String>,
}
