//! # mc-core
//!
//! Core domain models and host ports for multiclip.
//!
//! This crate contains pure clipboard-history logic without any host
//! editor dependencies. The embedding editor implements the traits in
//! [`ports`]; everything else is plain data and pure functions.

pub mod clip;
pub mod editor;
pub mod history;
pub mod ids;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clip::Clip;
pub use editor::{DocumentMeta, EditorContext};
pub use history::{filter_clips, ClipHistory, FilterMode};
pub use ids::ClipId;
pub use settings::Settings;
