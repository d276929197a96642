mod filter;

pub use filter::{filter_clips, FilterMode};

use crate::clip::Clip;
use crate::ids::ClipId;

/// Ordered clip history, oldest first.
///
/// The sequence grows only through [`add`](Self::add) and shrinks only
/// through [`remove`](Self::remove) or [`clear`](Self::clear). There is no
/// capacity bound and nothing is evicted implicitly.
#[derive(Debug, Default)]
pub struct ClipHistory {
    clips: Vec<Clip>,
}

impl ClipHistory {
    pub fn new() -> Self {
        Self { clips: Vec::new() }
    }

    /// Appends a clip at the newest end.
    pub fn add(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    /// Removes the first clip carrying the given id and returns it.
    /// An absent id is a no-op.
    pub fn remove(&mut self, id: &ClipId) -> Option<Clip> {
        let index = self.clips.iter().position(|clip| clip.id() == id)?;
        Some(self.clips.remove(index))
    }

    /// All clips, oldest first.
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    /// Positional lookup, zero-based from the oldest clip.
    pub fn get(&self, index: usize) -> Option<&Clip> {
        self.clips.get(index)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Drops every clip. Safe to call on an already empty history.
    pub fn clear(&mut self) {
        self.clips.clear();
    }
}
