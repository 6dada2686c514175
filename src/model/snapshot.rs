//! Watched-state snapshot.

use crate::model::{AspectRatio, FilmstripState};

/// Read-only snapshot of the external state the viewport depends on.
///
/// Compared by value: any field difference counts as a watched-state
/// change and triggers recomputation. Callers extract these fields from
/// their own application state and pass them in; nothing here reads
/// ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutSnapshot {
    /// Current orientation mode.
    pub aspect_ratio: AspectRatio,

    /// Filmstrip feature state.
    pub filmstrip: FilmstripState,

    /// Whether the toolbox control bar is displayed.
    pub toolbox_visible: bool,
}

impl LayoutSnapshot {
    /// Create a snapshot from the three watched fields.
    pub fn new(
        aspect_ratio: AspectRatio,
        filmstrip: FilmstripState,
        toolbox_visible: bool,
    ) -> Self {
        Self {
            aspect_ratio,
            filmstrip,
            toolbox_visible,
        }
    }
}
