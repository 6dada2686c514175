//! Filmstrip feature state.

/// External filmstrip feature state as observed from the client.
///
/// Visibility is derived, not stored: whether the strip is actually shown
/// depends on both the feature flag and the conference population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilmstripState {
    /// Whether the filmstrip feature is switched on.
    pub enabled: bool,

    /// Number of participants in the conference, local participant
    /// included.
    pub participant_count: usize,
}

impl FilmstripState {
    /// Create filmstrip state from the feature flag and participant count.
    pub fn new(enabled: bool, participant_count: usize) -> Self {
        Self {
            enabled,
            participant_count,
        }
    }

    /// Whether the filmstrip is currently displayed.
    ///
    /// A lone participant has nothing to thumbnail, so the strip stays
    /// hidden until a second participant joins.
    pub fn is_visible(self) -> bool {
        self.enabled && self.participant_count > 1
    }
}
