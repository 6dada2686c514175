//! Viewport inset computation (pure).
//!
//! Everything here is a pure function of the snapshot and metrics,
//! testable without any UI.

use crate::config::ChromeMetrics;
use crate::model::{LayoutSnapshot, Viewport};

/// Compute the conference-view insets for the given watched state.
///
/// The filmstrip claims the right edge in wide orientation and the bottom
/// edge in narrow orientation, never both. The toolbox claims the bottom
/// edge independently, so in narrow orientation the two stack.
///
/// Deterministic and referentially transparent: identical inputs always
/// produce an identical value, so callers are free to memoize.
pub fn compute_viewport(snapshot: LayoutSnapshot, metrics: ChromeMetrics) -> Viewport {
    let narrow = snapshot.aspect_ratio.is_narrow();

    let mut right: u16 = 0;
    let mut bottom: u16 = 0;

    if snapshot.filmstrip.is_visible() {
        if narrow {
            bottom = bottom.saturating_add(metrics.filmstrip_size);
        } else {
            right = right.saturating_add(metrics.filmstrip_size);
        }
    }
    if snapshot.toolbox_visible {
        bottom = bottom.saturating_add(metrics.hangup_button_size);
    }

    Viewport {
        top: 0,
        left: 0,
        right,
        bottom,
    }
}
