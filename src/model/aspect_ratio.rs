//! Orientation mode of the conference view.

use crate::model::ScreenDimensions;

/// Orientation mode of the conference view.
///
/// Decides which edge the filmstrip occupies: it docks to the right edge
/// in [`Wide`](AspectRatio::Wide) layouts and stacks along the bottom edge
/// in [`Narrow`](AspectRatio::Narrow) layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    /// Landscape-like layout. The filmstrip docks to the right edge.
    #[default]
    Wide,

    /// Portrait-like layout. The filmstrip stacks along the bottom edge.
    Narrow,
}

impl AspectRatio {
    /// Derive the orientation mode from screen dimensions.
    ///
    /// A screen is `Narrow` when it is taller than it is wide. Square
    /// screens count as `Wide`.
    pub fn of(screen: ScreenDimensions) -> Self {
        if screen.width < screen.height {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    /// Whether this is the narrow orientation.
    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}
