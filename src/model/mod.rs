//! Domain model types (pure).
//!
//! All types in this module are small immutable value objects compared by
//! value. None of them touch I/O or ambient state.

pub mod aspect_ratio;
pub mod filmstrip;
pub mod snapshot;
pub mod viewport;

// Re-export for convenience
pub use aspect_ratio::AspectRatio;
pub use filmstrip::FilmstripState;
pub use snapshot::LayoutSnapshot;
pub use viewport::{ScreenDimensions, Viewport};
