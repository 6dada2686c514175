//! Chrome dimension constants.
//!
//! Centralized location for the fixed sizes of the transient UI chrome so
//! the calculator and the config defaults stay in agreement.

/// Thickness of the filmstrip in device-independent pixels.
///
/// Occupies the right inset in wide orientation and the bottom inset in
/// narrow orientation. Covers an 80px participant thumbnail plus margins.
pub const FILMSTRIP_SIZE: u16 = 90;

/// Height of the toolbox control bar in device-independent pixels.
///
/// Sized to the hang-up button, the tallest control in the bar. Added to
/// the bottom inset whenever the toolbox is displayed.
pub const HANGUP_BUTTON_SIZE: u16 = 96;
