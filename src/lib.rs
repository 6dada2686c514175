//! Conference-view viewport insets (confview)
//!
//! Computes the four-edge insets describing the screen region of a
//! conference view that is not obstructed by transient UI chrome (the
//! participant filmstrip and the toolbox control bar), and pushes
//! recomputed values to registered observers whenever the watched layout
//! state changes.
//!
//! The inset computation itself is a pure function
//! ([`layout::compute_viewport`]); [`store::ViewportStore`] adds the
//! explicit observer registration around it. Chrome dimensions come from
//! [`config`] with built-in defaults.

pub mod config;
pub mod constants;
pub mod layout;
pub mod logging;
pub mod model;
pub mod store;

#[cfg(test)]
mod tests;
