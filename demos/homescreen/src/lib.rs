//! A terminal "home screen" hosting the covid widget face.
//!
//! The binary in `main.rs` wires these modules into a running TUI; they
//! are exposed as a library so integration tests can drive the reducer
//! and render the components against a test backend.

pub mod action;
pub mod api;
pub mod components;
pub mod event;
pub mod prefs;
pub mod reducer;
pub mod state;
