//! ATC zone application.
//!
//! Drives an `AirspaceController` at the configured transmit rate and hands
//! each snapshot to a display adapter.

pub mod game_loop;
pub mod renderer;

pub use atc_core as core;
