//! Airspace controller for the ATC zone simulation.
//!
//! Owns the hecs ECS world of aircraft plus the runway table, runs the
//! per-tick systems, and produces `AtcSnapshot`s for the display layer.

pub mod engine;
pub mod records;
pub mod systems;
pub mod world_setup;

pub use atc_core as core;
pub use engine::AirspaceController;
pub use systems::spawner::SpawnOutcome;
