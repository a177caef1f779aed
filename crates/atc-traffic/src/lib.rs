//! Aircraft behavior for the ATC zone.
//!
//! Implements the per-aircraft flight state machine, holding-pattern
//! geometry, and the quadrant-based runway-assignment policy.

pub mod assignment;
pub mod fsm;
pub mod holding;

pub use atc_core as core;

#[cfg(test)]
mod tests;
