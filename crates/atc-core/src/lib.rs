//! Core types and definitions for the ATC zone simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry helpers, components, configuration, UI signals, snapshots,
//! events, and constants. It has no dependency on the engine or any I/O layer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
