//! ECS systems that operate on the controller's world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus whichever controller tables they touch. They hold no state of their own.

pub mod flight_control;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod traffic;
