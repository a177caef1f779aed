//! Holding-pattern geometry.
//!
//! A holding aircraft circles its hold point counter-clockwise at a constant
//! angular rate derived from its linear speed.

use std::f64::consts::FRAC_PI_2;

use atc_core::geometry::{arc_step, normalize_angle, project, reciprocal};
use atc_core::types::Position;

/// Hold point one holding radius behind the aircraft, along its reciprocal heading.
pub fn hold_point_for(position: Position, heading: f64, holding_radius: f64) -> Position {
    project(position, reciprocal(heading), holding_radius)
}

/// Angular rate (rad/s) for flying a circle of `radius` at `speed`.
pub fn angular_velocity(speed: f64, radius: f64) -> f64 {
    speed / radius
}

/// Advance a holding aircraft by `dt` seconds.
///
/// Returns the new position (exactly on the circle) and the tangent heading.
pub fn step(
    position: Position,
    hold_point: Position,
    radius: f64,
    speed: f64,
    dt: f64,
) -> (Position, f64) {
    let delta = angular_velocity(speed, radius) * dt;
    let (next, bearing) = arc_step(hold_point, radius, position, delta);
    (next, normalize_angle(bearing + FRAC_PI_2))
}
