//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Aircraft identifier. Assigned at spawn, strictly increasing, so it doubles
/// as the spawn-order key.
pub type AircraftId = u32;

/// Runway identifier: the runway's index in the left-to-right runway table.
pub type RunwayIndex = u32;

/// 2D position in the zone (meters, Cartesian).
/// x = East, y = North, origin at the zone center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each applied tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position in meters.
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Bearing to another position in radians (0 = East, counter-clockwise).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        crate::geometry::bearing(*self, *other)
    }

    /// Distance from the zone center.
    pub fn range_from_origin(&self) -> f64 {
        self.distance_to(&Position::ORIGIN)
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
