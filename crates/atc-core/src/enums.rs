//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Aircraft status as seen by the display layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftStatus {
    /// Straight-line flight toward the zone center.
    #[default]
    Flying,
    /// Circling a registered hold point, waiting for a runway.
    Holding,
    /// Cleared to a runway, flying to its threshold.
    Landing,
    /// Rolling along the runway toward its far end.
    Runway,
}

/// Runway availability flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunwayStatus {
    #[default]
    Available,
    Occupied,
}

/// Controller-level status. Derived each tick from runway availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerStatus {
    /// At least one runway is free.
    #[default]
    Available,
    /// Every runway is occupied.
    Busy,
}

/// Which end of the runways an aircraft approaches from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApproachSide {
    North,
    South,
}

/// Preferred side of the zone centerline when picking a runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunwaySide {
    Left,
    Right,
}

/// Zone quadrant, by sign of x and y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// Quadrant containing `position`. Points on an axis count as North / East.
    pub fn of(position: Position) -> Self {
        match (position.x >= 0.0, position.y >= 0.0) {
            (true, true) => Quadrant::NorthEast,
            (false, true) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
            (true, false) => Quadrant::SouthEast,
        }
    }

    pub fn approach_side(self) -> ApproachSide {
        match self {
            Quadrant::NorthEast | Quadrant::NorthWest => ApproachSide::North,
            Quadrant::SouthWest | Quadrant::SouthEast => ApproachSide::South,
        }
    }

    pub fn runway_side(self) -> RunwaySide {
        match self {
            Quadrant::NorthWest | Quadrant::SouthWest => RunwaySide::Left,
            Quadrant::NorthEast | Quadrant::SouthEast => RunwaySide::Right,
        }
    }
}

/// Why a spawn attempt did not add an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnRejection {
    /// The active aircraft count is at or above the cap.
    CapacityReached,
    /// No collision-free perimeter point was found; the cap was lowered.
    RetriesExhausted,
    /// A fixed-angle spawn landed too close to existing traffic.
    Conflict,
}
