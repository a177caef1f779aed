//! ECS components for aircraft entities, plus the runway record.
//!
//! Aircraft components are plain data. Flight logic lives in `atc-traffic`
//! and the controller systems, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{AircraftStatus, ApproachSide, Quadrant, RunwayStatus};
use crate::types::{AircraftId, Position, RunwayIndex};

/// Identity and performance of one aircraft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: AircraftId,
    /// Ground speed (m/s), constant for the life of the aircraft.
    pub speed: f64,
}

/// Current heading in radians (0 = East, counter-clockwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Flight phase, carrying the data each phase needs.
///
/// The target point exists exactly in `Holding`, `Landing` and `OnRunway`;
/// the runway assignment exists exactly in `Landing` and `OnRunway`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase")]
pub enum FlightPhase {
    #[default]
    Flying,
    Holding {
        hold_point: Position,
        /// Quadrant the hold began in; fixes the runway preference.
        quadrant: Quadrant,
    },
    Landing {
        runway: RunwayIndex,
        threshold: Position,
    },
    OnRunway {
        runway: RunwayIndex,
        far_end: Position,
    },
}

impl FlightPhase {
    pub fn status(&self) -> AircraftStatus {
        match self {
            FlightPhase::Flying => AircraftStatus::Flying,
            FlightPhase::Holding { .. } => AircraftStatus::Holding,
            FlightPhase::Landing { .. } => AircraftStatus::Landing,
            FlightPhase::OnRunway { .. } => AircraftStatus::Runway,
        }
    }

    pub fn target_point(&self) -> Option<Position> {
        match *self {
            FlightPhase::Flying => None,
            FlightPhase::Holding { hold_point, .. } => Some(hold_point),
            FlightPhase::Landing { threshold, .. } => Some(threshold),
            FlightPhase::OnRunway { far_end, .. } => Some(far_end),
        }
    }

    pub fn assigned_runway(&self) -> Option<RunwayIndex> {
        match *self {
            FlightPhase::Landing { runway, .. } | FlightPhase::OnRunway { runway, .. } => {
                Some(runway)
            }
            FlightPhase::Flying | FlightPhase::Holding { .. } => None,
        }
    }
}

/// A runway slot. Runways live in the controller's runway table, not in the
/// ECS world; aircraft refer to them by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runway {
    pub index: RunwayIndex,
    /// Width (meters, East-West).
    pub width: f64,
    /// Length (meters, North-South).
    pub length: f64,
    pub center: Position,
    pub status: RunwayStatus,
    /// Aircraft holding the runway while `Occupied`.
    pub occupant: Option<AircraftId>,
}

impl Runway {
    pub fn new(index: RunwayIndex, width: f64, length: f64, center: Position) -> Self {
        Self {
            index,
            width,
            length,
            center,
            status: RunwayStatus::Available,
            occupant: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == RunwayStatus::Available
    }

    pub fn north_end(&self) -> Position {
        Position::new(self.center.x, self.center.y + self.length / 2.0)
    }

    pub fn south_end(&self) -> Position {
        Position::new(self.center.x, self.center.y - self.length / 2.0)
    }

    /// The end an aircraft touches down at when approaching from `side`.
    pub fn threshold(&self, side: ApproachSide) -> Position {
        match side {
            ApproachSide::North => self.north_end(),
            ApproachSide::South => self.south_end(),
        }
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Runway {}", self.index)
    }
}
