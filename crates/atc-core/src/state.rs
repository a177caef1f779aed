//! Controller state snapshot: the read-only view handed to the display each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AtcEvent;
use crate::types::{AircraftId, Position, RunwayIndex, SimTime};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtcSnapshot {
    pub name: String,
    pub time: SimTime,
    pub status: ControllerStatus,
    /// Active aircraft in spawn order.
    pub aircraft: Vec<AircraftView>,
    /// Runways left to right.
    pub runways: Vec<RunwayView>,
    /// Active hold points, in registration order.
    pub holding_points: Vec<Position>,
    pub landed_count: usize,
    pub events: Vec<AtcEvent>,
}

/// One active aircraft on the display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: AircraftId,
    pub position: Position,
    /// Heading (radians, 0 = East, counter-clockwise).
    pub heading: f64,
    pub heading_deg: f64,
    pub speed: f64,
    pub status: AircraftStatus,
    pub target_point: Option<Position>,
    pub assigned_runway: Option<RunwayIndex>,
}

/// One runway on the display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayView {
    pub index: RunwayIndex,
    pub center: Position,
    pub width: f64,
    pub length: f64,
    pub status: RunwayStatus,
    pub occupant: Option<AircraftId>,
}
