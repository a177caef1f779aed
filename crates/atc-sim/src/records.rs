//! Controller-side records, stored in `AirspaceController`, NOT as ECS entities.

use serde::{Deserialize, Serialize};

use atc_core::types::{AircraftId, Position, RunwayIndex};

/// An active hold point and the aircraft circling it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldPoint {
    pub aircraft: AircraftId,
    pub point: Position,
}

/// An aircraft that completed its rollout and left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandedAircraft {
    pub id: AircraftId,
    pub runway: RunwayIndex,
    pub landed_at_tick: u64,
}
