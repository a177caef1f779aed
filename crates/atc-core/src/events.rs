//! Events emitted by the controller for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::SpawnRejection;
use crate::types::{AircraftId, Position, RunwayIndex};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AtcEvent {
    /// New aircraft on the zone perimeter.
    AircraftSpawned {
        aircraft: AircraftId,
        position: Position,
    },
    /// A spawn request was refused.
    SpawnRejected { reason: SpawnRejection },
    /// Aircraft entered a holding pattern around `hold_point`.
    HoldingEntered {
        aircraft: AircraftId,
        hold_point: Position,
    },
    /// Aircraft assigned a runway and cleared to its threshold.
    LandingCleared {
        aircraft: AircraftId,
        runway: RunwayIndex,
    },
    /// Aircraft crossed the threshold and is rolling out.
    RunwayEntered {
        aircraft: AircraftId,
        runway: RunwayIndex,
    },
    /// Aircraft completed its rollout; the runway is free again.
    AircraftLanded {
        aircraft: AircraftId,
        runway: RunwayIndex,
    },
}
