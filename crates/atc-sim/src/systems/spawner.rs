//! Spawn placement: finds a collision-free perimeter point for a new aircraft.

use hecs::World;

use atc_core::enums::SpawnRejection;
use atc_core::types::{AircraftId, Position};

/// Result of a spawn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned(AircraftId),
    Rejected(SpawnRejection),
}

impl SpawnOutcome {
    pub fn is_spawned(&self) -> bool {
        matches!(self, SpawnOutcome::Spawned(_))
    }

    pub fn aircraft(&self) -> Option<AircraftId> {
        match *self {
            SpawnOutcome::Spawned(id) => Some(id),
            SpawnOutcome::Rejected(_) => None,
        }
    }
}

/// True when `candidate` is closer than `min_separation` to any active aircraft.
pub fn conflicts(world: &World, candidate: Position, min_separation: f64) -> bool {
    world
        .query::<&Position>()
        .iter()
        .any(|(_, pos)| pos.distance_to(&candidate) < min_separation)
}

/// Whether the active count has reached the cap.
pub fn at_capacity(active: usize, cap: Option<usize>) -> bool {
    cap.is_some_and(|max| active >= max)
}
