//! Snapshot system: queries the ECS world and builds a complete AtcSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use atc_core::components::{Aircraft, FlightPhase, Heading, Runway};
use atc_core::enums::ControllerStatus;
use atc_core::events::AtcEvent;
use atc_core::state::{AircraftView, AtcSnapshot, RunwayView};
use atc_core::types::{Position, SimTime};

use crate::records::HoldPoint;

/// Build a complete snapshot from the current controller state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    name: &str,
    world: &World,
    runways: &[Runway],
    holding_points: &[HoldPoint],
    landed_count: usize,
    time: &SimTime,
    status: ControllerStatus,
    events: Vec<AtcEvent>,
) -> AtcSnapshot {
    AtcSnapshot {
        name: name.to_string(),
        time: *time,
        status,
        aircraft: build_aircraft(world),
        runways: build_runways(runways),
        holding_points: holding_points.iter().map(|h| h.point).collect(),
        landed_count,
        events,
    }
}

/// Build AircraftView list in spawn order.
pub fn build_aircraft(world: &World) -> Vec<AircraftView> {
    let mut aircraft: Vec<AircraftView> = world
        .query::<(&Aircraft, &Position, &Heading, &FlightPhase)>()
        .iter()
        .map(|(_, (aircraft, pos, heading, phase))| AircraftView {
            id: aircraft.id,
            position: *pos,
            heading: heading.0,
            heading_deg: heading.0.to_degrees(),
            speed: aircraft.speed,
            status: phase.status(),
            target_point: phase.target_point(),
            assigned_runway: phase.assigned_runway(),
        })
        .collect();

    aircraft.sort_by_key(|a| a.id);
    aircraft
}

/// Build RunwayView list, left to right.
pub fn build_runways(runways: &[Runway]) -> Vec<RunwayView> {
    runways
        .iter()
        .map(|r| RunwayView {
            index: r.index,
            center: r.center,
            width: r.width,
            length: r.length,
            status: r.status,
            occupant: r.occupant,
        })
        .collect()
}
