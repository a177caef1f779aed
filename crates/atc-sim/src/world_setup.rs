//! Entity factories and world lookups.
//!
//! Builds the runway table and aircraft entities with their component bundles.

use hecs::{Entity, World};

use atc_core::components::{Aircraft, FlightPhase, Heading, Runway};
use atc_core::config::AtcConfig;
use atc_core::geometry::{bearing, point_on_circle};
use atc_core::types::{AircraftId, Position};

/// Lay runways out left to right along the x axis, centred on the origin.
pub fn place_runways(config: &AtcConfig) -> Vec<Runway> {
    let pitch = config.runway_width + config.runway_spacing;
    let span = config.runway_count as f64 * pitch;
    let first_center = -span / 2.0 + pitch / 2.0;

    (0..config.runway_count)
        .map(|i| {
            let center = Position::new(first_center + i as f64 * pitch, 0.0);
            Runway::new(i, config.runway_width, config.runway_length, center)
        })
        .collect()
}

/// Perimeter point at `angle` and the inbound heading toward the zone center.
pub fn perimeter_entry(zone_radius: f64, angle: f64) -> (Position, f64) {
    let position = point_on_circle(Position::ORIGIN, zone_radius, angle);
    (position, bearing(position, Position::ORIGIN))
}

/// Spawn a flying aircraft entity.
pub fn spawn_aircraft(
    world: &mut World,
    id: AircraftId,
    position: Position,
    heading: f64,
    speed: f64,
) -> Entity {
    world.spawn((
        Aircraft { id, speed },
        position,
        Heading(heading),
        FlightPhase::Flying,
    ))
}

/// All aircraft entities ordered by id, i.e. spawn order.
///
/// Per-tick traversals iterate this owned list, so removing an aircraft
/// mid-tick never skips or repeats a neighbour.
pub fn aircraft_in_spawn_order(world: &World) -> Vec<(AircraftId, Entity)> {
    let mut order: Vec<(AircraftId, Entity)> = world
        .query::<&Aircraft>()
        .iter()
        .map(|(entity, aircraft)| (aircraft.id, entity))
        .collect();
    order.sort_by_key(|(id, _)| *id);
    order
}

/// Number of active aircraft.
pub fn aircraft_count(world: &World) -> usize {
    world.query::<&Aircraft>().iter().count()
}
