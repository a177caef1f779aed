//! Flight control system. Applies the aircraft FSM and the runway-assignment
//! policy each tick.
//!
//! Aircraft are processed one at a time in spawn order, and each decision sees
//! the runway table as left by the aircraft before it. That order is the
//! tie-break for contested runways.

use hecs::{Entity, World};
use tracing::{debug, error, info};

use atc_core::components::{Aircraft, FlightPhase, Heading, Runway};
use atc_core::enums::{ControllerStatus, Quadrant, RunwayStatus};
use atc_core::events::AtcEvent;
use atc_core::geometry::bearing;
use atc_core::types::{AircraftId, Position};

use atc_traffic::assignment::{select_runway, threshold_for};
use atc_traffic::fsm::{evaluate, FlightContext, FlightTransition};

use crate::records::{HoldPoint, LandedAircraft};
use crate::world_setup::aircraft_in_spawn_order;

/// Controller status derived from the runway table.
pub fn refresh_status(runways: &[Runway]) -> ControllerStatus {
    if runways.iter().any(Runway::is_available) {
        ControllerStatus::Available
    } else {
        ControllerStatus::Busy
    }
}

/// Evaluate and apply state transitions for every aircraft.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    runways: &mut [Runway],
    holding_points: &mut Vec<HoldPoint>,
    landed: &mut Vec<LandedAircraft>,
    events: &mut Vec<AtcEvent>,
    despawn_buffer: &mut Vec<Entity>,
    holding_radius: f64,
    dt: f64,
    current_tick: u64,
) {
    despawn_buffer.clear();

    for (id, entity) in aircraft_in_spawn_order(world) {
        let Ok((aircraft, pos, heading, phase)) = world
            .query_one_mut::<(&Aircraft, &mut Position, &mut Heading, &mut FlightPhase)>(entity)
        else {
            continue;
        };

        let hold_registered = !matches!(phase, FlightPhase::Holding { .. })
            || holding_points.iter().any(|h| h.aircraft == id);
        debug_assert!(
            hold_registered,
            "holding aircraft {id} has no registered hold point"
        );
        if !hold_registered {
            error!(aircraft = id, "holding aircraft has no registered hold point");
        }

        let other_hold_points: Vec<Position> = holding_points
            .iter()
            .filter(|h| h.aircraft != id)
            .map(|h| h.point)
            .collect();

        let transition = {
            let ctx = FlightContext {
                phase: *phase,
                position: *pos,
                heading: heading.0,
                last_step: aircraft.speed * dt,
                holding_radius,
                runway_available: runways.iter().any(Runway::is_available),
                other_hold_points: &other_hold_points,
                runway: phase
                    .assigned_runway()
                    .and_then(|index| runways.get(index as usize)),
            };
            evaluate(&ctx)
        };

        match transition {
            FlightTransition::Stay => {}
            FlightTransition::Steer { heading: new_heading } => {
                heading.0 = new_heading;
            }
            FlightTransition::EnterHolding {
                hold_point,
                quadrant,
            } => {
                *phase = FlightPhase::Holding {
                    hold_point,
                    quadrant,
                };
                holding_points.push(HoldPoint {
                    aircraft: id,
                    point: hold_point,
                });
                debug!(aircraft = id, ?hold_point, "entering hold");
                events.push(AtcEvent::HoldingEntered {
                    aircraft: id,
                    hold_point,
                });
            }
            FlightTransition::RequestLanding { quadrant } => {
                clear_to_land(
                    id,
                    quadrant,
                    *pos,
                    phase,
                    heading,
                    runways,
                    holding_points,
                    events,
                );
            }
            FlightTransition::EnterRunway {
                position,
                heading: runway_heading,
                far_end,
            } => {
                let Some(runway) = phase.assigned_runway() else {
                    continue;
                };
                *pos = position;
                heading.0 = runway_heading;
                *phase = FlightPhase::OnRunway { runway, far_end };
                debug!(aircraft = id, runway, "on runway");
                events.push(AtcEvent::RunwayEntered {
                    aircraft: id,
                    runway,
                });
            }
            FlightTransition::Land => {
                let Some(runway) = phase.assigned_runway() else {
                    continue;
                };
                if let Some(slot) = runways.get_mut(runway as usize) {
                    slot.status = RunwayStatus::Available;
                    slot.occupant = None;
                }
                landed.push(LandedAircraft {
                    id,
                    runway,
                    landed_at_tick: current_tick,
                });
                despawn_buffer.push(entity);
                info!(aircraft = id, runway, "landed");
                events.push(AtcEvent::AircraftLanded {
                    aircraft: id,
                    runway,
                });
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Assign a runway to `id`, occupy it immediately, and point the aircraft at
/// its threshold. A holding aircraft gives up its hold point.
#[allow(clippy::too_many_arguments)]
fn clear_to_land(
    id: AircraftId,
    quadrant: Quadrant,
    position: Position,
    phase: &mut FlightPhase,
    heading: &mut Heading,
    runways: &mut [Runway],
    holding_points: &mut Vec<HoldPoint>,
    events: &mut Vec<AtcEvent>,
) {
    let selected = select_runway(quadrant, runways);
    debug_assert!(
        selected.is_some(),
        "landing requested for aircraft {id} with no runway available"
    );
    let Some(index) = selected else {
        error!(aircraft = id, "landing requested with no runway available");
        return;
    };
    let Some(runway) = runways.get_mut(index as usize) else {
        return;
    };

    runway.status = RunwayStatus::Occupied;
    runway.occupant = Some(id);
    let threshold = threshold_for(quadrant, runway);

    if matches!(phase, FlightPhase::Holding { .. }) {
        holding_points.retain(|h| h.aircraft != id);
    }

    *phase = FlightPhase::Landing {
        runway: index,
        threshold,
    };
    heading.0 = bearing(position, threshold);

    info!(aircraft = id, runway = index, ?quadrant, "cleared to land");
    events.push(AtcEvent::LandingCleared {
        aircraft: id,
        runway: index,
    });
}
