//! Aircraft flight finite state machine.
//!
//! Pure function that decides the next transition for one aircraft from its
//! phase and situation. Applying the transition (runway occupancy, hold-point
//! registration, removal on landing) is the controller's job.

use std::f64::consts::FRAC_PI_2;

use atc_core::components::{FlightPhase, Runway};
use atc_core::constants::{HOLDING_PROXIMITY_FACTOR, THRESHOLD_TOLERANCE_FACTOR};
use atc_core::enums::Quadrant;
use atc_core::geometry::{bearing, closest_on_segment, is_northbound, project, reciprocal};
use atc_core::types::Position;

use crate::holding::hold_point_for;

/// Input to the flight FSM for a single aircraft.
pub struct FlightContext<'a> {
    pub phase: FlightPhase,
    pub position: Position,
    pub heading: f64,
    /// Distance flown along `heading` by the last movement step.
    pub last_step: f64,
    pub holding_radius: f64,
    /// Whether any runway is free at the moment of evaluation.
    pub runway_available: bool,
    /// Hold points registered by other aircraft.
    pub other_hold_points: &'a [Position],
    /// The runway this aircraft is assigned to, if any.
    pub runway: Option<&'a Runway>,
}

/// Output from the flight FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightTransition {
    /// Nothing changes.
    Stay,
    /// Keep the phase, re-aim at the current target.
    Steer { heading: f64 },
    /// Start circling `hold_point`.
    EnterHolding {
        hold_point: Position,
        quadrant: Quadrant,
    },
    /// Ready to land; the controller assigns a runway using `quadrant`.
    RequestLanding { quadrant: Quadrant },
    /// Threshold reached: align with the runway and roll toward `far_end`.
    EnterRunway {
        position: Position,
        heading: f64,
        far_end: Position,
    },
    /// Rollout finished.
    Land,
}

/// Evaluate the FSM for one aircraft.
pub fn evaluate(ctx: &FlightContext) -> FlightTransition {
    match ctx.phase {
        FlightPhase::Flying => evaluate_flying(ctx),
        FlightPhase::Holding { quadrant, .. } => evaluate_holding(ctx, quadrant),
        FlightPhase::Landing { threshold, .. } => evaluate_landing(ctx, threshold),
        FlightPhase::OnRunway { far_end, .. } => evaluate_rollout(ctx, far_end),
    }
}

/// Within the holding proximity of the zone center or of any active hold point.
pub fn near_holding_traffic(ctx: &FlightContext) -> bool {
    let limit = HOLDING_PROXIMITY_FACTOR * ctx.holding_radius;
    ctx.position.range_from_origin() <= limit
        || ctx
            .other_hold_points
            .iter()
            .any(|p| ctx.position.distance_to(p) <= limit)
}

fn evaluate_flying(ctx: &FlightContext) -> FlightTransition {
    if ctx.runway_available {
        return FlightTransition::RequestLanding {
            quadrant: Quadrant::of(ctx.position),
        };
    }

    if near_holding_traffic(ctx) {
        return FlightTransition::EnterHolding {
            hold_point: hold_point_for(ctx.position, ctx.heading, ctx.holding_radius),
            quadrant: Quadrant::of(ctx.position),
        };
    }

    FlightTransition::Stay
}

fn evaluate_holding(ctx: &FlightContext, quadrant: Quadrant) -> FlightTransition {
    if ctx.runway_available {
        return FlightTransition::RequestLanding { quadrant };
    }
    FlightTransition::Stay
}

fn evaluate_landing(ctx: &FlightContext, threshold: Position) -> FlightTransition {
    let Some(runway) = ctx.runway else {
        return FlightTransition::Stay;
    };

    // Check the whole path flown this tick, so a long step cannot jump over
    // the tolerance circle.
    let step_start = project(ctx.position, reciprocal(ctx.heading), ctx.last_step);
    let nearest = closest_on_segment(threshold, step_start, ctx.position);
    let tolerance = THRESHOLD_TOLERANCE_FACTOR * runway.width;
    if nearest.distance_to(&threshold) <= tolerance {
        // Approach direction decides which end is the far one
        let (heading, far_end) = if is_northbound(ctx.heading) {
            (FRAC_PI_2, runway.north_end())
        } else {
            (3.0 * FRAC_PI_2, runway.south_end())
        };
        return FlightTransition::EnterRunway {
            position: Position::new(runway.center.x, nearest.y),
            heading,
            far_end,
        };
    }

    FlightTransition::Steer {
        heading: bearing(ctx.position, threshold),
    }
}

fn evaluate_rollout(ctx: &FlightContext, far_end: Position) -> FlightTransition {
    let past_far_end = if is_northbound(ctx.heading) {
        ctx.position.y >= far_end.y
    } else {
        ctx.position.y <= far_end.y
    };

    if past_far_end {
        FlightTransition::Land
    } else {
        FlightTransition::Stay
    }
}
