//! Kinematic integration system.
//!
//! Holding aircraft rotate around their hold point; everything else
//! translates along its heading at constant speed.

use hecs::World;

use atc_core::components::{Aircraft, FlightPhase, Heading};
use atc_core::geometry::project;
use atc_core::types::Position;

use atc_traffic::holding;

/// Move every aircraft by `dt` seconds.
pub fn run(world: &mut World, holding_radius: f64, dt: f64) {
    for (_entity, (aircraft, pos, heading, phase)) in
        world.query_mut::<(&Aircraft, &mut Position, &mut Heading, &FlightPhase)>()
    {
        match *phase {
            FlightPhase::Holding { hold_point, .. } => {
                let (next, tangent) =
                    holding::step(*pos, hold_point, holding_radius, aircraft.speed, dt);
                *pos = next;
                heading.0 = tangent;
            }
            FlightPhase::Flying | FlightPhase::Landing { .. } | FlightPhase::OnRunway { .. } => {
                *pos = project(*pos, heading.0, aircraft.speed * dt);
            }
        }
    }
}
