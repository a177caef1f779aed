#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use atc_core::components::{FlightPhase, Runway};
    use atc_core::enums::{Quadrant, RunwaySide, RunwayStatus};
    use atc_core::geometry::{bearing, normalize_angle};
    use atc_core::types::Position;

    use crate::assignment::{preferred_slot, select_runway, threshold_for};
    use crate::fsm::{evaluate, FlightContext, FlightTransition};
    use crate::holding::{angular_velocity, hold_point_for, step};

    const HOLDING_RADIUS: f64 = 1_000.0;

    fn runways(count: u32) -> Vec<Runway> {
        (0..count)
            .map(|i| Runway::new(i, 100.0, 500.0, Position::new(i as f64 * 600.0, 0.0)))
            .collect()
    }

    fn context<'a>(
        phase: FlightPhase,
        position: Position,
        heading: f64,
        runway_available: bool,
        other_hold_points: &'a [Position],
        runway: Option<&'a Runway>,
    ) -> FlightContext<'a> {
        FlightContext {
            phase,
            position,
            heading,
            last_step: 0.0,
            holding_radius: HOLDING_RADIUS,
            runway_available,
            other_hold_points,
            runway,
        }
    }

    // ---- Holding geometry ----

    #[test]
    fn test_hold_point_is_behind_aircraft() {
        // Heading West at (5000, 0): behind is further East
        let hold = hold_point_for(Position::new(5_000.0, 0.0), PI, HOLDING_RADIUS);
        assert!((hold.x - 6_000.0).abs() < 1e-9);
        assert!(hold.y.abs() < 1e-9);
    }

    #[test]
    fn test_holding_step_keeps_radius_and_rate() {
        let hold = Position::new(2_500.0, -1_200.0);
        let mut pos = Position::new(3_500.0, -1_200.0);
        let speed = 140.0;
        let dt = 0.1;
        let expected = angular_velocity(speed, HOLDING_RADIUS) * dt;

        for _ in 0..500 {
            let before = bearing(hold, pos);
            let (next, heading) = step(pos, hold, HOLDING_RADIUS, speed, dt);
            let after = bearing(hold, next);

            assert!(
                (next.distance_to(&hold) - HOLDING_RADIUS).abs() < 1e-6,
                "holding aircraft drifted off the circle"
            );
            assert!((normalize_angle(after - before) - expected).abs() < 1e-9);
            // Tangent heading for counter-clockwise flight
            assert!((normalize_angle(heading - after) - FRAC_PI_2).abs() < 1e-9);
            pos = next;
        }
    }

    #[test]
    fn test_holding_step_zero_dt_is_identity() {
        let hold = Position::new(0.0, 4_000.0);
        let pos = Position::new(0.0, 5_000.0);
        let (next, _) = step(pos, hold, HOLDING_RADIUS, 140.0, 0.0);
        assert!(next.distance_to(&pos) < 1e-9);
    }

    // ---- Assignment ----

    #[test]
    fn test_preferred_slot_innermost() {
        assert_eq!(preferred_slot(RunwaySide::Left, 4), Some(1));
        assert_eq!(preferred_slot(RunwaySide::Right, 4), Some(2));
        assert_eq!(preferred_slot(RunwaySide::Left, 2), Some(0));
        assert_eq!(preferred_slot(RunwaySide::Right, 2), Some(1));
        assert_eq!(preferred_slot(RunwaySide::Left, 3), Some(0));
        assert_eq!(preferred_slot(RunwaySide::Right, 3), Some(1));
        assert_eq!(preferred_slot(RunwaySide::Left, 0), None);
    }

    #[test]
    fn test_preferred_slot_single_runway_clamped() {
        assert_eq!(preferred_slot(RunwaySide::Left, 1), Some(0));
        assert_eq!(preferred_slot(RunwaySide::Right, 1), Some(0));
    }

    #[test]
    fn test_select_runway_skips_occupied() {
        let mut table = runways(4);
        assert_eq!(select_runway(Quadrant::NorthWest, &table), Some(1));
        assert_eq!(select_runway(Quadrant::SouthEast, &table), Some(2));

        table[1].status = RunwayStatus::Occupied;
        // Available: [0, 2, 3] -> left picks slot 0, right picks slot 1
        assert_eq!(select_runway(Quadrant::SouthWest, &table), Some(0));
        assert_eq!(select_runway(Quadrant::NorthEast, &table), Some(2));

        for r in table.iter_mut() {
            r.status = RunwayStatus::Occupied;
        }
        assert_eq!(select_runway(Quadrant::NorthEast, &table), None);
    }

    #[test]
    fn test_threshold_for_quadrant() {
        let table = runways(1);
        assert_eq!(threshold_for(Quadrant::NorthWest, &table[0]), table[0].north_end());
        assert_eq!(threshold_for(Quadrant::SouthEast, &table[0]), table[0].south_end());
    }

    // ---- FSM: Flying ----

    #[test]
    fn test_flying_requests_landing_when_runway_free() {
        let ctx = context(
            FlightPhase::Flying,
            Position::new(-9_000.0, 3_000.0),
            0.0,
            true,
            &[],
            None,
        );
        assert_eq!(
            evaluate(&ctx),
            FlightTransition::RequestLanding {
                quadrant: Quadrant::NorthWest
            }
        );
    }

    #[test]
    fn test_flying_far_out_stays() {
        let ctx = context(
            FlightPhase::Flying,
            Position::new(0.0, 9_000.0),
            3.0 * FRAC_PI_2,
            false,
            &[],
            None,
        );
        assert_eq!(evaluate(&ctx), FlightTransition::Stay);
    }

    #[test]
    fn test_flying_enters_holding_near_center() {
        let ctx = context(
            FlightPhase::Flying,
            Position::new(0.0, 3_900.0),
            3.0 * FRAC_PI_2,
            false,
            &[],
            None,
        );
        match evaluate(&ctx) {
            FlightTransition::EnterHolding {
                hold_point,
                quadrant,
            } => {
                assert!((hold_point.y - 4_900.0).abs() < 1e-6);
                assert!(hold_point.x.abs() < 1e-6);
                assert_eq!(quadrant, Quadrant::NorthEast);
            }
            other => panic!("expected EnterHolding, got {other:?}"),
        }
    }

    #[test]
    fn test_flying_enters_holding_near_other_hold_point() {
        let others = [Position::new(6_000.0, 6_000.0)];
        let ctx = context(
            FlightPhase::Flying,
            Position::new(8_000.0, 8_000.0),
            5.0 * PI / 4.0,
            false,
            &others,
            None,
        );
        assert!(matches!(
            evaluate(&ctx),
            FlightTransition::EnterHolding { .. }
        ));
    }

    // ---- FSM: Holding ----

    #[test]
    fn test_holding_keeps_original_quadrant() {
        // Drifted into the South-East while holding a North-West quadrant
        let phase = FlightPhase::Holding {
            hold_point: Position::new(-200.0, 200.0),
            quadrant: Quadrant::NorthWest,
        };
        let ctx = context(phase, Position::new(300.0, -500.0), 0.0, true, &[], None);
        assert_eq!(
            evaluate(&ctx),
            FlightTransition::RequestLanding {
                quadrant: Quadrant::NorthWest
            }
        );

        let ctx = context(phase, Position::new(300.0, -500.0), 0.0, false, &[], None);
        assert_eq!(evaluate(&ctx), FlightTransition::Stay);
    }

    // ---- FSM: Landing ----

    #[test]
    fn test_landing_steers_toward_threshold() {
        let table = runways(1);
        let threshold = table[0].south_end();
        let phase = FlightPhase::Landing {
            runway: 0,
            threshold,
        };
        let pos = Position::new(0.0, -5_000.0);
        let ctx = context(phase, pos, 0.0, false, &[], Some(&table[0]));
        match evaluate(&ctx) {
            FlightTransition::Steer { heading } => {
                assert!((heading - FRAC_PI_2).abs() < 1e-9);
            }
            other => panic!("expected Steer, got {other:?}"),
        }
    }

    #[test]
    fn test_landing_enters_runway_northbound() {
        let table = runways(2);
        let runway = &table[1];
        let threshold = runway.south_end();
        let phase = FlightPhase::Landing {
            runway: 1,
            threshold,
        };
        // 120 m short of the threshold, slightly off the centerline
        let pos = Position::new(runway.center.x + 20.0, threshold.y - 118.0);
        let ctx = context(phase, pos, FRAC_PI_2 - 0.1, false, &[], Some(runway));
        match evaluate(&ctx) {
            FlightTransition::EnterRunway {
                position,
                heading,
                far_end,
            } => {
                assert_eq!(position.x, runway.center.x);
                assert!((heading - FRAC_PI_2).abs() < 1e-12);
                assert_eq!(far_end, runway.north_end());
            }
            other => panic!("expected EnterRunway, got {other:?}"),
        }
    }

    #[test]
    fn test_landing_enters_runway_southbound() {
        let table = runways(1);
        let runway = &table[0];
        let threshold = runway.north_end();
        let phase = FlightPhase::Landing {
            runway: 0,
            threshold,
        };
        let pos = Position::new(0.0, threshold.y + 50.0);
        let ctx = context(phase, pos, 3.0 * FRAC_PI_2, false, &[], Some(runway));
        match evaluate(&ctx) {
            FlightTransition::EnterRunway { far_end, .. } => {
                assert_eq!(far_end, runway.south_end());
            }
            other => panic!("expected EnterRunway, got {other:?}"),
        }
    }

    #[test]
    fn test_landing_detects_threshold_crossed_mid_step() {
        let table = runways(1);
        let runway = &table[0];
        let threshold = runway.south_end();
        let phase = FlightPhase::Landing {
            runway: 0,
            threshold,
        };
        // A 700 m northbound step that started 390 m short of the threshold
        // and ended 310 m past it.
        let pos = Position::new(10.0, threshold.y + 310.0);
        let mut ctx = context(phase, pos, FRAC_PI_2, false, &[], Some(runway));
        ctx.last_step = 700.0;
        match evaluate(&ctx) {
            FlightTransition::EnterRunway {
                position, far_end, ..
            } => {
                assert_eq!(position.x, runway.center.x);
                assert!((position.y - threshold.y).abs() < 1e-9);
                assert_eq!(far_end, runway.north_end());
            }
            other => panic!("expected EnterRunway, got {other:?}"),
        }

        // Judged on the end point alone the aircraft would turn back
        ctx.last_step = 0.0;
        assert!(matches!(evaluate(&ctx), FlightTransition::Steer { .. }));
    }

    #[test]
    fn test_landing_without_runway_stays() {
        let phase = FlightPhase::Landing {
            runway: 7,
            threshold: Position::ORIGIN,
        };
        let ctx = context(phase, Position::ORIGIN, 0.0, false, &[], None);
        assert_eq!(evaluate(&ctx), FlightTransition::Stay);
    }

    // ---- FSM: Runway rollout ----

    #[test]
    fn test_rollout_lands_past_far_end() {
        let table = runways(1);
        let far_end = table[0].north_end();
        let phase = FlightPhase::OnRunway {
            runway: 0,
            far_end,
        };
        let rolling = context(phase, Position::new(0.0, 100.0), FRAC_PI_2, false, &[], None);
        assert_eq!(evaluate(&rolling), FlightTransition::Stay);

        let done = context(phase, Position::new(0.0, 250.0), FRAC_PI_2, false, &[], None);
        assert_eq!(evaluate(&done), FlightTransition::Land);

        let far_end = table[0].south_end();
        let phase = FlightPhase::OnRunway {
            runway: 0,
            far_end,
        };
        let done = context(
            phase,
            Position::new(0.0, -260.0),
            3.0 * FRAC_PI_2,
            false,
            &[],
            None,
        );
        assert_eq!(evaluate(&done), FlightTransition::Land);
    }

    // ---- Randomised ----

    #[test]
    fn test_hold_point_distance_is_radius_random_headings() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let pos = Position::new(rng.gen_range(-9e3..9e3), rng.gen_range(-9e3..9e3));
            let heading: f64 = rng.gen_range(0.0..TAU);
            let hold = hold_point_for(pos, heading, HOLDING_RADIUS);
            assert!((hold.distance_to(&pos) - HOLDING_RADIUS).abs() < 1e-6);
            // Aircraft sits ahead of the hold point along its heading
            let off = normalize_angle(bearing(hold, pos) - heading);
            assert!(off.min(TAU - off) < 1e-6);
        }
    }
}
