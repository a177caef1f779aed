//! Driving loop: applies display signals, ticks the controller, presents the
//! snapshot, then sleeps until the next tick deadline.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use atc_core::commands::UiSignal;
use atc_core::state::AtcSnapshot;
use atc_sim::{AirspaceController, SpawnOutcome};

/// Display adapter. Receives the state once per tick and answers with the
/// signals the user raised since the previous call.
pub trait Renderer {
    fn present(&mut self, snapshot: &AtcSnapshot) -> Vec<UiSignal>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the transmit rate.
    pub pacing: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            pacing: true,
        }
    }
}

/// Run until the renderer asks to quit or `max_ticks` is reached.
///
/// Returns the number of ticks applied.
pub fn run_loop<R: Renderer + ?Sized>(
    controller: &mut AirspaceController,
    renderer: &mut R,
    options: LoopOptions,
) -> u64 {
    let tick_duration = Duration::from_secs_f64(controller.config().dt());
    let mut pending: Vec<UiSignal> = Vec::new();
    let mut ticks = 0u64;
    let mut next_tick_time = Instant::now();

    info!(system = %controller, ?options, "loop started");

    loop {
        if options.max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }

        // 1. Signals raised during the previous frame
        for signal in pending.drain(..) {
            match signal {
                UiSignal::SpawnRequested => match controller.spawn() {
                    SpawnOutcome::Spawned(id) => debug!(aircraft = id, "spawn requested"),
                    SpawnOutcome::Rejected(reason) => debug!(?reason, "spawn request refused"),
                },
                UiSignal::Quit => {
                    info!(ticks, "quit requested");
                    return ticks;
                }
            }
        }

        // 2. Advance one tick
        let snapshot = controller.tick();
        ticks += 1;

        // 3. Hand the state to the display
        pending = renderer.present(&snapshot);

        // 4. Sleep until the next deadline
        if options.pacing {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind, skip the catch-up burst
                next_tick_time = now;
            }
        }
    }

    info!(ticks, landed = controller.landed_count(), "loop finished");
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use atc_core::config::AtcConfig;

    /// Replays a fixed list of signal batches, one per frame.
    struct ScriptedRenderer {
        script: VecDeque<Vec<UiSignal>>,
        frames: Vec<AtcSnapshot>,
    }

    impl ScriptedRenderer {
        fn new(script: Vec<Vec<UiSignal>>) -> Self {
            Self {
                script: script.into(),
                frames: Vec::new(),
            }
        }
    }

    impl Renderer for ScriptedRenderer {
        fn present(&mut self, snapshot: &AtcSnapshot) -> Vec<UiSignal> {
            self.frames.push(snapshot.clone());
            self.script.pop_front().unwrap_or_default()
        }
    }

    fn unpaced(max_ticks: u64) -> LoopOptions {
        LoopOptions {
            max_ticks: Some(max_ticks),
            pacing: false,
        }
    }

    #[test]
    fn test_runs_requested_ticks() {
        let mut atc = AirspaceController::new(AtcConfig::default()).unwrap();
        let mut renderer = ScriptedRenderer::new(Vec::new());

        let ticks = run_loop(&mut atc, &mut renderer, unpaced(25));
        assert_eq!(ticks, 25);
        assert_eq!(renderer.frames.len(), 25);
        assert_eq!(atc.time().tick, 25);
        assert_eq!(renderer.frames.last().unwrap().time.tick, 25);
    }

    #[test]
    fn test_spawn_signal_applied_before_next_tick() {
        let mut atc = AirspaceController::new(AtcConfig::default()).unwrap();
        let mut renderer = ScriptedRenderer::new(vec![
            vec![UiSignal::SpawnRequested],
            vec![],
            vec![UiSignal::SpawnRequested, UiSignal::SpawnRequested],
        ]);

        run_loop(&mut atc, &mut renderer, unpaced(5));

        assert!(renderer.frames[0].aircraft.is_empty());
        assert_eq!(renderer.frames[1].aircraft.len(), 1);
        assert_eq!(renderer.frames[2].aircraft.len(), 1);
        assert_eq!(renderer.frames[3].aircraft.len(), 3);
        // The spawned aircraft is cleared in the same tick it appears
        assert_eq!(
            renderer.frames[1].aircraft[0].status,
            atc_core::enums::AircraftStatus::Landing
        );
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut atc = AirspaceController::new(AtcConfig::default()).unwrap();
        let mut renderer = ScriptedRenderer::new(vec![
            vec![],
            vec![UiSignal::SpawnRequested, UiSignal::Quit],
        ]);

        let ticks = run_loop(&mut atc, &mut renderer, unpaced(1_000));
        assert_eq!(ticks, 2);
        assert_eq!(atc.aircraft_count(), 1);
    }

    #[test]
    fn test_pacing_holds_tick_rate() {
        let config = AtcConfig {
            transmit_rate_hz: 100.0,
            ..Default::default()
        };
        let mut atc = AirspaceController::new(config).unwrap();
        let mut renderer = ScriptedRenderer::new(Vec::new());

        let start = Instant::now();
        run_loop(
            &mut atc,
            &mut renderer,
            LoopOptions {
                max_ticks: Some(10),
                pacing: true,
            },
        );
        assert!(start.elapsed() >= Duration::from_millis(90));
    }

    #[test]
    fn test_default_options_are_paced_and_unbounded() {
        let options = LoopOptions::default();
        assert!(options.pacing);
        assert_eq!(options.max_ticks, None);
    }
}
