//! Runway-assignment policy.
//!
//! The quadrant an aircraft occupies fixes its approach side (north or south
//! threshold) and its preference (innermost left or innermost right runway).
//! Among the currently available runways, ordered left to right, the pick is
//! the one nearest the zone centerline on the preferred side.

use atc_core::components::Runway;
use atc_core::enums::{Quadrant, RunwaySide};
use atc_core::types::{Position, RunwayIndex};

/// Slot in a left-to-right list of `available` runways for the given side.
///
/// `n/2 - 1` for left, `n/2` for right, clamped so a single available runway
/// serves both sides. `None` when nothing is available.
pub fn preferred_slot(side: RunwaySide, available: usize) -> Option<usize> {
    if available == 0 {
        return None;
    }
    let half = available / 2;
    let slot = match side {
        RunwaySide::Left => half.saturating_sub(1),
        RunwaySide::Right => half.min(available - 1),
    };
    Some(slot)
}

/// Pick a runway for an aircraft in `quadrant`. `runways` is the full table in
/// left-to-right order; occupied runways are skipped.
pub fn select_runway(quadrant: Quadrant, runways: &[Runway]) -> Option<RunwayIndex> {
    let available: Vec<RunwayIndex> = runways
        .iter()
        .filter(|r| r.is_available())
        .map(|r| r.index)
        .collect();

    preferred_slot(quadrant.runway_side(), available.len()).map(|slot| available[slot])
}

/// Threshold point an aircraft in `quadrant` is cleared to on `runway`.
pub fn threshold_for(quadrant: Quadrant, runway: &Runway) -> Position {
    runway.threshold(quadrant.approach_side())
}
