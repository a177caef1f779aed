//! Traffic schedule: scripted arrivals released at fixed ticks.

use atc_core::config::ScheduledArrival;

/// One scheduled arrival and whether it has been released.
#[derive(Debug, Clone)]
pub struct ArrivalEntry {
    pub arrival: ScheduledArrival,
    pub released: bool,
}

/// The complete arrival schedule for a run.
#[derive(Debug, Clone, Default)]
pub struct TrafficSchedule {
    pub arrivals: Vec<ArrivalEntry>,
}

impl TrafficSchedule {
    pub fn new(arrivals: &[ScheduledArrival]) -> Self {
        let mut arrivals: Vec<ArrivalEntry> = arrivals
            .iter()
            .map(|&arrival| ArrivalEntry {
                arrival,
                released: false,
            })
            .collect();
        arrivals.sort_by_key(|entry| entry.arrival.at_tick);
        Self { arrivals }
    }

    /// Mark every due arrival as released and return them in schedule order.
    /// Released arrivals are never returned again, spawned or not.
    pub fn take_due(&mut self, current_tick: u64) -> Vec<ScheduledArrival> {
        self.arrivals
            .iter_mut()
            .filter(|entry| !entry.released && current_tick >= entry.arrival.at_tick)
            .map(|entry| {
                entry.released = true;
                entry.arrival
            })
            .collect()
    }

    /// Arrivals not yet released.
    pub fn pending(&self) -> usize {
        self.arrivals.iter().filter(|entry| !entry.released).count()
    }
}
