//! Airspace controller, the core of the simulation.
//!
//! `AirspaceController` owns the hecs world of aircraft, the runway table, the
//! active hold points and the landed log. It spawns aircraft on request, runs
//! all systems once per tick, and produces `AtcSnapshot`s. Completely headless,
//! so a given seed and input sequence always replays identically.

use std::f64::consts::TAU;
use std::fmt;

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use atc_core::components::Runway;
use atc_core::config::AtcConfig;
use atc_core::constants::{MAX_SPAWN_RETRIES, SPAWN_SEPARATION_FACTOR};
use atc_core::enums::{ControllerStatus, SpawnRejection};
use atc_core::error::ConfigError;
use atc_core::events::AtcEvent;
use atc_core::state::{AircraftView, AtcSnapshot};
use atc_core::types::{AircraftId, SimTime};

use crate::records::{HoldPoint, LandedAircraft};
use crate::systems;
use crate::systems::spawner::SpawnOutcome;
use crate::systems::traffic::TrafficSchedule;
use crate::world_setup;

/// The airspace controller. Owns the ECS world and all zone state.
pub struct AirspaceController {
    config: AtcConfig,
    world: World,
    runways: Vec<Runway>,
    holding_points: Vec<HoldPoint>,
    landed: Vec<LandedAircraft>,
    status: ControllerStatus,
    time: SimTime,
    rng: ChaCha8Rng,
    next_aircraft_id: AircraftId,
    /// Effective cap; starts from config and may be lowered by spawn retries.
    max_aircraft: Option<usize>,
    /// Cumulative count of rejected spawn candidates.
    spawn_retries: u32,
    traffic: TrafficSchedule,
    despawn_buffer: Vec<Entity>,
    events: Vec<AtcEvent>,
}

impl AirspaceController {
    /// Build a controller from a validated configuration.
    pub fn new(config: AtcConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let runways = world_setup::place_runways(&config);
        info!(
            name = %config.name,
            runways = runways.len(),
            zone_radius = config.zone_radius,
            "controller ready"
        );

        Ok(Self {
            world: World::new(),
            runways,
            holding_points: Vec::new(),
            landed: Vec::new(),
            status: ControllerStatus::Available,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_aircraft_id: 0,
            max_aircraft: config.max_aircraft,
            spawn_retries: 0,
            traffic: TrafficSchedule::new(&config.traffic),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        })
    }

    /// Try to add one aircraft at a random point on the zone perimeter.
    ///
    /// Candidates too close to existing traffic are discarded and retried with
    /// a new angle. Once the cumulative retry count reaches its bound, the cap
    /// is lowered to the current aircraft count and the spawn fails.
    pub fn spawn(&mut self) -> SpawnOutcome {
        if let Some(rejected) = self.check_capacity() {
            return rejected;
        }

        loop {
            let angle = self.rng.gen_range(0.0..TAU);
            if let Some(id) = self.try_place(angle) {
                return SpawnOutcome::Spawned(id);
            }

            self.spawn_retries += 1;
            if self.spawn_retries >= MAX_SPAWN_RETRIES {
                let active = self.aircraft_count();
                self.max_aircraft = Some(active);
                info!(
                    retries = self.spawn_retries,
                    cap = active,
                    "no clear spawn point, lowering aircraft cap"
                );
                return self.reject(SpawnRejection::RetriesExhausted);
            }
            trace!(retries = self.spawn_retries, "spawn candidate conflicts, retrying");
        }
    }

    /// Try to add one aircraft at a fixed perimeter angle. No retries.
    pub fn spawn_at(&mut self, angle: f64) -> SpawnOutcome {
        if let Some(rejected) = self.check_capacity() {
            return rejected;
        }

        match self.try_place(angle) {
            Some(id) => SpawnOutcome::Spawned(id),
            None => self.reject(SpawnRejection::Conflict),
        }
    }

    /// Advance the simulation by `dt` seconds. A zero (or negative) step is a no-op.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_nan() || dt <= 0.0 {
            trace!(dt, "ignoring empty time step");
            return;
        }

        // 1. Scripted arrivals
        for arrival in self.traffic.take_due(self.time.tick) {
            match arrival.bearing {
                Some(angle) => self.spawn_at(angle),
                None => self.spawn(),
            };
        }
        // 2. Movement
        systems::movement::run(&mut self.world, self.config.holding_radius, dt);
        // 3. State transitions, assignment, landings
        systems::flight_control::run(
            &mut self.world,
            &mut self.runways,
            &mut self.holding_points,
            &mut self.landed,
            &mut self.events,
            &mut self.despawn_buffer,
            self.config.holding_radius,
            dt,
            self.time.tick,
        );
        // 4. Runway availability
        self.status = systems::flight_control::refresh_status(&self.runways);

        self.time.advance(dt);
        trace!(tick = self.time.tick, aircraft = self.aircraft_count(), "tick applied");
    }

    /// Advance by one configured tick and return the resulting snapshot.
    pub fn tick(&mut self) -> AtcSnapshot {
        self.advance(self.config.dt());
        self.snapshot()
    }

    /// Build a snapshot, draining events accumulated since the last one.
    pub fn snapshot(&mut self) -> AtcSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.config.name,
            &self.world,
            &self.runways,
            &self.holding_points,
            self.landed.len(),
            &self.time,
            self.status,
            events,
        )
    }

    /// Active aircraft in spawn order.
    pub fn aircraft(&self) -> Vec<AircraftView> {
        systems::snapshot::build_aircraft(&self.world)
    }

    pub fn aircraft_count(&self) -> usize {
        world_setup::aircraft_count(&self.world)
    }

    /// Runways, left to right.
    pub fn runways(&self) -> &[Runway] {
        &self.runways
    }

    pub fn holding_points(&self) -> &[HoldPoint] {
        &self.holding_points
    }

    pub fn landed(&self) -> &[LandedAircraft] {
        &self.landed
    }

    pub fn landed_count(&self) -> usize {
        self.landed.len()
    }

    pub fn status(&self) -> ControllerStatus {
        self.status
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &AtcConfig {
        &self.config
    }

    /// Current aircraft cap, including any lowering after exhausted retries.
    pub fn effective_cap(&self) -> Option<usize> {
        self.max_aircraft
    }

    pub fn spawn_retries(&self) -> u32 {
        self.spawn_retries
    }

    /// Scripted arrivals not yet released.
    pub fn pending_arrivals(&self) -> usize {
        self.traffic.pending()
    }

    /// Get a read-only reference to the ECS world.
    #[cfg(test)]
    pub fn world(&self) -> &World {
        &self.world
    }

    fn check_capacity(&mut self) -> Option<SpawnOutcome> {
        let active = self.aircraft_count();
        if systems::spawner::at_capacity(active, self.max_aircraft) {
            info!(active, cap = ?self.max_aircraft, "aircraft cap reached, not spawning");
            return Some(self.reject(SpawnRejection::CapacityReached));
        }
        None
    }

    /// Place an aircraft at `angle` unless it would crowd existing traffic.
    fn try_place(&mut self, angle: f64) -> Option<AircraftId> {
        let (position, heading) = world_setup::perimeter_entry(self.config.zone_radius, angle);
        let min_separation = SPAWN_SEPARATION_FACTOR * self.config.collision_threshold;
        if systems::spawner::conflicts(&self.world, position, min_separation) {
            return None;
        }

        let id = self.next_aircraft_id;
        self.next_aircraft_id += 1;
        world_setup::spawn_aircraft(
            &mut self.world,
            id,
            position,
            heading,
            self.config.aircraft_speed,
        );

        info!(aircraft = id, x = position.x, y = position.y, "aircraft spawned");
        self.events.push(AtcEvent::AircraftSpawned {
            aircraft: id,
            position,
        });
        Some(id)
    }

    fn reject(&mut self, reason: SpawnRejection) -> SpawnOutcome {
        self.events.push(AtcEvent::SpawnRejected { reason });
        SpawnOutcome::Rejected(reason)
    }
}

impl fmt::Display for AirspaceController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{} ATC System", self.config.name);
        f.write_str(label.trim())
    }
}

impl fmt::Debug for AirspaceController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirspaceController")
            .field("name", &self.config.name)
            .field("time", &self.time)
            .field("aircraft", &self.aircraft_count())
            .field("landed", &self.landed.len())
            .field("status", &self.status)
            .finish()
    }
}
