//! Simulation constants and tuning parameters.

// --- Reference scenario defaults ---

/// Zone radius (meters).
pub const DEFAULT_ZONE_RADIUS: f64 = 10_000.0;

/// Holding-pattern radius (meters).
pub const DEFAULT_HOLDING_RADIUS: f64 = 1_000.0;

/// Aircraft ground speed (m/s).
pub const DEFAULT_AIRCRAFT_SPEED: f64 = 140.0;

/// Number of runways.
pub const DEFAULT_RUNWAY_COUNT: u32 = 2;

/// Runway width (meters).
pub const DEFAULT_RUNWAY_WIDTH: f64 = 100.0;

/// Runway length (meters).
pub const DEFAULT_RUNWAY_LENGTH: f64 = 500.0;

/// Gap between neighbouring runways (meters).
pub const DEFAULT_RUNWAY_SPACING: f64 = 500.0;

/// State transmit rate (Hz). One tick per transmission.
pub const DEFAULT_TRANSMIT_RATE_HZ: f64 = 10.0;

/// Minimum separation unit (meters).
pub const DEFAULT_COLLISION_THRESHOLD: f64 = 100.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Controller policy ---

/// Holding is entered within this many holding radii of the zone center
/// or of another active hold point.
pub const HOLDING_PROXIMITY_FACTOR: f64 = 4.0;

/// Landing aircraft reach the threshold within this many runway widths.
pub const THRESHOLD_TOLERANCE_FACTOR: f64 = 1.5;

/// Spawned aircraft keep this many collision thresholds from all traffic.
pub const SPAWN_SEPARATION_FACTOR: f64 = 2.0;

/// Cumulative collision retries before the aircraft cap is lowered.
pub const MAX_SPAWN_RETRIES: u32 = 20;
