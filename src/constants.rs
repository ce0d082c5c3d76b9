// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // N⋅m²/kg²
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters

// Orbit Defaults (reference scenario)
pub const DEFAULT_ALTITUDE: f64 = 500_000.0; // m
pub const DEFAULT_ECCENTRICITY: f64 = 0.1;
pub const DEFAULT_INCLINATION: f64 = 30.0; // degrees

// Satellite Constants
pub const SATELLITE_MASS: f64 = 1_000.0; // kg

// Simulation Parameters
pub const TIME_STEP: f64 = 10.0; // s
pub const STEP_COUNT: usize = 1_500;
pub const MAX_PREALLOCATED_SAMPLES: usize = 100_000; // larger runs grow on demand

// Playback Parameters
pub const FRAME_SKIP: usize = 10; // samples per rendered frame
pub const TRAIL_LENGTH: usize = 50; // samples
