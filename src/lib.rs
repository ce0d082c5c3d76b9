pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::body::PhysicalConstants;
pub use control::config::{RunBudget, Scenario, SimulationConfig};
pub use errors::{PropagationFailure, SimulationError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::elements::{OrbitalElementResolver, OrbitalElements};
pub use trajectory_system::integrator::{GravityIntegrator, State};
pub use trajectory_system::recorder::{propagate, Recording, Termination, TrajectoryRecorder};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::playback::{Frame, Playback};
pub use telemetry_system::telemetry::Telemetry;
pub use telemetry_system::trajectory::{
    mechanical_energy, relative_energy_drift, Trajectory, TrajectorySample, TrajectorySummary,
};

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
