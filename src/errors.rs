use thiserror::Error;

use crate::telemetry_system::trajectory::Trajectory;
use crate::trajectory_system::integrator::State;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Singularity error at step {step}: position magnitude reached zero (last valid state: {last_state})")]
    SingularityError { step: usize, last_state: State },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl SimulationError {
    /// Re-labels a singularity with the step index it occurred at.
    pub fn at_step(self, step: usize) -> Self {
        match self {
            SimulationError::SingularityError { last_state, .. } => {
                SimulationError::SingularityError { step, last_state }
            }
            other => other,
        }
    }
}

/// A run that aborted part-way. The samples recorded before the failing
/// step are kept in `partial`.
#[derive(Debug, Error)]
#[error("propagation aborted after {} samples: {error}", .partial.len())]
pub struct PropagationFailure {
    #[source]
    pub error: SimulationError,
    pub partial: Trajectory,
}

impl PropagationFailure {
    pub fn new(error: SimulationError, partial: Trajectory) -> Self {
        PropagationFailure { error, partial }
    }

    /// Step index of the failure, when the error carries one.
    pub fn step(&self) -> Option<usize> {
        match &self.error {
            SimulationError::SingularityError { step, .. } => Some(*step),
            _ => None,
        }
    }
}
