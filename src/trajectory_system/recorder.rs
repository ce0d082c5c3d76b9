use log::{error, info, warn};
use std::time::Instant;

use crate::constants::MAX_PREALLOCATED_SAMPLES;
use crate::control::body::PhysicalConstants;
use crate::control::config::{RunBudget, Scenario, SimulationConfig};
use crate::errors::{PropagationFailure, SimulationError};
use crate::telemetry_system::trajectory::{Trajectory, TrajectorySample};

use super::elements::OrbitalElementResolver;
use super::integrator::{GravityIntegrator, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Completed,
    /// Stopped by the caller after recording the sample at `at_step`.
    Stopped { at_step: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub trajectory: Trajectory,
    pub termination: Termination,
}

impl Recording {
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Completed
    }
}

/// Drives the integrator for `step_count` steps and records every state.
pub struct TrajectoryRecorder {
    constants: PhysicalConstants,
    config: SimulationConfig,
    integrator: GravityIntegrator,
}

impl TrajectoryRecorder {
    pub fn new(constants: PhysicalConstants, config: SimulationConfig) -> Self {
        TrajectoryRecorder {
            integrator: GravityIntegrator::new(&constants),
            constants,
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Full run of `step_count` steps, `step_count + 1` samples.
    pub fn record(&self, initial: State) -> Result<Trajectory, PropagationFailure> {
        self.record_until(initial, |_, _| true)
            .map(|recording| recording.trajectory)
    }

    pub fn record_with_budget(
        &self,
        initial: State,
        budget: RunBudget,
    ) -> Result<Recording, PropagationFailure> {
        let started = Instant::now();
        self.record_until(initial, |step, _| {
            if budget.max_steps.is_some_and(|max| step >= max) {
                return false;
            }
            !budget
                .wall_clock
                .is_some_and(|limit| started.elapsed() >= limit)
        })
    }

    /// Runs until all steps are done or `keep_going(step, sample)` returns
    /// false after a sample is recorded.
    pub fn record_until<F>(
        &self,
        initial: State,
        mut keep_going: F,
    ) -> Result<Recording, PropagationFailure>
    where
        F: FnMut(usize, &TrajectorySample) -> bool,
    {
        let steps = self.config.step_count;
        let dt = self.config.time_step;
        let mut trajectory =
            Trajectory::with_capacity(steps.saturating_add(1).min(MAX_PREALLOCATED_SAMPLES));

        if let Err(e) = self.constants.validate().and(self.config.validate()) {
            error!("Refusing to start run: {}", e);
            return Err(PropagationFailure::new(e, trajectory));
        }
        if !initial.is_finite() || initial.radius() == 0.0 {
            let e = SimulationError::SingularityError {
                step: 0,
                last_state: initial,
            };
            error!("Initial state is singular: {}", e);
            return Err(PropagationFailure::new(e, trajectory));
        }

        info!(
            "Starting propagation: {} steps of {} s ({} s simulated)",
            steps,
            dt,
            self.config.total_duration()
        );

        let mut state = initial;
        let first = self.sample(0.0, &state);
        trajectory.push(first);
        if steps > 0 && !keep_going(0, &first) {
            warn!("Propagation stopped by caller at step 0");
            return Ok(Recording {
                trajectory,
                termination: Termination::Stopped { at_step: 0 },
            });
        }

        for step in 1..=steps {
            let next = match self.integrator.step(&state, dt) {
                Ok(next) if next.is_finite() && next.radius() > 0.0 => next,
                Ok(_) => {
                    return Err(self.abort(
                        SimulationError::SingularityError {
                            step,
                            last_state: state,
                        },
                        trajectory,
                    ))
                }
                Err(e) => return Err(self.abort(e.at_step(step), trajectory)),
            };
            state = next;

            let sample = self.sample(step as f64 * dt, &state);
            trajectory.push(sample);

            if step < steps && !keep_going(step, &sample) {
                warn!(
                    "Propagation stopped by caller at step {} of {}",
                    step, steps
                );
                return Ok(Recording {
                    trajectory,
                    termination: Termination::Stopped { at_step: step },
                });
            }
        }

        info!(
            "Propagation complete: {} samples over {} s",
            trajectory.len(),
            trajectory.duration()
        );
        Ok(Recording {
            trajectory,
            termination: Termination::Completed,
        })
    }

    fn sample(&self, time: f64, state: &State) -> TrajectorySample {
        TrajectorySample::from_state(time, state, self.config.satellite_mass, &self.constants)
    }

    fn abort(&self, error: SimulationError, partial: Trajectory) -> PropagationFailure {
        error!(
            "Propagation aborted after {} samples: {}",
            partial.len(),
            error
        );
        PropagationFailure::new(error, partial)
    }
}

/// Resolves the initial state from the scenario's elements and records the
/// full run.
pub fn propagate(scenario: &Scenario) -> Result<Trajectory, PropagationFailure> {
    let initial = OrbitalElementResolver::resolve(&scenario.elements, &scenario.constants)
        .map_err(|e| PropagationFailure::new(e, Trajectory::default()))?;
    TrajectoryRecorder::new(scenario.constants, scenario.config).record(initial)
}
