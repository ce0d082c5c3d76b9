use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::constants::{SATELLITE_MASS, STEP_COUNT, TIME_STEP};
use crate::control::body::PhysicalConstants;
use crate::errors::SimulationError;
use crate::trajectory_system::elements::OrbitalElements;

/// Run parameters, fixed for the duration of a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// kg
    pub satellite_mass: f64,
    /// s
    pub time_step: f64,
    pub step_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            satellite_mass: SATELLITE_MASS,
            time_step: TIME_STEP,
            step_count: STEP_COUNT,
        }
    }
}

impl SimulationConfig {
    pub fn new(satellite_mass: f64, time_step: f64, step_count: usize) -> Self {
        SimulationConfig {
            satellite_mass,
            time_step,
            step_count,
        }
    }

    pub fn total_duration(&self) -> f64 {
        self.step_count as f64 * self.time_step
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SimulationError::ConfigError(format!(
                "time step must be positive, got {} s",
                self.time_step
            )));
        }
        if !self.satellite_mass.is_finite() || self.satellite_mass <= 0.0 {
            return Err(SimulationError::ConfigError(format!(
                "satellite mass must be positive, got {} kg",
                self.satellite_mass
            )));
        }
        Ok(())
    }
}

/// Coarse cancellation, checked between steps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunBudget {
    pub max_steps: Option<usize>,
    pub wall_clock: Option<Duration>,
}

impl RunBudget {
    pub fn unlimited() -> Self {
        RunBudget::default()
    }

    pub fn steps(max_steps: usize) -> Self {
        RunBudget {
            max_steps: Some(max_steps),
            wall_clock: None,
        }
    }

    pub fn wall_clock(limit: Duration) -> Self {
        RunBudget {
            max_steps: None,
            wall_clock: Some(limit),
        }
    }
}

/// Everything needed to start a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub constants: PhysicalConstants,
    pub elements: OrbitalElements,
    pub config: SimulationConfig,
}

impl Scenario {
    pub fn new(
        constants: PhysicalConstants,
        elements: OrbitalElements,
        config: SimulationConfig,
    ) -> Self {
        Scenario {
            constants,
            elements,
            config,
        }
    }

    /// Loads a scenario from JSON. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let scenario: Scenario = serde_json::from_reader(reader)?;
        info!("Loaded scenario from {}", path.display());
        Ok(scenario)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.constants.validate()?;
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_is_reference_run() {
        let scenario = Scenario::default();
        assert_eq!(scenario.config.time_step, 10.0);
        assert_eq!(scenario.config.step_count, 1_500);
        assert_eq!(scenario.config.satellite_mass, 1_000.0);
        assert_eq!(scenario.config.total_duration(), 15_000.0);
        assert_eq!(scenario.elements.altitude, 500_000.0);
        assert_eq!(scenario.elements.eccentricity, 0.1);
        assert_eq!(scenario.elements.inclination, 30.0);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        for config in [
            SimulationConfig::new(1_000.0, 0.0, 10),
            SimulationConfig::new(1_000.0, -1.0, 10),
            SimulationConfig::new(1_000.0, f64::INFINITY, 10),
            SimulationConfig::new(0.0, 10.0, 10),
        ] {
            assert!(matches!(
                config.validate(),
                Err(SimulationError::ConfigError(_))
            ));
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let scenario = Scenario::from_json_str(
            r#"{ "elements": { "eccentricity": 0.0 }, "config": { "step_count": 42 } }"#,
        )
        .unwrap();

        assert_eq!(scenario.elements.eccentricity, 0.0);
        assert_eq!(scenario.elements.altitude, 500_000.0);
        assert_eq!(scenario.config.step_count, 42);
        assert_eq!(scenario.config.time_step, 10.0);
        assert_eq!(scenario.constants, PhysicalConstants::earth());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = Scenario::from_json_str("{ not json");
        assert!(matches!(result, Err(SimulationError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Scenario::from_json_file("/nonexistent/scenario.json");
        assert!(matches!(result, Err(SimulationError::IoError(_))));
    }

    #[test]
    fn test_budget_constructors() {
        assert_eq!(RunBudget::unlimited().max_steps, None);
        assert_eq!(RunBudget::steps(5).max_steps, Some(5));
        assert_eq!(
            RunBudget::wall_clock(Duration::from_secs(1)).wall_clock,
            Some(Duration::from_secs(1))
        );
    }
}
