use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_MASS, EARTH_RADIUS, GRAVITATIONAL_CONSTANT};
use crate::errors::SimulationError;

/// Gravitational constant plus the mass and radius of the primary body.
/// Fixed for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub gravitational_constant: f64,
    pub body_mass: f64,
    pub body_radius: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants::earth()
    }
}

impl PhysicalConstants {
    pub fn new(gravitational_constant: f64, body_mass: f64, body_radius: f64) -> Self {
        PhysicalConstants {
            gravitational_constant,
            body_mass,
            body_radius,
        }
    }

    pub fn earth() -> Self {
        PhysicalConstants::new(GRAVITATIONAL_CONSTANT, EARTH_MASS, EARTH_RADIUS)
    }

    /// Standard gravitational parameter G·M.
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.body_mass
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("gravitational constant", self.gravitational_constant),
            ("body mass", self.body_mass),
            ("body radius", self.body_radius),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::ConfigError(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        if self.mu() <= 0.0 {
            return Err(SimulationError::ConfigError(
                "gravitational parameter G·M must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_earth_constants() {
        let earth = PhysicalConstants::earth();
        assert_eq!(earth, PhysicalConstants::default());
        assert_eq!(earth.body_radius, EARTH_RADIUS);
        assert_abs_diff_eq!(earth.mu(), 3.986e14, epsilon = 1e11);
        assert_eq!(earth.body_mass, EARTH_MASS);
        assert!(earth.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_constants() {
        let massless = PhysicalConstants::new(GRAVITATIONAL_CONSTANT, 0.0, EARTH_RADIUS);
        assert!(matches!(
            massless.validate(),
            Err(SimulationError::ConfigError(_))
        ));

        let nan_radius = PhysicalConstants::new(GRAVITATIONAL_CONSTANT, EARTH_MASS, f64::NAN);
        assert!(matches!(
            nan_radius.validate(),
            Err(SimulationError::ConfigError(_))
        ));
    }
}
