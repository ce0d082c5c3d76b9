use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALTITUDE, DEFAULT_ECCENTRICITY, DEFAULT_INCLINATION};
use crate::control::body::PhysicalConstants;
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

use super::integrator::State;

/// Orbit shape used only to derive the initial state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalElements {
    /// Height of the starting point above the body radius (m).
    pub altitude: f64,
    pub eccentricity: f64,
    /// Degrees.
    pub inclination: f64,
}

impl Default for OrbitalElements {
    fn default() -> Self {
        OrbitalElements {
            altitude: DEFAULT_ALTITUDE,
            eccentricity: DEFAULT_ECCENTRICITY,
            inclination: DEFAULT_INCLINATION,
        }
    }
}

impl OrbitalElements {
    pub fn new(altitude: f64, eccentricity: f64, inclination: f64) -> Self {
        OrbitalElements {
            altitude,
            eccentricity,
            inclination,
        }
    }

    pub fn inclination_rad(&self) -> f64 {
        self.inclination.to_radians()
    }
}

/// Converts orbital elements into the initial Cartesian state.
pub struct OrbitalElementResolver;

impl OrbitalElementResolver {
    /// Starting radius `R + altitude`.
    pub fn initial_radius(
        elements: &OrbitalElements,
        constants: &PhysicalConstants,
    ) -> Result<f64, SimulationError> {
        let r0 = constants.body_radius + elements.altitude;
        if !r0.is_finite() || r0 <= 0.0 {
            return Err(SimulationError::DomainError(format!(
                "initial radius must be positive, got {} m",
                r0
            )));
        }
        Ok(r0)
    }

    pub fn semi_major_axis(
        elements: &OrbitalElements,
        constants: &PhysicalConstants,
    ) -> Result<f64, SimulationError> {
        let r0 = Self::initial_radius(elements, constants)?;
        let e = elements.eccentricity;
        if e.is_nan() || e >= 1.0 {
            return Err(SimulationError::DomainError(format!(
                "eccentricity {} does not describe a bounded orbit (expected e < 1)",
                e
            )));
        }
        Ok(r0 / (1.0 - e))
    }

    /// Vis-viva speed at the starting radius.
    pub fn initial_speed(
        elements: &OrbitalElements,
        constants: &PhysicalConstants,
    ) -> Result<f64, SimulationError> {
        let r0 = Self::initial_radius(elements, constants)?;
        let a = Self::semi_major_axis(elements, constants)?;
        let radicand = constants.mu() * (2.0 / r0 - 1.0 / a);
        if radicand.is_nan() || radicand < 0.0 {
            return Err(SimulationError::DomainError(format!(
                "vis-viva radicand is negative ({}) for r0 = {} m, a = {} m",
                radicand, r0, a
            )));
        }
        Ok(radicand.sqrt())
    }

    /// Position sits in the x-z plane tilted by the inclination, velocity points
    /// along +y.
    pub fn resolve(
        elements: &OrbitalElements,
        constants: &PhysicalConstants,
    ) -> Result<State, SimulationError> {
        let r0 = Self::initial_radius(elements, constants)?;
        let v0 = Self::initial_speed(elements, constants)?;
        let inclination = elements.inclination_rad();

        let position = Vector3D::new(r0 * inclination.cos(), 0.0, r0 * inclination.sin());
        let velocity = Vector3D::new(0.0, v0, 0.0);

        debug!(
            "Resolved initial state: r0 = {:.1} m, v0 = {:.3} m/s, inclination = {:.2}°",
            r0, v0, elements.inclination
        );

        Ok(State::new(position, velocity))
    }
}
