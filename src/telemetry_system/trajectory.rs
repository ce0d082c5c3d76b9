//! Recorded time series and the read-only view handed to presentation code.

use serde::{Deserialize, Serialize};

use crate::control::body::PhysicalConstants;
use crate::trajectory_system::integrator::State;
use crate::utils::vector3d::Vector3D;

/// Kinetic plus potential energy of a satellite of `mass` kg (J).
pub fn mechanical_energy(state: &State, mass: f64, constants: &PhysicalConstants) -> f64 {
    let kinetic = 0.5 * mass * state.velocity.magnitude_squared();
    let potential = -constants.mu() * mass / state.radius();
    kinetic + potential
}

/// |E − E₀| / |E₀|, or `None` when E₀ is zero or not finite. Near the
/// parabolic limit E₀ ≈ 0 and the ratio blows up without saying anything
/// about integration error; read it as meaningless there.
pub fn relative_energy_drift(initial: f64, energy: f64) -> Option<f64> {
    if initial == 0.0 || !initial.is_finite() {
        return None;
    }
    Some(((energy - initial) / initial).abs())
}

/// One recorded instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub altitude: f64,
    pub speed: f64,
    pub energy: f64,
}

impl TrajectorySample {
    pub fn from_state(time: f64, state: &State, mass: f64, constants: &PhysicalConstants) -> Self {
        TrajectorySample {
            time,
            position: state.position,
            velocity: state.velocity,
            altitude: state.radius() - constants.body_radius,
            speed: state.speed(),
            energy: mechanical_energy(state, mass, constants),
        }
    }

    pub fn state(&self) -> State {
        State::new(self.position, self.velocity)
    }
}

/// Scalar summaries of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub samples: usize,
    pub duration: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub max_speed: f64,
    pub energy_drift: Option<f64>,
}

/// Samples in strictly increasing time order, starting at t = 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: TrajectorySample) {
        debug_assert!(
            self.samples.last().map_or(true, |last| last.time < sample.time),
            "samples must be appended in increasing time order"
        );
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrajectorySample> {
        self.samples.get(index)
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn altitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.altitude).collect()
    }

    pub fn speeds(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.speed).collect()
    }

    pub fn energies(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.energy).collect()
    }

    pub fn positions(&self) -> Vec<Vector3D> {
        self.samples.iter().map(|s| s.position).collect()
    }

    pub fn velocities(&self) -> Vec<Vector3D> {
        self.samples.iter().map(|s| s.velocity).collect()
    }

    pub fn max_altitude(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.altitude).reduce(f64::max)
    }

    pub fn min_altitude(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.altitude).reduce(f64::min)
    }

    pub fn max_speed(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.speed).reduce(f64::max)
    }

    /// Time of the last sample; zero when empty.
    pub fn duration(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }

    /// Largest relative departure of energy from its initial value. `None`
    /// for an empty trajectory or when the initial energy is zero.
    pub fn energy_drift(&self) -> Option<f64> {
        let initial = self.samples.first()?.energy;
        self.samples
            .iter()
            .map(|s| relative_energy_drift(initial, s.energy))
            .try_fold(0.0, |max: f64, drift| Some(max.max(drift?)))
    }

    pub fn summary(&self) -> Option<TrajectorySummary> {
        Some(TrajectorySummary {
            samples: self.len(),
            duration: self.duration(),
            min_altitude: self.min_altitude()?,
            max_altitude: self.max_altitude()?,
            max_speed: self.max_speed()?,
            energy_drift: self.energy_drift(),
        })
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
