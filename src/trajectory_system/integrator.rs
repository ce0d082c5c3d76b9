use serde::{Deserialize, Serialize};
use std::fmt;

use crate::control::body::PhysicalConstants;
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

/// Position (m) and velocity (m/s) in the inertial frame centred on the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub position: Vector3D,
    pub velocity: Vector3D,
}

impl State {
    pub fn new(position: Vector3D, velocity: Vector3D) -> Self {
        State { position, velocity }
    }

    pub fn radius(&self) -> f64 {
        self.position.magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Specific angular momentum r × v.
    pub fn angular_momentum(&self) -> Vector3D {
        self.position.cross(&self.velocity)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r = ({:.3}, {:.3}, {:.3}) m, v = ({:.3}, {:.3}, {:.3}) m/s",
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z
        )
    }
}

/// Fixed-step semi-implicit Euler under inverse-square gravity.
#[derive(Debug, Clone, Copy)]
pub struct GravityIntegrator {
    mu: f64,
}

impl GravityIntegrator {
    pub fn new(constants: &PhysicalConstants) -> Self {
        GravityIntegrator {
            mu: constants.mu(),
        }
    }

    /// Gravitational acceleration at `position`, `None` at the origin.
    pub fn acceleration(&self, position: Vector3D) -> Option<Vector3D> {
        let r = position.magnitude();
        if r == 0.0 {
            return None;
        }
        Some(-self.mu / r.powi(3) * position)
    }

    /// Advances `state` by `delta_time`. Velocity is updated first and the new
    /// velocity drives the position update.
    ///
    /// A singular input reports step 0; the recorder rewrites it with
    /// [`SimulationError::at_step`].
    pub fn step(&self, state: &State, delta_time: f64) -> Result<State, SimulationError> {
        let acceleration = self
            .acceleration(state.position)
            .ok_or(SimulationError::SingularityError {
                step: 0,
                last_state: *state,
            })?;

        let velocity = state.velocity + acceleration * delta_time;
        let position = state.position + velocity * delta_time;

        Ok(State::new(position, velocity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry_system::trajectory::mechanical_energy;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn circular_leo() -> (State, PhysicalConstants) {
        let constants = PhysicalConstants::earth();
        let r = constants.body_radius + 400_000.0;
        let v = (constants.mu() / r).sqrt();
        (
            State::new(Vector3D::new(r, 0.0, 0.0), Vector3D::new(0.0, v, 0.0)),
            constants,
        )
    }

    #[test]
    fn test_single_step_matches_hand_computation() {
        let (state, constants) = circular_leo();
        let integrator = GravityIntegrator::new(&constants);
        let dt = 10.0;

        let next = integrator.step(&state, dt).unwrap();

        let r = state.position.x;
        let ax = -constants.mu() / (r * r * r) * r;
        let vx = ax * dt;
        assert_relative_eq!(next.velocity.x, vx, max_relative = 1e-14);
        assert_eq!(next.velocity.y, state.velocity.y);
        // Position uses the updated velocity.
        assert_relative_eq!(next.position.x, r + vx * dt, max_relative = 1e-14);
        assert_eq!(next.position.y, state.velocity.y * dt);
    }

    #[test]
    fn test_step_is_deterministic() {
        let (state, constants) = circular_leo();
        let integrator = GravityIntegrator::new(&constants);
        let mut a = state;
        let mut b = state;
        for _ in 0..100 {
            a = integrator.step(&a, 5.0).unwrap();
            b = integrator.step(&b, 5.0).unwrap();
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_acceleration_points_to_origin() {
        let (state, constants) = circular_leo();
        let integrator = GravityIntegrator::new(&constants);
        let acc = integrator.acceleration(state.position).unwrap();

        assert!(acc.x < 0.0);
        assert_relative_eq!(
            acc.magnitude(),
            constants.mu() / state.position.x.powi(2),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_singular_position_fails() {
        let constants = PhysicalConstants::earth();
        let integrator = GravityIntegrator::new(&constants);
        let state = State::new(Vector3D::ZERO, Vector3D::new(1.0, 0.0, 0.0));

        match integrator.step(&state, 1.0) {
            Err(SimulationError::SingularityError { last_state, .. }) => {
                assert_eq!(last_state, state)
            }
            other => panic!("expected singularity error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_time_step_is_identity() {
        let (state, constants) = circular_leo();
        let integrator = GravityIntegrator::new(&constants);
        assert_eq!(integrator.step(&state, 0.0).unwrap(), state);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Central force: angular momentum direction and size survive many steps.
        #[test]
        fn prop_angular_momentum_conserved(
            altitude in 200_000.0f64..2_000_000.0,
            speed_factor in 0.9f64..1.1,
        ) {
            let constants = PhysicalConstants::earth();
            let r = constants.body_radius + altitude;
            let v = (constants.mu() / r).sqrt() * speed_factor;
            let mut state = State::new(Vector3D::new(r, 0.0, 0.0), Vector3D::new(0.0, v, 0.0));
            let integrator = GravityIntegrator::new(&constants);
            let initial = state.angular_momentum();

            for _ in 0..500 {
                state = integrator.step(&state, 10.0).unwrap();
            }

            let drift = (state.angular_momentum() - initial).magnitude() / initial.magnitude();
            prop_assert!(drift < 1e-9, "angular momentum drift {}", drift);
        }

        #[test]
        fn prop_energy_bounded_near_circular(
            altitude in 300_000.0f64..1_500_000.0,
        ) {
            let constants = PhysicalConstants::earth();
            let r = constants.body_radius + altitude;
            let v = (constants.mu() / r).sqrt();
            let mut state = State::new(Vector3D::new(r, 0.0, 0.0), Vector3D::new(0.0, v, 0.0));
            let integrator = GravityIntegrator::new(&constants);
            let initial = mechanical_energy(&state, 1.0, &constants);

            for _ in 0..1_500 {
                state = integrator.step(&state, 10.0).unwrap();
                let energy = mechanical_energy(&state, 1.0, &constants);
                prop_assert!(((energy - initial) / initial).abs() < 0.01);
            }
        }
    }
}
