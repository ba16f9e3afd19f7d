//! Simulation configuration
//!
//! All parameters are fixed at startup. [`SimulationConfig::default`]
//! reproduces the reference run: a 2 m, 1 kg pendulum released from π/4 at
//! rest, integrated for 10 s with dt = 0.01.

use std::f64::consts::FRAC_PI_4;

use crate::error::SimulationError;
use crate::pendulum::Pendulum;
use crate::solver::whole_steps;
use crate::trajectory::TimeGrid;

/// Largest sample count a configuration may request
pub const MAX_SAMPLES: usize = 100_000_000;

/// Bob mass (kg)
pub const DEFAULT_MASS: f64 = 1.0;
/// Gravitational acceleration (m/s²)
pub const DEFAULT_GRAVITY: f64 = 9.81;
/// Rod length (m)
pub const DEFAULT_LENGTH: f64 = 2.0;
/// Time step (s)
pub const DEFAULT_DT: f64 = 0.01;
/// Total simulated time (s)
pub const DEFAULT_DURATION: f64 = 10.0;
/// Initial angle θ0 (rad)
pub const DEFAULT_INITIAL_ANGLE: f64 = FRAC_PI_4;
/// Initial angular velocity φ0 (rad/s)
pub const DEFAULT_INITIAL_VELOCITY: f64 = 0.0;

/// Which restoring coefficient the derivative dφ/dt = -k sin θ uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoefficientMode {
    /// k = 1, mass, gravity and length only describe the setup
    #[default]
    Normalized,
    /// k = m·g/l
    Physical,
}

/// Immutable parameters of a single run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Bob mass (kg)
    pub mass: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Rod length (m)
    pub length: f64,
    /// Fixed time step (s)
    pub dt: f64,
    /// Total simulated time (s)
    pub duration: f64,
    /// Initial angle θ0 (rad)
    pub initial_angle: f64,
    /// Initial angular velocity φ0 (rad/s)
    pub initial_velocity: f64,
    /// Restoring coefficient selection
    pub coefficient: CoefficientMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            gravity: DEFAULT_GRAVITY,
            length: DEFAULT_LENGTH,
            dt: DEFAULT_DT,
            duration: DEFAULT_DURATION,
            initial_angle: DEFAULT_INITIAL_ANGLE,
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
            coefficient: CoefficientMode::default(),
        }
    }
}

impl SimulationConfig {
    /// Set the step size and total duration
    pub fn with_timing(mut self, dt: f64, duration: f64) -> Self {
        self.dt = dt;
        self.duration = duration;
        self
    }

    /// Set the initial state (θ0, φ0)
    pub fn with_initial_state(mut self, angle: f64, velocity: f64) -> Self {
        self.initial_angle = angle;
        self.initial_velocity = velocity;
        self
    }

    /// Set mass, gravity and length
    pub fn with_physics(mut self, mass: f64, gravity: f64, length: f64) -> Self {
        self.mass = mass;
        self.gravity = gravity;
        self.length = length;
        self
    }

    /// Select the restoring coefficient
    pub fn with_coefficient(mut self, mode: CoefficientMode) -> Self {
        self.coefficient = mode;
        self
    }

    /// Number of samples n = duration / dt, truncated to whole steps
    ///
    /// A small relative tolerance absorbs representation error such as
    /// `0.3 / 0.1 = 2.9999999999999996`. Only meaningful for a configuration
    /// that passes [`validate`](Self::validate).
    pub fn steps(&self) -> usize {
        whole_steps(self.duration, self.dt) as usize
    }

    /// Pendulum dynamics for the configured coefficient mode
    pub fn pendulum(&self) -> Pendulum {
        match self.coefficient {
            CoefficientMode::Normalized => Pendulum::normalized(),
            CoefficientMode::Physical => {
                Pendulum::from_physical(self.mass, self.gravity, self.length)
            }
        }
    }

    /// Evenly spaced sample times t[i] = i·dt, i < n
    pub fn time_grid(&self) -> TimeGrid {
        TimeGrid::new(self.dt, self.steps())
    }

    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::InvalidConfig {
                message: format!("dt must be positive and finite, got {}", self.dt),
            });
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(SimulationError::InvalidConfig {
                message: format!("duration must be positive and finite, got {}", self.duration),
            });
        }
        let samples = whole_steps(self.duration, self.dt);
        if samples > MAX_SAMPLES as f64 {
            return Err(SimulationError::InvalidConfig {
                message: format!(
                    "duration {} / dt {} gives {} samples, limit is {}",
                    self.duration, self.dt, samples, MAX_SAMPLES
                ),
            });
        }
        if samples < 1.0 {
            return Err(SimulationError::InvalidConfig {
                message: format!(
                    "duration {} is shorter than one step of {}",
                    self.duration, self.dt
                ),
            });
        }
        if !self.initial_angle.is_finite() || !self.initial_velocity.is_finite() {
            return Err(SimulationError::InvalidConfig {
                message: "initial state must be finite".to_string(),
            });
        }
        if self.coefficient == CoefficientMode::Physical {
            let k = self.pendulum().coefficient;
            if !k.is_finite() {
                return Err(SimulationError::InvalidConfig {
                    message: format!(
                        "m·g/l is not finite for m = {}, g = {}, l = {}",
                        self.mass, self.gravity, self.length
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.mass, 1.0);
        assert_eq!(cfg.gravity, 9.81);
        assert_eq!(cfg.length, 2.0);
        assert_eq!(cfg.dt, 0.01);
        assert_eq!(cfg.duration, 10.0);
        assert_eq!(cfg.initial_angle, FRAC_PI_4);
        assert_eq!(cfg.initial_velocity, 0.0);
        assert_eq!(cfg.coefficient, CoefficientMode::Normalized);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_default_step_count() {
        assert_eq!(SimulationConfig::default().steps(), 1000);
    }

    #[test]
    fn test_coefficient_modes() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.pendulum().coefficient, 1.0);

        let cfg = cfg.with_coefficient(CoefficientMode::Physical);
        assert_relative_eq!(cfg.pendulum().coefficient, 9.81 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_time_grid_matches_steps() {
        let cfg = SimulationConfig::default().with_timing(0.25, 2.0);
        let grid = cfg.time_grid();
        assert_eq!(grid.len(), 8);
        assert_eq!(grid.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75]);
    }

    #[test]
    fn test_nonpositive_dt_rejected() {
        for &dt in &[0.0, -0.01, f64::NAN, f64::INFINITY] {
            let cfg = SimulationConfig::default().with_timing(dt, 10.0);
            assert!(
                matches!(cfg.validate(), Err(SimulationError::InvalidConfig { .. })),
                "dt = {} should be rejected",
                dt
            );
        }
    }

    #[test]
    fn test_nonpositive_duration_rejected() {
        for &duration in &[0.0, -1.0, f64::NAN] {
            let cfg = SimulationConfig::default().with_timing(0.01, duration);
            assert!(cfg.validate().is_err(), "duration = {} should be rejected", duration);
        }
    }

    #[test]
    fn test_duration_shorter_than_step_rejected() {
        let cfg = SimulationConfig::default().with_timing(1.0, 0.4);
        assert_eq!(cfg.steps(), 0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_partial_step_truncated() {
        // 1.0 / 0.4 = 2.5 whole steps
        let cfg = SimulationConfig::default().with_timing(0.4, 1.0);
        assert_eq!(cfg.steps(), 2);
        assert_eq!(cfg.time_grid().as_slice(), &[0.0, 0.4]);

        // 0.3 / 0.1 is just below 3 in floating point
        let cfg = SimulationConfig::default().with_timing(0.1, 0.3);
        assert_eq!(cfg.steps(), 3);
    }

    #[test]
    fn test_excessive_sample_count_rejected() {
        let cfg = SimulationConfig::default().with_timing(1e-300, 1.0);
        assert!(matches!(
            cfg.validate(),
            Err(SimulationError::InvalidConfig { .. })
        ));

        // Exactly at the limit is accepted
        let cfg = SimulationConfig::default().with_timing(1.0, MAX_SAMPLES as f64);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.steps(), MAX_SAMPLES);

        let cfg = SimulationConfig::default().with_timing(1.0, 2.0 * MAX_SAMPLES as f64);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_length_rejected_in_physical_mode() {
        let cfg = SimulationConfig::default()
            .with_physics(1.0, 9.81, 0.0)
            .with_coefficient(CoefficientMode::Physical);
        assert!(cfg.validate().is_err());

        // The normalized run ignores the physical parameters
        let cfg = cfg.with_coefficient(CoefficientMode::Normalized);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_nonfinite_initial_state_rejected() {
        let cfg = SimulationConfig::default().with_initial_state(f64::INFINITY, 0.0);
        assert!(cfg.validate().is_err());
    }
}
