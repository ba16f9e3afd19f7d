//! Undamped simple pendulum
//!
//! The equation of motion θ'' + k sin θ = 0 is split into the first-order
//! system
//!
//! ```text
//! dθ/dt = φ
//! dφ/dt = -k sin θ
//! ```
//!
//! where k = m·g/l in the physical form. A normalized pendulum has k = 1.

use std::f64::consts::PI;

use crate::system::TwoStateSystem;

/// Pendulum dynamics with an explicit restoring coefficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    /// Coefficient k in dφ/dt = -k sin θ
    pub coefficient: f64,
}

impl Pendulum {
    /// Pendulum with an arbitrary restoring coefficient
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    /// Normalized pendulum, k = 1
    pub fn normalized() -> Self {
        Self::new(1.0)
    }

    /// Physical pendulum, k = m·g/l
    ///
    /// # Arguments
    /// * `mass` - Bob mass (kg)
    /// * `gravity` - Gravitational acceleration (m/s²)
    /// * `length` - Rod length (m)
    pub fn from_physical(mass: f64, gravity: f64, length: f64) -> Self {
        Self::new(mass * gravity / length)
    }

    /// Energy per unit inertia: φ²/2 + k(1 - cos θ)
    ///
    /// Zero at the stable equilibrium. Conserved by the exact flow.
    pub fn energy(&self, theta: f64, phi: f64) -> f64 {
        0.5 * phi * phi + self.coefficient * (1.0 - theta.cos())
    }

    /// Linearized period 2π/√k, valid for small amplitudes
    pub fn small_angle_period(&self) -> f64 {
        2.0 * PI / self.coefficient.sqrt()
    }
}

impl Default for Pendulum {
    fn default() -> Self {
        Self::normalized()
    }
}

impl TwoStateSystem for Pendulum {
    /// dθ/dt = φ
    fn f1(&self, _t: f64, _theta: f64, phi: f64) -> f64 {
        phi
    }

    /// dφ/dt = -k sin θ
    fn f2(&self, _t: f64, theta: f64, _phi: f64) -> f64 {
        -self.coefficient * theta.sin()
    }
}
