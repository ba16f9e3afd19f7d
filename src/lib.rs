//! # Pendulum RK4: Fixed-Step Runge-Kutta Pendulum Simulation
//!
//! Integrates the undamped simple pendulum
//!
//! ```text
//! θ'' + k sin θ = 0,   k = m·g/l (or 1 when normalized)
//! ```
//!
//! as the first-order system dθ/dt = φ, dφ/dt = -k sin θ with the classical
//! fourth-order Runge-Kutta method, and hands the resulting angle and
//! angular velocity series to a renderer.
//!
//! ## Features
//!
//! - Classical 4-stage RK4 with a fixed step, global error O(dt⁴)
//! - Generic [`TwoStateSystem`] seam: any pair of f1(t, y, z), f2(t, y, z)
//! - Immutable [`SimulationConfig`] passed to a pure [`simulate`]
//! - Energy drift and period diagnostics on the resulting [`Trajectory`]
//! - [`Renderer`] seam with a plotters-backed PNG implementation
//!   (`plot` feature, enabled by default)
//!
//! ## Basic Usage
//!
//! ```rust
//! use pendulum_rk4::{simulate, SimulationConfig};
//!
//! let config = SimulationConfig::default().with_timing(0.01, 10.0);
//! let trajectory = simulate(&config).unwrap();
//!
//! assert_eq!(trajectory.len(), 1000);
//! let drift = trajectory.max_relative_energy_drift(&config.pendulum());
//! assert!(drift < 1e-6);
//! ```
//!
//! ## Custom Systems
//!
//! The driver loop accepts anything implementing [`TwoStateSystem`],
//! including a pair of closures:
//!
//! ```rust
//! use pendulum_rk4::{simulate_system, SimulationConfig};
//!
//! // Linearized pendulum
//! let linear = (|_t: f64, _y: f64, z: f64| z, |_t: f64, y: f64, _z: f64| -y);
//! let config = SimulationConfig::default().with_initial_state(0.1, 0.0);
//! let trajectory = simulate_system(&linear, &config).unwrap();
//! assert_eq!(trajectory.theta()[0], 0.1);
//! ```
//!
//! ## Limitations
//!
//! There is no step-size control and no energy correction. Large velocities
//! or long durations let fixed-step truncation error grow, and non-finite
//! values propagate silently into later samples.
//!
//! ## References
//!
//! 1. Kutta, W. (1901). "Beitrag zur näherungsweisen Integration totaler
//!    Differentialgleichungen". Z. Math. Phys. 46, 435-453.
//!
//! 2. Hairer, E., Nørsett, S.P., & Wanner, G. (1993). "Solving
//!    Ordinary Differential Equations I: Nonstiff Problems".
//!    Springer.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod coefficients;
pub mod config;
pub mod error;
pub mod pendulum;
pub mod render;
pub mod simulation;
pub mod solver;
pub mod system;
pub mod trajectory;

pub use config::{CoefficientMode, SimulationConfig};
pub use error::{RenderError, SimulationError};
pub use pendulum::Pendulum;
#[cfg(feature = "plot")]
pub use render::PngRenderer;
pub use render::{check_series, Renderer, Series};
pub use simulation::{simulate, simulate_system};
pub use solver::{rk4_step, Rk4, Stats};
pub use system::TwoStateSystem;
pub use trajectory::{TimeGrid, Trajectory};
