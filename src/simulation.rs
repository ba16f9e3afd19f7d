//! Driver loop
//!
//! Fills a [`Trajectory`] one RK4 step at a time. Each sample i+1 is
//! produced from sample i and nothing else writes to the trajectory.

use tracing::info;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::solver::Rk4;
use crate::system::TwoStateSystem;
use crate::trajectory::Trajectory;

/// Run the pendulum described by `config`
///
/// # Example
/// ```
/// use pendulum_rk4::{simulate, SimulationConfig};
///
/// let config = SimulationConfig::default();
/// let trajectory = simulate(&config).unwrap();
/// assert_eq!(trajectory.len(), 1000);
/// assert_eq!(trajectory.phi()[0], 0.0);
/// ```
pub fn simulate(config: &SimulationConfig) -> Result<Trajectory, SimulationError> {
    let pendulum = config.pendulum();
    let trajectory = simulate_system(&pendulum, config)?;

    info!(
        coefficient = pendulum.coefficient,
        energy_drift = trajectory.max_relative_energy_drift(&pendulum),
        "pendulum run complete"
    );
    Ok(trajectory)
}

/// Run an arbitrary two-state system on the grid and initial state of `config`
///
/// The physical parameters of `config` are ignored; `system` supplies the
/// derivatives. Non-finite states are not detected and propagate into the
/// remaining samples.
pub fn simulate_system<S: TwoStateSystem + ?Sized>(
    system: &S,
    config: &SimulationConfig,
) -> Result<Trajectory, SimulationError> {
    config.validate()?;

    let grid = config.time_grid();
    let n = grid.len();
    info!(samples = n, dt = config.dt, duration = config.duration, "integrating");

    let mut trajectory =
        Trajectory::with_initial_state(grid, config.initial_angle, config.initial_velocity);
    let mut solver = Rk4::new(config.dt);

    for i in 0..n - 1 {
        let t = trajectory.time()[i];
        let (theta, phi) = solver.step(system, t, trajectory.theta()[i], trajectory.phi()[i]);
        trajectory.set(i + 1, theta, phi);
    }

    info!(
        steps = solver.stats.steps,
        fn_evals = solver.stats.fn_evals,
        "integration finished"
    );
    Ok(trajectory)
}
