//! Time grid and state trajectory
//!
//! A [`Trajectory`] is filled index by index by the driver loop and is
//! read-only afterwards: only shared-reference accessors are public.

use crate::pendulum::Pendulum;
use crate::render::Series;

/// Evenly spaced sample times t[i] = i·dt
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// Grid of `len` samples starting at 0
    ///
    /// Each sample is computed as `i * dt` rather than by repeated addition.
    pub fn new(dt: f64, len: usize) -> Self {
        let samples = (0..len).map(|i| i as f64 * dt).collect();
        Self { samples }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the grid has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample times
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

/// Angle and angular velocity sampled on a [`TimeGrid`]
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    time: TimeGrid,
    theta: Vec<f64>,
    phi: Vec<f64>,
}

impl Trajectory {
    /// Allocate a trajectory over `time` with the initial state at index 0
    ///
    /// Remaining samples are zero until the driver loop writes them.
    pub(crate) fn with_initial_state(time: TimeGrid, theta0: f64, phi0: f64) -> Self {
        let n = time.len();
        let mut theta = vec![0.0; n];
        let mut phi = vec![0.0; n];
        if n > 0 {
            theta[0] = theta0;
            phi[0] = phi0;
        }
        Self { time, theta, phi }
    }

    /// Store the state at index `i`
    pub(crate) fn set(&mut self, i: usize, theta: f64, phi: f64) {
        self.theta[i] = theta;
        self.phi[i] = phi;
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when the trajectory has no samples
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Sample times
    pub fn time(&self) -> &[f64] {
        self.time.as_slice()
    }

    /// Angle θ (rad)
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// Angular velocity φ (rad/s)
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// Last sample as (t, θ, φ)
    pub fn last(&self) -> Option<(f64, f64, f64)> {
        let i = self.len().checked_sub(1)?;
        Some((self.time()[i], self.theta[i], self.phi[i]))
    }

    /// Energy of every sample
    pub fn energy(&self, pendulum: &Pendulum) -> Vec<f64> {
        self.theta
            .iter()
            .zip(&self.phi)
            .map(|(&theta, &phi)| pendulum.energy(theta, phi))
            .collect()
    }

    /// Maximum energy drift relative to the first sample
    ///
    /// Returns |E_i - E_0| / |E_0| maximized over i, or the absolute drift
    /// when E_0 is negligible (the pendulum starts at rest at the bottom).
    pub fn max_relative_energy_drift(&self, pendulum: &Pendulum) -> f64 {
        let energy = self.energy(pendulum);
        let Some(&e0) = energy.first() else {
            return 0.0;
        };

        let max_abs = energy
            .iter()
            .map(|e| (e - e0).abs())
            .fold(0.0_f64, f64::max);

        if e0.abs() > 1e-12 {
            max_abs / e0.abs()
        } else {
            max_abs
        }
    }

    /// Estimate the oscillation period from zero crossings of θ
    ///
    /// Crossing times are found by linear interpolation between samples.
    /// Consecutive crossings are half a period apart. Returns `None` when
    /// fewer than two crossings are present.
    pub fn estimate_period(&self) -> Option<f64> {
        let t = self.time();
        let mut crossings = Vec::new();

        for i in 1..self.len() {
            let (a, b) = (self.theta[i - 1], self.theta[i]);
            if a == 0.0 || (a.signum() == b.signum() && b != 0.0) {
                continue;
            }
            let frac = a / (a - b);
            crossings.push(t[i - 1] + frac * (t[i] - t[i - 1]));
        }

        if crossings.len() < 2 {
            return None;
        }
        let span = crossings[crossings.len() - 1] - crossings[0];
        let half_period = span / (crossings.len() - 1) as f64;
        Some(2.0 * half_period)
    }

    /// The two standard plots: θ against t and φ against t
    pub fn series(&self) -> [Series<'_>; 2] {
        [
            Series::new("Angle", self.time(), &self.theta).with_labels("t (s)", "θ (rad)"),
            Series::new("Angular velocity", self.time(), &self.phi)
                .with_labels("t (s)", "φ (rad/s)"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn from_samples(dt: f64, theta: &[f64], phi: &[f64]) -> Trajectory {
        let mut traj = Trajectory::with_initial_state(TimeGrid::new(dt, theta.len()), 0.0, 0.0);
        for i in 0..theta.len() {
            traj.set(i, theta[i], phi[i]);
        }
        traj
    }

    #[test]
    fn test_grid_is_multiplicative() {
        let grid = TimeGrid::new(0.1, 1001);
        assert_eq!(grid.as_slice()[0], 0.0);
        assert_eq!(grid.as_slice()[1000], 1000.0 * 0.1);
        assert_eq!(grid.len(), 1001);
    }

    #[test]
    fn test_initial_state_at_index_zero() {
        let traj = Trajectory::with_initial_state(TimeGrid::new(0.5, 4), 0.3, -0.2);
        assert_eq!(traj.theta(), &[0.3, 0.0, 0.0, 0.0]);
        assert_eq!(traj.phi(), &[-0.2, 0.0, 0.0, 0.0]);
        assert_eq!(traj.last(), Some((1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_empty_trajectory() {
        let traj = Trajectory::with_initial_state(TimeGrid::new(0.5, 0), 0.3, -0.2);
        assert!(traj.is_empty());
        assert_eq!(traj.last(), None);
        assert_eq!(traj.estimate_period(), None);
        assert_eq!(traj.max_relative_energy_drift(&Pendulum::normalized()), 0.0);
    }

    #[test]
    fn test_period_from_sampled_sine() {
        // θ = sin(2πt / 3) sampled finely: period 3
        let dt = 0.001;
        let n = 10_000;
        let theta: Vec<f64> = (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 * dt / 3.0).sin())
            .collect();
        let phi = vec![0.0; n];
        let traj = from_samples(dt, &theta, &phi);

        let period = traj.estimate_period().unwrap();
        assert_relative_eq!(period, 3.0, max_relative = 1e-5);
    }

    #[test]
    fn test_no_period_without_crossings() {
        let traj = from_samples(0.1, &[0.5, 0.4, 0.3, 0.2], &[0.0; 4]);
        assert_eq!(traj.estimate_period(), None);
    }

    #[test]
    fn test_energy_drift_absolute_at_rest() {
        let p = Pendulum::normalized();
        let traj = from_samples(0.1, &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]);
        assert_eq!(traj.max_relative_energy_drift(&p), 0.0);

        let traj = from_samples(0.1, &[0.0, 0.0], &[0.0, 0.2]);
        assert_relative_eq!(traj.max_relative_energy_drift(&p), 0.02, epsilon = 1e-15);
    }

    #[test]
    fn test_energy_drift_relative() {
        let p = Pendulum::normalized();
        // E0 = 0.5, E1 = 0.505
        let phi1 = (2.0_f64 * 0.505).sqrt();
        let traj = from_samples(0.1, &[0.0, 0.0], &[1.0, phi1]);
        assert_relative_eq!(traj.max_relative_energy_drift(&p), 0.01, epsilon = 1e-12);
    }
}
