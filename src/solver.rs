//! Classical Runge-Kutta 4 Integrator
//!
//! Fixed-step, four-stage explicit scheme for two-state ODE systems.
//! Local truncation error is O(h⁵), global error O(h⁴).
//!
//! There is no error control: the step size is chosen once and used for
//! every step. Non-finite values produced by the right-hand side are not
//! trapped and propagate into all later states.

use tracing::debug;

use crate::coefficients::{A, C, STAGES, WEIGHTS, WEIGHT_SUM};
use crate::error::SimulationError;
use crate::system::TwoStateSystem;

/// Advance the state (y0, z0) at time t0 by one RK4 step of size `dt`
///
/// ```text
/// k1 = f1(t0, y0, z0)                              l1 = f2(...)
/// k2 = f1(t0 + dt/2, y0 + dt k1/2, z0 + dt l1/2)   l2 = f2(...)
/// k3 = f1(t0 + dt/2, y0 + dt k2/2, z0 + dt l2/2)   l3 = f2(...)
/// k4 = f1(t0 + dt,   y0 + dt k3,   z0 + dt l3)     l4 = f2(...)
/// y1 = y0 + dt (k1 + 2 k2 + 2 k3 + k4) / 6
/// z1 = z0 + dt (l1 + 2 l2 + 2 l3 + l4) / 6
/// ```
///
/// Pure: the result depends only on the arguments.
#[allow(clippy::needless_range_loop)]
pub fn rk4_step<S: TwoStateSystem + ?Sized>(
    sys: &S,
    t0: f64,
    y0: f64,
    z0: f64,
    dt: f64,
) -> (f64, f64) {
    let mut k = [0.0; STAGES];
    let mut l = [0.0; STAGES];

    // Stage 0 at the start of the interval
    k[0] = sys.f1(t0, y0, z0);
    l[0] = sys.f2(t0, y0, z0);

    // Stages 1-3, each built from the previous stage only
    for i in 1..STAGES {
        let t = t0 + C[i] * dt;
        let y = y0 + dt * A[i] * k[i - 1];
        let z = z0 + dt * A[i] * l[i - 1];
        k[i] = sys.f1(t, y, z);
        l[i] = sys.f2(t, y, z);
    }

    let mut dy = 0.0;
    let mut dz = 0.0;
    for i in 0..STAGES {
        dy += WEIGHTS[i] * k[i];
        dz += WEIGHTS[i] * l[i];
    }

    (y0 + dt * dy / WEIGHT_SUM, z0 + dt * dz / WEIGHT_SUM)
}

/// Relative slack when counting whole steps in a span
///
/// Absorbs quotients such as `0.3 / 0.1 = 2.9999999999999996`.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Number of whole steps of size `dt` that fit in `span`, as a float
///
/// Truncates, so the last step never passes the end of the span. Callers
/// compare the result against their limit before converting to an integer.
pub(crate) fn whole_steps(span: f64, dt: f64) -> f64 {
    (span / dt * (1.0 + STEP_COUNT_TOLERANCE)).floor()
}

/// Integration statistics for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of (f1, f2) pair evaluations
    pub fn_evals: u64,
    /// Number of steps taken
    pub steps: u64,
}

/// Fixed-step RK4 integrator
///
/// # Example
/// ```
/// use pendulum_rk4::{Pendulum, Rk4};
///
/// let mut solver = Rk4::new(0.01);
/// let (theta, phi) = solver.step(&Pendulum::normalized(), 0.0, 0.5, 0.0);
/// assert!(theta < 0.5 && phi < 0.0);
/// assert_eq!(solver.stats.steps, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Rk4 {
    /// Step size, fixed for the lifetime of the solver
    dt: f64,
    /// Maximum number of steps a single `integrate` call may take
    pub max_steps: u64,
    /// Integration statistics
    pub stats: Stats,
}

impl Rk4 {
    /// Create a solver with step size `dt`
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            max_steps: 10_000_000,
            stats: Stats::default(),
        }
    }

    /// Perform a single step from (t, y, z)
    pub fn step<S: TwoStateSystem + ?Sized>(
        &mut self,
        sys: &S,
        t: f64,
        y: f64,
        z: f64,
    ) -> (f64, f64) {
        self.stats.fn_evals += STAGES as u64;
        self.stats.steps += 1;
        rk4_step(sys, t, y, z, self.dt)
    }

    /// Integrate from t0 to tf with the fixed step size
    ///
    /// Takes as many whole steps as fit in `tf - t0`; step i starts at
    /// `t0 + i * dt`. When the span is not a multiple of dt the run stops at
    /// the last grid point before `tf`, so `t_final <= tf`.
    ///
    /// # Returns
    /// * `Ok((t_final, y_final, z_final))` on success
    /// * `Err(SimulationError::InvalidInput)` for a non-positive step size,
    ///   non-finite inputs, `tf < t0`, or more than `max_steps` steps
    pub fn integrate<S: TwoStateSystem + ?Sized>(
        &mut self,
        sys: &S,
        t0: f64,
        state: (f64, f64),
        tf: f64,
    ) -> Result<(f64, f64, f64), SimulationError> {
        self.validate_inputs(t0, state, tf)?;

        let steps = whole_steps(tf - t0, self.dt) as u64;
        debug!(t0, tf, dt = self.dt, steps, "fixed-step integration");

        let (mut y, mut z) = state;
        for i in 0..steps {
            let t = t0 + i as f64 * self.dt;
            (y, z) = self.step(sys, t, y, z);
        }

        Ok((t0 + steps as f64 * self.dt, y, z))
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    fn validate_inputs(
        &self,
        t0: f64,
        state: (f64, f64),
        tf: f64,
    ) -> Result<(), SimulationError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::InvalidInput {
                message: format!("step size must be positive and finite, got {}", self.dt),
            });
        }
        if !t0.is_finite() || !tf.is_finite() {
            return Err(SimulationError::InvalidInput {
                message: "t0 and tf must be finite".to_string(),
            });
        }
        if tf < t0 {
            return Err(SimulationError::InvalidInput {
                message: format!("tf ({}) precedes t0 ({})", tf, t0),
            });
        }
        if !state.0.is_finite() || !state.1.is_finite() {
            return Err(SimulationError::InvalidInput {
                message: "initial state must be finite".to_string(),
            });
        }
        let steps = whole_steps(tf - t0, self.dt);
        if steps > self.max_steps as f64 {
            return Err(SimulationError::InvalidInput {
                message: format!(
                    "{} steps of {} exceed the limit of {}",
                    steps, self.dt, self.max_steps
                ),
            });
        }
        Ok(())
    }
}
