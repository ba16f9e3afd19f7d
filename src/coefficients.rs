//! Classical Runge-Kutta 4 Coefficients
//!
//! Butcher tableau for the four-stage explicit method of Kutta (1901):
//!
//! ```text
//!   0  |
//!  1/2 | 1/2
//!  1/2 |  0   1/2
//!   1  |  0    0    1
//! -----+--------------------
//!      | 1/6  1/3  1/3  1/6
//! ```
//!
//! The tableau is strictly sub-diagonal, so each stage only depends on the
//! one before it. Weights are stored as integers over a common divisor so
//! the update reads `y + h * (k1 + 2 k2 + 2 k3 + k4) / 6`.

/// Number of stages in the classical RK4 method
pub const STAGES: usize = 4;

/// Order of the method (global error is O(h^ORDER))
pub const ORDER: u8 = 4;

/// Node coefficients (c_i): stage i is evaluated at t_n + c[i]*h
pub const C: [f64; STAGES] = [
    0.0, // c[0]
    0.5, // c[1] = 1/2
    0.5, // c[2] = 1/2
    1.0, // c[3] = 1
];

/// Sub-diagonal of the Runge-Kutta matrix
///
/// k_i = f(t_n + c_i*h, y_n + h * a[i] * k_{i-1}); a[0] is unused.
pub const A: [f64; STAGES] = [
    0.0, // a[0] (k_0 = f(t_n, y_n))
    0.5, // a[1,0]
    0.5, // a[2,1]
    1.0, // a[3,2]
];

/// Integer stage weights; divide by [`WEIGHT_SUM`] to get b_i
pub const WEIGHTS: [f64; STAGES] = [1.0, 2.0, 2.0, 1.0];

/// Common divisor of [`WEIGHTS`]
pub const WEIGHT_SUM: f64 = 6.0;
