//! Two-state first-order ODE systems
//!
//! A system is the pair of scalar right-hand sides
//!
//! ```text
//! dy/dt = f1(t, y, z)
//! dz/dt = f2(t, y, z)
//! ```

/// System of two coupled first-order ODEs
pub trait TwoStateSystem {
    /// Evaluate dy/dt at (t, y, z)
    fn f1(&self, t: f64, y: f64, z: f64) -> f64;

    /// Evaluate dz/dt at (t, y, z)
    fn f2(&self, t: f64, y: f64, z: f64) -> f64;
}

/// A pair of closures `(f1, f2)` is a system.
///
/// ```
/// use pendulum_rk4::rk4_step;
///
/// let decay = (|_t: f64, y: f64, _z: f64| -y, |_t: f64, _y: f64, z: f64| -2.0 * z);
/// let (y1, z1) = rk4_step(&decay, 0.0, 1.0, 1.0, 0.01);
/// assert!(y1 < 1.0 && z1 < y1);
/// ```
impl<F1, F2> TwoStateSystem for (F1, F2)
where
    F1: Fn(f64, f64, f64) -> f64,
    F2: Fn(f64, f64, f64) -> f64,
{
    fn f1(&self, t: f64, y: f64, z: f64) -> f64 {
        (self.0)(t, y, z)
    }

    fn f2(&self, t: f64, y: f64, z: f64) -> f64 {
        (self.1)(t, y, z)
    }
}

impl<S: TwoStateSystem + ?Sized> TwoStateSystem for &S {
    fn f1(&self, t: f64, y: f64, z: f64) -> f64 {
        (**self).f1(t, y, z)
    }

    fn f2(&self, t: f64, y: f64, z: f64) -> f64 {
        (**self).f2(t, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_pair_dispatch() {
        let sys = (|t: f64, y: f64, z: f64| t + y + z, |t: f64, y: f64, z: f64| t * y * z);
        assert_eq!(sys.f1(1.0, 2.0, 3.0), 6.0);
        assert_eq!(sys.f2(1.0, 2.0, 3.0), 6.0);
    }

    #[test]
    fn test_reference_forwards() {
        let sys = (|_t: f64, _y: f64, z: f64| z, |_t: f64, y: f64, _z: f64| -y);
        let by_ref = &sys;
        assert_eq!(TwoStateSystem::f1(&by_ref, 0.0, 1.0, 2.0), 2.0);
        assert_eq!(TwoStateSystem::f2(&by_ref, 0.0, 1.0, 2.0), -1.0);
    }
}
