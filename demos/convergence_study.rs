//! Step-size refinement study for the reference pendulum.
//!
//! Halves dt repeatedly at a fixed end time and prints the endpoint error
//! against a fine reference. The ratio between successive rows should
//! approach 2⁴ = 16.
//!
//! Run with:
//!   cargo run --example convergence_study

use pendulum_rk4::{Pendulum, Rk4};

fn main() {
    let pendulum = Pendulum::normalized();
    let y0 = (std::f64::consts::FRAC_PI_4, 0.0);
    let tf = 10.0;

    let mut reference = Rk4::new(1e-4);
    let (_, theta_ref, phi_ref) = reference.integrate(&pendulum, 0.0, y0, tf).unwrap();

    println!("Pendulum RK4 convergence (θ0 = π/4, tf = {tf})");
    println!("  reference: θ = {theta_ref:.15}, φ = {phi_ref:.15}");
    println!();
    println!("  {:>8}  {:>12}  {:>8}", "dt", "error", "ratio");

    let mut previous: Option<f64> = None;
    for &dt in &[0.2, 0.1, 0.05, 0.025, 0.0125] {
        let mut solver = Rk4::new(dt);
        let (_, theta, phi) = solver.integrate(&pendulum, 0.0, y0, tf).unwrap();
        let err = ((theta - theta_ref).powi(2) + (phi - phi_ref).powi(2)).sqrt();

        match previous {
            Some(prev) => println!("  {dt:>8.4}  {err:>12.3e}  {:>8.2}", prev / err),
            None => println!("  {dt:>8.4}  {err:>12.3e}  {:>8}", "-"),
        }
        previous = Some(err);
    }
}
