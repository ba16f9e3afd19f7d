//! Simulate the reference pendulum and plot θ(t) and φ(t) side by side.
//!
//! Run with:
//!   cargo run --release
//!
//! The plot is written to `pendulum.png`. Set `RUST_LOG=debug` for more
//! detail.

use std::error::Error;

use pendulum_rk4::{simulate, PngRenderer, Renderer, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const OUTPUT: &str = "pendulum.png";

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SimulationConfig::default();
    let trajectory = simulate(&config)?;

    if let Some((t, theta, phi)) = trajectory.last() {
        info!(t, theta, phi, "final state");
    }
    if let Some(period) = trajectory.estimate_period() {
        info!(
            period,
            small_angle = config.pendulum().small_angle_period(),
            "oscillation period"
        );
    }

    let mut renderer = PngRenderer::new(OUTPUT);
    renderer.render(&trajectory.series())?;
    info!(path = OUTPUT, "plot written");

    Ok(())
}
