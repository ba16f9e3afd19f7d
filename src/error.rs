//! Error types
//!
//! The RK4 step itself cannot fail. Errors only arise when a run is set up
//! with unusable parameters or when a renderer cannot draw its output.

use thiserror::Error;

/// Errors raised while setting up or running a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Simulation configuration violates an invariant
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the violated invariant
        message: String,
    },
    /// Invalid arguments passed to the integrator
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the invalid input
        message: String,
    },
}

/// Errors raised by a [`Renderer`](crate::render::Renderer)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Nothing to draw
    #[error("no samples to render")]
    Empty,
    /// A series has different x and y lengths
    #[error("series `{title}` has {x_len} x samples but {y_len} y samples")]
    LengthMismatch {
        /// Series title
        title: String,
        /// Number of x samples
        x_len: usize,
        /// Number of y samples
        y_len: usize,
    },
    /// The drawing backend failed
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SimulationError::InvalidConfig {
            message: "dt must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "invalid configuration: dt must be positive");

        let err = RenderError::LengthMismatch {
            title: "θ".to_string(),
            x_len: 3,
            y_len: 2,
        };
        assert_eq!(err.to_string(), "series `θ` has 3 x samples but 2 y samples");
    }
}
