//! Rendering of time series
//!
//! The integrator never draws anything itself. A finished trajectory is
//! handed to a [`Renderer`] as a list of [`Series`]; [`PngRenderer`] draws
//! them side by side with plotters.

use crate::error::RenderError;

#[cfg(feature = "plot")]
pub use png::PngRenderer;

/// One line plot: y against x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series<'a> {
    /// Panel caption
    pub title: &'a str,
    /// Horizontal samples
    pub x: &'a [f64],
    /// Vertical samples
    pub y: &'a [f64],
    /// Horizontal axis label
    pub x_label: &'a str,
    /// Vertical axis label
    pub y_label: &'a str,
}

impl<'a> Series<'a> {
    /// Unlabelled series
    pub fn new(title: &'a str, x: &'a [f64], y: &'a [f64]) -> Self {
        Self {
            title,
            x,
            y,
            x_label: "",
            y_label: "",
        }
    }

    /// Set the axis labels
    pub fn with_labels(mut self, x_label: &'a str, y_label: &'a str) -> Self {
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }

    /// (min, max) over the finite samples of `values`
    ///
    /// Degenerate or empty ranges are widened so they can be drawn.
    fn bounds(values: &[f64], pad_fraction: f64) -> (f64, f64) {
        let (lo, hi) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if lo > hi {
            return (-1.0, 1.0);
        }
        if lo == hi {
            return (lo - 1.0, hi + 1.0);
        }
        let pad = pad_fraction * (hi - lo);
        (lo - pad, hi + pad)
    }

    /// Horizontal plotting range
    pub fn x_range(&self) -> (f64, f64) {
        Self::bounds(self.x, 0.0)
    }

    /// Vertical plotting range, padded by 5%
    pub fn y_range(&self) -> (f64, f64) {
        Self::bounds(self.y, 0.05)
    }
}

/// Consumer of finished series
pub trait Renderer {
    /// Draw every series
    fn render(&mut self, series: &[Series<'_>]) -> Result<(), RenderError>;
}

/// Reject empty input and series whose x and y lengths differ
pub fn check_series(series: &[Series<'_>]) -> Result<(), RenderError> {
    if series.is_empty() {
        return Err(RenderError::Empty);
    }
    for s in series {
        if s.x.len() != s.y.len() {
            return Err(RenderError::LengthMismatch {
                title: s.title.to_string(),
                x_len: s.x.len(),
                y_len: s.y.len(),
            });
        }
        if s.x.is_empty() {
            return Err(RenderError::Empty);
        }
    }
    Ok(())
}

#[cfg(feature = "plot")]
mod png {
    use std::path::{Path, PathBuf};

    use plotters::prelude::*;
    use tracing::debug;

    use super::{check_series, Renderer, Series};
    use crate::error::RenderError;

    fn backend_error<E: std::fmt::Display>(err: E) -> RenderError {
        RenderError::Backend(err.to_string())
    }

    /// Draws series into side-by-side panels of a PNG image
    #[derive(Debug, Clone)]
    pub struct PngRenderer {
        path: PathBuf,
        size: (u32, u32),
    }

    impl PngRenderer {
        /// Default canvas size in pixels
        pub const DEFAULT_SIZE: (u32, u32) = (1000, 400);

        /// Render to `path` with the default canvas size
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
                size: Self::DEFAULT_SIZE,
            }
        }

        /// Set the canvas size in pixels
        pub fn with_size(mut self, width: u32, height: u32) -> Self {
            self.size = (width, height);
            self
        }

        /// Output file
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Renderer for PngRenderer {
        fn render(&mut self, series: &[Series<'_>]) -> Result<(), RenderError> {
            check_series(series)?;

            let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(backend_error)?;

            let panels = root.split_evenly((1, series.len()));
            for (panel, s) in panels.iter().zip(series) {
                let (x_min, x_max) = s.x_range();
                let (y_min, y_max) = s.y_range();

                let mut chart = ChartBuilder::on(panel)
                    .caption(s.title, ("sans-serif", 20))
                    .margin(10)
                    .x_label_area_size(35)
                    .y_label_area_size(50)
                    .build_cartesian_2d(x_min..x_max, y_min..y_max)
                    .map_err(backend_error)?;

                chart
                    .configure_mesh()
                    .x_desc(s.x_label)
                    .y_desc(s.y_label)
                    .draw()
                    .map_err(backend_error)?;

                let points = s
                    .x
                    .iter()
                    .copied()
                    .zip(s.y.iter().copied())
                    .filter(|(x, y)| x.is_finite() && y.is_finite());
                chart
                    .draw_series(LineSeries::new(points, &BLUE))
                    .map_err(backend_error)?;
            }

            root.present().map_err(backend_error)?;
            debug!(path = %self.path.display(), panels = series.len(), "rendered plot");
            Ok(())
        }
    }
}
