//! Simple exponential smoothing with a fixed zero-input lookahead.
//!
//! The series is extended with [`HORIZON`] zero-valued samples and run through
//! the first-order recursive filter
//!
//! ```text
//! y_0 = x_0
//! y_t = α x_t + (1 - α) y_{t-1}
//! ```
//!
//! so the last `HORIZON` outputs decay geometrically by `(1 - α)` toward zero.
//! The tail is illustrative only: there is no trend or seasonal term.

use crate::config::SmoothingConfig;
use crate::error::{Error, Result};
use crate::series::{SmoothedSeries, TimeSeries};

/// Number of synthetic future steps appended before smoothing
pub const HORIZON: usize = 7;

/// Smooth `series` with smoothing constant `alpha`
///
/// Returns a freshly allocated series of length `series.len() + HORIZON`.
///
/// # Errors
/// `InvalidArgument` if `series` is empty or `alpha` is not in (0, 1].
///
/// # Example
/// ```rust
/// use bikeshare::smoothing::{smooth, HORIZON};
/// use bikeshare::TimeSeries;
///
/// let weekly = TimeSeries::new(vec![10.0, 10.0, 10.0]);
/// let smoothed = smooth(&weekly, 0.1).unwrap();
/// assert_eq!(smoothed.len(), 3 + HORIZON);
/// assert_eq!(smoothed.fitted(), &[10.0, 10.0, 10.0]);
/// ```
pub fn smooth(series: &TimeSeries, alpha: f64) -> Result<SmoothedSeries> {
    validate_alpha(alpha)?;
    smooth_values(series.values(), alpha)
}

/// Check that `alpha` is finite and in (0, 1]
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
        return Err(Error::InvalidArgument(format!(
            "smoothing constant alpha ({}) must be greater than 0 and at most 1",
            alpha
        )));
    }
    Ok(())
}

fn smooth_values(values: &[f64], alpha: f64) -> Result<SmoothedSeries> {
    let first = *values
        .first()
        .ok_or_else(|| Error::InvalidArgument("cannot smooth an empty series".to_string()))?;

    log::debug!(
        "exponential smoothing: {} points, alpha = {}, horizon = {}",
        values.len(),
        alpha,
        HORIZON
    );

    let inputs = values
        .iter()
        .copied()
        .chain(std::iter::repeat(0.0).take(HORIZON));

    let mut smoothed = Vec::with_capacity(values.len() + HORIZON);
    let mut level = first;
    for (t, x) in inputs.enumerate() {
        if t > 0 {
            level = alpha * x + (1.0 - alpha) * level;
        }
        smoothed.push(level);
    }

    Ok(SmoothedSeries::new(smoothed, values.len()))
}

/// Reusable smoother with a validated smoothing constant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSmoother {
    alpha: f64,
}

impl ExponentialSmoother {
    /// Create a smoother, rejecting alpha outside (0, 1]
    pub fn new(alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        Ok(ExponentialSmoother { alpha })
    }

    /// Create a smoother from configuration
    pub fn from_config(config: &SmoothingConfig) -> Result<Self> {
        Self::new(config.alpha)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smooth a series; see [`smooth`]
    pub fn smooth(&self, series: &TimeSeries) -> Result<SmoothedSeries> {
        smooth_values(series.values(), self.alpha)
    }
}
