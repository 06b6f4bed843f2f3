//! Least-squares linear trend over a positional series.
//!
//! This is the fit drawn over the monthly totals: value regressed on the
//! row position `x = 0, 1, ..., n - 1`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::series::TimeSeries;

/// Result of a linear trend fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    pub intercept: f64,
    pub slope: f64,
    /// Coefficient of determination (R²)
    pub r_squared: f64,
    pub fitted_values: Vec<f64>,
    pub residuals: Vec<f64>,
}

impl LinearTrend {
    /// Trend value at position `x`, which may lie past the end of the series
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit `value = intercept + slope * index` by ordinary least squares
///
/// # Errors
/// `InvalidArgument` if the series has fewer than two points or contains a
/// non-finite value.
pub fn linear_trend(series: &TimeSeries) -> Result<LinearTrend> {
    let y = series.values();
    let n = y.len();
    if n < 2 {
        return Err(Error::InvalidArgument(format!(
            "a trend line needs at least 2 points, got {}",
            n
        )));
    }
    if let Some(i) = y.iter().position(|v| !v.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "value at position {} is not finite",
            i
        )));
    }

    let n_f = n as f64;
    let x_mean = (n_f - 1.0) / 2.0;
    let y_mean = y.iter().sum::<f64>() / n_f;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &yi) in y.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (yi - y_mean);
        sxx += dx * dx;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let fitted_values: Vec<f64> = (0..n).map(|i| intercept + slope * i as f64).collect();
    let residuals: Vec<f64> = y
        .iter()
        .zip(fitted_values.iter())
        .map(|(&yi, &y_hat)| yi - y_hat)
        .collect();

    let ss_total = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum::<f64>();
    let ss_residual = residuals.iter().map(|&r| r.powi(2)).sum::<f64>();

    // A flat series is fitted exactly by a flat line
    let r_squared = if ss_total == 0.0 {
        1.0
    } else {
        1.0 - ss_residual / ss_total
    };

    log::debug!(
        "linear trend over {} points: intercept = {}, slope = {}, r2 = {}",
        n,
        intercept,
        slope,
        r_squared
    );

    Ok(LinearTrend {
        intercept,
        slope,
        r_squared,
        fitted_values,
        residuals,
    })
}
