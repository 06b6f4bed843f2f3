//! Ordered numeric series consumed and produced by the smoothing pass.

use num_traits::ToPrimitive;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::ops::Index;

use crate::error::{Error, Result};
use crate::smoothing::HORIZON;

/// An ordered sequence of real values, one per time step, indexed from 0.
///
/// The values are fixed at construction; there is no mutable access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from `f64` values
    pub fn new(values: Vec<f64>) -> Self {
        TimeSeries { values }
    }

    /// Create a series from any numeric values (e.g. integer rental counts)
    ///
    /// Fails with `InvalidArgument` if a value cannot be represented as `f64`.
    pub fn from_values<T: ToPrimitive>(values: &[T]) -> Result<Self> {
        let values = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.to_f64().ok_or_else(|| {
                    Error::InvalidArgument(format!("value at position {} is not numeric", i))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(TimeSeries { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

impl From<Vec<f64>> for TimeSeries {
    fn from(values: Vec<f64>) -> Self {
        TimeSeries::new(values)
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl Index<usize> for TimeSeries {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// Output of the smoothing pass: the smoothed observations followed by the
/// extrapolated tail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmoothedSeries {
    values: Vec<f64>,
    /// Number of leading values that correspond to observed input
    observed_len: usize,
}

#[derive(Deserialize)]
struct SmoothedParts {
    values: Vec<f64>,
    observed_len: usize,
}

impl<'de> Deserialize<'de> for SmoothedSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = SmoothedParts::deserialize(deserializer)?;
        SmoothedSeries::from_parts(parts.values, parts.observed_len).map_err(de::Error::custom)
    }
}

impl SmoothedSeries {
    pub(crate) fn new(values: Vec<f64>, observed_len: usize) -> Self {
        debug_assert!(observed_len > 0 && values.len() == observed_len + HORIZON);
        SmoothedSeries {
            values,
            observed_len,
        }
    }

    /// Rebuild a smoothed series from its values and observed length
    ///
    /// Fails with `InvalidArgument` unless `observed_len` is positive and
    /// `values` holds exactly `observed_len + HORIZON` entries.
    pub fn from_parts(values: Vec<f64>, observed_len: usize) -> Result<Self> {
        if observed_len == 0 || values.len() != observed_len + HORIZON {
            return Err(Error::InvalidArgument(format!(
                "{} values cannot hold {} observations plus a {}-step tail",
                values.len(),
                observed_len,
                HORIZON
            )));
        }
        Ok(SmoothedSeries {
            values,
            observed_len,
        })
    }

    /// Total length (observed + horizon)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values, observed part first
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Length of the input series this was produced from
    pub fn observed_len(&self) -> usize {
        self.observed_len
    }

    /// Smoothed values aligned with the input series
    pub fn fitted(&self) -> &[f64] {
        &self.values[..self.observed_len]
    }

    /// Extrapolated values past the end of the input series
    pub fn forecast(&self) -> &[f64] {
        &self.values[self.observed_len..]
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for SmoothedSeries {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl Index<usize> for SmoothedSeries {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
