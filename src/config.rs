//! Configuration for the analytics core.
//!
//! Configuration can be read from TOML or JSON. Missing fields take their
//! defaults, so an empty document yields the dashboard's stock settings.
//!
//! ```toml
//! [smoothing]
//! alpha = 0.1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::smoothing::validate_alpha;

/// Smoothing constant used by the weekly trend chart
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Settings for the exponential smoothing pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Weight on the newest observation, in (0, 1]
    pub alpha: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        SmoothingConfig {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl SmoothingConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        self.alpha = alpha;
        Ok(self)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub smoothing: SmoothingConfig,
}

impl DashboardConfig {
    /// Parse and validate configuration from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: DashboardConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a JSON document
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.smoothing.alpha)
    }
}
