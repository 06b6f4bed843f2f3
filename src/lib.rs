//! # bikeshare
//!
//! Analytics core behind a bike-rental dashboard. The dashboard's summary
//! tables are loaded and rendered elsewhere; this crate computes what the
//! charts show:
//!
//! - [`smoothing`]: simple exponential smoothing of the weekly series with a
//!   fixed 7-step zero-input extrapolation
//! - [`period`]: bimonthly period labels and the weekly-table windows they select
//! - [`weekly`]: typed weekly-table rows, window slicing, series extraction
//! - [`hourly`]: typed hour-of-day rows split by working day
//! - [`trend`]: least-squares trend line for the monthly totals
//! - [`config`]: TOML/JSON configuration
//!
//! All operations are pure functions over caller-owned input.

pub mod config;
pub mod error;
pub mod hourly;
pub mod period;
pub mod series;
pub mod smoothing;
pub mod trend;
pub mod weekly;

// Re-export commonly used types
pub use config::{DashboardConfig, SmoothingConfig};
pub use error::{Error, Result};
pub use hourly::HourlyRecord;
pub use period::{select_window, PeriodLabel, WeeklyWindow};
pub use series::{SmoothedSeries, TimeSeries};
pub use smoothing::{smooth, ExponentialSmoother, HORIZON};
pub use trend::{linear_trend, LinearTrend};
pub use weekly::{cnt_mean_series, slice_window, WeeklyRecord};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
