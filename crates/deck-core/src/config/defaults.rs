//! Default accessors for configuration types.
//!
//! Config fields stay `Option` so merging can tell "unset" from "set to
//! the default"; these accessors resolve the documented fallbacks.

use crate::config::types::{DashboardConfig, RefreshConfig};
use crate::dashboard::types::TimeZone;
use crate::timerange::types::RangeSelector;

impl RefreshConfig {
    /// Returns the seeded interval in seconds, defaulting to 0 (manual).
    pub fn default_interval_secs(&self) -> u32 {
        self.default_interval_secs.unwrap_or(0)
    }
}

impl DashboardConfig {
    /// Returns the initial range selector, defaulting to the past hour.
    ///
    /// An unparsable value falls back to the default; validation rejects
    /// it before a merged config reaches this accessor.
    pub fn default_time_range(&self) -> RangeSelector {
        self.default_time_range
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(RangeSelector::Past1h)
    }

    /// Returns the display time zone, defaulting to local.
    pub fn time_zone(&self) -> TimeZone {
        self.time_zone
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}
