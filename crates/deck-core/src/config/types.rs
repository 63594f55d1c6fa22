//! Configuration type definitions for deck.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [refresh]
//! default_interval_secs = 60
//!
//! [dashboard]
//! default_time_range = "past1h"
//! time_zone = "local"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.deck/config.toml`
/// 2. Project config: `./.deck/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeckConfig {
    /// Auto-refresh defaults for new dashboards
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Dashboard defaults
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Auto-refresh configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RefreshConfig {
    /// Interval in seconds seeded into new dashboards. 0 means manual-only.
    /// Must be one of the offered presets. Default: 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_interval_secs: Option<u32>,
}

/// Dashboard defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// Selector seeded as the initial time range, e.g. "past1h".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_time_range: Option<String>,

    /// Display time zone: "local" or "utc".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}
