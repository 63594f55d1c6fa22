use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DashboardError;
use crate::config::DeckConfig;
use crate::refresh::types::{AutoRefresh, AutoRefreshStatus};
use crate::timerange::types::TimeRange;

/// Fallback display name for dashboards that have not been named yet.
pub const DEFAULT_DASHBOARD_NAME: &str = "Name this Dashboard";

/// Maximum length of a dashboard display name, in characters.
pub const DASHBOARD_NAME_MAX_LENGTH: usize = 90;

/// Display time zone for dashboard visualizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeZone {
    #[default]
    Local,
    Utc,
}

impl TimeZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeZone::Local => "local",
            TimeZone::Utc => "utc",
        }
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeZone {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(TimeZone::Local),
            "utc" => Ok(TimeZone::Utc),
            other => Err(DashboardError::UnknownTimeZone {
                name: other.to_string(),
            }),
        }
    }
}

/// What a cell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// A query-backed visualization.
    View,
    /// A text-only note.
    Note,
}

/// One visualization slot on a dashboard. A note is a cell too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub id: String,
    pub kind: CellKind,
}

impl Cell {
    /// Create a cell with a fresh id.
    pub fn new(kind: CellKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
        }
    }
}

/// In-memory dashboard snapshot owned by the store.
///
/// Presentation surfaces read this; all mutation goes through command
/// dispatch. Persisting the snapshot is the host application's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub name: String,
    pub time_range: TimeRange,
    pub auto_refresh: AutoRefresh,
    pub time_zone: TimeZone,
    pub presentation_mode: bool,
    pub variables_bar_visible: bool,
    pub cells: Vec<Cell>,
    /// Monotonic marker for the latest manual refresh request. Hosts key
    /// re-queries off this without the store doing any I/O.
    pub refresh_generation: u64,
}

impl Dashboard {
    /// Seed a dashboard from the merged configuration.
    pub fn from_config(config: &DeckConfig) -> Self {
        let interval_secs = config.refresh.default_interval_secs();
        let status = if interval_secs == 0 {
            AutoRefreshStatus::Paused
        } else {
            AutoRefreshStatus::Active
        };

        Self {
            name: DEFAULT_DASHBOARD_NAME.to_string(),
            time_range: TimeRange::relative(config.dashboard.default_time_range()),
            auto_refresh: AutoRefresh {
                status,
                interval_secs,
            },
            time_zone: config.dashboard.time_zone(),
            presentation_mode: false,
            variables_bar_visible: false,
            cells: Vec::new(),
            refresh_generation: 0,
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::from_config(&DeckConfig::default())
    }
}
