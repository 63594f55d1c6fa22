use std::fmt;

use serde::{Deserialize, Serialize};

/// Interval presets offered by the auto-refresh dropdown, in seconds.
/// 0 means manual-only refresh.
pub const INTERVAL_PRESETS_SECS: [u32; 8] = [0, 5, 10, 15, 30, 60, 300, 900];

/// Whether periodic re-querying of dashboard data is currently happening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoRefreshStatus {
    /// Re-querying on the configured interval.
    Active,
    /// Auto-refresh is unavailable while a custom time range is selected.
    Disabled,
    /// Auto-refresh is off; only manual refresh runs.
    Paused,
}

impl fmt::Display for AutoRefreshStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AutoRefreshStatus::Active => "active",
            AutoRefreshStatus::Disabled => "disabled",
            AutoRefreshStatus::Paused => "paused",
        };
        f.write_str(s)
    }
}

/// Auto-refresh state owned by the host application's store.
///
/// The refresh coordinator reads this but never mutates it directly; status
/// changes flow back through the store as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRefresh {
    pub status: AutoRefreshStatus,
    /// Refresh period in seconds. 0 means manual-only.
    pub interval_secs: u32,
}

impl Default for AutoRefresh {
    fn default() -> Self {
        Self {
            status: AutoRefreshStatus::Paused,
            interval_secs: 0,
        }
    }
}

impl AutoRefresh {
    /// Returns true if refresh only happens on explicit user request.
    pub fn is_manual(&self) -> bool {
        self.interval_secs == 0
    }
}
