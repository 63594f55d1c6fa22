use serde::{Deserialize, Serialize};

use crate::dashboard::types::TimeZone;
use crate::refresh::types::AutoRefreshStatus;
use crate::timerange::types::TimeRange;

/// All business operations that can be dispatched through the store.
///
/// Each variant captures the parameters needed to execute the operation.
/// Commands use owned types so they can be serialized, stored, and sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Select a new time range for the dashboard's queries.
    ///
    /// Runs the refresh coordinator: a custom range disables auto-refresh,
    /// a relative range re-arms it when it was disabled.
    ChooseTimeRange { range: TimeRange },
    /// Choose a new auto-refresh interval in seconds. 0 means manual-only.
    ChooseAutoRefreshInterval { interval_secs: u32 },
    /// Set the auto-refresh status directly. Rejects `Active` while the
    /// interval is 0.
    SetAutoRefreshStatus { status: AutoRefreshStatus },
    /// Request an immediate one-off refresh of dashboard data.
    ManualRefresh,
    /// Rename the dashboard. Empty names fall back to the default name.
    RenameDashboard { name: String },
    /// Add an empty visualization cell to the dashboard.
    AddCell,
    /// Add a text note cell to the dashboard.
    AddNote,
    /// Toggle full-screen presentation mode.
    TogglePresentationMode,
    /// Toggle visibility of the variables control bar.
    ToggleVariablesControlBar,
    /// Set the display time zone for visualizations.
    SetTimeZone { zone: TimeZone },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timerange::types::RangeSelector;

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = Command::ChooseTimeRange {
            range: TimeRange::relative(RangeSelector::Past5m),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }

    #[test]
    fn test_parameterless_commands_serialize() {
        for cmd in [
            Command::ManualRefresh,
            Command::AddCell,
            Command::AddNote,
            Command::TogglePresentationMode,
            Command::ToggleVariablesControlBar,
        ] {
            assert!(
                serde_json::to_string(&cmd).is_ok(),
                "Failed to serialize: {:?}",
                cmd
            );
        }
    }
}
