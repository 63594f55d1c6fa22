use serde::{Deserialize, Serialize};

use crate::dashboard::types::TimeZone;
use crate::refresh::types::AutoRefreshStatus;
use crate::timerange::types::TimeRange;

/// All business state changes that can result from a dispatched command.
///
/// Each variant describes _what happened_, not what should happen. Only
/// successful state changes produce events — failures use the `Result`
/// error channel (`Err(DispatchError)`), not the event stream.
///
/// Events use owned types so they can be serialized, stored, and sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The query time range changed.
    TimeRangeChanged { range: TimeRange },
    /// The auto-refresh status changed.
    AutoRefreshStatusChanged { status: AutoRefreshStatus },
    /// The auto-refresh interval changed.
    AutoRefreshIntervalChanged { interval_secs: u32 },
    /// A manual refresh was requested; `generation` identifies it.
    DashboardRefreshed { generation: u64 },
    /// The dashboard display name changed.
    DashboardRenamed { name: String },
    /// A visualization cell was added.
    CellAdded { cell_id: String },
    /// A note cell was added.
    NoteAdded { cell_id: String },
    /// Presentation mode was turned on or off.
    PresentationModeChanged { enabled: bool },
    /// The variables control bar was shown or hidden.
    VariablesControlBarToggled { visible: bool },
    /// The display time zone changed.
    TimeZoneChanged { zone: TimeZone },
}
