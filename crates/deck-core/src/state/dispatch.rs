use tracing::{debug, error, info};

use crate::config::DeckConfig;
use crate::dashboard::operations as dashboard_ops;
use crate::dashboard::types::{Cell, CellKind, Dashboard};
use crate::refresh::coordinator;
use crate::refresh::errors::RefreshError;
use crate::refresh::types::AutoRefreshStatus;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Default Store implementation owning the in-memory dashboard snapshot.
///
/// The snapshot is seeded from the merged `DeckConfig` at construction.
/// Persisting dashboard state is the host application's concern; this
/// store never touches disk on the dispatch path.
pub struct DeckStore {
    dashboard: Dashboard,
}

impl DeckStore {
    pub fn new(config: &DeckConfig) -> Self {
        Self {
            dashboard: Dashboard::from_config(config),
        }
    }

    /// Read-only snapshot of the current dashboard state.
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }
}

impl Store for DeckStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::ChooseTimeRange { range } => {
                let decision = coordinator::decide(&range, &self.dashboard.auto_refresh);
                self.dashboard.time_range = decision.time_range.clone();
                let mut events = vec![Event::TimeRangeChanged {
                    range: decision.time_range,
                }];
                if let Some(status) = decision.status {
                    self.dashboard.auto_refresh.status = status;
                    events.push(Event::AutoRefreshStatusChanged { status });
                }
                Ok(events)
            }
            Command::ChooseAutoRefreshInterval { interval_secs } => {
                self.dashboard.auto_refresh.interval_secs = interval_secs;
                let mut events = vec![Event::AutoRefreshIntervalChanged { interval_secs }];

                // Disabled stays disabled until a relative range re-arms it;
                // otherwise the status follows the interval.
                if self.dashboard.auto_refresh.status != AutoRefreshStatus::Disabled {
                    let status = if interval_secs == 0 {
                        AutoRefreshStatus::Paused
                    } else {
                        AutoRefreshStatus::Active
                    };
                    if status != self.dashboard.auto_refresh.status {
                        self.dashboard.auto_refresh.status = status;
                        events.push(Event::AutoRefreshStatusChanged { status });
                    }
                }
                Ok(events)
            }
            Command::SetAutoRefreshStatus { status } => {
                if status == AutoRefreshStatus::Active
                    && self.dashboard.auto_refresh.interval_secs == 0
                {
                    return Err(DispatchError::Refresh(RefreshError::ActiveRequiresInterval));
                }
                self.dashboard.auto_refresh.status = status;
                Ok(vec![Event::AutoRefreshStatusChanged { status }])
            }
            Command::ManualRefresh => {
                self.dashboard.refresh_generation += 1;
                Ok(vec![Event::DashboardRefreshed {
                    generation: self.dashboard.refresh_generation,
                }])
            }
            Command::RenameDashboard { name } => {
                let name = dashboard_ops::normalize_name(&name)?;
                self.dashboard.name = name.clone();
                Ok(vec![Event::DashboardRenamed { name }])
            }
            Command::AddCell => {
                let cell = Cell::new(CellKind::View);
                let cell_id = cell.id.clone();
                self.dashboard.cells.push(cell);
                Ok(vec![Event::CellAdded { cell_id }])
            }
            Command::AddNote => {
                let cell = Cell::new(CellKind::Note);
                let cell_id = cell.id.clone();
                self.dashboard.cells.push(cell);
                Ok(vec![Event::NoteAdded { cell_id }])
            }
            Command::TogglePresentationMode => {
                self.dashboard.presentation_mode = !self.dashboard.presentation_mode;
                Ok(vec![Event::PresentationModeChanged {
                    enabled: self.dashboard.presentation_mode,
                }])
            }
            Command::ToggleVariablesControlBar => {
                self.dashboard.variables_bar_visible = !self.dashboard.variables_bar_visible;
                Ok(vec![Event::VariablesControlBarToggled {
                    visible: self.dashboard.variables_bar_visible,
                }])
            }
            Command::SetTimeZone { zone } => {
                self.dashboard.time_zone = zone;
                Ok(vec![Event::TimeZoneChanged { zone }])
            }
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}
