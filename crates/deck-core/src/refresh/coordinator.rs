//! Coordination between time range selection and auto-refresh status.
//!
//! A custom range has nothing live to query against, so selecting one
//! disables auto-refresh. Selecting a relative range while disabled re-arms
//! it: paused when no interval is configured, active otherwise.

use super::types::{AutoRefresh, AutoRefreshStatus};
use crate::timerange::types::TimeRange;

/// Outcome of a time range selection.
///
/// `time_range` always carries the selection. `status` is `Some` only when
/// the selection requires an auto-refresh transition. Consumers must apply
/// the time range before the status.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub time_range: TimeRange,
    pub status: Option<AutoRefreshStatus>,
}

/// Decide the auto-refresh transition for a newly chosen time range.
///
/// Pure function over explicit snapshots; invoked once per selection.
///
/// Policy:
/// - A custom range always disables auto-refresh, whatever the current
///   status or interval.
/// - A relative range while `Disabled` resumes: `Paused` when the interval
///   is 0 (manual), `Active` otherwise.
/// - A relative range while `Active` or `Paused` changes nothing. A paused
///   refresh with a nonzero interval stays paused.
pub fn decide(selected: &TimeRange, current: &AutoRefresh) -> Decision {
    if selected.is_custom() {
        return Decision {
            time_range: selected.clone(),
            status: Some(AutoRefreshStatus::Disabled),
        };
    }

    let status = match current.status {
        AutoRefreshStatus::Disabled => {
            if current.interval_secs == 0 {
                Some(AutoRefreshStatus::Paused)
            } else {
                Some(AutoRefreshStatus::Active)
            }
        }
        AutoRefreshStatus::Active | AutoRefreshStatus::Paused => None,
    };

    Decision {
        time_range: selected.clone(),
        status,
    }
}
