use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::errors::TimeRangeError;

/// Relative windows offered by the time range dropdown, in display order.
pub const SELECTABLE_RANGES: [RangeSelector; 9] = [
    RangeSelector::Past5m,
    RangeSelector::Past15m,
    RangeSelector::Past1h,
    RangeSelector::Past6h,
    RangeSelector::Past12h,
    RangeSelector::Past24h,
    RangeSelector::Past2d,
    RangeSelector::Past7d,
    RangeSelector::Past30d,
];

/// A named live window anchored to the current moment.
///
/// Selectors are the closed set of relative ranges the dashboard offers.
/// Each derives a query lower bound, an open upper bound, and a window
/// duration; the wire name (`"past5m"`) is used in config files and
/// serialized commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSelector {
    Past5m,
    Past15m,
    Past1h,
    Past6h,
    Past12h,
    Past24h,
    Past2d,
    Past7d,
    Past30d,
}

impl RangeSelector {
    /// Wire name of the selector, e.g. `"past5m"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeSelector::Past5m => "past5m",
            RangeSelector::Past15m => "past15m",
            RangeSelector::Past1h => "past1h",
            RangeSelector::Past6h => "past6h",
            RangeSelector::Past12h => "past12h",
            RangeSelector::Past24h => "past24h",
            RangeSelector::Past2d => "past2d",
            RangeSelector::Past7d => "past7d",
            RangeSelector::Past30d => "past30d",
        }
    }

    /// Query lower bound expression for this window.
    pub fn lower(&self) -> &'static str {
        match self {
            RangeSelector::Past5m => "now() - 5m",
            RangeSelector::Past15m => "now() - 15m",
            RangeSelector::Past1h => "now() - 1h",
            RangeSelector::Past6h => "now() - 6h",
            RangeSelector::Past12h => "now() - 12h",
            RangeSelector::Past24h => "now() - 24h",
            RangeSelector::Past2d => "now() - 2d",
            RangeSelector::Past7d => "now() - 7d",
            RangeSelector::Past30d => "now() - 30d",
        }
    }

    /// Human-readable label for dropdown display.
    pub fn label(&self) -> &'static str {
        match self {
            RangeSelector::Past5m => "Past 5m",
            RangeSelector::Past15m => "Past 15m",
            RangeSelector::Past1h => "Past 1h",
            RangeSelector::Past6h => "Past 6h",
            RangeSelector::Past12h => "Past 12h",
            RangeSelector::Past24h => "Past 24h",
            RangeSelector::Past2d => "Past 2d",
            RangeSelector::Past7d => "Past 7d",
            RangeSelector::Past30d => "Past 30d",
        }
    }

    /// Width of the window.
    pub fn window(&self) -> Duration {
        match self {
            RangeSelector::Past5m => Duration::minutes(5),
            RangeSelector::Past15m => Duration::minutes(15),
            RangeSelector::Past1h => Duration::hours(1),
            RangeSelector::Past6h => Duration::hours(6),
            RangeSelector::Past12h => Duration::hours(12),
            RangeSelector::Past24h => Duration::hours(24),
            RangeSelector::Past2d => Duration::days(2),
            RangeSelector::Past7d => Duration::days(7),
            RangeSelector::Past30d => Duration::days(30),
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelector {
    type Err = TimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SELECTABLE_RANGES
            .iter()
            .find(|selector| selector.as_str() == s)
            .copied()
            .ok_or_else(|| TimeRangeError::UnknownSelector {
                name: s.to_string(),
            })
    }
}

/// The window of time a dashboard's visualizations query against.
///
/// Either a relative/live window or a fixed custom interval. Immutable
/// value; the store owns the current selection and hands out snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimeRange {
    /// Live window anchored to now.
    Relative { selector: RangeSelector },
    /// Fixed interval with absolute bounds.
    Custom {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl TimeRange {
    pub fn relative(selector: RangeSelector) -> Self {
        TimeRange::Relative { selector }
    }

    /// Create a fixed interval. The start must be strictly before the end.
    pub fn custom(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if start >= end {
            return Err(TimeRangeError::InvertedBounds { start, end });
        }
        Ok(TimeRange::Custom { start, end })
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, TimeRange::Custom { .. })
    }

    /// Query lower bound for this range.
    pub fn lower(&self) -> String {
        match self {
            TimeRange::Relative { selector } => selector.lower().to_string(),
            TimeRange::Custom { start, .. } => start.to_rfc3339(),
        }
    }

    /// Query upper bound. Open (`None`) for live windows.
    pub fn upper(&self) -> Option<String> {
        match self {
            TimeRange::Relative { .. } => None,
            TimeRange::Custom { end, .. } => Some(end.to_rfc3339()),
        }
    }

    /// Width of the queried window.
    pub fn window(&self) -> Duration {
        match self {
            TimeRange::Relative { selector } => selector.window(),
            TimeRange::Custom { start, end } => *end - *start,
        }
    }
}
