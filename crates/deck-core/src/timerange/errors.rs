use chrono::{DateTime, Utc};

use crate::errors::DeckError;

#[derive(Debug, thiserror::Error)]
pub enum TimeRangeError {
    #[error("Unknown time range selector '{name}'")]
    UnknownSelector { name: String },

    #[error("Custom range bounds are inverted: start {start} is not before end {end}")]
    InvertedBounds {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl DeckError for TimeRangeError {
    fn error_code(&self) -> &'static str {
        match self {
            TimeRangeError::UnknownSelector { .. } => "TIMERANGE_UNKNOWN_SELECTOR",
            TimeRangeError::InvertedBounds { .. } => "TIMERANGE_INVERTED_BOUNDS",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
