use crate::errors::DeckError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Dashboard name is {length} characters, maximum is {max}")]
    NameTooLong { length: usize, max: usize },

    #[error("Unknown time zone '{name}'. Supported zones: local, utc")]
    UnknownTimeZone { name: String },
}

impl DeckError for DashboardError {
    fn error_code(&self) -> &'static str {
        match self {
            DashboardError::NameTooLong { .. } => "DASHBOARD_NAME_TOO_LONG",
            DashboardError::UnknownTimeZone { .. } => "DASHBOARD_UNKNOWN_TIME_ZONE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
