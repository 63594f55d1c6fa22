use crate::dashboard::errors::DashboardError;
use crate::errors::DeckError;
use crate::refresh::errors::RefreshError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Refresh(#[from] RefreshError),
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl DeckError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Refresh(e) => e.error_code(),
            DispatchError::Dashboard(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Refresh(e) => e.is_user_error(),
            DispatchError::Dashboard(e) => e.is_user_error(),
        }
    }
}
