use crate::errors::DeckError;

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Auto-refresh cannot be active with a zero interval")]
    ActiveRequiresInterval,
}

impl DeckError for RefreshError {
    fn error_code(&self) -> &'static str {
        match self {
            RefreshError::ActiveRequiresInterval => "REFRESH_ACTIVE_REQUIRES_INTERVAL",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
