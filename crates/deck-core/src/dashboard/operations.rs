use super::errors::DashboardError;
use super::types::{DASHBOARD_NAME_MAX_LENGTH, DEFAULT_DASHBOARD_NAME};

/// Normalize a requested dashboard name.
///
/// Whitespace is trimmed and an empty result falls back to the default
/// name. Names over [`DASHBOARD_NAME_MAX_LENGTH`] characters are rejected
/// rather than silently truncated.
pub fn normalize_name(raw: &str) -> Result<String, DashboardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_DASHBOARD_NAME.to_string());
    }

    let length = trimmed.chars().count();
    if length > DASHBOARD_NAME_MAX_LENGTH {
        return Err(DashboardError::NameTooLong {
            length,
            max: DASHBOARD_NAME_MAX_LENGTH,
        });
    }

    Ok(trimmed.to_string())
}
