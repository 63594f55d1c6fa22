//! Configuration validation.
//!
//! Runs once on the merged configuration so bad values fail at load time
//! instead of being silently replaced by accessor fallbacks.

use crate::config::types::DeckConfig;
use crate::dashboard::types::TimeZone;
use crate::errors::ConfigError;
use crate::refresh::types::INTERVAL_PRESETS_SECS;
use crate::timerange::types::RangeSelector;

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] when a set value is not
/// one the dashboard offers.
pub fn validate_config(config: &DeckConfig) -> Result<(), ConfigError> {
    if let Some(interval) = config.refresh.default_interval_secs
        && !INTERVAL_PRESETS_SECS.contains(&interval)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "default_interval_secs {} is not an offered preset ({:?})",
                interval, INTERVAL_PRESETS_SECS
            ),
        });
    }

    if let Some(selector) = &config.dashboard.default_time_range {
        selector
            .parse::<RangeSelector>()
            .map_err(|e| ConfigError::InvalidConfiguration {
                message: e.to_string(),
            })?;
    }

    if let Some(zone) = &config.dashboard.time_zone {
        zone.parse::<TimeZone>()
            .map_err(|e| ConfigError::InvalidConfiguration {
                message: e.to_string(),
            })?;
    }

    Ok(())
}
