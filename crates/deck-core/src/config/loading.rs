//! Configuration loading and merging logic.
//!
//! This module handles loading configuration from files and merging
//! configurations from different sources (user config, project config).
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.deck/config.toml` (global user preferences)
//! 3. **Project config** - `./.deck/config.toml` (project-specific overrides)

use std::fs;
use std::path::PathBuf;

use crate::config::types::{DashboardConfig, DeckConfig, RefreshConfig};
use crate::config::validation::validate_config;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.deck/config.toml`)
/// 3. Project config (`./.deck/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<DeckConfig, Box<dyn std::error::Error>> {
    let mut config = DeckConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.deck/config.toml.
fn load_user_config() -> Result<DeckConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".deck").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.deck/config.toml.
fn load_project_config() -> Result<DeckConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".deck").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<DeckConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: DeckConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional values replace base values only if present.
pub fn merge_configs(base: DeckConfig, override_config: DeckConfig) -> DeckConfig {
    DeckConfig {
        refresh: RefreshConfig {
            default_interval_secs: override_config
                .refresh
                .default_interval_secs
                .or(base.refresh.default_interval_secs),
        },
        dashboard: DashboardConfig {
            default_time_range: override_config
                .dashboard
                .default_time_range
                .or(base.dashboard.default_time_range),
            time_zone: override_config.dashboard.time_zone.or(base.dashboard.time_zone),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_file_parses_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[refresh]
default_interval_secs = 60

[dashboard]
default_time_range = "past6h"
"#,
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.refresh.default_interval_secs, Some(60));
        assert_eq!(
            config.dashboard.default_time_range,
            Some("past6h".to_string())
        );
        assert_eq!(config.dashboard.time_zone, None);
    }

    #[test]
    fn test_load_config_file_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config_file(&temp_dir.path().join("missing.toml"));
        assert!(result.is_err());
        assert!(is_file_not_found(result.unwrap_err().as_ref()));
    }

    #[test]
    fn test_load_config_file_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "invalid toml [[[").unwrap();

        let result = load_config_file(&config_path);
        assert!(result.is_err());
        assert!(!is_file_not_found(result.unwrap_err().as_ref()));
    }

    #[test]
    fn test_merge_configs_override_wins() {
        let user: DeckConfig = toml::from_str(
            r#"
[refresh]
default_interval_secs = 60

[dashboard]
default_time_range = "past1h"
time_zone = "local"
"#,
        )
        .unwrap();
        let project: DeckConfig = toml::from_str(
            r#"
[dashboard]
default_time_range = "past24h"
"#,
        )
        .unwrap();

        let merged = merge_configs(user, project);
        assert_eq!(
            merged.dashboard.default_time_range,
            Some("past24h".to_string())
        ); // Overridden by project
        assert_eq!(merged.refresh.default_interval_secs, Some(60)); // From user
        assert_eq!(merged.dashboard.time_zone, Some("local".to_string())); // From user
    }

    #[test]
    fn test_merge_configs_unset_keeps_base() {
        let base: DeckConfig = toml::from_str(
            r#"
[refresh]
default_interval_secs = 30
"#,
        )
        .unwrap();
        let merged = merge_configs(base, DeckConfig::default());
        assert_eq!(merged.refresh.default_interval_secs, Some(30));
    }

    #[test]
    fn test_toml_parsing_edge_cases() {
        // Test empty config
        let empty_config: DeckConfig = toml::from_str("").unwrap();
        assert_eq!(empty_config.refresh.default_interval_secs, None);

        // Test partial config
        let partial_config: DeckConfig = toml::from_str(
            r#"
[dashboard]
time_zone = "utc"
"#,
        )
        .unwrap();
        assert_eq!(partial_config.refresh.default_interval_secs, None);
        assert_eq!(partial_config.dashboard.time_zone, Some("utc".to_string()));

        // Test invalid TOML should fail
        let invalid_result: Result<DeckConfig, _> = toml::from_str("invalid toml [[[");
        assert!(invalid_result.is_err());
    }
}
