//! # Configuration System
//!
//! Hierarchical TOML configuration system for deck.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.deck/config.toml` (global user preferences)
//! 3. **Project config** - `./.deck/config.toml` (project-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.deck/config.toml
//! [refresh]
//! default_interval_secs = 60
//!
//! [dashboard]
//! default_time_range = "past1h"
//! time_zone = "local"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use deck_core::config::DeckConfig;
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DeckConfig::load_hierarchy()?;
//!     let selector = config.dashboard.default_time_range();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{DashboardConfig, DeckConfig, RefreshConfig};
pub use validation::validate_config;

// Delegation for DeckConfig methods
impl DeckConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
