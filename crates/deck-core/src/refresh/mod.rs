pub mod coordinator;
pub mod errors;
pub mod types;

// Re-export commonly used types at module level
pub use coordinator::{Decision, decide};
pub use errors::RefreshError;
pub use types::{AutoRefresh, AutoRefreshStatus, INTERVAL_PRESETS_SECS};
