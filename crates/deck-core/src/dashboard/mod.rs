pub mod errors;
pub mod operations;
pub mod types;

// Re-export commonly used types at module level
pub use errors::DashboardError;
pub use operations::normalize_name;
pub use types::{
    Cell, CellKind, DASHBOARD_NAME_MAX_LENGTH, DEFAULT_DASHBOARD_NAME, Dashboard, TimeZone,
};
