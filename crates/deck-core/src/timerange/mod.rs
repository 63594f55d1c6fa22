pub mod errors;
pub mod types;

// Re-export commonly used types at module level
pub use errors::TimeRangeError;
pub use types::{RangeSelector, SELECTABLE_RANGES, TimeRange};
