pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

// Re-export commonly used types at module level
pub use dispatch::DeckStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
