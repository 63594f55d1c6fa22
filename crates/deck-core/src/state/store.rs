use super::events::Event;
use super::types::Command;

/// Trait for dispatching business commands.
///
/// Decouples command definitions from their execution. Presentation
/// surfaces (UI, CLI) implement or wrap this trait to execute commands
/// with their specific needs.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit
///   batching. Events within a single dispatch are ordered chronologically;
///   in particular `ChooseTimeRange` emits the time-range event before any
///   auto-refresh status event.
/// - **Idempotency**: Commands are not idempotent (e.g., `AddCell` creates
///   a new cell each time, `TogglePresentationMode` flips the flag).
///   Callers must avoid duplicate dispatches.
/// - **Error handling**: Implementations define their own error type.
///   Errors should distinguish user errors (invalid input) from system
///   errors.
/// - **Events**: On success, dispatch returns a non-empty `Vec<Event>`
///   describing what changed. Each command produces one or two events.
///   Callers can use these to react without polling or snapshot diffing.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_trait_is_implementable() {
        struct TestStore;
        impl Store for TestStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Ok(vec![Event::DashboardRefreshed { generation: 1 }])
            }
        }
        let mut store = TestStore;
        let result = store.dispatch(Command::ManualRefresh);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[test]
    fn test_store_impl_can_return_error() {
        struct FailingStore;
        impl Store for FailingStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Err("not implemented".to_string())
            }
        }
        let mut store = FailingStore;
        assert!(store.dispatch(Command::ManualRefresh).is_err());
    }
}
