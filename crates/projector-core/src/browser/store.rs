use super::events::Event;
use super::types::Command;

/// Trait for dispatching browsing commands.
///
/// Decouples command definitions from their execution so interfaces (CLI,
/// tests) can drive the same controller.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit batching.
/// - **Idempotency**: Commands are not idempotent (`LoadProjects` fails on a
///   loaded controller). Callers must avoid duplicate dispatches.
/// - **Error handling**: Implementations define their own error type. Errors
///   should distinguish user errors (invalid input) from system errors
///   (network failure).
/// - **Events**: On success, dispatch returns a `Vec<Event>` describing what
///   changed, ordered chronologically. Callers can use these to react without
///   polling controller state.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
