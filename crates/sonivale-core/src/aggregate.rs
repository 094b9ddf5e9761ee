//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for aggregate roots that change state only by applying events.
///
/// Operations record an event, apply it immediately, and buffer it as
/// uncommitted until the caller drains the buffer.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> i64;

    /// Apply an event to mutate internal state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events recorded since the buffer was last cleared.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Clears uncommitted events once the caller has taken them.
    fn clear_uncommitted_events(&mut self);
}
