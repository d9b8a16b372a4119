//! Domain event contract.

use chrono::{DateTime, Utc};

/// A fact that happened in the domain.
///
/// Events are immutable and carry the timestamp at which the decision was taken.
pub trait Event: Clone + core::fmt::Debug {
    /// Stable, dotted event type name (e.g. `household.item.created`).
    fn event_type(&self) -> &'static str;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
