use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are immutable facts: once published they are never edited, only
/// followed by newer events.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "ordering.order.placed").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
