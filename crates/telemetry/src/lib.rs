pub mod event;
pub mod events;
pub mod sink;
pub mod topics;

pub use event::{AnalyticsEvent, EventPayload};
pub use events::{ValidationConfigCreated, ValidationConfigDeleted};
pub use sink::{EventSink, MemoryEventSink, NullEventSink, TelemetryError, TracingEventSink};
