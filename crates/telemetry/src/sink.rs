use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::event::AnalyticsEvent;

/// Errors a sink implementation may report.
///
/// Callers treat submission as best-effort: a failed submit is logged and
/// swallowed, never propagated into the operation that produced the event.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("event sink rejected event: {0}")]
    Sink(String),
}

/// Receives analytics events, fire-and-forget.
///
/// Implementations must not block the caller on delivery and must not panic;
/// delivery failure is reported through the `Result` so the caller can log it.
pub trait EventSink: Send + Sync {
    /// Submit a single event.
    fn submit(&self, event: AnalyticsEvent) -> Result<(), TelemetryError>;
}

/// Blanket implementation so `Arc<dyn EventSink>` can be used directly.
impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn submit(&self, event: AnalyticsEvent) -> Result<(), TelemetryError> {
        (**self).submit(event)
    }
}

/// Sink that writes events to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn submit(&self, event: AnalyticsEvent) -> Result<(), TelemetryError> {
        match serde_json::to_string(&event.payload) {
            Ok(payload) => info!(
                topic = %event.topic,
                correlation_id = %event.correlation_id,
                %payload,
                "analytics event"
            ),
            Err(e) => return Err(TelemetryError::Sink(e.to_string())),
        }
        Ok(())
    }
}

/// Sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn submit(&self, event: AnalyticsEvent) -> Result<(), TelemetryError> {
        debug!(topic = %event.topic, "event discarded");
        Ok(())
    }
}

/// Sink that buffers events in memory; used by tests to assert emission.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events submitted so far.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Drain and return the buffered events.
    pub fn take(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|mut e| std::mem::take(&mut *e))
            .unwrap_or_default()
    }
}

impl EventSink for MemoryEventSink {
    fn submit(&self, event: AnalyticsEvent) -> Result<(), TelemetryError> {
        self.events
            .lock()
            .map_err(|_| TelemetryError::Sink("memory sink poisoned".to_string()))?
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ValidationConfigCreated;
    use uuid::Uuid;

    fn sample_event() -> AnalyticsEvent {
        AnalyticsEvent::new(ValidationConfigCreated {
            validation_config_id: None,
            expectation_suite_id: Uuid::new_v4(),
            batch_definition_id: Uuid::new_v4(),
        })
    }

    #[test]
    fn memory_sink_buffers_events() {
        let sink = MemoryEventSink::new();
        sink.submit(sample_event()).unwrap();
        sink.submit(sample_event()).unwrap();
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn null_sink_accepts_everything() {
        let sink = NullEventSink;
        assert!(sink.submit(sample_event()).is_ok());
    }

    #[test]
    fn arc_dyn_sink_dispatches() {
        let sink: Arc<dyn EventSink> = Arc::new(MemoryEventSink::new());
        assert!(sink.submit(sample_event()).is_ok());
    }
}
