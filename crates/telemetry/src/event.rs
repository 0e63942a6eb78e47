use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::{ValidationConfigCreated, ValidationConfigDeleted};
use crate::topics;

/// Analytics event envelope.
///
/// Events are handed to an in-process [`EventSink`](crate::sink::EventSink);
/// the `topic` field names the event for routing and log filtering, while
/// `correlation_id` lets downstream pipelines stitch related events together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Routing topic (e.g. "datacheck.validation_config.created").
    pub topic: String,

    /// The typed event payload.
    pub payload: EventPayload,

    /// When this event was created.
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for tracking across components.
    pub correlation_id: Uuid,
}

/// The inner payloads carried by [`AnalyticsEvent`] envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    ValidationConfigCreated(ValidationConfigCreated),
    ValidationConfigDeleted(ValidationConfigDeleted),
}

impl EventPayload {
    /// The routing topic for this payload kind.
    pub fn topic(&self) -> &'static str {
        match self {
            EventPayload::ValidationConfigCreated(_) => topics::VALIDATION_CONFIG_CREATED,
            EventPayload::ValidationConfigDeleted(_) => topics::VALIDATION_CONFIG_DELETED,
        }
    }
}

impl AnalyticsEvent {
    /// Create a new event, deriving the topic from the payload kind.
    pub fn new(payload: impl Into<EventPayload>) -> Self {
        let payload = payload.into();
        Self {
            topic: payload.topic().to_string(),
            payload,
            timestamp: Utc::now(),
            correlation_id: Uuid::new_v4(),
        }
    }
}

impl From<ValidationConfigCreated> for EventPayload {
    fn from(e: ValidationConfigCreated) -> Self {
        EventPayload::ValidationConfigCreated(e)
    }
}

impl From<ValidationConfigDeleted> for EventPayload {
    fn from(e: ValidationConfigDeleted) -> Self {
        EventPayload::ValidationConfigDeleted(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_derived_from_payload() {
        let event = AnalyticsEvent::new(ValidationConfigCreated {
            validation_config_id: None,
            expectation_suite_id: Uuid::new_v4(),
            batch_definition_id: Uuid::new_v4(),
        });
        assert_eq!(event.topic, topics::VALIDATION_CONFIG_CREATED);
    }

    #[test]
    fn payload_serializes_with_type_tag() {
        let event = AnalyticsEvent::new(ValidationConfigDeleted {
            validation_config_id: Some(Uuid::new_v4()),
            expectation_suite_id: Uuid::new_v4(),
            batch_definition_id: Uuid::new_v4(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["payload"]["type"], "validation_config_deleted");
    }
}
