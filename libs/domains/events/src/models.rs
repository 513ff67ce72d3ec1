//! Event domain models

use database::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An activity at a specified date and time
///
/// Dates are kept as the strings the client sent; no format or ordering is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier, assigned on create and never changed
    #[schema(example = "0f8fad5b-d9cb-469f-a165-70867728950e")]
    pub id: String,
    #[schema(example = "Standup")]
    pub title: String,
    #[schema(example = "Daily sync")]
    pub description: String,
    #[schema(example = "2024-01-01T09:00:00Z")]
    pub start_date: String,
    #[schema(example = "2024-01-01T09:15:00Z")]
    pub end_date: String,
}

impl Document for Event {
    const COLLECTION: &'static str = "event";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Event {
    /// Build a new event from a payload, assigning a fresh random id.
    pub fn from_payload(payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            description: payload.description,
            start_date: payload.start_date,
            end_date: payload.end_date,
        }
    }

    /// Overwrite every field except `id` with the payload's values.
    pub fn apply(&mut self, payload: EventPayload) {
        self.title = payload.title;
        self.description = payload.description;
        self.start_date = payload.start_date;
        self.end_date = payload.end_date;
    }
}

/// Request body for creating or replacing an event
///
/// All four fields are required and must be non-empty. An `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[validate(length(min = 1, message = "title is required"))]
    #[schema(example = "Standup")]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    #[schema(example = "Daily sync")]
    pub description: String,

    #[validate(length(min = 1, message = "startDate is required"))]
    #[schema(example = "2024-01-01T09:00:00Z")]
    pub start_date: String,

    #[validate(length(min = 1, message = "endDate is required"))]
    #[schema(example = "2024-01-01T09:15:00Z")]
    pub end_date: String,
}

/// `{"event": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event: Event,
}

/// `{"events": [...], "count": N}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventListResponse {
    pub events: Vec<Event>,
    pub count: usize,
}

impl From<Vec<Event>> for EventListResponse {
    fn from(events: Vec<Event>) -> Self {
        Self {
            count: events.len(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(title: &str) -> EventPayload {
        EventPayload {
            title: title.to_string(),
            description: "Daily sync".to_string(),
            start_date: "2024-01-01T09:00:00Z".to_string(),
            end_date: "2024-01-01T09:15:00Z".to_string(),
        }
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(Event::COLLECTION, "event");
    }

    #[test]
    fn test_from_payload_assigns_distinct_ids() {
        let a = Event::from_payload(payload("Standup"));
        let b = Event::from_payload(payload("Standup"));

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.title, "Standup");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut event = Event::from_payload(payload("Standup"));
        let id = event.id.clone();

        event.apply(payload("Standup v2"));

        assert_eq!(event.id, id);
        assert_eq!(event.title, "Standup v2");
    }

    #[test]
    fn test_event_json_uses_camel_case() {
        let event = Event {
            id: "e1".to_string(),
            title: "Standup".to_string(),
            description: "Daily sync".to_string(),
            start_date: "s".to_string(),
            end_date: "e".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "id": "e1",
                "title": "Standup",
                "description": "Daily sync",
                "startDate": "s",
                "endDate": "e"
            })
        );
    }

    #[test]
    fn test_payload_validation() {
        assert!(payload("Standup").validate().is_ok());

        let errors = payload("").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_payload_missing_field_fails_to_parse() {
        let result: Result<EventPayload, _> = serde_json::from_value(json!({"title": "X"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_response_counts() {
        let response = EventListResponse::from(vec![Event::from_payload(payload("a"))]);
        assert_eq!(response.count, 1);

        let empty = serde_json::to_value(EventListResponse::from(Vec::new())).unwrap();
        assert_eq!(empty, json!({"events": [], "count": 0}));
    }
}
