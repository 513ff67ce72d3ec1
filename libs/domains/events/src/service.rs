//! Event Service - Business logic layer

use database::DocumentStore;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::EventResult;
use crate::models::{Event, EventPayload};

/// Event service providing CRUD over the injected document store
///
/// Update and delete look the event up first, so an unknown id is reported as
/// not found rather than as a silent no-op from the store.
pub struct EventService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> EventService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// All events; empty when none exist
    #[instrument(skip(self))]
    pub async fn list(&self) -> EventResult<Vec<Event>> {
        Ok(self.store.get_all::<Event>().await?)
    }

    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create(&self, payload: EventPayload) -> EventResult<Event> {
        payload.validate()?;

        let event = Event::from_payload(payload);
        self.store.create(&event).await?;

        info!(id = %event.id, "event created");
        Ok(event)
    }

    #[instrument(skip(self))]
    pub async fn show(&self, id: &str) -> EventResult<Event> {
        Ok(self.store.get::<Event>(id).await?)
    }

    /// Replace every field but `id` of an existing event.
    ///
    /// Not transactional: concurrent updates of the same id race and the last write wins.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: &str, payload: EventPayload) -> EventResult<Event> {
        let event = self.store.get::<Event>(id).await?;
        self.replace(event, payload).await
    }

    /// Validate `payload` and write it over an event already read from the store.
    #[instrument(skip(self, event, payload), fields(id = %event.id))]
    pub async fn replace(&self, mut event: Event, payload: EventPayload) -> EventResult<Event> {
        payload.validate()?;

        event.apply(payload);
        self.store.update(&event.id, &event).await?;

        info!("event updated");
        Ok(event)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> EventResult<()> {
        self.store.get::<Event>(id).await?;
        self.store.delete::<Event>(id).await?;

        info!("event deleted");
        Ok(())
    }
}
