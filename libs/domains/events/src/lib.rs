//! Events Domain
//!
//! CRUD over calendar events (title, description, start and end date) stored
//! in any [`database::DocumentStore`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /events
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Existence checks, validation, id assignment
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │DocumentStore│  ← Injected backend (MongoDB or in-memory)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::InMemoryDocumentStore;
//! use domain_events::{handlers, EventService};
//!
//! let service = EventService::new(InMemoryDocumentStore::new());
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::{Event, EventListResponse, EventPayload, EventResponse};
pub use service::EventService;
