//! Event Use Cases

use std::sync::Arc;

use kernel::id::EventId;

use crate::domain::entity::event::{Event, EventFields, NewEvent};
use crate::domain::repository::EventRepository;
use crate::error::CommunityResult;

/// Event use case
pub struct EventUseCase<E: EventRepository> {
    event_repo: Arc<E>,
}

impl<E: EventRepository> EventUseCase<E> {
    pub fn new(event_repo: Arc<E>) -> Self {
        Self { event_repo }
    }

    pub async fn list_events(&self) -> CommunityResult<Vec<Event>> {
        self.event_repo.list().await
    }

    pub async fn create_event(&self, fields: &EventFields) -> CommunityResult<()> {
        let event = NewEvent::from_fields(fields)?;
        self.event_repo.create(&event).await?;
        tracing::info!(title = %event.title, "Event created");
        Ok(())
    }

    /// Join an event, returning the server's confirmation message
    pub async fn join_event(&self, id: &EventId) -> CommunityResult<Option<String>> {
        let message = self.event_repo.join(id).await?;
        tracing::info!(event_id = %id, "Event joined");
        Ok(message)
    }
}
