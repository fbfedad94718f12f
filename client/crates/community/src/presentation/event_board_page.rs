//! Event Board Page
//!
//! Event list with joining and a create-event dialog.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::id::EventId;
use platform::notify::NotificationSink;
use platform::view::{Collection, Draft, LoadState};

use crate::application::EventUseCase;
use crate::domain::entity::event::{Event, EventFields};
use crate::domain::repository::{EventRepository, ExchangeRepository, PostRepository};
use crate::presentation::dto::{
    EVENT_ALREADY_JOINED, EVENT_CREATE_FAILED, EVENT_CREATED, EVENT_JOIN_FAILED, EVENT_JOINED,
    EVENTS_LOAD_FAILED,
};
use crate::presentation::state::CommunityAppState;

async fn fetch_events<E: EventRepository>(repo: Arc<E>) -> AppResult<Vec<Event>> {
    EventUseCase::new(repo)
        .list_events()
        .await
        .map_err(|e| e.into_app_error_or(EVENTS_LOAD_FAILED))
}

/// Result of a join attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    /// The backend refused with 400, typically because the user is already
    /// a participant
    AlreadyJoined,
    Failed,
}

/// Event board View Binding
pub struct EventBoardPage<P, E, X> {
    state: CommunityAppState<P, E, X>,
    events: Collection<Vec<Event>>,
    draft: Draft<EventFields>,
}

impl<P, E, X> EventBoardPage<P, E, X>
where
    P: PostRepository,
    E: EventRepository,
    X: ExchangeRepository,
{
    pub fn new(state: CommunityAppState<P, E, X>) -> Self {
        Self {
            state,
            events: Collection::new(),
            draft: Draft::new(),
        }
    }

    pub fn state(&self) -> &LoadState<Vec<Event>> {
        self.events.state()
    }

    pub fn events(&self) -> &[Event] {
        self.events.snapshot().map_or(&[], Vec::as_slice)
    }

    pub fn fetch_count(&self) -> u64 {
        self.events.fetch_count()
    }

    pub fn draft(&self) -> &EventFields {
        self.draft.get()
    }

    pub fn draft_mut(&mut self) -> &mut EventFields {
        self.draft.edit()
    }

    pub async fn load(&mut self, sink: &dyn NotificationSink) -> bool {
        let fetch = fetch_events(self.state.event_repo.clone());
        self.events.refresh(fetch, sink).await
    }

    /// Submit the create-event dialog
    pub async fn create_event(&mut self, sink: &dyn NotificationSink) -> bool {
        let events = EventUseCase::new(self.state.event_repo.clone());
        let mutation = self.draft.submit(|fields| async move {
            events
                .create_event(&fields)
                .await
                .map_err(|e| e.into_app_error_or(EVENT_CREATE_FAILED))
        });
        let fetch = fetch_events(self.state.event_repo.clone());
        self.events
            .mutate_then_refresh(mutation, fetch, sink, Some(EVENT_CREATED))
            .await
            .is_ok()
    }

    /// Join an event
    ///
    /// A 400 is reported as information, not as an error, and the list is
    /// refetched just as after a successful join.
    pub async fn join(&mut self, event_id: &EventId, sink: &dyn NotificationSink) -> JoinOutcome {
        let events = EventUseCase::new(self.state.event_repo.clone());
        let outcome = match events.join_event(event_id).await {
            Ok(message) => {
                sink.success(message.as_deref().unwrap_or(EVENT_JOINED));
                JoinOutcome::Joined
            }
            Err(err) if err.status() == Some(400) => {
                tracing::debug!(event_id = %event_id, error = %err, "Join refused");
                sink.info(err.server_message().unwrap_or(EVENT_ALREADY_JOINED));
                JoinOutcome::AlreadyJoined
            }
            Err(err) => {
                sink.report(&err.into_app_error_or(EVENT_JOIN_FAILED));
                return JoinOutcome::Failed;
            }
        };

        let fetch = fetch_events(self.state.event_repo.clone());
        self.events.refresh(fetch, sink).await;
        outcome
    }
}
