//! Exchange Board Page
//!
//! Skill exchange requests with a client-side text search and a
//! create-request dialog.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use platform::notify::NotificationSink;
use platform::view::{Collection, Draft, LoadState};

use crate::application::ExchangeUseCase;
use crate::domain::entity::exchange_request::{ExchangeRequest, ExchangeRequestFields};
use crate::domain::repository::{EventRepository, ExchangeRepository, PostRepository};
use crate::presentation::dto::{EXCHANGE_CREATE_FAILED, EXCHANGE_CREATED, EXCHANGES_LOAD_FAILED};
use crate::presentation::state::CommunityAppState;

async fn fetch_requests<X: ExchangeRepository>(repo: Arc<X>) -> AppResult<Vec<ExchangeRequest>> {
    ExchangeUseCase::new(repo)
        .list_requests()
        .await
        .map_err(|e| e.into_app_error_or(EXCHANGES_LOAD_FAILED))
}

/// Exchange board View Binding
pub struct ExchangeBoardPage<P, E, X> {
    state: CommunityAppState<P, E, X>,
    requests: Collection<Vec<ExchangeRequest>>,
    draft: Draft<ExchangeRequestFields>,
    query: String,
}

impl<P, E, X> ExchangeBoardPage<P, E, X>
where
    P: PostRepository,
    E: EventRepository,
    X: ExchangeRepository,
{
    pub fn new(state: CommunityAppState<P, E, X>) -> Self {
        Self {
            state,
            requests: Collection::new(),
            draft: Draft::new(),
            query: String::new(),
        }
    }

    pub fn state(&self) -> &LoadState<Vec<ExchangeRequest>> {
        self.requests.state()
    }

    /// Every loaded request, ignoring the search query
    pub fn requests(&self) -> &[ExchangeRequest] {
        self.requests.snapshot().map_or(&[], Vec::as_slice)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Requests matching the search query
    pub fn filtered(&self) -> Vec<&ExchangeRequest> {
        self.requests()
            .iter()
            .filter(|request| request.matches(&self.query))
            .collect()
    }

    pub fn fetch_count(&self) -> u64 {
        self.requests.fetch_count()
    }

    pub fn draft(&self) -> &ExchangeRequestFields {
        self.draft.get()
    }

    pub fn draft_mut(&mut self) -> &mut ExchangeRequestFields {
        self.draft.edit()
    }

    pub async fn load(&mut self, sink: &dyn NotificationSink) -> bool {
        let fetch = fetch_requests(self.state.exchange_repo.clone());
        self.requests.refresh(fetch, sink).await
    }

    /// Submit the create-request dialog
    pub async fn create_request(&mut self, sink: &dyn NotificationSink) -> bool {
        let exchange = ExchangeUseCase::new(self.state.exchange_repo.clone());
        let mutation = self.draft.submit(|fields| async move {
            exchange
                .create_request(&fields)
                .await
                .map_err(|e| e.into_app_error_or(EXCHANGE_CREATE_FAILED))
        });
        let fetch = fetch_requests(self.state.exchange_repo.clone());
        self.requests
            .mutate_then_refresh(mutation, fetch, sink, Some(EXCHANGE_CREATED))
            .await
            .is_ok()
    }
}
