//! Exchange Detail Page
//!
//! One exchange request with its responses and a response dialog.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::id::ExchangeRequestId;
use platform::notify::NotificationSink;
use platform::view::{Collection, Draft, LoadState};

use crate::application::ExchangeUseCase;
use crate::domain::entity::{
    exchange_request::ExchangeRequest,
    exchange_response::{ExchangeResponse, ExchangeResponseFields},
};
use crate::domain::repository::{EventRepository, ExchangeRepository, PostRepository};
use crate::presentation::dto::{EXCHANGE_LOAD_FAILED, RESPONSE_FAILED, RESPONSES_LOAD_FAILED};
use crate::presentation::state::CommunityAppState;

async fn fetch_responses<X: ExchangeRepository>(
    repo: Arc<X>,
    id: ExchangeRequestId,
) -> AppResult<Vec<ExchangeResponse>> {
    ExchangeUseCase::new(repo)
        .list_responses(&id)
        .await
        .map_err(|e| e.into_app_error_or(RESPONSES_LOAD_FAILED))
}

/// Exchange detail View Binding
pub struct ExchangeDetailPage<P, E, X> {
    state: CommunityAppState<P, E, X>,
    request_id: ExchangeRequestId,
    request: Collection<ExchangeRequest>,
    responses: Collection<Vec<ExchangeResponse>>,
    draft: Draft<ExchangeResponseFields>,
}

impl<P, E, X> ExchangeDetailPage<P, E, X>
where
    P: PostRepository,
    E: EventRepository,
    X: ExchangeRepository,
{
    pub fn new(state: CommunityAppState<P, E, X>, request_id: ExchangeRequestId) -> Self {
        Self {
            state,
            request_id,
            request: Collection::new(),
            responses: Collection::new(),
            draft: Draft::new(),
        }
    }

    pub fn request_id(&self) -> &ExchangeRequestId {
        &self.request_id
    }

    pub fn state(&self) -> &LoadState<ExchangeRequest> {
        self.request.state()
    }

    pub fn request(&self) -> Option<&ExchangeRequest> {
        self.request.snapshot()
    }

    pub fn responses(&self) -> &[ExchangeResponse] {
        self.responses.snapshot().map_or(&[], Vec::as_slice)
    }

    pub fn responses_state(&self) -> &LoadState<Vec<ExchangeResponse>> {
        self.responses.state()
    }

    /// Whether the response dialog is offered to `viewer`
    pub fn can_respond(&self, viewer: Option<&str>) -> bool {
        self.request()
            .is_some_and(|request| request.accepts_responses_from(viewer))
    }

    pub fn draft(&self) -> &ExchangeResponseFields {
        self.draft.get()
    }

    pub fn draft_mut(&mut self) -> &mut ExchangeResponseFields {
        self.draft.edit()
    }

    /// Fetch the request and its responses
    ///
    /// The two loads are independent; responses are fetched even when the
    /// request itself fails to load.
    pub async fn load(&mut self, sink: &dyn NotificationSink) -> bool {
        let repo = self.state.exchange_repo.clone();
        let exchange = ExchangeUseCase::new(repo.clone());
        let id = self.request_id.clone();
        let fetch_request = async move {
            exchange
                .get_request(&id)
                .await
                .map_err(|e| e.into_app_error_or(EXCHANGE_LOAD_FAILED))
        };

        let request_loaded = self.request.refresh(fetch_request, sink).await;
        let responses_loaded = self
            .responses
            .refresh(fetch_responses(repo, self.request_id.clone()), sink)
            .await;
        request_loaded && responses_loaded
    }

    /// Submit the response dialog, then refetch the responses
    pub async fn respond(&mut self, sink: &dyn NotificationSink) -> bool {
        let repo = self.state.exchange_repo.clone();
        let exchange = ExchangeUseCase::new(repo.clone());
        let id = self.request_id.clone();
        let mutation = self.draft.submit(|fields| async move {
            exchange
                .respond(&id, &fields)
                .await
                .map_err(|e| e.into_app_error_or(RESPONSE_FAILED))
        });
        self.responses
            .mutate_then_refresh(
                mutation,
                fetch_responses(repo, self.request_id.clone()),
                sink,
                None,
            )
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture;
    use platform::client::Method;
    use platform::notify::{Level, Notice, RecordingSink};
    use serde_json::json;

    fn script_request(fx: &crate::test_support::Fixture) {
        fx.gateway.respond(
            Method::GET,
            "/exchange/requests/x1",
            json!({"exchangeRequest": {"_id": "x1", "title": "Swap", "creatorUsername": "ada"}}),
        );
        fx.gateway.respond(
            Method::GET,
            "/exchange/requests/x1/responses",
            json!({"responses": []}),
        );
    }

    #[tokio::test]
    async fn test_creator_cannot_respond() {
        let fx = fixture();
        script_request(&fx);
        let sink = RecordingSink::new();

        let mut page = fx.state().exchange_detail_page(ExchangeRequestId::new("x1"));
        assert!(!page.can_respond(Some("bob")));
        assert!(page.load(&sink).await);

        assert!(page.can_respond(Some("bob")));
        assert!(!page.can_respond(Some("ada")));
    }

    #[tokio::test]
    async fn test_responses_load_when_request_fails() {
        let fx = fixture();
        fx.gateway
            .fail_status(Method::GET, "/exchange/requests/x1", 404, None);
        fx.gateway.respond(
            Method::GET,
            "/exchange/requests/x1/responses",
            json!({"responses": [{"_id": "r1", "message": "Hi"}]}),
        );
        let sink = RecordingSink::new();

        let mut page = fx.state().exchange_detail_page(ExchangeRequestId::new("x1"));
        assert!(!page.load(&sink).await);

        assert!(page.request().is_none());
        assert_eq!(page.responses().len(), 1);
        assert_eq!(sink.notices().len(), 1);
    }

    #[tokio::test]
    async fn test_respond_refetches_responses_once() {
        let fx = fixture();
        fx.sign_in();
        script_request(&fx);
        fx.gateway.respond(
            Method::GET,
            "/exchange/requests/x1/responses",
            json!({"responses": [{"_id": "r1", "responderUsername": "bob", "message": "Deal"}]}),
        );
        fx.gateway
            .respond(Method::POST, "/exchange/requests/x1/responses", json!({}));
        let sink = RecordingSink::new();

        let mut page = fx.state().exchange_detail_page(ExchangeRequestId::new("x1"));
        page.load(&sink).await;
        page.draft_mut().message = "Deal".into();
        page.draft_mut().credits_offered = "3".into();
        assert!(page.respond(&sink).await);

        assert_eq!(page.responses()[0].message, "Deal");
        assert_eq!(page.draft(), &ExchangeResponseFields::default());
        assert_eq!(fx.gateway.calls_to(Method::GET, "/exchange/requests/x1/responses"), 2);
        assert_eq!(fx.gateway.calls_to(Method::GET, "/exchange/requests/x1"), 1);
        assert!(sink.notices().is_empty());
    }

    #[tokio::test]
    async fn test_failed_response_keeps_snapshot() {
        let fx = fixture();
        script_request(&fx);
        fx.gateway
            .fail_status(Method::POST, "/exchange/requests/x1/responses", 500, None);
        let sink = RecordingSink::new();

        let mut page = fx.state().exchange_detail_page(ExchangeRequestId::new("x1"));
        page.load(&sink).await;
        page.draft_mut().message = "Deal".into();
        assert!(!page.respond(&sink).await);

        assert!(page.responses_state().snapshot().is_some());
        assert_eq!(page.draft().message, "Deal");
        assert_eq!(sink.last().unwrap(), Notice::new(Level::Error, RESPONSE_FAILED));
    }
}
