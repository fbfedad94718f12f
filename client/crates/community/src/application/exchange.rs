//! Skill Exchange Use Cases
//!
//! Requests are created from the exchange board; responses are appended
//! from a request's detail page.

use std::sync::Arc;

use kernel::id::ExchangeRequestId;

use crate::domain::entity::{
    exchange_request::{ExchangeRequest, ExchangeRequestFields, NewExchangeRequest},
    exchange_response::{ExchangeResponse, ExchangeResponseFields, NewExchangeResponse},
};
use crate::domain::repository::ExchangeRepository;
use crate::error::CommunityResult;

/// Skill exchange use case
pub struct ExchangeUseCase<X: ExchangeRepository> {
    exchange_repo: Arc<X>,
}

impl<X: ExchangeRepository> ExchangeUseCase<X> {
    pub fn new(exchange_repo: Arc<X>) -> Self {
        Self { exchange_repo }
    }

    pub async fn list_requests(&self) -> CommunityResult<Vec<ExchangeRequest>> {
        self.exchange_repo.list_requests().await
    }

    pub async fn create_request(&self, fields: &ExchangeRequestFields) -> CommunityResult<()> {
        let request = NewExchangeRequest::from_fields(fields)?;
        self.exchange_repo.create_request(&request).await?;
        tracing::info!(title = %request.title, "Exchange request created");
        Ok(())
    }

    pub async fn get_request(&self, id: &ExchangeRequestId) -> CommunityResult<ExchangeRequest> {
        self.exchange_repo.find_request(id).await
    }

    pub async fn list_responses(
        &self,
        id: &ExchangeRequestId,
    ) -> CommunityResult<Vec<ExchangeResponse>> {
        self.exchange_repo.list_responses(id).await
    }

    pub async fn respond(
        &self,
        id: &ExchangeRequestId,
        fields: &ExchangeResponseFields,
    ) -> CommunityResult<()> {
        let response = NewExchangeResponse::from_fields(fields)?;
        self.exchange_repo.add_response(id, &response).await?;
        tracing::info!(request_id = %id, "Exchange response submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommunityError;
    use crate::test_support::fixture;
    use platform::client::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_respond_parses_amounts() {
        let fx = fixture();
        fx.gateway
            .respond(Method::POST, "/exchange/requests/x1/responses", json!({}));

        ExchangeUseCase::new(fx.exchanges.clone())
            .respond(
                &ExchangeRequestId::new("x1"),
                &ExchangeResponseFields {
                    message: "I'll teach you Figma".into(),
                    credits_offered: "".into(),
                    skills_offered: "Figma".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            fx.gateway.last_call().unwrap().body,
            Some(json!({
                "message": "I'll teach you Figma",
                "creditsOffered": 0,
                "skillsOffered": ["Figma"]
            }))
        );
    }

    #[tokio::test]
    async fn test_blank_title_sends_nothing() {
        let fx = fixture();

        let err = ExchangeUseCase::new(fx.exchanges.clone())
            .create_request(&ExchangeRequestFields {
                description: "Anything".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CommunityError::MissingFields(_)));
        assert!(fx.gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_accepts_bare_array() {
        let fx = fixture();
        fx.gateway.respond(
            Method::GET,
            "/exchange/requests",
            json!([{"_id": "x1", "title": "Swap", "creatorUsername": "ada"}]),
        );

        let requests = ExchangeUseCase::new(fx.exchanges.clone())
            .list_requests()
            .await
            .unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].detail_path(), "/skillexchange/x1");
    }
}
