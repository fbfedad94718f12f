//! HTTP Repository Implementations
//!
//! Post, event and exchange resource families over the platform Gateway.

use std::sync::Arc;

use kernel::id::{EventId, ExchangeRequestId, PostId};
use platform::client::{Gateway, GatewayError, Method};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::entity::{
    comment::{Comment, NewComment},
    event::{Event, NewEvent},
    exchange_request::{ExchangeRequest, NewExchangeRequest},
    exchange_response::{ExchangeResponse, NewExchangeResponse},
    post::{NewPost, Post},
};
use crate::domain::repository::{EventRepository, ExchangeRepository, PostRepository};
use crate::domain::value_object::vote_direction::VoteDirection;
use crate::error::{CommunityError, CommunityResult};
use crate::infra::wire::{
    CommentBody, CommentRecord, EventBody, EventRecord, ExchangeRequestBody,
    ExchangeRequestRecord, ExchangeResponseBody, ExchangeResponseRecord, PostBody, PostRecord,
    VoteBody, decode_list, decode_one, reply_message,
};

fn to_body<T: Serialize>(body: T) -> Result<Value, GatewayError> {
    serde_json::to_value(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Map a 404 to the family's not-found error
fn not_found_as(missing: CommunityError) -> impl FnOnce(GatewayError) -> CommunityError {
    move |err| match err.status() {
        Some(404) => missing,
        _ => CommunityError::Gateway(err),
    }
}

macro_rules! gateway_repository {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<G> {
            gateway: Arc<G>,
        }

        impl<G: Gateway + Sync> $name<G> {
            pub fn new(gateway: Arc<G>) -> Self {
                Self { gateway }
            }
        }

        impl<G> Clone for $name<G> {
            fn clone(&self) -> Self {
                Self {
                    gateway: Arc::clone(&self.gateway),
                }
            }
        }
    };
}

gateway_repository!(
    /// Gateway-backed forum repository
    HttpPostRepository
);
gateway_repository!(
    /// Gateway-backed event repository
    HttpEventRepository
);
gateway_repository!(
    /// Gateway-backed skill exchange repository
    HttpExchangeRepository
);

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl<G: Gateway + Sync> PostRepository for HttpPostRepository<G> {
    async fn list(&self) -> CommunityResult<Vec<Post>> {
        let body = self.gateway.request(Method::GET, "/post", None).await?;
        Ok(decode_list::<PostRecord, _>(body, "posts", Post::from)?)
    }

    async fn find_by_id(&self, id: &PostId) -> CommunityResult<Post> {
        let body = self
            .gateway
            .request(Method::GET, &format!("/post/{id}"), None)
            .await
            .map_err(not_found_as(CommunityError::PostNotFound))?;
        decode_one::<PostRecord, _>(body, "post", Post::from)?.ok_or(CommunityError::PostNotFound)
    }

    async fn create(&self, post: &NewPost) -> CommunityResult<()> {
        let body = to_body(PostBody::from(post))?;
        self.gateway
            .request(Method::POST, "/post", Some(body))
            .await?;
        Ok(())
    }

    async fn vote(&self, id: &PostId, direction: VoteDirection) -> CommunityResult<()> {
        let body = to_body(VoteBody {
            vote_type: direction,
        })?;
        self.gateway
            .request(Method::POST, &format!("/post/{id}/vote"), Some(body))
            .await?;
        Ok(())
    }

    async fn list_comments(&self, id: &PostId) -> CommunityResult<Vec<Comment>> {
        let body = self
            .gateway
            .request(Method::GET, &format!("/post/{id}/comments"), None)
            .await?;
        Ok(decode_list::<CommentRecord, _>(body, "comments", Comment::from)?)
    }

    async fn add_comment(&self, id: &PostId, comment: &NewComment) -> CommunityResult<()> {
        let body = to_body(CommentBody {
            content: &comment.content,
        })?;
        self.gateway
            .request(Method::POST, &format!("/post/{id}/comments"), Some(body))
            .await?;
        Ok(())
    }
}

// ============================================================================
// Event Repository Implementation
// ============================================================================

impl<G: Gateway + Sync> EventRepository for HttpEventRepository<G> {
    async fn list(&self) -> CommunityResult<Vec<Event>> {
        let body = self.gateway.request(Method::GET, "/event/all", None).await?;
        Ok(decode_list::<EventRecord, _>(body, "events", Event::from)?)
    }

    async fn create(&self, event: &NewEvent) -> CommunityResult<()> {
        let body = to_body(EventBody::from(event))?;
        self.gateway
            .request(Method::POST, "/event/create", Some(body))
            .await?;
        Ok(())
    }

    async fn join(&self, id: &EventId) -> CommunityResult<Option<String>> {
        let body = self
            .gateway
            .request(Method::POST, &format!("/event/{id}/join"), Some(json!({})))
            .await?;
        Ok(reply_message(&body))
    }
}

// ============================================================================
// Exchange Repository Implementation
// ============================================================================

impl<G: Gateway + Sync> ExchangeRepository for HttpExchangeRepository<G> {
    async fn list_requests(&self) -> CommunityResult<Vec<ExchangeRequest>> {
        let body = self
            .gateway
            .request(Method::GET, "/exchange/requests", None)
            .await?;
        Ok(decode_list::<ExchangeRequestRecord, _>(
            body,
            "exchangeRequests",
            ExchangeRequest::from,
        )?)
    }

    async fn create_request(&self, request: &NewExchangeRequest) -> CommunityResult<()> {
        let body = to_body(ExchangeRequestBody::from(request))?;
        self.gateway
            .request(Method::POST, "/exchange/requests", Some(body))
            .await?;
        Ok(())
    }

    async fn find_request(&self, id: &ExchangeRequestId) -> CommunityResult<ExchangeRequest> {
        let body = self
            .gateway
            .request(Method::GET, &format!("/exchange/requests/{id}"), None)
            .await
            .map_err(not_found_as(CommunityError::ExchangeRequestNotFound))?;
        decode_one::<ExchangeRequestRecord, _>(body, "exchangeRequest", ExchangeRequest::from)?
            .ok_or(CommunityError::ExchangeRequestNotFound)
    }

    async fn list_responses(
        &self,
        id: &ExchangeRequestId,
    ) -> CommunityResult<Vec<ExchangeResponse>> {
        let body = self
            .gateway
            .request(
                Method::GET,
                &format!("/exchange/requests/{id}/responses"),
                None,
            )
            .await?;
        Ok(decode_list::<ExchangeResponseRecord, _>(
            body,
            "responses",
            ExchangeResponse::from,
        )?)
    }

    async fn add_response(
        &self,
        id: &ExchangeRequestId,
        response: &NewExchangeResponse,
    ) -> CommunityResult<()> {
        let body = to_body(ExchangeResponseBody::from(response))?;
        self.gateway
            .request(
                Method::POST,
                &format!("/exchange/requests/{id}/responses"),
                Some(body),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::exchange_request::ExchangeRequestFields;
    use platform::mock::ScriptedGateway;

    fn gateway() -> Arc<ScriptedGateway> {
        Arc::new(ScriptedGateway::new())
    }

    #[tokio::test]
    async fn test_vote_body() {
        let gw = gateway();
        gw.respond(Method::POST, "/post/p1/vote", json!({"message": "ok"}));
        let repo = HttpPostRepository::new(gw.clone());

        repo.vote(&PostId::new("p1"), VoteDirection::Up).await.unwrap();

        let call = gw.last_call().unwrap();
        assert_eq!(call.path, "/post/p1/vote");
        assert_eq!(call.body, Some(json!({"voteType": "upvote"})));
    }

    #[tokio::test]
    async fn test_post_and_comments_envelopes() {
        let gw = gateway();
        gw.respond(
            Method::GET,
            "/post/p1",
            json!({"post": {"_id": "p1", "title": "Hi", "authorUsername": "ada"}}),
        );
        gw.respond(
            Method::GET,
            "/post/p1/comments",
            json!({"comments": [{"id": "c1", "content": "Nice", "authorUsername": "bob"}]}),
        );
        let repo = HttpPostRepository::new(gw.clone());

        let post = repo.find_by_id(&PostId::new("p1")).await.unwrap();
        assert_eq!(post.author_username, "ada");
        assert_eq!(post.detail_path(), "/post/p1");

        let comments = repo.list_comments(&PostId::new("p1")).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "Nice");
    }

    #[tokio::test]
    async fn test_missing_post() {
        let gw = gateway();
        gw.fail_status(Method::GET, "/post/gone", 404, None);
        gw.respond(Method::GET, "/post/null", json!({"post": null}));
        let repo = HttpPostRepository::new(gw);

        assert!(matches!(
            repo.find_by_id(&PostId::new("gone")).await,
            Err(CommunityError::PostNotFound)
        ));
        assert!(matches!(
            repo.find_by_id(&PostId::new("null")).await,
            Err(CommunityError::PostNotFound)
        ));
    }

    #[tokio::test]
    async fn test_event_create_and_join() {
        let gw = gateway();
        gw.respond(Method::POST, "/event/create", json!({"message": "created"}));
        gw.respond(Method::POST, "/event/e1/join", json!({"message": "You're in"}));
        let repo = HttpEventRepository::new(gw.clone());

        let event = NewEvent {
            title: "Meetup".into(),
            description: "Rust".into(),
            location: "Hall A".into(),
            date: "2026-11-02T18:00".into(),
            end_date: "2026-11-02T20:00".into(),
            tags: vec![],
        };
        repo.create(&event).await.unwrap();
        assert_eq!(
            gw.last_call().unwrap().body,
            Some(json!({
                "title": "Meetup",
                "description": "Rust",
                "location": "Hall A",
                "date": "2026-11-02T18:00",
                "endDate": "2026-11-02T20:00",
                "tags": []
            }))
        );

        let message = repo.join(&EventId::new("e1")).await.unwrap();
        assert_eq!(message.as_deref(), Some("You're in"));
        assert_eq!(gw.last_call().unwrap().body, Some(json!({})));
    }

    #[tokio::test]
    async fn test_exchange_request_body() {
        let gw = gateway();
        gw.respond(Method::POST, "/exchange/requests", Value::Null);
        let repo = HttpExchangeRepository::new(gw.clone());

        let request = NewExchangeRequest::from_fields(&ExchangeRequestFields {
            title: "Swap".into(),
            description: "React for Rust".into(),
            skills_offered: "React, Node".into(),
            credits_offered: "abc".into(),
            duration_value: "3".into(),
            duration_unit: "weeks".into(),
            location_type: "hybrid".into(),
            ..Default::default()
        })
        .unwrap();
        repo.create_request(&request).await.unwrap();

        assert_eq!(
            gw.last_call().unwrap().body,
            Some(json!({
                "title": "Swap",
                "description": "React for Rust",
                "creditsRequested": 0,
                "creditsOffered": 0,
                "skillsRequested": [],
                "skillsOffered": ["React", "Node"],
                "duration": {"value": 3, "unit": "weeks"},
                "availabilitySchedule": "",
                "location": {"type": "hybrid"}
            }))
        );
    }

    #[tokio::test]
    async fn test_exchange_responses_round() {
        let gw = gateway();
        gw.respond(
            Method::GET,
            "/exchange/requests/x1/responses",
            json!({"responses": [{"_id": "r1", "responderUsername": "bob",
                                  "message": "Happy to help", "creditsOffered": 4}]}),
        );
        gw.respond(Method::POST, "/exchange/requests/x1/responses", json!({}));
        let repo = HttpExchangeRepository::new(gw.clone());
        let id = ExchangeRequestId::new("x1");

        let responses = repo.list_responses(&id).await.unwrap();
        assert_eq!(responses[0].credits_offered, 4);
        assert_eq!(responses[0].responder_path(), "/user/bob");

        repo.add_response(
            &id,
            &NewExchangeResponse {
                message: "Me too".into(),
                credits_offered: 2,
                skills_offered: vec!["Go".into()],
            },
        )
        .await
        .unwrap();
        assert_eq!(
            gw.last_call().unwrap().body,
            Some(json!({"message": "Me too", "creditsOffered": 2, "skillsOffered": ["Go"]}))
        );
    }

    #[tokio::test]
    async fn test_unknown_exchange_request() {
        let gw = gateway();
        gw.fail_status(Method::GET, "/exchange/requests/x9", 404, Some("Not found"));
        let repo = HttpExchangeRepository::new(gw);

        let err = repo
            .find_request(&ExchangeRequestId::new("x9"))
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::ExchangeRequestNotFound));
    }
}
