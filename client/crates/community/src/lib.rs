//! Community Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Gateway-backed repositories and wire records
//! - `presentation/` - Form DTOs and page View Bindings
//!
//! ## Features
//! - Forum posts, up/down votes and comments
//! - Community events: listing, creation, joining
//! - Skill exchange requests and responses, with client-side search
//!
//! Mutations never patch a loaded snapshot; the affected collection is
//! refetched once the backend accepts the change.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CommunityError, CommunityResult};
pub use infra::http::{HttpEventRepository, HttpExchangeRepository, HttpPostRepository};
pub use presentation::state::CommunityAppState;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use platform::mock::ScriptedGateway;
    use platform::storage::{Credential, MemoryTokenStore, TokenStore};

    use crate::infra::http::{HttpEventRepository, HttpExchangeRepository, HttpPostRepository};
    use crate::presentation::state::CommunityAppState;

    pub type TestState = CommunityAppState<
        HttpPostRepository<ScriptedGateway>,
        HttpEventRepository<ScriptedGateway>,
        HttpExchangeRepository<ScriptedGateway>,
    >;

    /// Scripted gateway wired to an in-memory Token Store and all three
    /// repositories
    pub struct Fixture {
        pub gateway: Arc<ScriptedGateway>,
        pub tokens: Arc<MemoryTokenStore>,
        pub posts: Arc<HttpPostRepository<ScriptedGateway>>,
        pub events: Arc<HttpEventRepository<ScriptedGateway>>,
        pub exchanges: Arc<HttpExchangeRepository<ScriptedGateway>>,
    }

    impl Fixture {
        pub fn sign_in(&self) {
            if let Some(credential) = Credential::new("t0k") {
                self.tokens.set(&credential);
            }
        }

        pub fn state(&self) -> TestState {
            CommunityAppState::new(
                self.posts.clone(),
                self.events.clone(),
                self.exchanges.clone(),
            )
        }
    }

    pub fn fixture() -> Fixture {
        let tokens = Arc::new(MemoryTokenStore::new());
        let gateway = Arc::new(ScriptedGateway::with_tokens(
            tokens.clone() as Arc<dyn TokenStore>
        ));
        Fixture {
            posts: Arc::new(HttpPostRepository::new(gateway.clone())),
            events: Arc::new(HttpEventRepository::new(gateway.clone())),
            exchanges: Arc::new(HttpExchangeRepository::new(gateway.clone())),
            gateway,
            tokens,
        }
    }
}
