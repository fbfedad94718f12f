//! Account Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Gateway-backed repository
//! - `presentation/` - Form DTOs and page View Bindings
//!
//! ## Features
//! - Sign in with username + password (stores the returned credential)
//! - Account creation, with direct sign-in when the backend issues a token
//! - Public profiles and the signed-in user's own profile
//! - Sign-out (local only; the backend holds no session)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{AccountError, AccountResult};
pub use infra::http::HttpUserRepository;
pub use presentation::state::AccountAppState;

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
    use platform::storage::{MemoryTokenStore, TokenStore};

    use crate::infra::http::HttpUserRepository;
    use crate::presentation::state::AccountAppState;

    pub type TestRepo = HttpUserRepository<ScriptedGateway>;

    /// Scripted gateway wired to an in-memory Token Store
    pub fn fixture() -> (Arc<ScriptedGateway>, Arc<MemoryTokenStore>, Arc<TestRepo>) {
        let tokens = Arc::new(MemoryTokenStore::new());
        let gateway = Arc::new(ScriptedGateway::with_tokens(
            tokens.clone() as Arc<dyn TokenStore>
        ));
        let repo = Arc::new(HttpUserRepository::new(gateway.clone()));
        (gateway, tokens, repo)
    }

    pub fn state(
        repo: Arc<TestRepo>,
        tokens: Arc<MemoryTokenStore>,
    ) -> AccountAppState<TestRepo, MemoryTokenStore> {
        AccountAppState::new(repo, tokens)
    }
}
