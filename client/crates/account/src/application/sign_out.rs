//! Sign Out Use Case
//!
//! Forgets the stored credential. Nothing is sent to the backend.

use std::sync::Arc;

use platform::storage::TokenStore;

/// Sign out use case
pub struct SignOutUseCase<T: TokenStore + ?Sized> {
    tokens: Arc<T>,
}

impl<T: TokenStore + ?Sized> SignOutUseCase<T> {
    pub fn new(tokens: Arc<T>) -> Self {
        Self { tokens }
    }

    pub fn execute(&self) {
        self.tokens.clear();
        tracing::info!("User signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::storage::{Credential, MemoryTokenStore};

    #[test]
    fn test_clears_credential() {
        let tokens = Arc::new(MemoryTokenStore::with_credential(
            Credential::new("t").unwrap(),
        ));
        SignOutUseCase::new(tokens.clone()).execute();
        assert!(tokens.get().is_none());
    }
}
