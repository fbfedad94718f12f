//! Sign Up Form

use platform::notify::NotificationSink;
use platform::storage::TokenStore;
use platform::view::{Draft, report_outcome};

use crate::application::SignUpUseCase;
use crate::domain::repository::UserRepository;
use crate::presentation::dto::{ACCOUNT_CREATED, SIGN_IN_REQUIRED, SIGN_UP_FAILED, SignUpFields};
use crate::presentation::state::AccountAppState;

/// Where the page goes after a successful sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Token issued; navigate to the new profile
    SignedIn { profile_path: String },
    /// No token; switch to the sign-in form
    SignInRequired,
}

/// Sign-up form View Binding
pub struct SignUpForm<U, T: ?Sized> {
    state: AccountAppState<U, T>,
    draft: Draft<SignUpFields>,
    submitting: bool,
}

impl<U, T> SignUpForm<U, T>
where
    U: UserRepository,
    T: TokenStore + ?Sized,
{
    pub fn new(state: AccountAppState<U, T>) -> Self {
        Self {
            state,
            draft: Draft::new(),
            submitting: false,
        }
    }

    pub fn draft(&self) -> &SignUpFields {
        self.draft.get()
    }

    pub fn draft_mut(&mut self) -> &mut SignUpFields {
        self.draft.edit()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn submit(&mut self, sink: &dyn NotificationSink) -> Option<SignUpOutcome> {
        self.submitting = true;
        let use_case = SignUpUseCase::new(self.state.user_repo.clone(), self.state.tokens.clone());

        let result = self
            .draft
            .submit(|fields| async move {
                use_case
                    .execute(&fields)
                    .await
                    .map_err(|e| e.into_app_error_or(SIGN_UP_FAILED))
            })
            .await;
        self.submitting = false;

        let output = report_outcome(result, sink, Some(ACCOUNT_CREATED)).ok()?;
        if output.signed_in {
            Some(SignUpOutcome::SignedIn {
                profile_path: output.username.profile_path(),
            })
        } else {
            sink.info(SIGN_IN_REQUIRED);
            Some(SignUpOutcome::SignInRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, state};
    use platform::client::Method;
    use platform::notify::{Level, Notice, RecordingSink};
    use serde_json::json;

    fn fill(draft: &mut SignUpFields) {
        draft.username = "ada".into();
        draft.password = "pw".into();
        draft.email = "ada@example.com".into();
    }

    #[tokio::test]
    async fn test_without_token_asks_to_sign_in() {
        let (gw, tokens, repo) = fixture();
        gw.respond(Method::POST, "/user/create", json!({"message": "ok"}));
        let sink = RecordingSink::new();

        let mut form = state(repo, tokens).sign_up_form();
        fill(form.draft_mut());

        assert_eq!(form.submit(&sink).await, Some(SignUpOutcome::SignInRequired));
        assert_eq!(
            sink.take(),
            vec![
                Notice::new(Level::Success, ACCOUNT_CREATED),
                Notice::new(Level::Info, SIGN_IN_REQUIRED),
            ]
        );
    }

    #[tokio::test]
    async fn test_with_token_navigates() {
        let (gw, tokens, repo) = fixture();
        gw.respond(Method::POST, "/user/create", json!({"token": "t"}));
        let sink = RecordingSink::new();

        let mut form = state(repo, tokens).sign_up_form();
        fill(form.draft_mut());

        assert_eq!(
            form.submit(&sink).await,
            Some(SignUpOutcome::SignedIn {
                profile_path: "/user/ada".into()
            })
        );
        assert_eq!(form.draft(), &SignUpFields::default());
    }

    #[tokio::test]
    async fn test_server_rejection_uses_server_message() {
        let (gw, tokens, repo) = fixture();
        gw.fail_status(Method::POST, "/user/create", 400, Some("Username already exists"));
        let sink = RecordingSink::new();

        let mut form = state(repo, tokens).sign_up_form();
        fill(form.draft_mut());

        assert!(form.submit(&sink).await.is_none());
        assert_eq!(form.draft().username, "ada");
        assert_eq!(sink.last().unwrap().message, "Username already exists");
    }
}
