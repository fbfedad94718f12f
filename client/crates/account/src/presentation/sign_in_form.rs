//! Sign In Form
//!
//! On success the credential is stored and the page navigates to the
//! user's profile. On failure the input is kept and the server message (or
//! a generic one) is shown.

use platform::notify::NotificationSink;
use platform::storage::TokenStore;
use platform::view::{Draft, report_outcome};

use crate::application::{SignInInput, SignInUseCase};
use crate::domain::repository::UserRepository;
use crate::presentation::dto::{SIGN_IN_FAILED, SIGNED_IN, SignInDraft};
use crate::presentation::state::AccountAppState;

/// Sign-in form View Binding
pub struct SignInForm<U, T: ?Sized> {
    state: AccountAppState<U, T>,
    draft: Draft<SignInDraft>,
    submitting: bool,
}

impl<U, T> SignInForm<U, T>
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

    pub fn draft(&self) -> &SignInDraft {
        self.draft.get()
    }

    pub fn draft_mut(&mut self) -> &mut SignInDraft {
        self.draft.edit()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit the form; returns the route to navigate to on success
    pub async fn submit(&mut self, sink: &dyn NotificationSink) -> Option<String> {
        self.submitting = true;
        let use_case = SignInUseCase::new(self.state.user_repo.clone(), self.state.tokens.clone());

        let result = self
            .draft
            .submit(|draft| async move {
                use_case
                    .execute(SignInInput {
                        username: draft.username.clone(),
                        password: draft.password.clone(),
                    })
                    .await
                    .map_err(|e| e.into_app_error_or(SIGN_IN_FAILED))
            })
            .await;
        self.submitting = false;

        report_outcome(result, sink, Some(SIGNED_IN))
            .ok()
            .map(|output| output.username.profile_path())
    }
}
