//! View Binding
//!
//! Per-page state for one displayed collection (or entity) and one form
//! draft. Every page follows the same protocol:
//!
//! - `Idle -> Loading -> Loaded(snapshot) | Failed(message)` on each fetch
//!   trigger (mount, post-mutation refresh, manual refresh).
//! - A mutation is a side request. It does not move the collection state;
//!   on success the page performs exactly one refetch, on failure the
//!   current snapshot stays displayed untouched.
//! - Drafts are reset only after a confirmed successful submission.
//!
//! Snapshots are replaced wholesale; there is no merge with local state and
//! no optimistic update.

use std::future::Future;

use kernel::error::app_error::{AppError, AppResult};

use crate::notify::NotificationSink;

/// Fetch state of one collection
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing fetched yet
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn snapshot(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One displayed collection and its fetch protocol
#[derive(Debug, Clone)]
pub struct Collection<T> {
    state: LoadState<T>,
    fetches: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            fetches: 0,
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Last successfully fetched snapshot, if currently loaded
    pub fn snapshot(&self) -> Option<&T> {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Number of fetches started since the page was created
    pub fn fetch_count(&self) -> u64 {
        self.fetches
    }

    /// Enter `Loading` from any state
    pub fn begin_load(&mut self) {
        self.fetches += 1;
        self.state = LoadState::Loading;
    }

    /// Settle a fetch: the result replaces the state wholesale
    ///
    /// Overlapping fetches are not ordered; whichever settles last wins.
    pub fn finish(&mut self, result: Result<T, String>) -> &LoadState<T> {
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(message) => LoadState::Failed(message),
        };
        &self.state
    }

    /// Run one full `Loading -> Loaded | Failed` cycle
    ///
    /// A failed fetch is reported to the sink. Returns `true` when loaded.
    pub async fn refresh<Fut>(&mut self, fetch: Fut, sink: &dyn NotificationSink) -> bool
    where
        Fut: Future<Output = AppResult<T>>,
    {
        self.begin_load();
        match fetch.await {
            Ok(value) => {
                self.finish(Ok(value));
                true
            }
            Err(err) => {
                log_failure(&err);
                sink.report(&err);
                self.finish(Err(err.message().to_string()));
                false
            }
        }
    }

    /// Run a mutation, then refetch exactly once if it succeeded
    ///
    /// The collection state is not touched by the mutation itself, so a
    /// failed mutation leaves the current snapshot displayed.
    pub async fn mutate_then_refresh<R, M, F>(
        &mut self,
        mutation: M,
        fetch: F,
        sink: &dyn NotificationSink,
        success: Option<&str>,
    ) -> AppResult<R>
    where
        M: Future<Output = AppResult<R>>,
        F: Future<Output = AppResult<T>>,
    {
        let outcome = report_outcome(mutation.await, sink, success);
        if outcome.is_ok() {
            self.refresh(fetch, sink).await;
        }
        outcome
    }
}

/// Form input held by a page until a submission succeeds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft<T> {
    value: T,
}

impl<T: Default + Clone> Draft<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn edit(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn reset(&mut self) {
        self.value = T::default();
    }

    /// Submit a copy of the draft
    ///
    /// The draft is reset only when `send` succeeds; on failure the user's
    /// input is preserved for another attempt.
    pub async fn submit<R, F, Fut>(&mut self, send: F) -> AppResult<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = AppResult<R>>,
    {
        let result = send(self.value.clone()).await;
        if result.is_ok() {
            self.reset();
        }
        result
    }
}

/// Report a mutation outcome
///
/// Success is reported with `success` when given; failures are reported at
/// the level their kind calls for. The result is passed through untouched.
pub fn report_outcome<R>(
    result: AppResult<R>,
    sink: &dyn NotificationSink,
    success: Option<&str>,
) -> AppResult<R> {
    match &result {
        Ok(_) => {
            if let Some(message) = success {
                sink.success(message);
            }
        }
        Err(err) => {
            log_failure(err);
            sink.report(err);
        }
    }
    result
}

fn log_failure(err: &AppError) {
    if err.kind().is_unexpected() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, "Request rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Level, RecordingSink};

    #[tokio::test]
    async fn test_refresh_success_cycle() {
        let sink = RecordingSink::new();
        let mut posts: Collection<Vec<&str>> = Collection::new();
        assert_eq!(posts.state(), &LoadState::Idle);

        assert!(posts.refresh(async { Ok(vec!["a", "b"]) }, &sink).await);
        assert_eq!(posts.snapshot(), Some(&vec!["a", "b"]));
        assert_eq!(posts.fetch_count(), 1);
        assert!(sink.notices().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_failure_reports_and_fails() {
        let sink = RecordingSink::new();
        let mut posts: Collection<Vec<&str>> = Collection::new();

        let loaded = posts
            .refresh(async { Err(AppError::transport("Network error")) }, &sink)
            .await;

        assert!(!loaded);
        assert_eq!(posts.state().error(), Some("Network error"));
        assert_eq!(sink.last().unwrap().level, Level::Error);
    }

    #[test]
    fn test_begin_load_from_any_state() {
        let mut events: Collection<u32> = Collection::new();
        events.begin_load();
        assert!(events.is_loading());
        events.finish(Ok(3));
        events.begin_load();
        assert!(events.is_loading());
        events.finish(Err("down".into()));
        events.begin_load();
        assert!(events.is_loading());
        assert_eq!(events.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_snapshot() {
        let sink = RecordingSink::new();
        let mut posts: Collection<Vec<&str>> = Collection::new();
        posts.refresh(async { Ok(vec!["a"]) }, &sink).await;

        let result: AppResult<()> = posts
            .mutate_then_refresh(
                async { Err(AppError::transport("Network error")) },
                async { Ok(vec!["a", "b"]) },
                &sink,
                Some("Post created successfully!"),
            )
            .await;

        assert!(result.is_err());
        assert_eq!(posts.snapshot(), Some(&vec!["a"]));
        assert_eq!(posts.fetch_count(), 1);
        assert_eq!(sink.last().unwrap().level, Level::Error);
    }

    #[tokio::test]
    async fn test_successful_mutation_refetches_once() {
        let sink = RecordingSink::new();
        let mut posts: Collection<Vec<&str>> = Collection::new();
        posts.refresh(async { Ok(vec!["a"]) }, &sink).await;

        posts
            .mutate_then_refresh(
                async { Ok(()) },
                async { Ok(vec!["a", "b"]) },
                &sink,
                Some("Post created successfully!"),
            )
            .await
            .unwrap();

        assert_eq!(posts.snapshot(), Some(&vec!["a", "b"]));
        assert_eq!(posts.fetch_count(), 2);
        assert_eq!(
            sink.take(),
            vec![crate::notify::Notice::new(Level::Success, "Post created successfully!")]
        );
    }

    #[tokio::test]
    async fn test_draft_preserved_on_failure() {
        let mut draft: Draft<String> = Draft::new();
        draft.edit().push_str("my comment");

        let result: AppResult<()> = draft
            .submit(|_| async { Err(AppError::server("boom")) })
            .await;
        assert!(result.is_err());
        assert_eq!(draft.get(), "my comment");

        let result = draft
            .submit(|text| async move {
                assert_eq!(text, "my comment");
                Ok(())
            })
            .await;
        assert!(result.is_ok());
        assert_eq!(draft.get(), "");
    }

    #[test]
    fn test_report_outcome_levels() {
        let sink = RecordingSink::new();

        let ok: AppResult<u8> = report_outcome(Ok(1), &sink, Some("Saved"));
        assert_eq!(ok.unwrap(), 1);

        let silent: AppResult<u8> = report_outcome(Ok(2), &sink, None);
        assert!(silent.is_ok());

        let err: AppResult<u8> =
            report_outcome(Err(AppError::validation("Missing title")), &sink, Some("Saved"));
        assert!(err.is_err());

        let levels: Vec<Level> = sink.notices().into_iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![Level::Success, Level::Warning]);
    }
}
