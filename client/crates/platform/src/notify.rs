//! Notification Sink
//!
//! Surfaces success/failure outcomes to the user. Pure presentation: a
//! notice is a consequence of an outcome and is never read back to decide
//! control flow.

use std::fmt;
use std::sync::{Arc, Mutex};

use kernel::error::{app_error::AppError, kind::Severity};

/// Notice level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Level::Info,
            Severity::Warning => Level::Warning,
            Severity::Error => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        })
    }
}

/// One user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Where notices go (toast, status line, log, ...)
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);

    fn success(&self, message: &str) {
        self.notify(Notice::new(Level::Success, message));
    }

    fn info(&self, message: &str) {
        self.notify(Notice::new(Level::Info, message));
    }

    fn warning(&self, message: &str) {
        self.notify(Notice::new(Level::Warning, message));
    }

    fn error(&self, message: &str) {
        self.notify(Notice::new(Level::Error, message));
    }

    /// Report an error at the level its kind calls for
    fn report(&self, err: &AppError) {
        self.notify(Notice::new(err.severity().into(), err.message()));
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Sink that reports through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Success | Level::Info => {
                tracing::info!(level = %notice.level, "{}", notice.message)
            }
            Level::Warning => tracing::warn!("{}", notice.message),
            Level::Error => tracing::error!("{}", notice.message),
        }
    }
}

/// Sink that keeps every notice, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }

    /// Drain everything reported so far
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(
            &mut *self
                .notices
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_uses_error_severity() {
        let sink = RecordingSink::new();

        sink.report(&AppError::from_status(400, "Already joined"));
        sink.report(&AppError::validation("Please fill in required fields"));
        sink.report(&AppError::server("boom"));

        let levels: Vec<Level> = sink.notices().into_iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![Level::Info, Level::Warning, Level::Error]);
    }

    #[test]
    fn test_convenience_methods() {
        let sink = RecordingSink::new();
        sink.success("Event created successfully!");
        sink.info("fyi");
        sink.warning("careful");
        sink.error("nope");

        assert_eq!(
            sink.last(),
            Some(Notice::new(Level::Error, "nope"))
        );
        assert_eq!(sink.take().len(), 4);
        assert!(sink.notices().is_empty());
    }

    #[test]
    fn test_arc_sink_forwards() {
        let inner = Arc::new(RecordingSink::new());
        let shared: Arc<dyn NotificationSink> = inner.clone();
        shared.success("ok");
        assert_eq!(inner.notices().len(), 1);
    }
}
