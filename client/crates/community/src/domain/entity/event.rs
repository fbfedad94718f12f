//! Event Entity
//!
//! Community event. Joining mutates the participant list server-side.

use chrono::{DateTime, Utc};
use kernel::id::EventId;
use kernel::input::{require_filled, split_list};

use crate::error::CommunityResult;

/// Event entity
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub participant_count: usize,
    pub created_at: Option<DateTime<Utc>>,
}

/// New-event form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Start, as typed (e.g. `2026-11-02T18:00`)
    pub date: String,
    /// End, as typed
    pub end_date: String,
    /// Comma-separated
    pub tags: String,
}

/// Validated new event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub end_date: String,
    pub tags: Vec<String>,
}

impl NewEvent {
    /// Everything but tags is required; dates are passed through as typed
    pub fn from_fields(fields: &EventFields) -> CommunityResult<Self> {
        require_filled(&[
            ("title", fields.title.as_str()),
            ("description", fields.description.as_str()),
            ("location", fields.location.as_str()),
            ("date", fields.date.as_str()),
            ("endDate", fields.end_date.as_str()),
        ])?;
        Ok(Self {
            title: fields.title.clone(),
            description: fields.description.clone(),
            location: fields.location.clone(),
            date: fields.date.trim().to_string(),
            end_date: fields.end_date.trim().to_string(),
            tags: split_list(&fields.tags),
        })
    }
}
