//! Exchange Request Entity
//!
//! A member offering skills/credits in exchange for other skills/credits.

use chrono::{DateTime, Utc};
use kernel::id::{ExchangeRequestId, UserId};
use kernel::input::{parse_amount, require_filled, split_list};

use crate::domain::value_object::{
    duration::ExchangeDuration, exchange_status::ExchangeStatus, location_type::LocationType,
};
use crate::error::CommunityResult;

/// Exchange request entity
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRequest {
    pub id: ExchangeRequestId,
    pub title: String,
    pub description: String,
    pub creator_username: String,
    pub creator: Option<UserId>,
    pub credits_requested: u32,
    pub credits_offered: u32,
    pub skills_requested: Vec<String>,
    pub skills_offered: Vec<String>,
    pub duration: Option<ExchangeDuration>,
    pub location_type: LocationType,
    pub availability_schedule: Option<String>,
    pub view_count: u64,
    pub response_count: u64,
    pub status: ExchangeStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl ExchangeRequest {
    /// Case-insensitive match on title, description and either skill list
    ///
    /// A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&needle);

        hit(&self.title)
            || hit(&self.description)
            || self.skills_offered.iter().any(|s| hit(s))
            || self.skills_requested.iter().any(|s| hit(s))
    }

    /// Route of the exchange detail page
    pub fn detail_path(&self) -> String {
        format!("/skillexchange/{}", self.id)
    }

    /// Whether `viewer` may respond: the request is open and not their own
    ///
    /// An anonymous viewer may try; the backend rejects the response.
    pub fn accepts_responses_from(&self, viewer: Option<&str>) -> bool {
        self.status.is_open() && viewer.is_none_or(|name| name != self.creator_username)
    }
}

/// New-exchange form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequestFields {
    pub title: String,
    pub description: String,
    pub credits_requested: String,
    pub credits_offered: String,
    /// Comma-separated
    pub skills_requested: String,
    /// Comma-separated
    pub skills_offered: String,
    pub duration_value: String,
    pub duration_unit: String,
    pub location_type: String,
    pub availability_schedule: String,
}

impl Default for ExchangeRequestFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            credits_requested: String::new(),
            credits_offered: String::new(),
            skills_requested: String::new(),
            skills_offered: String::new(),
            duration_value: String::new(),
            duration_unit: "days".into(),
            location_type: "online".into(),
            availability_schedule: String::new(),
        }
    }
}

/// Validated new exchange request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExchangeRequest {
    pub title: String,
    pub description: String,
    pub credits_requested: u32,
    pub credits_offered: u32,
    pub skills_requested: Vec<String>,
    pub skills_offered: Vec<String>,
    pub duration: ExchangeDuration,
    pub availability_schedule: String,
    pub location_type: LocationType,
}

impl NewExchangeRequest {
    /// Title and description are required; every other field has a default
    pub fn from_fields(fields: &ExchangeRequestFields) -> CommunityResult<Self> {
        require_filled(&[
            ("title", fields.title.as_str()),
            ("description", fields.description.as_str()),
        ])?;
        Ok(Self {
            title: fields.title.clone(),
            description: fields.description.clone(),
            credits_requested: parse_amount(&fields.credits_requested),
            credits_offered: parse_amount(&fields.credits_offered),
            skills_requested: split_list(&fields.skills_requested),
            skills_offered: split_list(&fields.skills_offered),
            duration: ExchangeDuration::from_input(&fields.duration_value, &fields.duration_unit),
            availability_schedule: fields.availability_schedule.clone(),
            location_type: fields.location_type.parse().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::duration::DurationUnit;

    fn request() -> ExchangeRequest {
        ExchangeRequest {
            id: ExchangeRequestId::new("x1"),
            title: "Teach me Rust".into(),
            description: "Ownership and lifetimes".into(),
            creator_username: "ada".into(),
            creator: None,
            credits_requested: 0,
            credits_offered: 5,
            skills_requested: vec!["Rust".into()],
            skills_offered: vec!["React".into(), "Figma".into()],
            duration: None,
            location_type: LocationType::Online,
            availability_schedule: None,
            view_count: 0,
            response_count: 0,
            status: ExchangeStatus::Open,
            created_at: None,
        }
    }

    #[test]
    fn test_matches_any_field_case_insensitive() {
        let req = request();
        assert!(req.matches(""));
        assert!(req.matches("RUST"));
        assert!(req.matches("lifetimes"));
        assert!(req.matches("figma"));
        assert!(!req.matches("python"));
    }

    #[test]
    fn test_accepts_responses_from() {
        let mut req = request();
        assert!(req.accepts_responses_from(Some("bob")));
        assert!(req.accepts_responses_from(None));
        assert!(!req.accepts_responses_from(Some("ada")));

        req.status = ExchangeStatus::Completed;
        assert!(!req.accepts_responses_from(Some("bob")));
    }

    #[test]
    fn test_defaults_applied() {
        let new = NewExchangeRequest::from_fields(&ExchangeRequestFields {
            title: "Swap".into(),
            description: "React for Rust".into(),
            skills_offered: "React, Node".into(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(new.skills_offered, vec!["React", "Node"]);
        assert!(new.skills_requested.is_empty());
        assert_eq!(new.credits_requested, 0);
        assert_eq!(new.duration.value, 0);
        assert_eq!(new.duration.unit, DurationUnit::Days);
        assert_eq!(new.location_type, LocationType::Online);
    }

    #[test]
    fn test_description_required() {
        let result = NewExchangeRequest::from_fields(&ExchangeRequestFields {
            title: "Swap".into(),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
