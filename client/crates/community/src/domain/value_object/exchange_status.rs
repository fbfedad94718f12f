//! Exchange Status Value Object
//!
//! Lifecycle of an exchange request. Only the backend moves a request
//! between states.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

/// Exchange request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeStatus {
    #[default]
    #[display("open")]
    Open,
    #[display("closed")]
    Closed,
    #[display("completed")]
    Completed,
}

impl ExchangeStatus {
    /// Whether new responses are still accepted
    pub fn is_open(&self) -> bool {
        matches!(self, ExchangeStatus::Open)
    }
}

impl FromStr for ExchangeStatus {
    type Err = std::convert::Infallible;

    /// Unknown values read as `Open`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "closed" => ExchangeStatus::Closed,
            "completed" => ExchangeStatus::Completed,
            _ => ExchangeStatus::Open,
        })
    }
}

impl<'de> Deserialize<'de> for ExchangeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(|s| s.parse().unwrap_or_default())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse() {
        assert_eq!(
            serde_json::from_value::<ExchangeStatus>(json!("completed")).unwrap(),
            ExchangeStatus::Completed
        );
        assert_eq!(
            serde_json::from_value::<ExchangeStatus>(json!("CLOSED")).unwrap(),
            ExchangeStatus::Closed
        );
    }

    #[test]
    fn test_unknown_and_null_read_as_open() {
        assert_eq!(
            serde_json::from_value::<ExchangeStatus>(json!("archived")).unwrap(),
            ExchangeStatus::Open
        );
        assert_eq!(
            serde_json::from_value::<ExchangeStatus>(json!(null)).unwrap(),
            ExchangeStatus::Open
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ExchangeStatus::Completed.to_string(), "completed");
        assert!(ExchangeStatus::Open.is_open());
        assert!(!ExchangeStatus::Closed.is_open());
    }
}
