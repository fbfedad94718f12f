//! Exchange Duration Value Object

use std::str::FromStr;

use derive_more::Display;
use kernel::input::parse_amount;
use serde::{Deserialize, Deserializer, Serialize};

/// Unit of an exchange duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[display("hours")]
    Hours,
    #[default]
    #[display("days")]
    Days,
    #[display("weeks")]
    Weeks,
    #[display("sessions")]
    Sessions,
}

impl FromStr for DurationUnit {
    type Err = std::convert::Infallible;

    /// Blank or unknown values read as `Days`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "hours" => DurationUnit::Hours,
            "weeks" => DurationUnit::Weeks,
            "sessions" => DurationUnit::Sessions,
            _ => DurationUnit::Days,
        })
    }
}

impl<'de> Deserialize<'de> for DurationUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(|s| s.parse().unwrap_or_default())
            .unwrap_or_default())
    }
}

/// Expected length of an exchange, e.g. `3 weeks`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
#[display("{value} {unit}")]
pub struct ExchangeDuration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl ExchangeDuration {
    /// Parse form input; a blank or non-numeric value becomes `0`
    pub fn from_input(value: &str, unit: &str) -> Self {
        Self {
            value: parse_amount(value),
            unit: unit.parse().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_input_defaults() {
        assert_eq!(ExchangeDuration::from_input("", ""), ExchangeDuration::default());
        assert_eq!(ExchangeDuration::from_input("abc", "weeks").value, 0);
        assert_eq!(ExchangeDuration::from_input("0", "hours").value, 0);
    }

    #[test]
    fn test_from_input_values() {
        let duration = ExchangeDuration::from_input(" 3 ", "weeks");
        assert_eq!(duration.value, 3);
        assert_eq!(duration.unit, DurationUnit::Weeks);
        assert_eq!(duration.to_string(), "3 weeks");
    }

    #[test]
    fn test_serializes_as_object() {
        assert_eq!(
            serde_json::to_value(ExchangeDuration::from_input("2", "sessions")).unwrap(),
            json!({"value": 2, "unit": "sessions"})
        );
    }
}
