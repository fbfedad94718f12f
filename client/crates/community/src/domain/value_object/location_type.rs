//! Location Type Value Object

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

/// Where an exchange takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    #[default]
    #[display("online")]
    Online,
    #[display("in_person")]
    InPerson,
    #[display("hybrid")]
    Hybrid,
}

impl FromStr for LocationType {
    type Err = std::convert::Infallible;

    /// Blank or unknown values read as `Online`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "in_person" => LocationType::InPerson,
            "hybrid" => LocationType::Hybrid,
            _ => LocationType::Online,
        })
    }
}

impl<'de> Deserialize<'de> for LocationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(|s| s.parse().unwrap_or_default())
            .unwrap_or_default())
    }
}
