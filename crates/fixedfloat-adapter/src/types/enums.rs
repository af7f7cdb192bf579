/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Whether `amount` is what the client sends or what it receives.
///
/// Unknown values are passed through untouched; the service decides
/// whether they are valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `amount` is denominated in `fromCcy`
    #[default]
    From,
    /// `amount` is denominated in `toCcy`
    To,
    #[serde(untagged)]
    Other(String),
}

/// Exchange rate type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Fixed,
    #[default]
    Float,
    #[serde(untagged)]
    Other(String),
}

/// Action to take on an order in EMERGENCY status
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmergencyChoice {
    /// Continue the exchange at the current market rate
    #[default]
    Exchange,
    /// Refund minus miner fee
    Refund,
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for Direction {
    fn from(value: &str) -> Self {
        match value {
            "from" => Direction::From,
            "to" => Direction::To,
            other => Direction::Other(other.to_string()),
        }
    }
}

impl From<&str> for RateType {
    fn from(value: &str) -> Self {
        match value {
            "fixed" => RateType::Fixed,
            "float" => RateType::Float,
            other => RateType::Other(other.to_string()),
        }
    }
}

impl From<&str> for EmergencyChoice {
    fn from(value: &str) -> Self {
        match value {
            "EXCHANGE" => EmergencyChoice::Exchange,
            "REFUND" => EmergencyChoice::Refund,
            other => EmergencyChoice::Other(other.to_string()),
        }
    }
}
