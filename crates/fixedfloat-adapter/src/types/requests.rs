/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::enums::{Direction, EmergencyChoice, RateType};

// Field order below is the order the service documents; it is also the
// order of the signed body bytes.

/// Body of `POST /price`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    pub from_ccy: String,
    pub to_ccy: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub direction: Direction,
    #[serde(rename = "type")]
    pub rate_type: RateType,
}

impl PriceRequest {
    pub fn new(from_ccy: impl Into<String>, to_ccy: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from_ccy: from_ccy.into(),
            to_ccy: to_ccy.into(),
            amount,
            direction: Direction::default(),
            rate_type: RateType::default(),
        }
    }

    pub fn direction(mut self, direction: impl Into<Direction>) -> Self {
        self.direction = direction.into();
        self
    }

    pub fn rate_type(mut self, rate_type: impl Into<RateType>) -> Self {
        self.rate_type = rate_type.into();
        self
    }
}

/// Body of `POST /create`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub from_ccy: String,
    pub to_ccy: String,
    pub to_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// MEMO or destination tag. May instead be appended to `to_address`
    /// after a colon.
    #[serde(serialize_with = "string_or_false")]
    pub tag: Option<String>,
    pub direction: Direction,
    #[serde(rename = "type")]
    pub rate_type: RateType,
}

impl CreateOrderRequest {
    pub fn new(
        from_ccy: impl Into<String>,
        to_ccy: impl Into<String>,
        to_address: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            from_ccy: from_ccy.into(),
            to_ccy: to_ccy.into(),
            to_address: to_address.into(),
            amount,
            tag: None,
            direction: Direction::default(),
            rate_type: RateType::default(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn direction(mut self, direction: impl Into<Direction>) -> Self {
        self.direction = direction.into();
        self
    }

    pub fn rate_type(mut self, rate_type: impl Into<RateType>) -> Self {
        self.rate_type = rate_type.into();
        self
    }
}

/// Order identifier pair used by `order` and `qr`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRef {
    /// Order ID (e.g. `8PQWPY`)
    pub id: String,
    /// Security token returned in `data.token` on order creation
    pub token: String,
}

impl OrderRef {
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            token: token.into(),
        }
    }
}

/// Body of `POST /emergency`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmergencyRequest {
    pub id: String,
    pub token: String,
    pub choice: EmergencyChoice,
    /// Refund address, required by the service when `choice` is REFUND
    #[serde(serialize_with = "string_or_false")]
    pub address: Option<String>,
    #[serde(serialize_with = "string_or_false")]
    pub tag: Option<String>,
}

impl EmergencyRequest {
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            token: token.into(),
            choice: EmergencyChoice::default(),
            address: None,
            tag: None,
        }
    }

    pub fn choice(mut self, choice: impl Into<EmergencyChoice>) -> Self {
        self.choice = choice.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

impl From<OrderRef> for EmergencyRequest {
    fn from(order: OrderRef) -> Self {
        Self::new(order.id, order.token)
    }
}

/// Absent optional strings go on the wire as boolean `false`.
fn string_or_false<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.serialize_str(value),
        None => serializer.serialize_bool(false),
    }
}
