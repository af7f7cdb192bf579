/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response envelope with success check
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{FixedFloatError, Result};

/// Literal message the service sends with every successful response
pub const OK_MESSAGE: &str = "OK";

/// Envelope wrapped around every response body
///
/// `code` and `msg` are kept as raw JSON so that a mistyped field is
/// reported as an invalid envelope rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub msg: Option<Value>,
    #[serde(default)]
    pub data: Value,
}

impl ApiEnvelope {
    /// Integer `code`, if present and well-typed
    pub fn code(&self) -> Option<i64> {
        self.code.as_ref().and_then(Value::as_i64)
    }

    /// String `msg`, if present and well-typed
    pub fn msg(&self) -> Option<&str> {
        self.msg.as_ref().and_then(Value::as_str)
    }

    /// Whether the envelope reports success (`code == 0` and `msg == "OK"`)
    pub fn is_ok(&self) -> bool {
        self.code() == Some(0) && self.msg() == Some(OK_MESSAGE)
    }

    /// Unwrap `data`, or fail with the remote code and message.
    pub fn into_data(self) -> Result<Value> {
        if self.is_ok() {
            return Ok(self.data);
        }

        match (self.code(), self.msg()) {
            (Some(code), Some(msg)) => Err(FixedFloatError::Api {
                code,
                msg: msg.to_string(),
            }),
            _ => Err(FixedFloatError::InvalidResponse(format!(
                "envelope lacks an integer code or a string msg (code: {}, msg: {})",
                raw_field(self.code.as_ref()),
                raw_field(self.msg.as_ref()),
            ))),
        }
    }
}

fn raw_field(value: Option<&Value>) -> String {
    value.map_or_else(|| "none".to_string(), Value::to_string)
}
