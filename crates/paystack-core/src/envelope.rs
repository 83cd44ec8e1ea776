//! Response Envelope
//!
//! Every gateway response is a JSON object carrying some of `status`,
//! `message`, `data` and `meta`. Bodies are decoded into [`Envelope`] once,
//! at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GatewayError, Result, TransportError};

/// Parsed gateway response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Pagination info on list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Envelope {
    /// Decode a raw response body
    ///
    /// Invalid JSON is a transport failure; valid JSON that is not an object
    /// is a shape failure.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(TransportError::Decode)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(GatewayError::Shape(format!(
                "expected a JSON object, got {}",
                kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| GatewayError::Shape(e.to_string()))
    }

    /// The `data` payload
    pub fn data(&self) -> Result<&Value> {
        self.data
            .as_ref()
            .ok_or_else(|| GatewayError::Shape("response has no `data` field".into()))
    }

    /// Consume the envelope, keeping `data`
    pub fn into_data(self) -> Result<Value> {
        self.data
            .ok_or_else(|| GatewayError::Shape("response has no `data` field".into()))
    }

    /// The `data` payload of a list endpoint
    pub fn into_list(self) -> Result<Vec<Value>> {
        match self.into_data()? {
            Value::Array(items) => Ok(items),
            other => Err(GatewayError::Shape(format!(
                "expected `data` to be an array, got {}",
                kind(&other)
            ))),
        }
    }

    /// The status `message`
    pub fn message(&self) -> Result<&str> {
        self.message
            .as_deref()
            .ok_or_else(|| GatewayError::Shape("response has no `message` field".into()))
    }

    /// A string field inside `data`
    pub fn data_str(&self, field: &str) -> Result<&str> {
        self.data()?
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| GatewayError::Shape(format!("`data.{field}` is missing or not a string")))
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
