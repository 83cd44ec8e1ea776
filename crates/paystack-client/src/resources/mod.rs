//! Per-resource operations
//!
//! Each module adds its payload types and a block of methods to
//! [`GatewayClient`](crate::GatewayClient).

pub mod customers;
pub mod pages;
pub mod plans;
pub mod recipients;
pub mod subaccounts;
pub mod subscriptions;
pub mod transactions;
pub mod transfers;

use paystack_core::{ParameterSource, coerce_int};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Currency used when a payload names none
pub const DEFAULT_CURRENCY: &str = "NGN";

/// Page size and page number for list endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub per_page: i64,
    pub page: i64,
}

impl Pagination {
    /// Coerce loose inputs; non-numeric values become 0
    pub fn coerce(per_page: &Value, page: &Value) -> Self {
        Self {
            per_page: coerce_int(per_page),
            page: coerce_int(page),
        }
    }
}

/// Boolean field; accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
pub(crate) fn flag(params: &dyn ParameterSource, key: &str) -> Option<bool> {
    match params.provided(key)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Decimal field, e.g. a percentage
pub(crate) fn decimal(params: &dyn ParameterSource, key: &str) -> Option<f64> {
    match params.provided(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Nested object or array; JSON-encoded strings are decoded
pub(crate) fn structured(params: &dyn ParameterSource, key: &str) -> Option<Value> {
    let value = match params.provided(key)? {
        Value::String(s) => serde_json::from_str(&s).ok()?,
        v => v,
    };
    (value.is_object() || value.is_array()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paystack_core::Params;
    use serde_json::json;

    #[test]
    fn test_pagination_coercion() {
        assert_eq!(
            Pagination::coerce(&json!(15), &json!("2")),
            Pagination { per_page: 15, page: 2 }
        );
        assert_eq!(
            Pagination::coerce(&json!("ten"), &json!(null)),
            Pagination { per_page: 0, page: 0 }
        );
    }

    #[test]
    fn test_flag() {
        let params = Params::new()
            .with("a", "1")
            .with("b", "off")
            .with("c", true)
            .with("d", "maybe");
        assert_eq!(flag(&params, "a"), Some(true));
        assert_eq!(flag(&params, "b"), Some(false));
        assert_eq!(flag(&params, "c"), Some(true));
        assert_eq!(flag(&params, "d"), None);
        assert_eq!(flag(&params, "e"), None);
    }

    #[test]
    fn test_decimal_and_structured() {
        let params = Params::new()
            .with("percentage_charge", "18.5")
            .with("metadata", json!({"k": "v"}))
            .with("custom_fields", r#"[{"display_name": "Cart"}]"#)
            .with("split", "not-an-object");
        assert_eq!(decimal(&params, "percentage_charge"), Some(18.5));
        assert_eq!(structured(&params, "metadata"), Some(json!({"k": "v"})));
        assert_eq!(
            structured(&params, "custom_fields"),
            Some(json!([{"display_name": "Cart"}]))
        );
        assert_eq!(structured(&params, "split"), None);
    }
}
