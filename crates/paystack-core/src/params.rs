//! Parameter Source
//!
//! Inbound form/query values a host application hands to the client when a
//! call is made without an explicit payload.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Supplies named request fields
///
/// Implement this over your web framework's request type. Missing keys,
/// nulls and empty strings all count as "not provided".
pub trait ParameterSource: Send + Sync {
    /// Raw value for a field
    fn value(&self, key: &str) -> Option<Value>;

    /// Value with null and empty strings filtered out
    fn provided(&self, key: &str) -> Option<Value> {
        match self.value(key)? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            v => Some(v),
        }
    }

    /// Field rendered as a non-empty string
    fn text(&self, key: &str) -> Option<String> {
        match self.provided(key)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Field coerced with [`coerce_int`]
    fn integer(&self, key: &str) -> Option<i64> {
        self.provided(key).map(|v| coerce_int(&v))
    }
}

/// Coerce a loose JSON value to an integer
///
/// Numbers truncate, strings use their leading signed digits, `true` is 1,
/// everything else is 0. Out-of-range values saturate at the `i64` bounds.
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(truncate))
            .unwrap_or(0),
        Value::String(s) => leading_int(s.trim()),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(f: f64) -> i64 {
    f.trunc() as i64
}

fn leading_int(s: &str) -> i64 {
    let sign = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign);
    if digits == 0 {
        return 0;
    }

    s[..sign + digits].parse::<i64>().unwrap_or(if s.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Map-backed parameter source
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    values: HashMap<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from string pairs, e.g. a decoded query string
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        }
    }

    /// Add or replace a field
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            values: map.into_iter().collect(),
        }
    }
}

impl ParameterSource for Params {
    fn value(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}
