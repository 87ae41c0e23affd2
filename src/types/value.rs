// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Scalar leaf values held by a record.

use serde::Serialize;
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::fmt;

/// One field value. Records are flat, so only scalar leaves exist.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Converts a decoded JSON value. Nested arrays and objects are kept as
    /// their compact JSON text.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => FieldValue::Number(n),
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Null => FieldValue::Null,
            nested @ (Value::Array(_) | Value::Object(_)) => {
                tracing::debug!("flattening nested value to text");
                FieldValue::Text(nested.to_string())
            }
        }
    }

    /// Textual form used for matching and display. Null is the empty string.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            FieldValue::Null => Cow::Borrowed(""),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}
