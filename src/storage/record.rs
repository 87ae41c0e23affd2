// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record definition.

use crate::types::value::FieldValue;
use crate::types::FieldName;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// One client. Fields keep the order they had in the source object.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    fields: Vec<(FieldName, FieldValue)>,
}

impl Record {
    /// Builds a record from `(name, value)` pairs. A repeated name keeps its
    /// first position and takes the last value, like a JSON object does.
    pub fn new<K, I>(fields: I) -> Self
    where
        K: Into<FieldName>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        let mut out: Vec<(FieldName, FieldValue)> = Vec::new();
        for (name, value) in fields {
            let name = name.into();
            match out.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => out.push((name, value)),
            }
        }
        Self { fields: out }
    }

    pub fn from_json_object(object: Map<String, Value>) -> Self {
        Self {
            fields: object
                .into_iter()
                .map(|(k, v)| (k, FieldValue::from_json(v)))
                .collect(),
        }
    }

    /// Value of `field`, or `None` when this record does not carry it.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `key: value` pairs joined with `, `, in field order.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
