// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The loaded record collection.

use crate::error::{LoadError, LoadOutcome, LoadResult};
use crate::storage::record::Record;
use crate::types::FieldName;
use rustc_hash::FxHashSet;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Every record from one source, in source order, plus the union of their
/// field names in first-seen order. Never mutated after construction.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    field_names: Vec<FieldName>,
    fingerprint: Option<blake3::Hash>,
}

impl RecordStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let field_names = {
            let mut seen = FxHashSet::default();
            let mut names = Vec::new();
            for name in records.iter().flat_map(Record::field_names) {
                if seen.insert(name) {
                    names.push(name.to_string());
                }
            }
            names
        };
        Self {
            records,
            field_names,
            fingerprint: None,
        }
    }

    /// Decodes a JSON array of flat objects.
    pub fn from_json_slice(bytes: &[u8]) -> LoadResult<Self> {
        let doc: Value =
            serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed(e.to_string()))?;

        let items = match doc {
            Value::Array(items) => items,
            other => {
                return Err(LoadError::Malformed(format!(
                    "expected a JSON array of objects, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(object) => records.push(Record::from_json_object(object)),
                other => {
                    return Err(LoadError::Malformed(format!(
                        "element {} is {}, expected an object",
                        i,
                        json_kind(&other)
                    )))
                }
            }
        }

        let mut store = Self::from_records(records);
        store.fingerprint = Some(blake3::hash(bytes));
        Ok(store)
    }

    pub fn try_load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Loads `path`, degrading to an empty store when the file is missing,
    /// unreadable or malformed. The outcome says which.
    pub fn load(path: impl AsRef<Path>) -> (Self, LoadOutcome) {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                tracing::info!(
                    "Loaded {} records ({} fields) from {:?}",
                    store.len(),
                    store.field_names.len(),
                    path
                );
                (store, LoadOutcome::Ok)
            }
            Err(e) => {
                tracing::warn!("{}", e);
                let outcome = LoadOutcome::from(&e);
                (Self::empty(), outcome)
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn field_names(&self) -> &[FieldName] {
        &self.field_names
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field_names.iter().any(|f| f == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// BLAKE3 digest of the source bytes, hex encoded. `None` for stores not
    /// decoded from bytes.
    pub fn fingerprint_hex(&self) -> Option<String> {
        self.fingerprint.map(|h| h.to_hex().to_string())
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
