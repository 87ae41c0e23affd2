// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Stateless queries over a store.
//!
//! Both queries are linear scans that return references into the store in
//! store order. Neither reorders nor ranks.

use crate::config::DUPLICATE_KEY_FIELD;
use crate::storage::record::Record;
use crate::storage::store::RecordStore;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// Records whose `field` contains `query`, ignoring case.
///
/// A record without the field never matches. An empty query matches every
/// record that carries the field, null values included.
pub fn search_by_field<'s>(store: &'s RecordStore, field: &str, query: &str) -> Vec<&'s Record> {
    let needle = query.to_lowercase();
    store
        .records()
        .iter()
        .filter(|record| match record.get(field) {
            Some(value) => value.as_text().to_lowercase().contains(&needle),
            None => false,
        })
        .collect()
}

/// Records sharing their email with at least one other record.
pub fn duplicate_emails(store: &RecordStore) -> Vec<&Record> {
    duplicates_by(store, DUPLICATE_KEY_FIELD)
}

/// Records whose `field` value is shared by at least one other record.
///
/// Values compare exactly, by their textual form. Records without the field,
/// or with a null value, take no part. Output keeps store order; groups are
/// not clustered.
pub fn duplicates_by<'s>(store: &'s RecordStore, field: &str) -> Vec<&'s Record> {
    let key_of = |record: &'s Record| -> Option<Cow<'s, str>> {
        record.get(field).filter(|v| !v.is_null()).map(|v| v.as_text())
    };

    let mut counts: FxHashMap<Cow<'s, str>, usize> = FxHashMap::default();
    for key in store.records().iter().filter_map(key_of) {
        *counts.entry(key).or_insert(0) += 1;
    }

    store
        .records()
        .iter()
        .filter(|record| {
            key_of(*record)
                .and_then(|key| counts.get(&key))
                .is_some_and(|&n| n > 1)
        })
        .collect()
}
