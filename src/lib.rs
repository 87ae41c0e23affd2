// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! rolodex-core: in-memory client records with fuzzy field search,
//! duplicate detection and deterministic pagination.

pub mod config;
pub mod error;
pub mod types;
pub mod storage;
pub mod search;
pub mod paginate;

pub use error::{LoadError, LoadOutcome};
pub use paginate::Page;
pub use storage::handle::{Refresh, StoreHandle};
pub use storage::record::Record;
pub use storage::store::RecordStore;
pub use types::value::FieldValue;

#[cfg(test)]
pub mod tests;
