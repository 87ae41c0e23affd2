// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Swappable reference to the current store.

use crate::error::LoadOutcome;
use crate::storage::store::RecordStore;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Holds the published store for a data file. Readers take a snapshot and
/// query it without locking; `refresh` builds the replacement first and then
/// swaps it in with a single write.
pub struct StoreHandle {
    source: PathBuf,
    current: RwLock<Arc<RecordStore>>,
    refreshing: Mutex<()>,
}

/// Result of one refresh: the store it replaced, the store it published, and
/// how the load went.
pub struct Refresh {
    pub previous: Arc<RecordStore>,
    pub current: Arc<RecordStore>,
    pub outcome: LoadOutcome,
}

impl Refresh {
    /// Whether the published content differs from what it replaced.
    pub fn changed(&self) -> bool {
        self.previous.fingerprint_hex() != self.current.fingerprint_hex()
    }
}

impl StoreHandle {
    /// Loads `source` and publishes the result (possibly empty).
    pub fn open(source: impl Into<PathBuf>) -> (Self, LoadOutcome) {
        let source = source.into();
        let (store, outcome) = RecordStore::load(&source);
        (Self::with_store(source, store), outcome)
    }

    pub fn with_store(source: impl Into<PathBuf>, store: RecordStore) -> Self {
        Self {
            source: source.into(),
            current: RwLock::new(Arc::new(store)),
            refreshing: Mutex::new(()),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn snapshot(&self) -> Arc<RecordStore> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Reloads the source and publishes whatever the load produced.
    ///
    /// Refreshes run one at a time, so stores are published in the order
    /// they were read and `previous` is always the store this refresh
    /// replaced.
    pub fn refresh(&self) -> Refresh {
        let _serial = self.refreshing.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = self.snapshot();
        let (store, outcome) = RecordStore::load(&self.source);
        let current = Arc::new(store);
        self.publish(Arc::clone(&current));
        Refresh {
            previous,
            current,
            outcome,
        }
    }

    pub fn publish(&self, store: Arc<RecordStore>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = store;
    }
}
