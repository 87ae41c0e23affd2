// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load clients: {0}")]
    Malformed(String),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// How a load went. Every variant except `Ok` comes with an empty store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Ok,
    NotFound,
    Malformed(String),
    Unreadable(String),
}

impl LoadOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, LoadOutcome::Ok)
    }

    /// Short machine-readable label, used in API responses and metric labels.
    pub fn label(&self) -> &'static str {
        match self {
            LoadOutcome::Ok => "ok",
            LoadOutcome::NotFound => "not_found",
            LoadOutcome::Malformed(_) => "malformed",
            LoadOutcome::Unreadable(_) => "unreadable",
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            LoadOutcome::Malformed(d) | LoadOutcome::Unreadable(d) => Some(d),
            LoadOutcome::Ok | LoadOutcome::NotFound => None,
        }
    }
}

impl From<&LoadError> for LoadOutcome {
    fn from(e: &LoadError) -> Self {
        match e {
            LoadError::NotFound(_) => LoadOutcome::NotFound,
            LoadError::Io { source, .. } => LoadOutcome::Unreadable(source.to_string()),
            LoadError::Malformed(detail) => LoadOutcome::Malformed(detail.clone()),
        }
    }
}
