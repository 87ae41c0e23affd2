// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Page size used by both front-ends when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Field whose value identifies a client for duplicate detection.
pub const DUPLICATE_KEY_FIELD: &str = "email";

/// Data file read when no path is configured.
pub const DEFAULT_DATA_PATH: &str = "data/clients.json";
