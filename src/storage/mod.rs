// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record storage: single records, the loaded store, and the swappable
//! handle front-ends read through.

pub mod record;
pub mod store;
pub mod handle;
