// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shared value types.

pub mod value;

/// Canonical field-name representation. JSON object keys are already
/// strings, so no alternate spelling survives past the loader.
pub type FieldName = String;
