// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for parsing persisted data and mutating stores.

use crate::db::StorageError;

/// Failure to turn untrusted text (persisted JSON, user input) into a typed value.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid time (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("Invalid time slot (expected HH:MM-HH:MM): {0}")]
    InvalidTimeSlot(String),

    #[error("Invalid date id (expected MMDDYYYY): {0}")]
    InvalidDate(String),
}

/// Store operation error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// True when the mutation was applied in memory but could not be mirrored.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, StoreError::Storage(_))
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
