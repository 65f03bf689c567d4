// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value storage layer.
//!
//! Stores mirror their state into a [`KeyValueStore`] as one JSON blob per
//! key. Long-lived state uses a [`FileStore`]; per-session filter selections
//! use a [`MemoryStore`] that is cleared when the session ends.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key names as constants.
pub mod keys {
    pub const TRAVELER_ACTIVITIES: &str = "locaylo_traveler_activities";
    /// Host activity list (keyed for the local host view)
    pub const HOST_ACTIVITIES: &str = "locaylo_activities";
    pub const PROFILE: &str = "locaylo_profile";

    // Session scope
    pub const SELECTED_LOCATION: &str = "selectedLocation";
    pub const SELECTED_LANGUAGES: &str = "selectedLanguages";
    pub const SELECTED_DURATIONS: &str = "selectedDurations";
}

/// A synchronous string key-value namespace.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    /// Drop every key in this namespace.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Errors from a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O failed: {0:#}")]
    Io(#[from] anyhow::Error),
}
