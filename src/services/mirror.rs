// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Write-through mirroring of store state into key-value storage.

use crate::db::{KeyValueStore, StorageError};
use crate::error::ParseError;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed parse step at the storage boundary.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and decode `key`.
///
/// Returns `None` when the key is absent, unreadable, or does not decode as `T`.
/// Failures are logged; they never reach the caller.
pub fn load<T: DeserializeOwned>(kv: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted state, using defaults");
            return None;
        }
    };

    match decode(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to parse persisted state, using defaults");
            None
        }
    }
}

/// Like [`load`], falling back to `default()`.
pub fn load_or_else<T, F>(kv: &dyn KeyValueStore, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    load(kv, key).unwrap_or_else(default)
}

/// Serialize `value` and write it to `key`.
pub fn persist<T: Serialize + ?Sized>(
    kv: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).with_context(|| format!("serializing {key}"))?;
    kv.set(key, &raw).inspect_err(|e| {
        tracing::error!(key, error = %e, "Failed to persist state");
    })
}
