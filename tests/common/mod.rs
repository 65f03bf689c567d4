// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use locaylo_core::db::{FileStore, KeyValueStore, MemoryStore};
use locaylo_core::models::Activity;
use std::path::PathBuf;
use std::sync::Arc;

/// Fresh in-memory namespace.
#[allow(dead_code)]
pub fn memory_kv() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Coerce a concrete store into the trait object the stores take.
#[allow(dead_code)]
pub fn as_dyn<S: KeyValueStore + 'static>(kv: &Arc<S>) -> Arc<dyn KeyValueStore> {
    kv.clone()
}

/// File store in an empty per-test scratch directory.
#[allow(dead_code)]
pub fn scratch_file_store(test_name: &str) -> (Arc<FileStore>, PathBuf) {
    let dir = std::env::temp_dir().join(format!(
        "locaylo-it-{}-{}",
        test_name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    (Arc::new(FileStore::new(&dir)), dir)
}

/// Build an activity with the given slots.
#[allow(dead_code)]
pub fn activity(id: &str, location: &str, slots: &[&str], language: Option<&str>) -> Activity {
    Activity::new(id, &format!("Activity {id}"), location, slots, "⭐", language)
        .expect("test slots should be well-formed")
}

#[allow(dead_code)]
pub fn ids(activities: &[&Activity]) -> Vec<String> {
    activities.iter().map(|a| a.id.clone()).collect()
}
