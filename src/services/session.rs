// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-session filter selections.
//!
//! Selections live in the short-lived session namespace and are read back
//! whenever the browse view regains focus.

use crate::catalog::ALL_LOCATIONS;
use crate::db::{keys, KeyValueStore};
use crate::error::Result;
use crate::services::filter::FilterCriteria;
use crate::services::mirror;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct FilterSession {
    kv: Arc<dyn KeyValueStore>,
}

impl FilterSession {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Read the stored selections. Search text is not part of the session.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            location: self.location(),
            languages: self.languages(),
            duration_ids: self.durations(),
            ..Default::default()
        }
    }

    pub fn location(&self) -> Option<String> {
        match self.kv.get(keys::SELECTED_LOCATION) {
            Ok(location) => location.filter(|l| !l.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read selected location");
                None
            }
        }
    }

    pub fn languages(&self) -> BTreeSet<String> {
        self.read_set(keys::SELECTED_LANGUAGES)
    }

    pub fn durations(&self) -> BTreeSet<String> {
        self.read_set(keys::SELECTED_DURATIONS)
    }

    /// Select a location by name; "All" clears the selection.
    pub fn select_location(&self, name: &str) -> Result<()> {
        let value = if name == ALL_LOCATIONS.name { "" } else { name };
        self.kv.set(keys::SELECTED_LOCATION, value)?;
        Ok(())
    }

    pub fn set_languages<I, S>(&self, languages: I) -> Result<BTreeSet<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = languages.into_iter().map(Into::into).collect();
        self.write_set(keys::SELECTED_LANGUAGES, set)
    }

    pub fn toggle_language(&self, language: &str) -> Result<BTreeSet<String>> {
        self.toggle(keys::SELECTED_LANGUAGES, language)
    }

    pub fn remove_language(&self, language: &str) -> Result<BTreeSet<String>> {
        let mut set = self.languages();
        set.remove(language);
        self.write_set(keys::SELECTED_LANGUAGES, set)
    }

    pub fn set_durations<I, S>(&self, ids: I) -> Result<BTreeSet<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = ids.into_iter().map(Into::into).collect();
        self.write_set(keys::SELECTED_DURATIONS, set)
    }

    pub fn toggle_duration(&self, id: &str) -> Result<BTreeSet<String>> {
        self.toggle(keys::SELECTED_DURATIONS, id)
    }

    pub fn remove_duration(&self, id: &str) -> Result<BTreeSet<String>> {
        let mut set = self.durations();
        set.remove(id);
        self.write_set(keys::SELECTED_DURATIONS, set)
    }

    /// Forget every selection.
    pub fn end_session(&self) -> Result<()> {
        for key in [
            keys::SELECTED_LOCATION,
            keys::SELECTED_LANGUAGES,
            keys::SELECTED_DURATIONS,
        ] {
            self.kv.remove(key)?;
        }
        tracing::debug!("Filter session cleared");
        Ok(())
    }

    fn read_set(&self, key: &str) -> BTreeSet<String> {
        mirror::load::<Vec<String>>(&*self.kv, key)
            .unwrap_or_default()
            .into_iter()
            .collect()
    }

    fn toggle(&self, key: &str, value: &str) -> Result<BTreeSet<String>> {
        let mut set = self.read_set(key);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        self.write_set(key, set)
    }

    fn write_set(&self, key: &str, set: BTreeSet<String>) -> Result<BTreeSet<String>> {
        mirror::persist(&*self.kv, key, &set)?;
        Ok(set)
    }
}
