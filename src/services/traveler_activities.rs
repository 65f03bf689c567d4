// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Traveler activity store: favorites and schedule state over the catalog.
//!
//! Persisted records only contribute user state. On load that state is merged
//! onto the current catalog by id, so catalog edits and user state never
//! corrupt each other.

use crate::catalog;
use crate::db::{keys, KeyValueStore};
use crate::error::{Result, StoreError};
use crate::models::{Activity, ActivityUserState, TimeSlot};
use crate::services::mirror;
use crate::time_utils::parse_date_id;
use std::collections::HashMap;
use std::sync::Arc;

pub struct TravelerActivityStore {
    kv: Arc<dyn KeyValueStore>,
    activities: Arc<[Activity]>,
}

impl TravelerActivityStore {
    /// Load over the compiled-in catalog.
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::load_with_catalog(kv, catalog::traveler_activities())
    }

    pub fn load_with_catalog(kv: Arc<dyn KeyValueStore>, catalog: Vec<Activity>) -> Self {
        let stored: Option<Vec<ActivityUserState>> = mirror::load(&*kv, keys::TRAVELER_ACTIVITIES);

        let activities = match stored {
            Some(states) => {
                let restored = states.len();
                let merged = reconcile(catalog, &states);
                tracing::info!(
                    count = merged.len(),
                    restored,
                    "Restored traveler activities"
                );
                merged
            }
            None => {
                tracing::info!(count = catalog.len(), "Seeded traveler activities from catalog");
                catalog
            }
        };

        Self {
            kv,
            activities: activities.into(),
        }
    }

    /// Current snapshot.
    pub fn activities(&self) -> Arc<[Activity]> {
        Arc::clone(&self.activities)
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<Arc<[Activity]>> {
        self.update(id, |activity| {
            activity.is_favorite = !activity.is_favorite;
            Ok(())
        })
    }

    /// Put an activity on the schedule at one of its available slots.
    ///
    /// `time_slot` is `HH:MM-HH:MM`; `date` is a MMDDYYYY id.
    pub fn add_to_schedule(
        &mut self,
        id: &str,
        time_slot: &str,
        date: &str,
    ) -> Result<Arc<[Activity]>> {
        let slot: TimeSlot = time_slot.parse()?;
        parse_date_id(date)?;

        self.update(id, |activity| {
            if !activity.available_time_slots.contains(&slot) {
                return Err(StoreError::Invalid(format!(
                    "{} is not offered for activity {}",
                    slot, activity.id
                )));
            }
            activity.schedule(&slot, date);
            Ok(())
        })
    }

    pub fn remove_from_schedule(&mut self, id: &str) -> Result<Arc<[Activity]>> {
        self.update(id, |activity| {
            activity.unschedule();
            Ok(())
        })
    }

    /// Apply `f` to the activity with `id`, then commit and mirror the new snapshot.
    fn update<F>(&mut self, id: &str, f: F) -> Result<Arc<[Activity]>>
    where
        F: FnOnce(&mut Activity) -> Result<()>,
    {
        let mut next = self.activities.to_vec();
        let activity = next
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("activity {id}")))?;
        f(activity)?;

        self.activities = next.into();
        mirror::persist(&*self.kv, keys::TRAVELER_ACTIVITIES, &*self.activities)?;
        Ok(self.activities())
    }
}

/// Merge persisted user state onto the catalog.
///
/// Output follows catalog order. Stored ids missing from the catalog are
/// dropped; catalog entries without stored state keep their defaults.
pub fn reconcile(mut catalog: Vec<Activity>, stored: &[ActivityUserState]) -> Vec<Activity> {
    let by_id: HashMap<&str, &ActivityUserState> =
        stored.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut matched = 0usize;
    for activity in &mut catalog {
        if let Some(state) = by_id.get(activity.id.as_str()) {
            state.apply_to(activity);
            matched += 1;
        }
    }

    let dropped = by_id.len() - matched.min(by_id.len());
    if dropped > 0 {
        tracing::debug!(dropped, "Dropped stored activities no longer in catalog");
    }
    catalog
}
