// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Host activity store: the local host's offered activities.

use crate::catalog;
use crate::db::{keys, KeyValueStore};
use crate::error::{Result, StoreError};
use crate::models::{HostActivity, HostActivityUpdate, NewHostActivity};
use crate::services::mirror;
use crate::time_utils::{parse_clock, parse_date_id};
use std::sync::Arc;

pub struct HostActivityStore {
    kv: Arc<dyn KeyValueStore>,
    activities: Arc<[HostActivity]>,
}

impl HostActivityStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        let activities: Vec<HostActivity> =
            mirror::load_or_else(&*kv, keys::HOST_ACTIVITIES, catalog::default_host_activities);
        tracing::info!(count = activities.len(), "Loaded host activities");
        Self {
            kv,
            activities: activities.into(),
        }
    }

    pub fn activities(&self) -> Arc<[HostActivity]> {
        Arc::clone(&self.activities)
    }

    pub fn get(&self, id: &str) -> Option<&HostActivity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Append a new activity under a fresh millisecond-timestamp id.
    pub fn add(&mut self, new: NewHostActivity) -> Result<HostActivity> {
        validate_fields(&new.name, &new.date, &new.start_time, &new.end_time)?;

        let activity = new.into_activity(self.next_id());
        let mut next = self.activities.to_vec();
        next.push(activity.clone());
        self.commit(next)?;

        tracing::info!(id = %activity.id, "Added host activity");
        Ok(activity)
    }

    /// Apply the present fields of `update` to activity `id`.
    pub fn update(&mut self, id: &str, update: HostActivityUpdate) -> Result<Arc<[HostActivity]>> {
        let mut next = self.activities.to_vec();
        let activity = next
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("host activity {id}")))?;

        let mut candidate = activity.clone();
        update.apply_to(&mut candidate);
        validate_fields(
            &candidate.name,
            &candidate.date,
            &candidate.start_time,
            &candidate.end_time,
        )?;
        *activity = candidate;

        self.commit(next)
    }

    pub fn delete(&mut self, id: &str) -> Result<Arc<[HostActivity]>> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(format!("host activity {id}")));
        }
        let next: Vec<HostActivity> = self
            .activities
            .iter()
            .filter(|a| a.id != id)
            .cloned()
            .collect();
        self.commit(next)
    }

    fn next_id(&self) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn commit(&mut self, next: Vec<HostActivity>) -> Result<Arc<[HostActivity]>> {
        self.activities = next.into();
        mirror::persist(&*self.kv, keys::HOST_ACTIVITIES, &*self.activities)?;
        Ok(self.activities())
    }
}

fn validate_fields(name: &str, date: &str, start_time: &str, end_time: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Invalid("name must not be empty".to_string()));
    }
    parse_date_id(date)?;
    parse_clock(start_time)?;
    parse_clock(end_time)?;
    Ok(())
}
