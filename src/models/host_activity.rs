// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities offered by a local host.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum HostActivityStatus {
    Pending,
    Scheduled,
}

/// Stored host activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HostActivity {
    pub id: String,
    pub name: String,
    /// Date id (MMDDYYYY)
    pub date: String,
    /// Start time (HH:MM)
    pub start_time: String,
    /// End time (HH:MM)
    pub end_time: String,
    pub status: HostActivityStatus,
}

/// Fields for a new host activity; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHostActivity {
    pub name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: HostActivityStatus,
}

impl NewHostActivity {
    pub fn into_activity(self, id: String) -> HostActivity {
        HostActivity {
            id,
            name: self.name,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status,
        }
    }
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostActivityUpdate {
    pub name: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub status: Option<HostActivityStatus>,
}

impl HostActivityUpdate {
    pub fn apply_to(self, activity: &mut HostActivity) {
        if let Some(name) = self.name {
            activity.name = name;
        }
        if let Some(date) = self.date {
            activity.date = date;
        }
        if let Some(start_time) = self.start_time {
            activity.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            activity.end_time = end_time;
        }
        if let Some(status) = self.status {
            activity.status = status;
        }
    }
}
