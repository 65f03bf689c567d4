// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Traveler activity model, as stored in key-value storage and rendered.

use crate::error::ParseError;
use crate::time_utils::parse_clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A bookable `HH:MM-HH:MM` window. Always well-formed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    start: String,
    end: String,
}

impl TimeSlot {
    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Slot length in hours.
    pub fn duration_hours(&self) -> f64 {
        // Both ends were validated on construction.
        let start = parse_clock(&self.start).unwrap_or(0.0);
        let end = parse_clock(&self.end).unwrap_or(0.0);
        end - start
    }
}

impl FromStr for TimeSlot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidTimeSlot(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let (start, end) = (start.trim(), end.trim());
        parse_clock(start).map_err(|_| invalid())?;
        parse_clock(end).map_err(|_| invalid())?;
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A bookable local experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    pub id: String,
    pub name: String,
    /// Location name, e.g. "Bangkok, Thailand"
    pub location: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string[]"))]
    pub available_time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub is_favorite: bool,
    /// Whether the activity is on the traveler's schedule
    #[serde(default)]
    pub is_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Scheduled date id (MMDDYYYY)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub emoji: String,
    /// Language the activity is hosted in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Per-slot lengths in hours, derived from `available_time_slots`
    #[serde(default)]
    pub duration: Vec<f64>,
}

impl Activity {
    /// Build an unscheduled catalog activity, deriving slot durations.
    pub fn new(
        id: &str,
        name: &str,
        location: &str,
        slots: &[&str],
        emoji: &str,
        language: Option<&str>,
    ) -> Result<Self, ParseError> {
        let available_time_slots = slots
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<TimeSlot>, _>>()?;

        let mut activity = Self {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            available_time_slots,
            is_favorite: false,
            is_added: false,
            start_time: None,
            end_time: None,
            date: None,
            emoji: emoji.to_string(),
            language: language.map(str::to_string),
            duration: Vec::new(),
        };
        activity.refresh_durations();
        Ok(activity)
    }

    /// Recompute `duration` from the available slots.
    pub fn refresh_durations(&mut self) {
        self.duration = self
            .available_time_slots
            .iter()
            .map(TimeSlot::duration_hours)
            .collect();
    }

    /// True when the activity carries a complete schedule entry.
    pub fn is_scheduled(&self) -> bool {
        self.is_added && self.start_time.is_some() && self.end_time.is_some() && self.date.is_some()
    }

    pub fn schedule(&mut self, slot: &TimeSlot, date: &str) {
        self.is_added = true;
        self.start_time = Some(slot.start().to_string());
        self.end_time = Some(slot.end().to_string());
        self.date = Some(date.to_string());
    }

    pub fn unschedule(&mut self) {
        self.is_added = false;
        self.start_time = None;
        self.end_time = None;
        self.date = None;
    }
}

/// User-owned fields of a persisted activity record.
///
/// Only these are read back from storage; catalog fields always come from the
/// compiled-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityUserState {
    pub id: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_added: bool,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl ActivityUserState {
    /// Apply this state onto a catalog entry.
    ///
    /// A record flagged as added without a complete time window is applied as
    /// unscheduled.
    pub fn apply_to(&self, activity: &mut Activity) {
        activity.is_favorite = self.is_favorite;
        match (&self.start_time, &self.end_time, &self.date) {
            (Some(start), Some(end), Some(date)) if self.is_added => {
                activity.is_added = true;
                activity.start_time = Some(start.clone());
                activity.end_time = Some(end.clone());
                activity.date = Some(date.clone());
            }
            _ => activity.unschedule(),
        }
    }
}
