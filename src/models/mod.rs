// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod duration;
pub mod host_activity;
pub mod profile;

pub use activity::{Activity, ActivityUserState, TimeSlot};
pub use duration::{DurationBucket, DurationRange};
pub use host_activity::{HostActivity, HostActivityStatus, HostActivityUpdate, NewHostActivity};
pub use profile::{Profile, ProfileMode, ProfileUpdate};

/// A selectable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
}

/// A selectable calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOption {
    /// MMDDYYYY
    pub id: String,
    /// e.g. "November 27th, 2025"
    pub name: String,
}
