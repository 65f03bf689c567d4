// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - filtering, layout and the persisted stores.

pub mod filter;
pub mod host_activities;
pub mod map;
pub mod mirror;
pub mod notification;
pub mod profile;
pub mod schedule;
pub mod session;
pub mod traveler_activities;

pub use filter::{filter_activities, ActivityFeed, FilterCriteria, ShuffleMode};
pub use host_activities::HostActivityStore;
pub use notification::{Notification, NotificationPhase, NotificationTimer};
pub use profile::ProfileStore;
pub use schedule::{BlockLayout, LayoutCalculator};
pub use session::FilterSession;
pub use traveler_activities::TravelerActivityStore;
