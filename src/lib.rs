// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Locaylo core: activity matching and schedule state for the Locaylo front-end.
//!
//! This crate provides the logic behind the browse, filter and schedule views:
//! filtering the activity catalog, laying out the schedule grid, and mirroring
//! store state into key-value storage.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use db::KeyValueStore;
use services::{
    FilterSession, HostActivityStore, LayoutCalculator, NotificationTimer, ProfileStore,
    TravelerActivityStore,
};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub traveler_activities: TravelerActivityStore,
    pub host_activities: HostActivityStore,
    pub profile: ProfileStore,
    pub session: FilterSession,
    pub layout: LayoutCalculator,
    pub notifications: NotificationTimer,
}

impl AppState {
    /// Load every store. `durable` backs the catalogs and profile; `session`
    /// backs the per-session filter selections.
    pub fn load(
        config: Config,
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
    ) -> Self {
        let state = Self {
            traveler_activities: TravelerActivityStore::load(Arc::clone(&durable)),
            host_activities: HostActivityStore::load(Arc::clone(&durable)),
            profile: ProfileStore::load(durable),
            session: FilterSession::new(session),
            layout: LayoutCalculator::from_config(&config),
            notifications: NotificationTimer::from_config(&config),
            config,
        };
        tracing::info!(
            storage_dir = %state.config.storage_dir.display(),
            "Application state loaded"
        );
        state
    }

    /// Load with a [`db::FileStore`] under `config.storage_dir` and an in-memory session.
    pub fn open(config: Config) -> Self {
        let durable = Arc::new(db::FileStore::new(&config.storage_dir));
        let session = Arc::new(db::MemoryStore::new());
        Self::load(config, durable, session)
    }
}
