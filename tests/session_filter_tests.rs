// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session selections driving the browse list end to end.

use locaylo_core::config::Config;
use locaylo_core::db::{keys, KeyValueStore};
use locaylo_core::services::{filter_activities, ActivityFeed, FilterSession};
use locaylo_core::AppState;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::{as_dyn, ids, memory_kv};

#[test]
fn test_location_stored_as_raw_string() {
    let kv = memory_kv();
    let session = FilterSession::new(as_dyn(&kv));

    session.select_location("Rome, Italy").unwrap();

    assert_eq!(
        kv.get(keys::SELECTED_LOCATION).unwrap().as_deref(),
        Some("Rome, Italy")
    );
    assert_eq!(session.location().as_deref(), Some("Rome, Italy"));
}

#[test]
fn test_selecting_all_clears_location() {
    let kv = memory_kv();
    let session = FilterSession::new(as_dyn(&kv));

    session.select_location("Rome, Italy").unwrap();
    session.select_location("All").unwrap();

    assert_eq!(kv.get(keys::SELECTED_LOCATION).unwrap().as_deref(), Some(""));
    assert_eq!(session.location(), None);
    assert!(!session.criteria().has_structured_filters());
}

#[test]
fn test_sets_stored_as_json_arrays() {
    let kv = memory_kv();
    let session = FilterSession::new(as_dyn(&kv));

    session.set_languages(["French", "English"]).unwrap();
    session.toggle_duration("3-5").unwrap();

    assert_eq!(
        kv.get(keys::SELECTED_LANGUAGES).unwrap().as_deref(),
        Some("[\"English\",\"French\"]")
    );
    assert_eq!(
        kv.get(keys::SELECTED_DURATIONS).unwrap().as_deref(),
        Some("[\"3-5\"]")
    );
}

#[test]
fn test_criteria_read_back_by_a_new_session() {
    let kv = memory_kv();
    {
        let session = FilterSession::new(as_dyn(&kv));
        session.select_location("Berlin, Germany").unwrap();
        session.toggle_language("German").unwrap();
        session.set_durations(["1-3", "less-1"]).unwrap();
        session.remove_duration("less-1").unwrap();
    }

    let criteria = FilterSession::new(as_dyn(&kv)).criteria();
    assert_eq!(criteria.location.as_deref(), Some("Berlin, Germany"));
    assert!(criteria.languages.contains("German"));
    assert_eq!(criteria.duration_ids.len(), 1);
    assert!(criteria.duration_ids.contains("1-3"));
    assert!(criteria.search_text.is_empty());
}

#[test]
fn test_end_session_forgets_selections() {
    let kv = memory_kv();
    let session = FilterSession::new(as_dyn(&kv));
    session.select_location("Tokyo, Japan").unwrap();
    session.toggle_language("English").unwrap();
    session.toggle_duration("5-plus").unwrap();

    session.end_session().unwrap();

    assert!(kv.is_empty());
    let criteria = session.criteria();
    assert_eq!(criteria.location, None);
    assert!(criteria.languages.is_empty());
    assert!(criteria.duration_ids.is_empty());
}

#[test]
fn test_browse_flow_over_app_state() {
    let durable = memory_kv();
    let session_kv = memory_kv();
    let mut state = AppState::load(Config::default(), as_dyn(&durable), as_dyn(&session_kv));
    let mut feed = ActivityFeed::new(StdRng::seed_from_u64(11));

    state.session.select_location("Berlin, Germany").unwrap();
    state.session.toggle_duration("1-3").unwrap();

    let criteria = state.session.criteria();
    let activities = state.traveler_activities.activities();
    let shown = ids(&feed.refresh(&activities, &criteria));
    // Berlin slots are all 2h or 3h; only the 2h ones fall in 1-3
    assert_eq!(shown, vec!["55"]);

    // Favoriting does not change the result set or its order
    state.traveler_activities.toggle_favorite("55").unwrap();
    let activities = state.traveler_activities.activities();
    assert_eq!(ids(&feed.refresh(&activities, &criteria)), shown);
    assert!(filter_activities(&activities, &criteria)[0].is_favorite);

    state.session.end_session().unwrap();
    let all = feed.refresh(&activities, &state.session.criteria());
    assert_eq!(all.len(), activities.len());
}
