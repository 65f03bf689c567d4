// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Schedule grid layout and the day/favourites views.

use locaylo_core::catalog;
use locaylo_core::config::Config;
use locaylo_core::services::schedule::{favourites, scheduled_on, time_axis_labels};
use locaylo_core::services::{BlockLayout, LayoutCalculator};

#[test]
fn test_morning_block() {
    let calc = LayoutCalculator::default();
    assert_eq!(
        calc.layout(Some("09:00"), Some("10:30")),
        BlockLayout { top: 540.0, height: 90.0 }
    );
}

#[test]
fn test_full_day_block_fills_grid() {
    let calc = LayoutCalculator::default();
    let block = calc.layout(Some("00:00"), Some("24:00"));
    assert_eq!(block, BlockLayout { top: 0.0, height: 1440.0 });
    assert_eq!(block.height, calc.grid_height());
}

#[test]
fn test_missing_or_malformed_times_use_fallback() {
    let calc = LayoutCalculator::default();
    let fallback = BlockLayout { top: 0.0, height: 60.0 };

    assert_eq!(calc.layout(None, None), fallback);
    assert_eq!(calc.layout(Some("09:00"), None), fallback);
    assert_eq!(calc.layout(None, Some("10:00")), fallback);
    assert_eq!(calc.layout(Some("nine"), Some("10:00")), fallback);
    assert_eq!(calc.layout(Some("09:00"), Some("10:75")), fallback);
    assert_eq!(calc.layout(Some(""), Some("")), fallback);
}

#[test]
fn test_later_start_moves_block_down() {
    let calc = LayoutCalculator::default();
    let mut previous = f64::NEG_INFINITY;
    for hour in 0..24 {
        let start = format!("{hour:02}:15");
        let block = calc.layout(Some(start.as_str()), Some("24:00"));
        assert!(block.top > previous, "top not increasing at {start}");
        previous = block.top;
    }
}

#[test]
fn test_longer_window_is_taller() {
    let calc = LayoutCalculator::default();
    let short = calc.layout(Some("10:00"), Some("11:00"));
    let long = calc.layout(Some("10:00"), Some("13:45"));
    assert_eq!(short.top, long.top);
    assert!(long.height > short.height);
    assert_eq!(long.height, 225.0);
}

#[test]
fn test_scale_follows_config() {
    let config = Config {
        pixels_per_hour: 100.0,
        fallback_block_height: 25.0,
        ..Config::default()
    };
    let calc = LayoutCalculator::from_config(&config);

    assert_eq!(
        calc.layout(Some("02:30"), Some("03:00")),
        BlockLayout { top: 250.0, height: 50.0 }
    );
    assert_eq!(calc.layout(None, None).height, 25.0);
}

#[test]
fn test_scheduled_activity_layout() {
    let mut activities = catalog::traveler_activities();
    let slot = activities[0].available_time_slots[0].clone();
    activities[0].schedule(&slot, "11272025");

    let today = scheduled_on(&activities, "11272025");
    assert_eq!(today.len(), 1);
    assert!(scheduled_on(&activities, "11282025").is_empty());

    let block = LayoutCalculator::default().layout_for(today[0]);
    // Flower Market 09:00-13:30
    assert_eq!(block, BlockLayout { top: 540.0, height: 270.0 });
}

#[test]
fn test_unscheduled_activity_gets_fallback() {
    let activities = catalog::traveler_activities();
    let block = LayoutCalculator::default().layout_for(&activities[0]);
    assert_eq!(block, BlockLayout { top: 0.0, height: 60.0 });
}

#[test]
fn test_favourites_view() {
    let mut activities = catalog::traveler_activities();
    activities[4].is_favorite = true;
    activities[40].is_favorite = true;

    let ids: Vec<&str> = favourites(&activities).iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "41"]);
}

#[test]
fn test_axis_has_an_hour_label_per_grid_line() {
    let labels = time_axis_labels();
    let calc = LayoutCalculator::default();
    for (i, label) in labels.iter().enumerate() {
        let block = calc.layout(Some(label.as_str()), Some("24:00"));
        assert_eq!(block.top, i as f64 * calc.pixels_per_hour());
    }
}
