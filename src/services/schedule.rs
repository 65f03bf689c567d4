// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Schedule grid layout: maps a time window to a vertical pixel block.

use crate::config::Config;
use crate::models::Activity;
use crate::time_utils::parse_clock;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const DEFAULT_PIXELS_PER_HOUR: f64 = 60.0;
pub const DEFAULT_FALLBACK_HEIGHT: f64 = 60.0;

/// Vertical placement of a block in the 24-hour grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BlockLayout {
    pub top: f64,
    /// May be negative when the end time precedes the start time
    pub height: f64,
}

impl BlockLayout {
    /// Clamp the height to at least `min_height`.
    pub fn clamped(self, min_height: f64) -> Self {
        Self {
            top: self.top,
            height: self.height.max(min_height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCalculator {
    pixels_per_hour: f64,
    fallback_height: f64,
}

impl Default for LayoutCalculator {
    fn default() -> Self {
        Self {
            pixels_per_hour: DEFAULT_PIXELS_PER_HOUR,
            fallback_height: DEFAULT_FALLBACK_HEIGHT,
        }
    }
}

impl LayoutCalculator {
    pub fn new(pixels_per_hour: f64, fallback_height: f64) -> Self {
        Self {
            pixels_per_hour,
            fallback_height,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pixels_per_hour, config.fallback_block_height)
    }

    pub fn pixels_per_hour(&self) -> f64 {
        self.pixels_per_hour
    }

    /// Total grid height for 24 hours.
    pub fn grid_height(&self) -> f64 {
        24.0 * self.pixels_per_hour
    }

    /// Place a `start`–`end` window. Missing or malformed times give the fallback block.
    pub fn layout(&self, start: Option<&str>, end: Option<&str>) -> BlockLayout {
        let parsed = start
            .zip(end)
            .and_then(|(s, e)| Some((parse_clock(s).ok()?, parse_clock(e).ok()?)));

        match parsed {
            Some((start, end)) => BlockLayout {
                top: start * self.pixels_per_hour,
                height: (end - start) * self.pixels_per_hour,
            },
            None => BlockLayout {
                top: 0.0,
                height: self.fallback_height,
            },
        }
    }

    pub fn layout_for(&self, activity: &Activity) -> BlockLayout {
        self.layout(activity.start_time.as_deref(), activity.end_time.as_deref())
    }
}

/// Hour labels down the side of the grid, `00:00` through `24:00`.
pub fn time_axis_labels() -> Vec<String> {
    (0..=24).map(|h| format!("{h:02}:00")).collect()
}

/// Activities scheduled on `date` (MMDDYYYY).
pub fn scheduled_on<'a>(activities: &'a [Activity], date: &str) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|a| a.is_added && a.date.as_deref() == Some(date))
        .collect()
}

pub fn favourites(activities: &[Activity]) -> Vec<&Activity> {
    activities.iter().filter(|a| a.is_favorite).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_basic() {
        let calc = LayoutCalculator::default();
        let block = calc.layout(Some("09:00"), Some("10:30"));
        assert_eq!(block, BlockLayout { top: 540.0, height: 90.0 });
    }

    #[test]
    fn test_negative_height_is_returned() {
        let calc = LayoutCalculator::default();
        let block = calc.layout(Some("10:00"), Some("09:00"));
        assert_eq!(block.height, -60.0);
        assert_eq!(block.clamped(15.0).height, 15.0);
    }

    #[test]
    fn test_custom_scale() {
        let calc = LayoutCalculator::new(40.0, 20.0);
        let block = calc.layout(Some("01:30"), Some("02:00"));
        assert_eq!(block, BlockLayout { top: 60.0, height: 20.0 });
        assert_eq!(calc.grid_height(), 960.0);
    }

    #[test]
    fn test_time_axis_labels() {
        let labels = time_axis_labels();
        assert_eq!(labels.len(), 25);
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[9], "09:00");
        assert_eq!(labels[24], "24:00");
    }
}
