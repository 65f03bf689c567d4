// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity filtering and display ordering.
//!
//! Criteria groups combine with AND. Within the duration group matching is
//! existential on both sides: an activity matches when any one of its slot
//! durations falls in any one of the selected ranges.

use crate::models::{Activity, DurationBucket, DurationRange};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// When the display order is shuffled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ShuffleMode {
    /// Shuffle only while no location, language or duration filter is set.
    /// Free-text search alone keeps shuffling.
    #[default]
    Auto,
    Always,
    Never,
}

/// Snapshot of the active filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact location name; `None` or empty means any location
    pub location: Option<String>,
    /// Case-insensitive substring of the activity name
    pub search_text: String,
    pub languages: BTreeSet<String>,
    /// Duration bucket ids (`less-1`, `1-3`, `3-5`, `5-plus`)
    pub duration_ids: BTreeSet<String>,
    pub shuffle: ShuffleMode,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.search_text = text.to_string();
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.languages.insert(language.to_string());
        self
    }

    pub fn with_duration(mut self, id: &str) -> Self {
        self.duration_ids.insert(id.to_string());
        self
    }

    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    fn active_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// Location, language or duration filter set. Free-text search does not count.
    pub fn has_structured_filters(&self) -> bool {
        self.active_location().is_some()
            || !self.languages.is_empty()
            || !self.duration_ids.is_empty()
    }

    pub fn should_shuffle(&self) -> bool {
        match self.shuffle {
            ShuffleMode::Auto => !self.has_structured_filters(),
            ShuffleMode::Always => true,
            ShuffleMode::Never => false,
        }
    }

    /// Resolve the selected duration ids; unknown ids are dropped.
    pub fn duration_ranges(&self) -> Vec<DurationRange> {
        self.duration_ids
            .iter()
            .filter_map(|id| DurationBucket::from_id(id))
            .map(DurationBucket::range)
            .collect()
    }

    /// Test a single activity. Prefer [`filter_activities`] for lists.
    pub fn matches(&self, activity: &Activity) -> bool {
        Matcher::new(self).matches(activity)
    }
}

/// Criteria with query text and duration ranges resolved once.
struct Matcher<'c> {
    location: Option<&'c str>,
    needle: Option<String>,
    languages: &'c BTreeSet<String>,
    ranges: Option<Vec<DurationRange>>,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            location: criteria.active_location(),
            needle: (!criteria.search_text.is_empty()).then(|| criteria.search_text.to_lowercase()),
            languages: &criteria.languages,
            ranges: (!criteria.duration_ids.is_empty()).then(|| criteria.duration_ranges()),
        }
    }

    fn matches(&self, activity: &Activity) -> bool {
        let matches_location = self.location.map_or(true, |l| activity.location == l);
        let matches_search = self
            .needle
            .as_deref()
            .map_or(true, |n| activity.name.to_lowercase().contains(n));
        let matches_language = self.languages.is_empty()
            || activity
                .language
                .as_ref()
                .is_some_and(|l| self.languages.contains(l));
        let matches_duration = self
            .ranges
            .as_deref()
            .map_or(true, |ranges| matches_duration(&activity.duration, ranges));

        matches_location && matches_search && matches_language && matches_duration
    }
}

/// Any slot duration inside any range.
pub fn matches_duration(durations: &[f64], ranges: &[DurationRange]) -> bool {
    durations
        .iter()
        .any(|&hours| ranges.iter().any(|range| range.contains(hours)))
}

/// Activities matching every criteria group, in input order.
pub fn filter_activities<'a>(
    activities: &'a [Activity],
    criteria: &FilterCriteria,
) -> Vec<&'a Activity> {
    let matcher = Matcher::new(criteria);
    activities.iter().filter(|a| matcher.matches(a)).collect()
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Filtered activities in display order.
pub fn display_order<'a, R: Rng + ?Sized>(
    activities: &'a [Activity],
    criteria: &FilterCriteria,
    rng: &mut R,
) -> Vec<&'a Activity> {
    let mut filtered = filter_activities(activities, criteria);
    if criteria.should_shuffle() {
        shuffle(&mut filtered, rng);
    }
    filtered
}

/// Memoized display order for the browse list.
///
/// The shuffled order is kept until the filtered id sequence (or the shuffle
/// decision) changes, so toggling a favorite does not reorder the list.
pub struct ActivityFeed<R> {
    rng: R,
    last_ids: Vec<String>,
    last_shuffled: bool,
    order: Vec<usize>,
}

impl<R: Rng> ActivityFeed<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            last_ids: Vec::new(),
            last_shuffled: false,
            order: Vec::new(),
        }
    }

    /// Filter `activities`, reusing the previous order when the result set is unchanged.
    pub fn refresh<'a>(
        &mut self,
        activities: &'a [Activity],
        criteria: &FilterCriteria,
    ) -> Vec<&'a Activity> {
        let filtered = filter_activities(activities, criteria);
        let shuffled = criteria.should_shuffle();

        let unchanged = shuffled == self.last_shuffled
            && filtered.len() == self.last_ids.len()
            && filtered.iter().zip(&self.last_ids).all(|(a, id)| a.id == *id);

        if !unchanged {
            self.order = (0..filtered.len()).collect();
            if shuffled {
                shuffle(&mut self.order, &mut self.rng);
            }
            self.last_ids = filtered.iter().map(|a| a.id.clone()).collect();
            self.last_shuffled = shuffled;
            tracing::debug!(count = filtered.len(), shuffled, "Recomputed display order");
        }

        self.order.iter().map(|&i| filtered[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn activity(id: &str, name: &str, location: &str, slots: &[&str], lang: &str) -> Activity {
        Activity::new(id, name, location, slots, "", Some(lang)).unwrap()
    }

    fn sample() -> Vec<Activity> {
        vec![
            activity("1", "Flower Market", "Bangkok, Thailand", &["09:00-13:30"], "English"),
            activity("2", "Wine Tasting", "Bordeaux, France", &["11:00-14:00"], "French"),
            activity("3", "Desert Safari", "Dubai, UAE", &["15:00-20:00"], "Hindi"),
            activity("4", "Espresso Stop", "Rome, Italy", &["10:00-10:30"], "English"),
        ]
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let activities = sample();
        assert_eq!(filter_activities(&activities, &FilterCriteria::new()).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let activities = sample();
        let found = filter_activities(&activities, &FilterCriteria::new().with_search("WINE"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
    }

    #[test]
    fn test_empty_location_string_is_unconstrained() {
        let activities = sample();
        let criteria = FilterCriteria::new().with_location("");
        assert_eq!(filter_activities(&activities, &criteria).len(), 4);
        assert!(!criteria.has_structured_filters());
    }

    #[test]
    fn test_activity_without_language_never_matches_language_filter() {
        let mut activities = sample();
        activities[0].language = None;
        let criteria = FilterCriteria::new().with_language("English");
        let ids: Vec<&str> = filter_activities(&activities, &criteria)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["4"]);
    }

    #[test]
    fn test_unknown_duration_ids_only_match_nothing() {
        let activities = sample();
        let criteria = FilterCriteria::new().with_duration("weekend");
        assert!(criteria.duration_ranges().is_empty());
        assert!(filter_activities(&activities, &criteria).is_empty());
    }

    #[test]
    fn test_unknown_duration_ids_are_dropped_alongside_known() {
        let activities = sample();
        let criteria = FilterCriteria::new()
            .with_duration("weekend")
            .with_duration("less-1");
        let found = filter_activities(&activities, &criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "4");
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..50).collect();
        let mut rng = StdRng::seed_from_u64(7);
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_search_text_alone_keeps_auto_shuffle() {
        let criteria = FilterCriteria::new().with_search("market");
        assert!(!criteria.has_structured_filters());
        assert!(criteria.should_shuffle());
        assert!(!criteria.with_location("Rome, Italy").should_shuffle());
    }

    #[test]
    fn test_shuffle_mode_overrides() {
        let structured = FilterCriteria::new().with_language("English");
        assert!(!structured.should_shuffle());
        assert!(structured.clone().with_shuffle(ShuffleMode::Always).should_shuffle());
        assert!(!FilterCriteria::new().with_shuffle(ShuffleMode::Never).should_shuffle());
    }

    #[test]
    fn test_feed_keeps_order_until_result_set_changes() {
        let mut activities = crate::catalog::traveler_activities();
        let mut feed = ActivityFeed::new(StdRng::seed_from_u64(42));
        let criteria = FilterCriteria::new();

        let first: Vec<String> = feed
            .refresh(&activities, &criteria)
            .iter()
            .map(|a| a.id.clone())
            .collect();

        activities[0].is_favorite = true;
        let second: Vec<String> = feed
            .refresh(&activities, &criteria)
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(first, second);

        let narrowed = criteria.with_search("tour");
        let third = feed.refresh(&activities, &narrowed);
        assert!(third.iter().all(|a| a.name.to_lowercase().contains("tour")));
    }
}
