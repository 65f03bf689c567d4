// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Duration buckets used by the duration filter.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Half-open interval `[min, max)` in hours. `max = None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl DurationRange {
    pub fn contains(&self, hours: f64) -> bool {
        match self.max {
            Some(max) => hours >= self.min && hours < max,
            None => hours >= self.min,
        }
    }
}

/// Selectable duration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DurationBucket {
    #[serde(rename = "less-1")]
    LessThanOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-plus")]
    FivePlus,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::LessThanOne,
        DurationBucket::OneToThree,
        DurationBucket::ThreeToFive,
        DurationBucket::FivePlus,
    ];

    /// Resolve a filter identifier. Unknown ids resolve to `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            DurationBucket::LessThanOne => "less-1",
            DurationBucket::OneToThree => "1-3",
            DurationBucket::ThreeToFive => "3-5",
            DurationBucket::FivePlus => "5-plus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DurationBucket::LessThanOne => "Less than 1 hour",
            DurationBucket::OneToThree => "1-3 hours",
            DurationBucket::ThreeToFive => "3-5 hours",
            DurationBucket::FivePlus => "5+ hours",
        }
    }

    pub fn range(self) -> DurationRange {
        let (min, max) = match self {
            DurationBucket::LessThanOne => (0.0, Some(1.0)),
            DurationBucket::OneToThree => (1.0, Some(3.0)),
            DurationBucket::ThreeToFive => (3.0, Some(5.0)),
            DurationBucket::FivePlus => (5.0, None),
        };
        DurationRange { min, max }
    }
}

/// Display label for a filter tag; unknown ids are shown verbatim.
pub fn duration_label(id: &str) -> &str {
    DurationBucket::from_id(id).map_or(id, |b| b.label())
}
