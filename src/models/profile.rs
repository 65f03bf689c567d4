// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ProfileMode {
    Local,
    Traveler,
}

/// Stored user profile. Fields missing from a stored record take the default
/// profile's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 13, max = 120))]
    pub age: u32,
    #[validate(email)]
    pub email: String,
    /// Free-form, as typed (e.g. "03/10/04")
    pub birthday: String,
    pub home_city: String,
    pub location_sharing: String,
    pub mode: ProfileMode,
    /// Avatar URL or data URI; empty for none
    pub avatar: String,
    pub is_verified: bool,
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
    pub birthday: Option<String>,
    pub home_city: Option<String>,
    pub location_sharing: Option<String>,
    pub mode: Option<ProfileMode>,
    pub avatar: Option<String>,
    pub is_verified: Option<bool>,
}

impl Default for Profile {
    fn default() -> Self {
        crate::catalog::default_profile()
    }
}

impl Profile {
    /// Return a copy of this profile with `update` merged in.
    pub fn merged(&self, update: ProfileUpdate) -> Profile {
        let mut next = self.clone();
        if let Some(v) = update.name {
            next.name = v;
        }
        if let Some(v) = update.age {
            next.age = v;
        }
        if let Some(v) = update.email {
            next.email = v;
        }
        if let Some(v) = update.birthday {
            next.birthday = v;
        }
        if let Some(v) = update.home_city {
            next.home_city = v;
        }
        if let Some(v) = update.location_sharing {
            next.location_sharing = v;
        }
        if let Some(v) = update.mode {
            next.mode = v;
        }
        if let Some(v) = update.avatar {
            next.avatar = v;
        }
        if let Some(v) = update.is_verified {
            next.is_verified = v;
        }
        next
    }
}
