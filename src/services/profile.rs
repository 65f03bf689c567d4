// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile store.

use crate::catalog;
use crate::db::{keys, KeyValueStore};
use crate::error::Result;
use crate::models::{Profile, ProfileUpdate};
use crate::services::mirror;
use std::sync::Arc;
use validator::Validate;

pub struct ProfileStore {
    kv: Arc<dyn KeyValueStore>,
    profile: Arc<Profile>,
}

impl ProfileStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        let profile: Profile = mirror::load_or_else(&*kv, keys::PROFILE, catalog::default_profile);
        Self {
            kv,
            profile: Arc::new(profile),
        }
    }

    pub fn profile(&self) -> Arc<Profile> {
        Arc::clone(&self.profile)
    }

    /// Merge `update` into the profile. Rejected updates change nothing.
    pub fn update(&mut self, update: ProfileUpdate) -> Result<Arc<Profile>> {
        let next = self.profile.merged(update);
        next.validate()?;

        self.profile = Arc::new(next);
        mirror::persist(&*self.kv, keys::PROFILE, &*self.profile)?;
        tracing::debug!("Profile updated");
        Ok(self.profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::error::StoreError;
    use crate::models::ProfileMode;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let store = ProfileStore::load(Arc::new(MemoryStore::new()));
        assert_eq!(store.profile().name, "Tony Montana");
        assert_eq!(store.profile().mode, ProfileMode::Local);
    }

    #[test]
    fn test_partial_update() {
        let mut store = ProfileStore::load(Arc::new(MemoryStore::new()));
        let updated = store
            .update(ProfileUpdate {
                home_city: Some("Lyon, France".to_string()),
                mode: Some(ProfileMode::Traveler),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.home_city, "Lyon, France");
        assert_eq!(updated.mode, ProfileMode::Traveler);
        assert_eq!(updated.email, "tony@gmail.com");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let kv = Arc::new(MemoryStore::new());
        let mut store = ProfileStore::load(kv.clone());
        let result = store.update(ProfileUpdate {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.profile().email, "tony@gmail.com");
        assert!(kv.is_empty(), "rejected update must not be persisted");
    }

    #[test]
    fn test_partial_stored_profile_keeps_present_fields() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(
            keys::PROFILE,
            r#"{"name":"Elvira Hancock","age":30,"email":"elvira@example.com","mode":"Traveler"}"#,
        )
        .unwrap();

        let profile = ProfileStore::load(kv).profile();
        assert_eq!(profile.name, "Elvira Hancock");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.mode, ProfileMode::Traveler);
        assert_eq!(profile.home_city, "Milan, Italy");
        assert!(profile.avatar.is_empty());
        assert!(!profile.is_verified);
    }

    #[test]
    fn test_age_bounds() {
        let mut store = ProfileStore::load(Arc::new(MemoryStore::new()));
        let result = store.update(ProfileUpdate {
            age: Some(7),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
