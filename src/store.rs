// src/store.rs
//! In-memory profile store: the lookup capability both engines consume.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::cluster::{self, Forest};
use crate::error::{Result, SocnetError};
use crate::model::{Gender, Profile, ProfileId};
use crate::suggest::{self, Suggestion, SuggestionFilter};

/// Owns the profile universe and keeps friendship edges symmetric.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: HashMap<ProfileId, Profile>,
}

impl ProfileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-validated profile map.
    #[must_use]
    pub fn from_profiles(profiles: HashMap<ProfileId, Profile>) -> Self {
        Self { profiles }
    }

    /// Loads a store from a CSV file, sweeping inconsistent edges.
    ///
    /// # Errors
    /// Returns `Io` or `Malformed` if the file cannot be read or parsed.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let profiles = crate::loader::load_profiles_csv(path)?;
        Ok(Self::from_profiles(profiles))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Registers a new profile.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the id is already taken.
    pub fn add(&mut self, profile: Profile) -> Result<()> {
        if self.profiles.contains_key(&profile.id()) {
            return Err(SocnetError::InvalidArgument(format!(
                "profile {} already exists",
                profile.id()
            )));
        }
        self.profiles.insert(profile.id(), profile);
        Ok(())
    }

    /// Looks up a profile by id.
    ///
    /// # Errors
    /// Returns `NotFound` if the id is unknown.
    pub fn get(&self, id: ProfileId) -> Result<&Profile> {
        self.profiles.get(&id).ok_or(SocnetError::NotFound(id))
    }

    /// Removes a profile, detaching it from all of its friends first.
    ///
    /// # Errors
    /// Returns `NotFound` if the id is unknown.
    pub fn remove(&mut self, id: ProfileId) -> Result<Profile> {
        let friend_ids: Vec<ProfileId> = self.get(id)?.friends().keys().copied().collect();

        for friend_id in friend_ids {
            match self.profile_mut(friend_id) {
                Ok(friend) => {
                    if let Err(e) = friend.remove_friend(id) {
                        warn!("error detaching {id} from {friend_id}: {e}");
                    }
                }
                Err(e) => warn!("error detaching {id} from {friend_id}: {e}"),
            }
        }

        self.profiles.remove(&id).ok_or(SocnetError::NotFound(id))
    }

    /// All profile ids currently known to the store, in unspecified order.
    #[must_use]
    pub fn ids(&self) -> Vec<ProfileId> {
        self.profiles.keys().copied().collect()
    }

    /// Creates a symmetric friendship edge between two profiles.
    /// Returns true on success; failures are logged and leave both
    /// profiles untouched.
    pub fn connect(&mut self, a: ProfileId, b: ProfileId, strength: u32) -> bool {
        match self.try_connect(a, b, strength) {
            Ok(()) => true,
            Err(e) => {
                warn!("error connecting profiles {a} and {b}: {e}");
                false
            }
        }
    }

    /// Removes the symmetric friendship edge between two profiles.
    /// Returns true on success; failures are logged and leave both
    /// profiles untouched.
    pub fn disconnect(&mut self, a: ProfileId, b: ProfileId) -> bool {
        match self.try_disconnect(a, b) {
            Ok(()) => true,
            Err(e) => {
                warn!("error disconnecting profiles {a} and {b}: {e}");
                false
            }
        }
    }

    /// Builds the bounded-depth clustering forest rooted at `root_id`.
    ///
    /// # Errors
    /// Returns `NotFound` if `root_id` (or any friend id encountered during
    /// the traversal) is unknown.
    pub fn build_cluster(&self, root_id: ProfileId, max_depth: usize) -> Result<Forest> {
        cluster::build_from(self, root_id, max_depth)
    }

    /// Ranked friend-of-friend suggestions with optional demographic filters.
    ///
    /// Omitted parameters fall back to the engine defaults: 100 results,
    /// no gender filter, unrestricted age range. The gender string is
    /// validated before any aggregation work starts.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id, `InvalidArgument` for an
    /// unrecognized gender category.
    pub fn suggest_connections(
        &self,
        profile_id: ProfileId,
        max_results: Option<usize>,
        gender_filter: Option<&str>,
        min_age: Option<u32>,
        max_age: Option<u32>,
    ) -> Result<Vec<Suggestion>> {
        let gender = gender_filter.map(Gender::from_str).transpose()?;

        let filter = SuggestionFilter {
            max_results: max_results.unwrap_or(suggest::DEFAULT_MAX_RESULTS),
            gender,
            min_age: min_age.unwrap_or(0),
            max_age: max_age.unwrap_or(suggest::MAX_AGE_SENTINEL),
        };

        suggest::suggest(self, profile_id, &filter)
    }

    fn profile_mut(&mut self, id: ProfileId) -> Result<&mut Profile> {
        self.profiles.get_mut(&id).ok_or(SocnetError::NotFound(id))
    }

    fn try_connect(&mut self, a: ProfileId, b: ProfileId, strength: u32) -> Result<()> {
        self.get(a)?;
        self.get(b)?;

        self.profile_mut(a)?.add_friend(b, strength)?;
        if let Err(e) = self.profile_mut(b).and_then(|p| p.add_friend(a, strength)) {
            // Roll back the half-created edge.
            if let Ok(first) = self.profile_mut(a) {
                let _ = first.remove_friend(b);
            }
            return Err(e);
        }

        Ok(())
    }

    fn try_disconnect(&mut self, a: ProfileId, b: ProfileId) -> Result<()> {
        self.get(a)?;
        self.get(b)?;

        let strength = self.profile_mut(a)?.remove_friend(b)?;
        if let Err(e) = self.profile_mut(b).and_then(|p| p.remove_friend(a)) {
            // Restore the half-removed edge.
            if let Ok(first) = self.profile_mut(a) {
                let _ = first.add_friend(b, strength);
            }
            return Err(e);
        }

        Ok(())
    }
}
