// src/model/profile.rs
//! Profiles and their weighted, symmetric friend sets.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, SocnetError};
use crate::model::Gender;

/// Opaque, globally unique profile identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Builds an identifier from a raw 128-bit value.
    #[must_use]
    pub fn from_u128(v: u128) -> Self {
        Self(Uuid::from_u128(v))
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProfileId {
    type Err = SocnetError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| SocnetError::InvalidArgument(format!("invalid profile id {s:?}: {e}")))
    }
}

/// A member of the social graph.
///
/// The friend map stores friendship strength per friend id. The store keeps
/// it symmetric: if A lists B with weight w, B lists A with the same w, no
/// self-loops. Iteration order is the friend-id order, which keeps the
/// clustering traversal deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    id: ProfileId,
    name: String,
    age: u32,
    gender: Gender,
    friends: BTreeMap<ProfileId, u32>,
}

impl Profile {
    /// Creates a profile after validating its fields.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the name is empty.
    pub fn new(id: ProfileId, name: &str, age: u32, gender: Gender) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SocnetError::InvalidArgument(
                "profile name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            age,
            gender,
            friends: BTreeMap::new(),
        })
    }

    #[must_use]
    pub fn id(&self) -> ProfileId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// The profile's friend-weight map.
    #[must_use]
    pub fn friends(&self) -> &BTreeMap<ProfileId, u32> {
        &self.friends
    }

    #[must_use]
    pub fn has_friend(&self, id: ProfileId) -> bool {
        self.friends.contains_key(&id)
    }

    /// Records a friendship edge toward `friend_id`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the edge already exists or points back at
    /// this profile.
    pub fn add_friend(&mut self, friend_id: ProfileId, strength: u32) -> Result<()> {
        if friend_id == self.id {
            return Err(SocnetError::InvalidArgument(format!(
                "profile {} cannot befriend itself",
                self.id
            )));
        }
        if self.friends.contains_key(&friend_id) {
            return Err(SocnetError::InvalidArgument(format!(
                "friendship between {} and {friend_id} already exists",
                self.id
            )));
        }

        self.friends.insert(friend_id, strength);
        Ok(())
    }

    /// Removes the friendship edge toward `friend_id`, returning its strength.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if no such edge exists.
    pub fn remove_friend(&mut self, friend_id: ProfileId) -> Result<u32> {
        self.friends
            .remove(&friend_id)
            .ok_or_else(|| {
                SocnetError::InvalidArgument(format!(
                    "friendship between {} and {friend_id} does not exist",
                    self.id
                ))
            })
    }
}
