// src/suggest/candidate.rs
//! Transient suggestion candidates and their ranking order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::model::Profile;

/// A friend-of-friend candidate: the suggested profile, the reconciled
/// strength of the indirect connection, and the absolute age difference
/// from the requesting profile.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    profile: Profile,
    strength: u32,
    age_diff: u32,
}

impl Suggestion {
    #[must_use]
    pub fn new(profile: Profile, strength: u32, requester_age: u32) -> Self {
        let age_diff = profile.age().abs_diff(requester_age);
        Self {
            profile,
            strength,
            age_diff,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn strength(&self) -> u32 {
        self.strength
    }

    #[must_use]
    pub fn age_diff(&self) -> u32 {
        self.age_diff
    }

    /// Consumes the candidate, yielding the suggested profile.
    #[must_use]
    pub fn into_profile(self) -> Profile {
        self.profile
    }
}

/// Ranking order: best candidate first.
///
/// Strength descending, then name in reverse alphabetical order
/// (lexicographically later names rank first), then age difference
/// ascending, then id ascending. The id key makes this a strict total
/// order even across identical names and ages.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .strength
            .cmp(&self.strength)
            .then_with(|| other.profile.name().cmp(self.profile.name()))
            .then_with(|| self.age_diff.cmp(&other.age_diff))
            .then_with(|| self.profile.id().cmp(&other.profile.id()))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Suggestion {}
