// src/suggest/engine.rs
//! Candidate aggregation, ranking, and demographic filtering.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::{Gender, ProfileId};
use crate::store::ProfileStore;

use super::Suggestion;

/// Result cap applied when the caller does not supply one.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Upper age bound standing in for "unrestricted".
pub const MAX_AGE_SENTINEL: u32 = 1000;

/// Demographic filters and the result budget for one `suggest` call.
#[derive(Debug, Clone)]
pub struct SuggestionFilter {
    pub max_results: usize,
    pub gender: Option<Gender>,
    pub min_age: u32,
    pub max_age: u32,
}

impl Default for SuggestionFilter {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            gender: None,
            min_age: 0,
            max_age: MAX_AGE_SENTINEL,
        }
    }
}

impl SuggestionFilter {
    fn admits(&self, suggestion: &Suggestion) -> bool {
        let profile = suggestion.profile();
        if let Some(gender) = self.gender {
            if profile.gender() != gender {
                return false;
            }
        }
        profile.age() >= self.min_age && profile.age() <= self.max_age
    }
}

/// Ranked friend-of-friend suggestions for `profile_id`.
///
/// Candidates two hops away that are neither the requester nor one of its
/// direct friends are scored with the strength of the first-hop edge they
/// were reached through; when several first-hop paths reach the same
/// candidate, the strongest one wins. Candidates are ranked under the
/// strict total order of [`Suggestion`], then filtered in ranked order --
/// rejected candidates do not consume the result budget.
///
/// # Errors
/// Returns `NotFound` if `profile_id` is unknown.
pub fn suggest(
    store: &ProfileStore,
    profile_id: ProfileId,
    filter: &SuggestionFilter,
) -> Result<Vec<Suggestion>> {
    let requester = store.get(profile_id)?;

    let reconciled = aggregate(store, profile_id)?;

    let mut candidates = Vec::with_capacity(reconciled.len());
    for (candidate_id, strength) in reconciled {
        let profile = store.get(candidate_id)?;
        candidates.push(Suggestion::new(profile.clone(), strength, requester.age()));
    }
    candidates.sort_unstable();

    Ok(candidates
        .into_iter()
        .filter(|s| filter.admits(s))
        .take(filter.max_results)
        .collect())
}

/// Collects every friend-of-friend with its reconciled strength.
///
/// The contribution of a path is the strength of its first-hop edge; the
/// maximum across paths is kept, not the sum.
fn aggregate(store: &ProfileStore, profile_id: ProfileId) -> Result<HashMap<ProfileId, u32>> {
    let requester = store.get(profile_id)?;
    let friends = requester.friends();

    let mut reconciled: HashMap<ProfileId, u32> = HashMap::new();
    for (&friend_id, &strength) in friends {
        let friend = store.get(friend_id)?;
        for &fof_id in friend.friends().keys() {
            if fof_id == profile_id || friends.contains_key(&fof_id) {
                continue;
            }

            let entry = reconciled.entry(fof_id).or_insert(strength);
            if strength > *entry {
                *entry = strength;
            }
        }
    }

    Ok(reconciled)
}
