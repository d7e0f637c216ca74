// src/cluster/builder.rs
//! Frontier-based breadth-first construction of the clustering forest.

use crate::error::{Result, SocnetError};
use crate::model::ProfileId;
use crate::store::ProfileStore;

use super::Forest;

/// Builds the clustering forest rooted at `root_id`, expanding at most
/// `max_depth` friendship hops.
///
/// The index space covers the entire profile universe known to the store at
/// the time of the call, sorted by id so that two runs over the same
/// snapshot claim nodes in the same order. Each round attempts to claim
/// every friend of every frontier profile; a friend already claimed this
/// round or earlier is left where it is, so the first-discovered connection
/// at each depth wins. The expansion stops early once no claimable node
/// remains.
///
/// # Errors
/// Returns `NotFound` if `root_id` or any friend id encountered during the
/// traversal is unknown to the store; the whole build aborts with no
/// partial result.
pub fn build_from(store: &ProfileStore, root_id: ProfileId, max_depth: usize) -> Result<Forest> {
    let mut ids = store.ids();
    ids.sort_unstable();
    let mut forest = Forest::new(ids);

    // Validates the root up front; an unknown root aborts immediately.
    forest.find(root_id)?;
    store.get(root_id)?;

    let mut frontier = vec![root_id];
    for _ in 0..max_depth {
        if forest.unclaimed() <= 1 {
            break;
        }

        let mut claimed = Vec::new();
        for &id in &frontier {
            if forest.unclaimed() <= 1 {
                break;
            }

            let profile = store.get(id)?;
            for (&friend_id, &strength) in profile.friends() {
                match forest.attach(id, friend_id, strength) {
                    Ok(true) => claimed.push(friend_id),
                    Ok(false) => {}
                    // The edge was not admitted; the traversal continues.
                    Err(SocnetError::NotARoot(_)) => {}
                    Err(e) => return Err(e),
                }
            }
        }

        if claimed.is_empty() {
            break;
        }
        frontier = claimed;
    }

    Ok(forest)
}
