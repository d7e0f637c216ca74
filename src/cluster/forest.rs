// src/cluster/forest.rs
//! Single-parent forest over a dense index of the profile universe.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, SocnetError};
use crate::model::ProfileId;

/// Strength recorded for the edge between a profile and itself.
pub const SELF_STRENGTH: u32 = 5;

/// One parent edge of the forest, for rendering and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForestEdge {
    pub child: ProfileId,
    pub parent: ProfileId,
    pub strength: u32,
}

/// A single-parent spanning structure over every profile id known at
/// construction time.
///
/// `parent[i]` is the parent index of the profile at index `i`;
/// `strength[i]` is the strength of the connection to that parent. Both are
/// mutated only through [`Forest::attach`] during the construction pass.
#[derive(Debug, Clone)]
pub struct Forest {
    index_of: HashMap<ProfileId, usize>,
    ids: Vec<ProfileId>,
    parent: Vec<usize>,
    strength: Vec<u32>,
    unclaimed: usize,
}

impl Forest {
    /// Creates a forest of isolated single-node trees, one per id.
    /// Index assignment follows the order of `ids`.
    #[must_use]
    pub fn new(ids: Vec<ProfileId>) -> Self {
        let n = ids.len();
        let index_of = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();

        Self {
            index_of,
            ids,
            parent: (0..n).collect(),
            strength: vec![SELF_STRENGTH; n],
            unclaimed: n,
        }
    }

    /// Number of profiles covered by the index space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Nodes that are still structurally their own root.
    #[must_use]
    pub fn unclaimed(&self) -> usize {
        self.unclaimed
    }

    /// Dense index of `id`, if it is part of this forest's universe.
    #[must_use]
    pub fn index_of(&self, id: ProfileId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    /// Returns the canonical root index of the tree containing `id`.
    ///
    /// # Errors
    /// Returns `NotFound` if `id` is not a known profile.
    pub fn find(&self, id: ProfileId) -> Result<usize> {
        let mut p = self
            .index_of(id)
            .ok_or(SocnetError::NotFound(id))?;
        while p != self.parent[p] {
            p = self.parent[p];
        }
        Ok(p)
    }

    /// Returns true if both ids are currently in the same tree.
    ///
    /// # Errors
    /// Returns `NotFound` if either id is unknown.
    pub fn connected(&self, p: ProfileId, q: ProfileId) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Claims `child_id` into `parent_id`'s tree with the given edge strength.
    ///
    /// Returns `Ok(true)` if the child was attached, `Ok(false)` if both ids
    /// already share a tree (no-op).
    ///
    /// # Errors
    /// Returns `NotFound` if either id is unknown; `NotARoot` if `child_id`
    /// is no longer the root of its own tree, in which case nothing is
    /// mutated.
    pub fn attach(&mut self, parent_id: ProfileId, child_id: ProfileId, strength: u32) -> Result<bool> {
        let root_p = self.find(parent_id)?;
        let root_c = self.find(child_id)?;
        if root_p == root_c {
            return Ok(false);
        }

        // find() succeeded above, so the id is present.
        let Some(child_index) = self.index_of(child_id) else {
            return Err(SocnetError::NotFound(child_id));
        };
        if root_c != child_index {
            return Err(SocnetError::NotARoot(child_id));
        }
        let Some(parent_index) = self.index_of(parent_id) else {
            return Err(SocnetError::NotFound(parent_id));
        };

        self.parent[child_index] = parent_index;
        self.strength[child_index] = strength;
        self.unclaimed -= 1;

        Ok(true)
    }

    /// The profile claimed as `id`'s parent, with the edge strength, or
    /// `None` while `id` is still its own root.
    ///
    /// # Errors
    /// Returns `NotFound` if `id` is unknown.
    pub fn parent_of(&self, id: ProfileId) -> Result<Option<(ProfileId, u32)>> {
        let i = self.index_of(id).ok_or(SocnetError::NotFound(id))?;
        if self.parent[i] == i {
            return Ok(None);
        }
        Ok(Some((self.ids[self.parent[i]], self.strength[i])))
    }

    /// Every claimed parent edge, in index order.
    #[must_use]
    pub fn edges(&self) -> Vec<ForestEdge> {
        let mut edges = Vec::new();
        for (i, &p) in self.parent.iter().enumerate() {
            if p != i {
                edges.push(ForestEdge {
                    child: self.ids[i],
                    parent: self.ids[p],
                    strength: self.strength[i],
                });
            }
        }
        edges
    }
}
