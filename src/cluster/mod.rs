// src/cluster/mod.rs
//! Bounded-depth clustering of a profile's friendship neighborhood.
//!
//! A restricted union-find variant builds a single-parent forest level by
//! level: a node may only be claimed while it is still the root of its own
//! tree, so every node keeps exactly one parent for the lifetime of the
//! structure and the first-discovered connection at each depth wins.

pub mod builder;
pub mod forest;

pub use builder::build_from;
pub use forest::{Forest, ForestEdge, SELF_STRENGTH};
