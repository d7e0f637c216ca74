// src/model/mod.rs
//! Profile data model: identifiers, gender categories, weighted friend sets.

pub mod gender;
pub mod profile;

pub use gender::Gender;
pub use profile::{Profile, ProfileId};
