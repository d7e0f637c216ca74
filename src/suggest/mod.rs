// src/suggest/mod.rs
//! Friend-of-friend suggestion ranking.

pub mod candidate;
pub mod engine;

pub use candidate::Suggestion;
pub use engine::{suggest, SuggestionFilter, DEFAULT_MAX_RESULTS, MAX_AGE_SENTINEL};
