// src/cli/mod.rs
//! CLI argument definitions and command handlers.

pub mod args;
pub mod dispatch;

pub use args::Cli;
