pub mod cli;
pub mod cluster;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod store;
pub mod suggest;
