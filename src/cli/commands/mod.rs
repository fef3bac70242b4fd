//! CLI command implementations

pub mod export;
pub mod generate;
pub mod query;
pub mod stats;
pub mod verify;
