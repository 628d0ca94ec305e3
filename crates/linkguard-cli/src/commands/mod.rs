//! CLI command implementations.

pub mod checksum;
pub mod config;
pub mod presets;
pub mod stage;
pub mod version;
