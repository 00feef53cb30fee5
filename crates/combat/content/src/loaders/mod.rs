//! Content loaders for reading combat data from files.
//!
//! Ability and evade-region tables are authored in RON, simulation tuning in
//! TOML. Each loader converts a file into the runtime value the engine
//! consumes.

pub mod abilities;
pub mod config;
pub mod regions;

pub use abilities::AbilityLoader;
pub use config::{SimTuning, TuningLoader};
pub use regions::RegionLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
