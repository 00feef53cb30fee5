//! Evade-region table loader.

use std::path::Path;

use combat_core::{ActorTypeId, EvadeRegion, EvadeRegionTable};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::loaders::{LoadResult, read_file};

/// Region catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCatalog {
    pub regions: Vec<(u32, EvadeRegion)>,
}

/// Loader for the authored combat-area table from RON files.
pub struct RegionLoader;

impl RegionLoader {
    /// Load an evade-region table from a RON file.
    pub fn load(path: &Path) -> LoadResult<EvadeRegionTable> {
        Self::parse(&read_file(path)?)
    }

    /// Parse an evade-region table from RON text. A type listed twice is an
    /// error.
    pub fn parse(content: &str) -> LoadResult<EvadeRegionTable> {
        let catalog: RegionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse evade region RON: {}", e))?;

        let mut seen = std::collections::HashSet::new();
        for &(id, _) in &catalog.regions {
            if !seen.insert(id) {
                return Err(ContentError::DuplicateRegion(ActorTypeId(id)).into());
            }
        }

        Ok(catalog
            .regions
            .into_iter()
            .map(|(id, region)| (ActorTypeId(id), region))
            .collect())
    }
}
