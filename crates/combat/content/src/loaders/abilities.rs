//! Ability database loader.

use std::path::Path;

use combat_core::{AbilityDefinition, AbilityId, RangeDefinition, RangeId};
use serde::{Deserialize, Serialize};

use crate::book::AbilityBook;
use crate::loaders::{LoadResult, read_file};

/// Ability catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityCatalog {
    pub abilities: Vec<(u32, AbilityDefinition)>,
    pub ranges: Vec<(u32, RangeDefinition)>,
}

/// Loader for the ability database from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load an ability database from a RON file.
    ///
    /// Ids may be sparse; duplicates and dangling range references fail the
    /// load.
    pub fn load(path: &Path) -> LoadResult<AbilityBook> {
        Self::parse(&read_file(path)?)
    }

    /// Parse an ability database from RON text.
    pub fn parse(content: &str) -> LoadResult<AbilityBook> {
        let catalog: AbilityCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        let book = AbilityBook::from_entries(
            catalog
                .abilities
                .into_iter()
                .map(|(id, ability)| (AbilityId(id), ability)),
            catalog
                .ranges
                .into_iter()
                .map(|(id, range)| (RangeId(id), range)),
        )?;

        Ok(book)
    }
}
