//! Simulation tuning loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Tuning knobs for a simulation run, authored in TOML.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SimTuning {
    /// Seed every per-decision RNG stream is derived from.
    pub game_seed: u64,
    /// Fixed tick length handed to scripts as the elapsed delta.
    pub tick_ms: u32,
    /// Reach of a melee swing, in world units.
    pub melee_reach: f32,
    /// Radius within which idle actors pick up hostile targets.
    pub aggro_radius: f32,
}

impl Default for SimTuning {
    fn default() -> Self {
        Self {
            game_seed: 0,
            tick_ms: 100,
            melee_reach: combat_core::CombatConfig::DEFAULT_MELEE_REACH,
            aggro_radius: 40.0,
        }
    }
}

/// Loader for simulation tuning from TOML files.
pub struct TuningLoader;

impl TuningLoader {
    /// Load tuning from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> LoadResult<SimTuning> {
        let content = read_file(path)?;
        let tuning: SimTuning = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tuning TOML: {}", e))?;

        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.toml");
        std::fs::write(&path, "game_seed = 7\ntick_ms = 250\n").unwrap();

        let tuning = TuningLoader::load(&path).unwrap();
        assert_eq!(tuning.game_seed, 7);
        assert_eq!(tuning.tick_ms, 250);
        assert_eq!(tuning.melee_reach, SimTuning::default().melee_reach);
        assert_eq!(tuning.aggro_radius, 40.0);
    }
}
