//! Traits describing the engine's external collaborators.
//!
//! Oracles expose the static ability/range databases, the injected random
//! source, the spatial index and the live entity model. The [`CombatEnv`]
//! aggregate bundles the read-only static half so spell selection can be
//! handed one value instead of four.

mod rng;
mod statics;
mod world;

pub use rng::{PcgRng, RngOracle, compute_seed};
pub use statics::{AbilityOracle, RangeOracle};
pub use world::{CombatHost, Unit, WorldOracle};

use crate::capability::CapabilityIndex;

/// Aggregates the read-only collaborators consulted during spell selection.
///
/// Built once at simulation startup, after [`CapabilityIndex::build`], and
/// passed by reference to every behavior that selects spells. All parts are
/// immutable for the process lifetime, so sharing across actor ticks is
/// safe.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    abilities: &'a dyn AbilityOracle,
    ranges: &'a dyn RangeOracle,
    capabilities: &'a CapabilityIndex,
    rng: &'a dyn RngOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        abilities: &'a dyn AbilityOracle,
        ranges: &'a dyn RangeOracle,
        capabilities: &'a CapabilityIndex,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            abilities,
            ranges,
            capabilities,
            rng,
        }
    }

    pub fn abilities(&self) -> &'a dyn AbilityOracle {
        self.abilities
    }

    pub fn ranges(&self) -> &'a dyn RangeOracle {
        self.ranges
    }

    pub fn capabilities(&self) -> &'a CapabilityIndex {
        self.capabilities
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}
