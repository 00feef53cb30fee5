//! Deterministic combat decision logic for scripted actors.
//!
//! `combat-core` classifies authored abilities ([`capability`]), picks spells
//! under gameplay constraints ([`selector`]), and drives the shared combat
//! lifecycle of scripted actors ([`script`]), including the authored
//! out-of-bounds evade policy ([`evade`]). The world it acts on stays behind
//! the oracle traits in [`env`]; the engine itself holds no mutable state
//! beyond per-script countdowns, so the same static data can back every
//! actor in a simulation.
pub mod ability;
pub mod capability;
pub mod config;
pub mod env;
pub mod evade;
pub mod queries;
pub mod script;
pub mod selector;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use ability::{
    AbilityDefinition, AuraKind, EffectKind, EffectSlot, EffectSlots, MechanicKind,
    RangeDefinition, SchoolMask, TargetDescriptor,
};
pub use capability::{CapabilityFlags, CapabilityIndex, EffectClass, TargetClass};
pub use config::CombatConfig;
pub use env::{
    AbilityOracle, CombatEnv, CombatHost, PcgRng, RangeOracle, RngOracle, Unit, WorldOracle,
    compute_seed,
};
pub use evade::{EvadeRegion, EvadeRegionTable, Span};
pub use queries::{
    friendly_crowd_controlled, friendly_missing_aura, friendly_units_matching,
    nearest_actor_at_min_range, reset_threat,
};
pub use script::{ActorCombatState, CombatScript};
pub use selector::{SpellFilter, SpellSelector};
pub use types::{AbilityId, ActorId, ActorTypeId, Position, PowerKind, RangeId};
