//! Precomputed targeting/effect classification of the ability database.
//!
//! [`CapabilityIndex::build`] walks every ability id once and records, per
//! ability, which target classes and effect classes its effect slots belong
//! to. The index is immutable after construction and safe to share across
//! threads; the simulation builds it at startup and hands every behavior a
//! reference.
//!
//! Unknown or missing ability ids contribute no capability bits, so lookups
//! never fail — an absent entry simply reads as "no capability".

use crate::ability::{AuraKind, EffectKind, TargetDescriptor};
use crate::env::AbilityOracle;
use crate::types::AbilityId;

bitflags::bitflags! {
    /// Target classes an ability can serve.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TargetClass: u8 {
        const SELF          = 1 << 0;
        const SINGLE_ENEMY  = 1 << 1;
        const AOE_ENEMY     = 1 << 2;
        const ANY_ENEMY     = 1 << 3;
        const SINGLE_FRIEND = 1 << 4;
        const AOE_FRIEND    = 1 << 5;
        const ANY_FRIEND    = 1 << 6;
    }
}

bitflags::bitflags! {
    /// Effect classes an ability produces.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EffectClass: u8 {
        const DAMAGE  = 1 << 0;
        const HEALING = 1 << 1;
        /// Applies a persistent effect (aura).
        const AURA    = 1 << 2;
    }
}

/// Classification of a single ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapabilityFlags {
    pub targets: TargetClass,
    pub effects: EffectClass,
}

impl CapabilityFlags {
    pub const NONE: Self = Self {
        targets: TargetClass::empty(),
        effects: EffectClass::empty(),
    };
}

/// Target classes implied by one implicit-target descriptor.
///
/// A descriptor sets every class it implies: a single-enemy descriptor is
/// also "any enemy", and a caster-centred area reaches both the enemy and
/// the friendly side.
fn target_classes(target: TargetDescriptor) -> TargetClass {
    use TargetDescriptor::*;
    match target {
        Caster => TargetClass::SELF | TargetClass::SINGLE_FRIEND | TargetClass::ANY_FRIEND,
        SingleEnemy | EnemyLocation => TargetClass::SINGLE_ENEMY | TargetClass::ANY_ENEMY,
        EnemiesInArea | EnemiesInAreaInstant | EnemiesInAreaChanneled => {
            TargetClass::AOE_ENEMY | TargetClass::ANY_ENEMY
        }
        CasterLocation => {
            TargetClass::AOE_ENEMY
                | TargetClass::ANY_ENEMY
                | TargetClass::AOE_FRIEND
                | TargetClass::ANY_FRIEND
        }
        SingleFriend | PartyMember => TargetClass::SINGLE_FRIEND | TargetClass::ANY_FRIEND,
        PartyAroundCaster | PartyAtLocation => TargetClass::AOE_FRIEND | TargetClass::ANY_FRIEND,
    }
}

/// Effect classes implied by one effect kind.
///
/// A periodic-heal aura counts as healing in addition to being an aura.
fn effect_classes(kind: EffectKind) -> EffectClass {
    use EffectKind::*;
    match kind {
        SchoolDamage | Instakill | EnvironmentalDamage | HealthLeech => EffectClass::DAMAGE,
        Heal | HealMaxHealth | HealMechanical => EffectClass::HEALING,
        ApplyAura(AuraKind::PeriodicHeal) => EffectClass::AURA | EffectClass::HEALING,
        ApplyAura(_) => EffectClass::AURA,
    }
}

/// Immutable per-ability capability table, indexed by ability id.
#[derive(Clone, Debug)]
pub struct CapabilityIndex {
    flags: Vec<CapabilityFlags>,
}

impl CapabilityIndex {
    /// Builds the index from the static ability database.
    ///
    /// Deterministic given the same database; ids with no definition keep
    /// zeroed flags.
    pub fn build(abilities: &dyn AbilityOracle) -> Self {
        let max_entry = abilities.max_entry() as usize;
        let mut flags = vec![CapabilityFlags::NONE; max_entry];

        for (id, entry) in flags.iter_mut().enumerate() {
            let Some(definition) = abilities.ability(AbilityId(id as u32)) else {
                continue;
            };

            for slot in &definition.effects {
                entry.targets |= target_classes(slot.target);
                entry.effects |= effect_classes(slot.kind);
            }
        }

        Self { flags }
    }

    /// Capability flags of `ability`. Ids outside the built range read as
    /// [`CapabilityFlags::NONE`].
    #[inline]
    pub fn get(&self, ability: AbilityId) -> CapabilityFlags {
        self.flags
            .get(ability.index())
            .copied()
            .unwrap_or(CapabilityFlags::NONE)
    }

    /// Number of entries the index was built over.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
