//! Static ability and range data model.
//!
//! These records mirror the persisted ability database: the engine never
//! mutates them, it only reads them through the oracle traits in
//! [`crate::env`]. An ability carries up to
//! [`CombatConfig::MAX_ABILITY_EFFECTS`] effect slots; each slot pairs an
//! effect kind with the implicit-target descriptor the slot resolves
//! against. Capability classification ([`crate::capability`]) is derived
//! entirely from these slots.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::types::{PowerKind, RangeId};

bitflags::bitflags! {
    /// Damage-school mask of an ability.
    ///
    /// Spell selection treats a school mask as an *exclusion* filter:
    /// callers pass the schools they want to avoid.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SchoolMask: u8 {
        const PHYSICAL = 1 << 0;
        const HOLY     = 1 << 1;
        const FIRE     = 1 << 2;
        const NATURE   = 1 << 3;
        const FROST    = 1 << 4;
        const SHADOW   = 1 << 5;
        const ARCANE   = 1 << 6;
    }
}

/// Crowd-control mechanic applied by an ability, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MechanicKind {
    Charm,
    Disorient,
    Fear,
    Root,
    Silence,
    Snare,
    Stun,
    Bleed,
    Shackle,
}

/// Implicit-target descriptor of one effect slot.
///
/// A descriptor may imply several target classes at once; the mapping lives
/// in [`crate::capability`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetDescriptor {
    /// The caster itself.
    Caster,
    /// A single hostile unit.
    SingleEnemy,
    /// The current enemy's coordinates.
    EnemyLocation,
    /// Every enemy in an area.
    EnemiesInArea,
    /// Every enemy in an area, applied instantly.
    EnemiesInAreaInstant,
    /// An area centred on the caster; reaches both enemies and allies.
    CasterLocation,
    /// Every enemy in an area, channeled over time.
    EnemiesInAreaChanneled,
    /// A single friendly unit.
    SingleFriend,
    /// A single member of the caster's party.
    PartyMember,
    /// The caster's party around the caster.
    PartyAroundCaster,
    /// The caster's party at a target location.
    PartyAtLocation,
}

/// Persistent effect carried by an [`EffectKind::ApplyAura`] slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AuraKind {
    PeriodicDamage,
    PeriodicHeal,
    ModifyStat,
    Stun,
    Root,
}

/// Concrete effect produced by one slot of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    SchoolDamage,
    Instakill,
    EnvironmentalDamage,
    HealthLeech,
    Heal,
    HealMaxHealth,
    HealMechanical,
    ApplyAura(AuraKind),
}

/// One effect slot of an ability definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectSlot {
    pub kind: EffectKind,
    pub target: TargetDescriptor,
}

impl EffectSlot {
    pub const fn new(kind: EffectKind, target: TargetDescriptor) -> Self {
        Self { kind, target }
    }
}

/// Effect slots of one ability.
pub type EffectSlots = ArrayVec<EffectSlot, { CombatConfig::MAX_ABILITY_EFFECTS }>;

/// Static, read-only record describing one ability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDefinition {
    /// Damage schools this ability belongs to.
    pub school: SchoolMask,
    /// Mechanic applied by the ability, if any.
    pub mechanic: Option<MechanicKind>,
    /// Resource cost, in units of `power_kind`.
    pub power_cost: u32,
    /// Resource pool the cost is paid from.
    pub power_kind: PowerKind,
    /// Reference into the static range table.
    pub range: RangeId,
    /// Effect slots, up to [`CombatConfig::MAX_ABILITY_EFFECTS`].
    pub effects: EffectSlots,
}

impl AbilityDefinition {
    pub fn new(school: SchoolMask, power_cost: u32, power_kind: PowerKind, range: RangeId) -> Self {
        Self {
            school,
            mechanic: None,
            power_cost,
            power_kind,
            range,
            effects: EffectSlots::new(),
        }
    }

    pub fn with_mechanic(mut self, mechanic: MechanicKind) -> Self {
        self.mechanic = Some(mechanic);
        self
    }

    /// Adds an effect slot. Extra slots beyond the fixed capacity are
    /// silently ignored, matching the fixed-width database layout.
    pub fn with_effect(mut self, kind: EffectKind, target: TargetDescriptor) -> Self {
        let _ = self.effects.try_push(EffectSlot::new(kind, target));
        self
    }
}

/// Min/max effective distance of a range-table entry.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeDefinition {
    pub min: f32,
    pub max: f32,
}

impl RangeDefinition {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True if `distance` falls inside the `[min, max]` band.
    #[inline]
    pub fn contains(&self, distance: f32) -> bool {
        distance >= self.min && distance <= self.max
    }
}
