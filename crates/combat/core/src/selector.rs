//! Runtime spell selection over an actor's known abilities.
//!
//! [`SpellSelector`] filters the caster's known abilities down to castable
//! candidates against a live target and picks one uniformly at random. The
//! uniform tie-break is deliberate: equally viable spells carry no priority
//! order, so scripted encounters vary instead of looping one cast. The draw
//! goes through the injected [`RngOracle`](crate::env::RngOracle) keyed by a
//! caller-provided seed, which keeps every decision replayable.
//!
//! Malformed database entries (missing ability, missing range row) make a
//! candidate unusable and are skipped silently; nothing in here is a hard
//! failure.

use arrayvec::ArrayVec;

use crate::ability::{MechanicKind, SchoolMask};
use crate::capability::{EffectClass, TargetClass};
use crate::config::CombatConfig;
use crate::env::{CombatEnv, Unit};
use crate::types::AbilityId;

/// Constraints applied by [`SpellSelector::select_spell`].
///
/// The default value filters nothing. Zero power/range bounds mean
/// "unbounded on that side"; the range bounds constrain the ability's own
/// maximum range, not the target distance (the distance is always checked
/// against the ability's `[min, max]` band).
#[derive(Clone, Copy, Debug, Default)]
pub struct SpellFilter {
    /// Required target classification, if any.
    pub target_class: Option<TargetClass>,
    /// Required effect classification, if any.
    pub effect_class: Option<EffectClass>,
    /// Schools to avoid. This is an exclusion: an ability whose school mask
    /// intersects it is skipped.
    pub exclude_school: Option<SchoolMask>,
    /// Exact mechanic the ability must apply.
    pub mechanic: Option<MechanicKind>,
    /// Minimum resource cost; 0 = unbounded.
    pub min_power_cost: u32,
    /// Maximum resource cost; 0 = unbounded.
    pub max_power_cost: u32,
    /// Minimum ability max-range; 0.0 = unbounded.
    pub min_range: f32,
    /// Maximum ability max-range; 0.0 = unbounded.
    pub max_range: f32,
}

impl SpellFilter {
    /// A filter that lets every castable ability through.
    pub const fn any() -> Self {
        Self {
            target_class: None,
            effect_class: None,
            exclude_school: None,
            mechanic: None,
            min_power_cost: 0,
            max_power_cost: 0,
            min_range: 0.0,
            max_range: 0.0,
        }
    }
}

/// Candidate buffer; never larger than the known-ability scan.
type Candidates = ArrayVec<AbilityId, { CombatConfig::MAX_KNOWN_ABILITIES }>;

/// Filters and selects abilities against the static databases.
#[derive(Clone, Copy)]
pub struct SpellSelector<'a> {
    env: CombatEnv<'a>,
}

impl<'a> SpellSelector<'a> {
    pub fn new(env: CombatEnv<'a>) -> Self {
        Self { env }
    }

    /// Checks whether `caster` could cast `ability` at `target` right now.
    ///
    /// Returns false if the target is absent, the ability id does not
    /// resolve, the caster is silenced or lacks the resource (both waived
    /// for `triggered` casts), the range row is missing, or the target is
    /// outside the ability's `[min, max]` distance band. No side effects.
    pub fn can_cast(
        &self,
        caster: &dyn Unit,
        target: Option<&dyn Unit>,
        ability: AbilityId,
        triggered: bool,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };
        let Some(definition) = self.env.abilities().ability(ability) else {
            return false;
        };

        if !triggered && caster.is_silenced() {
            return false;
        }

        if !triggered && caster.power(definition.power_kind) < definition.power_cost {
            return false;
        }

        let Some(range) = self.env.ranges().range(definition.range) else {
            return false;
        };

        range.contains(caster.position().distance(&target.position()))
    }

    /// Selects one castable ability from the caster's known set.
    ///
    /// Scans at most [`CombatConfig::MAX_KNOWN_ABILITIES`] known abilities,
    /// applies `filter` plus the castability checks, and returns one
    /// survivor chosen uniformly at random (keyed by `seed`). Returns `None`
    /// if the target is absent, the caster is silenced, or nothing survives.
    pub fn select_spell(
        &self,
        caster: &dyn Unit,
        target: Option<&dyn Unit>,
        filter: &SpellFilter,
        seed: u64,
    ) -> Option<AbilityId> {
        let target = target?;

        if caster.is_silenced() {
            return None;
        }

        let distance = caster.position().distance(&target.position());
        let mut candidates = Candidates::new();

        for &id in caster
            .known_abilities()
            .iter()
            .take(CombatConfig::MAX_KNOWN_ABILITIES)
        {
            let Some(definition) = self.env.abilities().ability(id) else {
                continue;
            };

            // Capability filters first: cheapest and most selective.
            let capability = self.env.capabilities().get(id);
            if let Some(wanted) = filter.target_class {
                if !capability.targets.contains(wanted) {
                    continue;
                }
            }
            if let Some(wanted) = filter.effect_class {
                if !capability.effects.contains(wanted) {
                    continue;
                }
            }

            // School is an exclusion filter.
            if let Some(excluded) = filter.exclude_school {
                if definition.school.intersects(excluded) {
                    continue;
                }
            }

            if let Some(mechanic) = filter.mechanic {
                if definition.mechanic != Some(mechanic) {
                    continue;
                }
            }

            if filter.min_power_cost != 0 && definition.power_cost < filter.min_power_cost {
                continue;
            }
            if filter.max_power_cost != 0 && definition.power_cost > filter.max_power_cost {
                continue;
            }

            if definition.power_cost > caster.power(definition.power_kind) {
                continue;
            }

            let Some(range) = self.env.ranges().range(definition.range) else {
                continue;
            };

            if filter.min_range != 0.0 && range.max < filter.min_range {
                continue;
            }
            if filter.max_range != 0.0 && range.max > filter.max_range {
                continue;
            }

            if !range.contains(distance) {
                continue;
            }

            candidates.push(id);
        }

        if candidates.is_empty() {
            tracing::debug!(caster = %caster.id(), "no castable ability survived selection");
            return None;
        }

        let choice = candidates[self.env.rng().pick(seed, candidates.len())];
        tracing::debug!(
            caster = %caster.id(),
            candidates = candidates.len(),
            chosen = %choice,
            "spell selected"
        );
        Some(choice)
    }
}
