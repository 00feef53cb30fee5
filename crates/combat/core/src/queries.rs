//! Threat reset and ally-lookup utilities built on the world oracle.

use tracing::error;

use crate::env::{CombatHost, Unit, WorldOracle};
use crate::types::{AbilityId, ActorId};

/// Zeroes the threat of every resolvable actor on the host's threat list.
///
/// Threat is scaled down by 100% in place, so the list entries survive and
/// combat does not drop. Calling this on an actor without a threat list, or
/// with an empty one, logs one diagnostic and changes nothing.
pub fn reset_threat(host: &mut dyn CombatHost) {
    let targets = host.threat_list();
    if !host.can_have_threat_list() || targets.is_empty() {
        error!(actor = %host.id(), "threat reset on an actor without a usable threat list");
        return;
    }

    for target in targets {
        let resolvable = host.world().unit(target).is_some();
        if resolvable && host.threat(target) != 0.0 {
            host.modify_threat_percent(target, -100);
        }
    }
}

/// All living allies of `unit` within `range` that satisfy `predicate`,
/// in spatial-index enumeration order. The searching actor itself is
/// excluded.
pub fn friendly_units_matching(
    unit: &dyn Unit,
    world: &dyn WorldOracle,
    range: f32,
    predicate: impl Fn(&dyn Unit) -> bool,
) -> Vec<ActorId> {
    let origin = unit.position();
    world
        .actors_within(origin, range)
        .into_iter()
        .filter(|&id| {
            if id == unit.id() || !world.are_friendly(unit.id(), id) {
                return false;
            }
            world
                .unit(id)
                .is_some_and(|other| other.is_alive() && predicate(other))
        })
        .collect()
}

/// Allies currently under a loss-of-control effect, for dispel-style
/// behaviors.
pub fn friendly_crowd_controlled(
    unit: &dyn Unit,
    world: &dyn WorldOracle,
    range: f32,
) -> Vec<ActorId> {
    friendly_units_matching(unit, world, range, |other| other.is_crowd_controlled())
}

/// Allies missing the persistent effect of `ability`, for buff-spreading
/// behaviors.
pub fn friendly_missing_aura(
    unit: &dyn Unit,
    world: &dyn WorldOracle,
    range: f32,
    ability: AbilityId,
) -> Vec<ActorId> {
    friendly_units_matching(unit, world, range, move |other| !other.has_aura(ability))
}

/// First actor (in spatial-index enumeration order) at or beyond
/// `minimum_range` from `unit` that satisfies `predicate`.
pub fn nearest_actor_at_min_range(
    unit: &dyn Unit,
    world: &dyn WorldOracle,
    minimum_range: f32,
    predicate: impl Fn(&dyn Unit) -> bool,
) -> Option<ActorId> {
    let origin = unit.position();
    world
        .actors_within(origin, f32::INFINITY)
        .into_iter()
        .find(|&id| {
            if id == unit.id() {
                return false;
            }
            world.unit(id).is_some_and(|other| {
                other.position().distance(&origin) >= minimum_range && predicate(other)
            })
        })
}
