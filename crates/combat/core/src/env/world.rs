//! Seams into the live world: the entity model, the spatial index, and the
//! base combat engine.
//!
//! The decision engine reads actors through [`Unit`], enumerates them
//! through [`WorldOracle`], and drives the acting creature through
//! [`CombatHost`]. Threat bookkeeping, movement execution and attack
//! resolution all live behind these traits; the engine only decides.

use crate::types::{AbilityId, ActorId, ActorTypeId, Position, PowerKind};

/// Read-only view of a live actor.
pub trait Unit {
    fn id(&self) -> ActorId;

    /// Static type of this actor; keys per-type authored rules.
    fn actor_type(&self) -> ActorTypeId;

    fn position(&self) -> Position;

    /// Recorded respawn point.
    fn home_position(&self) -> Position;

    /// Current amount in the given resource pool.
    fn power(&self, kind: PowerKind) -> u32;

    fn is_alive(&self) -> bool;

    fn is_silenced(&self) -> bool;

    /// True while the actor is disengaging and returning home.
    fn is_evading(&self) -> bool;

    /// True while the actor is under a loss-of-control effect.
    fn is_crowd_controlled(&self) -> bool;

    /// True if the persistent effect of `ability` is active on this actor.
    fn has_aura(&self, ability: AbilityId) -> bool;

    /// Current hostile target, if any.
    fn victim(&self) -> Option<ActorId>;

    /// Ability ids this actor knows. Spell selection consults at most
    /// [`crate::CombatConfig::MAX_KNOWN_ABILITIES`] of them.
    fn known_abilities(&self) -> &[AbilityId];

    /// Whether this actor participates in threat bookkeeping at all.
    fn can_have_threat_list(&self) -> bool;

    /// Actor ids currently on the threat list, in list order.
    fn threat_list(&self) -> Vec<ActorId>;

    /// Accumulated threat of `target` against this actor.
    fn threat(&self, target: ActorId) -> f32;
}

/// The spatial/grid index plus actor resolution.
///
/// Enumeration order of [`actors_within`](WorldOracle::actors_within) is the
/// index's own order and is not otherwise specified. A non-finite range
/// means unbounded.
pub trait WorldOracle {
    /// Ids of all actors within `range` of `origin`.
    fn actors_within(&self, origin: Position, range: f32) -> Vec<ActorId>;

    /// Resolves an actor id to its live view, or `None` if it has despawned.
    fn unit(&self, id: ActorId) -> Option<&dyn Unit>;

    /// True if the two actors are on the same side.
    fn are_friendly(&self, a: ActorId, b: ActorId) -> bool;
}

/// Mutating seam into the base combat engine for the acting creature.
///
/// Everything here is executed by the host simulation; the decision engine
/// only sequences the calls. All operations are synchronous and bounded.
pub trait CombatHost: Unit {
    /// Read access to the surrounding world.
    fn world(&self) -> &dyn WorldOracle;

    /// Acquires a hostile target from threat state. Returns true if the
    /// actor has a victim afterwards.
    fn select_hostile_target(&mut self) -> bool;

    /// Performs a melee swing against the current victim if it is in reach
    /// and the swing timer is ready.
    fn melee_attack_if_ready(&mut self);

    /// Begins attacking `target`. Returns false if the attack could not be
    /// started (dead target, already attacking it, ...).
    fn attack(&mut self, target: ActorId, with_melee: bool) -> bool;

    /// Adds threat of `target` against this actor.
    fn add_threat(&mut self, target: ActorId, amount: f32);

    /// Flags both sides as in combat with each other.
    fn set_in_combat_with(&mut self, target: ActorId);

    /// Starts chase movement toward `target`.
    fn start_chase(&mut self, target: ActorId);

    /// Halts movement in place.
    fn stop_moving(&mut self);

    /// Stops auto-attacking the current victim.
    fn stop_attack(&mut self);

    /// Casts `ability` at `target`. `triggered` casts bypass the caster's
    /// own silence/resource gating. Returns true if the cast was started.
    fn cast(&mut self, target: ActorId, ability: AbilityId, triggered: bool) -> bool;

    /// Scales the threat of `target` by `percent` (−100 zeroes it without
    /// removing the list entry).
    fn modify_threat_percent(&mut self, target: ActorId, percent: i32);

    /// Base-engine evade cleanup: drop persistent effects, drop all threat,
    /// stop attacking, begin the return to the respawn point, and clear
    /// loot tagging.
    fn evade_cleanup(&mut self);
}
