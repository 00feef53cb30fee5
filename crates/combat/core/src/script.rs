//! Per-actor combat behavior: the state machine every scripted actor runs.
//!
//! [`CombatScript`] is the seam where actor-specific encounter logic plugs
//! in. The default methods implement the shared lifecycle, Idle → Combat →
//! Evading → Idle, and the fallback per-tick behavior (acquire a hostile
//! target, swing if in reach). Specialized scripts override `update` to add
//! ability usage via [`SpellSelector`](crate::selector::SpellSelector) and
//! override `reset`/`aggro` for encounter variables.

use tracing::error;

use crate::config::CombatConfig;
use crate::env::CombatHost;
use crate::evade::EvadeRegionTable;
use crate::types::ActorId;

/// Engine-owned mutable state each script carries.
///
/// Currently just the evade-check countdown; scripts embed one of these and
/// hand it out through [`CombatScript::combat_state`].
#[derive(Clone, Copy, Debug)]
pub struct ActorCombatState {
    evade_check_countdown_ms: u32,
}

impl Default for ActorCombatState {
    fn default() -> Self {
        Self {
            evade_check_countdown_ms: CombatConfig::EVADE_CHECK_INTERVAL_MS,
        }
    }
}

impl ActorCombatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the evade-check countdown by `diff_ms`.
    ///
    /// Returns true when the countdown elapses; the countdown then rearms to
    /// [`CombatConfig::EVADE_CHECK_INTERVAL_MS`]. Otherwise the remaining
    /// time decreases by `diff_ms` and false is returned.
    pub fn evade_check_ready(&mut self, diff_ms: u32) -> bool {
        if diff_ms >= self.evade_check_countdown_ms {
            self.evade_check_countdown_ms = CombatConfig::EVADE_CHECK_INTERVAL_MS;
            true
        } else {
            self.evade_check_countdown_ms -= diff_ms;
            false
        }
    }
}

/// Actor-specific combat behavior, driven once per simulation tick.
///
/// Object safe: the simulation owns one `Box<dyn CombatScript>` per scripted
/// actor and sequences all transitions through `&mut dyn CombatHost`.
pub trait CombatScript {
    /// Engine-owned state embedded in the script.
    fn combat_state(&mut self) -> &mut ActorCombatState;

    /// Restores per-encounter variables to their initial values.
    ///
    /// Must be idempotent; invoked on evade and on respawn, possibly
    /// back-to-back.
    fn reset(&mut self, host: &mut dyn CombatHost) {
        let _ = host;
    }

    /// Fired once when `enemy` pulls this actor into combat.
    fn aggro(&mut self, host: &mut dyn CombatHost, enemy: ActorId) {
        let _ = (host, enemy);
    }

    /// Entering combat while already in combat is a no-op at this layer;
    /// the host only delivers this on the Idle → Combat edge.
    fn enter_combat(&mut self, host: &mut dyn CombatHost, enemy: Option<ActorId>) {
        if let Some(enemy) = enemy {
            self.aggro(host, enemy);
        }
    }

    /// Disengages: base-engine cleanup first, then the reset hook.
    fn enter_evade_mode(&mut self, host: &mut dyn CombatHost) {
        host.evade_cleanup();
        self.reset(host);
    }

    fn just_respawned(&mut self, host: &mut dyn CombatHost) {
        self.reset(host);
    }

    /// Fallback per-tick behavior: acquire a hostile target from threat
    /// state, then melee if in reach and ready.
    fn update(&mut self, host: &mut dyn CombatHost, diff_ms: u32) {
        let _ = diff_ms;
        if !host.select_hostile_target() || host.victim().is_none() {
            return;
        }
        host.melee_attack_if_ready();
    }

    /// Engages `target`: start the attack, seed threat, flag combat both
    /// ways, then chase (or hold ground for stationary casters).
    fn attack_start(&mut self, host: &mut dyn CombatHost, target: ActorId, with_melee: bool) {
        if !host.attack(target, with_melee) {
            return;
        }
        host.add_threat(target, 0.0);
        host.set_in_combat_with(target);
        if with_melee {
            self.do_start_movement(host, Some(target));
        } else {
            self.do_start_no_movement(host, Some(target));
        }
    }

    fn do_start_movement(&mut self, host: &mut dyn CombatHost, victim: Option<ActorId>) {
        if let Some(victim) = victim {
            host.start_chase(victim);
        }
    }

    fn do_start_no_movement(&mut self, host: &mut dyn CombatHost, victim: Option<ActorId>) {
        if victim.is_none() {
            return;
        }
        host.stop_moving();
    }

    fn do_stop_attack(&mut self, host: &mut dyn CombatHost) {
        if host.victim().is_some() {
            host.stop_attack();
        }
    }

    /// Cooldown-gated boundary check, invoked from `update`.
    ///
    /// While the countdown outlasts `diff_ms` the check is skipped. Once it
    /// elapses the authored region for the actor's type is evaluated; if the
    /// actor stands outside it, [`enter_evade_mode`]
    /// (CombatScript::enter_evade_mode) fires and true is returned. Actors
    /// already evading or without a victim are never forced out. Types with
    /// no authored region report a diagnostic and take no action.
    fn enter_evade_if_out_of_combat_area(
        &mut self,
        host: &mut dyn CombatHost,
        regions: &EvadeRegionTable,
        diff_ms: u32,
    ) -> bool {
        if !self.combat_state().evade_check_ready(diff_ms) {
            return false;
        }
        if host.is_evading() || host.victim().is_none() {
            return false;
        }

        let actor_type = host.actor_type();
        match regions.is_inside(actor_type, host.position(), host.home_position()) {
            Some(true) => false,
            Some(false) => {
                self.enter_evade_mode(host);
                true
            }
            None => {
                error!(%actor_type, actor = %host.id(), "combat-area check without authored region");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Unit;
    use crate::evade::{EvadeRegion, Span};
    use crate::testing::{TestActor, TestHost, TestWorld};
    use crate::types::ActorTypeId;

    struct Recorder {
        state: ActorCombatState,
        resets: u32,
        aggros: Vec<ActorId>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                state: ActorCombatState::new(),
                resets: 0,
                aggros: Vec::new(),
            }
        }
    }

    impl CombatScript for Recorder {
        fn combat_state(&mut self) -> &mut ActorCombatState {
            &mut self.state
        }

        fn reset(&mut self, _host: &mut dyn CombatHost) {
            self.resets += 1;
        }

        fn aggro(&mut self, _host: &mut dyn CombatHost, enemy: ActorId) {
            self.aggros.push(enemy);
        }
    }

    fn boundary_table() -> EvadeRegionTable {
        [(
            ActorTypeId(19221),
            EvadeRegion::Bounds {
                x: Span::above(266.0),
                y: Span::ANY,
                z: Span::ANY,
            },
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn countdown_decrements_until_it_elapses() {
        let mut state = ActorCombatState::new();
        assert!(!state.evade_check_ready(1000));
        assert!(!state.evade_check_ready(1000));
        // 500 remaining; an equal delta trips the check.
        assert!(state.evade_check_ready(500));
        // Rearmed to the full interval afterwards.
        assert!(!state.evade_check_ready(2499));
        assert!(state.evade_check_ready(1));
    }

    #[test]
    fn enter_combat_fires_aggro_only_with_an_enemy() {
        let mut world = TestWorld::default();
        world.actors.push(TestActor::new(1));
        let mut host = TestHost::new(&mut world, ActorId(1));

        let mut script = Recorder::new();
        script.enter_combat(&mut host, None);
        assert!(script.aggros.is_empty());
        script.enter_combat(&mut host, Some(ActorId(7)));
        assert_eq!(script.aggros, vec![ActorId(7)]);
    }

    #[test]
    fn enter_evade_mode_cleans_up_then_resets() {
        let mut world = TestWorld::default();
        world.actors.push(TestActor::new(1));
        world.actors.push(TestActor::new(2).on_team(1));
        let mut host = TestHost::new(&mut world, ActorId(1));
        host.add_threat(ActorId(2), 50.0);
        host.set_in_combat_with(ActorId(2));

        let mut script = Recorder::new();
        script.enter_evade_mode(&mut host);

        assert_eq!(host.evade_cleanups, 1);
        assert_eq!(script.resets, 1);
        assert_eq!(host.victim(), None);
        assert!(host.threat_list().is_empty());
    }

    #[test]
    fn respawn_invokes_the_reset_hook() {
        let mut world = TestWorld::default();
        world.actors.push(TestActor::new(1));
        let mut host = TestHost::new(&mut world, ActorId(1));

        let mut script = Recorder::new();
        script.just_respawned(&mut host);
        script.just_respawned(&mut host);
        assert_eq!(script.resets, 2);
    }

    #[test]
    fn default_update_swings_only_with_a_hostile_target() {
        let mut world = TestWorld::default();
        world.actors.push(TestActor::new(1));
        world.actors.push(TestActor::new(2).on_team(1));
        let mut host = TestHost::new(&mut world, ActorId(1));

        let mut script = Recorder::new();
        script.update(&mut host, 100);
        assert_eq!(host.melee_swings, 0);

        host.add_threat(ActorId(2), 10.0);
        script.update(&mut host, 100);
        assert_eq!(host.melee_swings, 1);
        assert_eq!(host.victim(), Some(ActorId(2)));
    }

    #[test]
    fn attack_start_seeds_threat_and_chases() {
        let mut world = TestWorld::default();
        world.actors.push(TestActor::new(1));
        world.actors.push(TestActor::new(2).on_team(1));
        let mut host = TestHost::new(&mut world, ActorId(1));

        let mut script = Recorder::new();
        script.attack_start(&mut host, ActorId(2), true);
        assert_eq!(host.victim(), Some(ActorId(2)));
        assert_eq!(host.threat_list(), vec![ActorId(2)]);
        assert_eq!(host.chases, vec![ActorId(2)]);

        // Stationary engage holds ground instead of chasing.
        let mut host = TestHost::new(&mut world, ActorId(1));
        let mut script = Recorder::new();
        script.attack_start(&mut host, ActorId(2), false);
        assert!(host.chases.is_empty());
        assert_eq!(host.stops, 1);
    }

    #[test]
    fn attack_start_against_a_dead_target_does_nothing() {
        let mut world = TestWorld::default();
        world.actors.push(TestActor::new(1));
        let mut dead = TestActor::new(2).on_team(1);
        dead.alive = false;
        world.actors.push(dead);
        let mut host = TestHost::new(&mut world, ActorId(1));

        let mut script = Recorder::new();
        script.attack_start(&mut host, ActorId(2), true);
        assert_eq!(host.victim(), None);
        assert!(host.threat_list().is_empty());
        assert!(host.chases.is_empty());
    }

    #[test]
    fn boundary_check_waits_for_the_countdown() {
        let mut world = TestWorld::default();
        let mut actor = TestActor::new(1).at(200.0, 0.0, 0.0);
        actor.actor_type = ActorTypeId(19221);
        world.actors.push(actor);
        world.actors.push(TestActor::new(2).on_team(1));
        let mut host = TestHost::new(&mut world, ActorId(1));
        host.add_threat(ActorId(2), 10.0);
        host.set_in_combat_with(ActorId(2));

        let mut script = Recorder::new();
        let table = boundary_table();
        // Out of bounds, but the countdown has not elapsed yet.
        assert!(!script.enter_evade_if_out_of_combat_area(&mut host, &table, 1000));
        assert_eq!(host.evade_cleanups, 0);
        assert!(script.enter_evade_if_out_of_combat_area(&mut host, &table, 1500));
        assert_eq!(host.evade_cleanups, 1);
        assert_eq!(script.resets, 1);
        assert_eq!(host.victim(), None);
    }

    #[test]
    fn boundary_check_leaves_in_bounds_actors_alone() {
        let mut world = TestWorld::default();
        let mut actor = TestActor::new(1).at(300.0, 0.0, 0.0);
        actor.actor_type = ActorTypeId(19221);
        world.actors.push(actor);
        world.actors.push(TestActor::new(2).on_team(1));
        let mut host = TestHost::new(&mut world, ActorId(1));
        host.add_threat(ActorId(2), 10.0);
        host.set_in_combat_with(ActorId(2));

        let mut script = Recorder::new();
        assert!(!script.enter_evade_if_out_of_combat_area(&mut host, &boundary_table(), 2500));
        assert_eq!(host.evade_cleanups, 0);
        assert_eq!(host.victim(), Some(ActorId(2)));
    }

    #[test]
    fn boundary_check_short_circuits_without_a_victim_or_while_evading() {
        let mut world = TestWorld::default();
        let mut actor = TestActor::new(1).at(200.0, 0.0, 0.0);
        actor.actor_type = ActorTypeId(19221);
        world.actors.push(actor);
        let mut host = TestHost::new(&mut world, ActorId(1));

        let mut script = Recorder::new();
        // No victim.
        assert!(!script.enter_evade_if_out_of_combat_area(&mut host, &boundary_table(), 2500));
        assert_eq!(host.evade_cleanups, 0);

        // Already evading.
        world.actor_mut(ActorId(1)).evading = true;
        world.actor_mut(ActorId(1)).victim = Some(ActorId(1));
        let mut host = TestHost::new(&mut world, ActorId(1));
        let mut script = Recorder::new();
        assert!(!script.enter_evade_if_out_of_combat_area(&mut host, &boundary_table(), 2500));
        assert_eq!(host.evade_cleanups, 0);
    }

    #[test]
    fn boundary_check_fails_open_for_unknown_types() {
        let mut world = TestWorld::default();
        let mut actor = TestActor::new(1).at(-5000.0, -5000.0, 0.0);
        actor.actor_type = ActorTypeId(42);
        world.actors.push(actor);
        world.actors.push(TestActor::new(2).on_team(1));
        let mut host = TestHost::new(&mut world, ActorId(1));
        host.add_threat(ActorId(2), 10.0);
        host.set_in_combat_with(ActorId(2));

        let mut script = Recorder::new();
        assert!(!script.enter_evade_if_out_of_combat_area(&mut host, &boundary_table(), 2500));
        assert_eq!(host.evade_cleanups, 0);
        assert_eq!(host.victim(), Some(ActorId(2)));
    }
}
