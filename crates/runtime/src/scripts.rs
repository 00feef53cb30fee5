//! The two behaviors shipped with the harness.
//!
//! `MeleeScript` is the pure default lifecycle; `CasterScript` layers
//! periodic spell selection and the authored boundary check on top of it.
//! Encounter-specific behaviors would follow the same shape.

use std::sync::Arc;

use combat_core::{
    ActorCombatState, CombatHost, CombatScript, SpellFilter, SpellSelector, Unit, compute_seed,
};

use crate::sim::StaticData;

/// Default chase-and-swing behavior.
#[derive(Default)]
pub struct MeleeScript {
    state: ActorCombatState,
}

impl MeleeScript {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CombatScript for MeleeScript {
    fn combat_state(&mut self) -> &mut ActorCombatState {
        &mut self.state
    }
}

/// Time between cast attempts.
const CAST_INTERVAL_MS: u32 = 3000;

/// Periodically selects and casts a spell at the current victim, falling
/// back to melee between casts. Runs the combat-area check every tick.
pub struct CasterScript {
    state: ActorCombatState,
    statics: Arc<StaticData>,
    filter: SpellFilter,
    cast_timer_ms: u32,
    /// Local tick counter feeding the per-decision seed.
    ticks: u64,
}

impl CasterScript {
    pub fn new(statics: Arc<StaticData>) -> Self {
        Self::with_filter(statics, SpellFilter::any())
    }

    pub fn with_filter(statics: Arc<StaticData>, filter: SpellFilter) -> Self {
        Self {
            state: ActorCombatState::default(),
            statics,
            filter,
            cast_timer_ms: CAST_INTERVAL_MS,
            ticks: 0,
        }
    }
}

impl CombatScript for CasterScript {
    fn combat_state(&mut self) -> &mut ActorCombatState {
        &mut self.state
    }

    fn reset(&mut self, _host: &mut dyn CombatHost) {
        self.cast_timer_ms = CAST_INTERVAL_MS;
    }

    fn update(&mut self, host: &mut dyn CombatHost, diff_ms: u32) {
        self.ticks += 1;

        let statics = Arc::clone(&self.statics);
        if self.enter_evade_if_out_of_combat_area(host, &statics.regions, diff_ms) {
            return;
        }
        if !host.select_hostile_target() || host.victim().is_none() {
            return;
        }

        if diff_ms >= self.cast_timer_ms {
            self.cast_timer_ms = CAST_INTERVAL_MS;

            let seed = compute_seed(
                self.statics.tuning.game_seed,
                self.ticks,
                host.id().0,
                0,
            );
            let chosen = {
                let selector = SpellSelector::new(self.statics.env());
                let caster: &dyn Unit = &*host;
                let target = host.victim().and_then(|id| host.world().unit(id));
                selector.select_spell(caster, target, &self.filter, seed)
            };
            if let Some(ability) = chosen {
                if let Some(victim) = host.victim() {
                    host.cast(victim, ability, false);
                    return;
                }
            }
        } else {
            self.cast_timer_ms -= diff_ms;
        }

        host.melee_attack_if_ready();
    }
}
