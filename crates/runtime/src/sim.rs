//! Tick loop driving every scripted actor over the shared static data.

use std::sync::Arc;

use combat_core::{
    ActorId, CapabilityIndex, CombatConfig, CombatEnv, CombatScript, EvadeRegionTable, PcgRng,
    Position, Unit,
};
use combat_content::{AbilityBook, SimTuning};
use tracing::debug;

use crate::host::HostContext;
use crate::world::World;

/// Movement speed of chasing or returning actors.
const MOVE_SPEED_PER_SEC: f32 = 7.0;

/// Everything immutable for the lifetime of a simulation run.
///
/// Assembled once at startup and shared by every actor tick; scripts hold an
/// `Arc` so their decisions read the same data the host executes against.
pub struct StaticData {
    pub book: AbilityBook,
    pub capabilities: CapabilityIndex,
    pub regions: EvadeRegionTable,
    pub rng: PcgRng,
    pub config: CombatConfig,
    pub tuning: SimTuning,
}

impl StaticData {
    /// Builds the capability index from the book and freezes the whole set.
    pub fn assemble(book: AbilityBook, regions: EvadeRegionTable, tuning: SimTuning) -> Self {
        let capabilities = CapabilityIndex::build(&book);
        Self {
            book,
            capabilities,
            regions,
            rng: PcgRng,
            config: CombatConfig {
                melee_reach: tuning.melee_reach,
            },
            tuning,
        }
    }

    /// The selection environment over this data.
    pub fn env(&self) -> CombatEnv<'_> {
        CombatEnv::new(&self.book, &self.book, &self.capabilities, &self.rng)
    }
}

/// One scripted battle: a world, shared static data, and a script per
/// scripted actor.
///
/// `tick` drives every script synchronously on one thread; scripts never
/// run concurrently and see the world exactly as the previous script left
/// it.
pub struct Simulation {
    world: World,
    statics: Arc<StaticData>,
    scripts: Vec<(ActorId, Box<dyn CombatScript>)>,
    tick: u64,
}

impl Simulation {
    pub fn new(world: World, statics: Arc<StaticData>) -> Self {
        Self {
            world,
            statics,
            scripts: Vec::new(),
            tick: 0,
        }
    }

    /// Attaches `script` to the actor; it starts receiving `update` calls on
    /// the next tick.
    pub fn attach_script(&mut self, actor: ActorId, script: Box<dyn CombatScript>) {
        self.scripts.push((actor, script));
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn statics(&self) -> &Arc<StaticData> {
        &self.statics
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Advances the battle by one `diff_ms` step.
    pub fn tick(&mut self, diff_ms: u32) {
        self.tick += 1;
        let statics = Arc::clone(&self.statics);

        for (id, script) in &mut self.scripts {
            let id = *id;
            let Some(actor) = self.world.actor_mut(id) else {
                continue;
            };
            actor.swing_timer_ms = actor.swing_timer_ms.saturating_sub(diff_ms);

            if !actor.is_alive() {
                continue;
            }
            // Evading actors spend the tick returning home, then stand down.
            if actor.evading {
                actor.position = actor.home;
                actor.evading = false;
                debug!(actor = %id, "returned home");
                continue;
            }

            // Idle target pickup within the aggro radius.
            let pickup = if actor.victim.is_none() {
                self.world.nearest_enemy(id, statics.tuning.aggro_radius)
            } else {
                None
            };

            let mut host = HostContext::new(&mut self.world, &statics, id);
            if let Some(enemy) = pickup {
                debug!(actor = %id, %enemy, "aggro");
                script.enter_combat(&mut host, Some(enemy));
                script.attack_start(&mut host, enemy, true);
            }

            script.update(&mut host, diff_ms);
            drop(host);

            advance_chase(&mut self.world, statics.config.melee_reach, id, diff_ms);
        }
    }
}

/// Moves a chasing actor toward its mark, stopping at melee reach.
fn advance_chase(world: &mut World, reach: f32, id: ActorId, diff_ms: u32) {
    let Some(actor) = world.actor(id) else {
        return;
    };
    let Some(mark) = actor.chase else {
        return;
    };
    let position = actor.position;
    let Some(mark_position) = world.actor(mark).map(|a| a.position) else {
        return;
    };

    let gap = position.distance(&mark_position);
    if gap <= reach {
        return;
    }

    if let Some(actor) = world.actor_mut(id) {
        actor.position = if step_toward(gap - reach, diff_ms) {
            lerp(position, mark_position, (gap - reach) / gap)
        } else {
            move_toward(position, mark_position, diff_ms)
        };
    }
}

/// True if one tick of movement covers `gap`.
fn step_toward(gap: f32, diff_ms: u32) -> bool {
    gap <= MOVE_SPEED_PER_SEC * diff_ms as f32 / 1000.0
}

fn move_toward(from: Position, to: Position, diff_ms: u32) -> Position {
    let gap = from.distance(&to);
    if gap == 0.0 {
        return to;
    }
    lerp(from, to, (MOVE_SPEED_PER_SEC * diff_ms as f32 / 1000.0) / gap)
}

fn lerp(from: Position, to: Position, t: f32) -> Position {
    let t = t.clamp(0.0, 1.0);
    Position::new(
        from.x + (to.x - from.x) * t,
        from.y + (to.y - from.y) * t,
        from.z + (to.z - from.z) * t,
    )
}
