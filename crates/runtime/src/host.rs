//! [`CombatHost`] implementation over the in-memory world.
//!
//! One `HostContext` wraps the acting actor for the duration of a script
//! call and executes whatever the decision engine sequences: target
//! selection, swings, casts, threat edits and evade cleanup.

use combat_core::{
    AbilityId, AbilityOracle, ActorId, ActorTypeId, AuraKind, CombatHost, EffectKind, Position,
    PowerKind, Unit, WorldOracle,
};
use tracing::debug;

use crate::sim::StaticData;
use crate::world::{Actor, World};

/// Time between melee swings.
const SWING_INTERVAL_MS: u32 = 2000;

/// Flat demo magnitudes. The ability database describes semantics, not
/// coefficients, so the harness applies fixed amounts per effect slot.
const CAST_DAMAGE: u32 = 12;
const CAST_HEAL: u32 = 15;

/// Mutable view of one acting actor plus the world around it.
pub struct HostContext<'a> {
    world: &'a mut World,
    statics: &'a StaticData,
    id: ActorId,
}

impl<'a> HostContext<'a> {
    pub fn new(world: &'a mut World, statics: &'a StaticData, id: ActorId) -> Self {
        Self { world, statics, id }
    }

    fn me(&self) -> &Actor {
        self.world.actor(self.id).expect("acting actor despawned")
    }

    fn me_mut(&mut self) -> &mut Actor {
        let id = self.id;
        self.world.actor_mut(id).expect("acting actor despawned")
    }

    fn deal_damage(&mut self, target: ActorId, amount: u32) {
        let attacker = self.id;
        if let Some(victim) = self.world.actor_mut(target) {
            victim.health = victim.health.saturating_sub(amount);
            victim.raise_threat(attacker, amount as f32);
            if victim.health == 0 {
                debug!(victim = %target, "actor died");
                victim.victim = None;
                victim.chase = None;
            }
        }
    }

    fn heal(&mut self, target: ActorId, amount: u32) {
        if let Some(actor) = self.world.actor_mut(target) {
            actor.health = (actor.health + amount).min(actor.max_health);
        }
    }
}

impl Unit for HostContext<'_> {
    fn id(&self) -> ActorId {
        self.id
    }
    fn actor_type(&self) -> ActorTypeId {
        self.me().actor_type
    }
    fn position(&self) -> Position {
        self.me().position
    }
    fn home_position(&self) -> Position {
        self.me().home
    }
    fn power(&self, kind: PowerKind) -> u32 {
        self.me().power(kind)
    }
    fn is_alive(&self) -> bool {
        self.me().is_alive()
    }
    fn is_silenced(&self) -> bool {
        self.me().silenced
    }
    fn is_evading(&self) -> bool {
        self.me().evading
    }
    fn is_crowd_controlled(&self) -> bool {
        self.me().crowd_controlled
    }
    fn has_aura(&self, ability: AbilityId) -> bool {
        self.me().has_aura(ability)
    }
    fn victim(&self) -> Option<ActorId> {
        self.me().victim
    }
    fn known_abilities(&self) -> &[AbilityId] {
        &self.world.actor(self.id).expect("acting actor despawned").known_abilities
    }
    fn can_have_threat_list(&self) -> bool {
        true
    }
    fn threat_list(&self) -> Vec<ActorId> {
        self.me().threat_list()
    }
    fn threat(&self, target: ActorId) -> f32 {
        self.me().threat_of(target)
    }
}

impl CombatHost for HostContext<'_> {
    fn world(&self) -> &dyn WorldOracle {
        self.world
    }

    fn select_hostile_target(&mut self) -> bool {
        let top = self
            .me()
            .threat
            .iter()
            .filter(|&&(id, _)| self.world.actor(id).is_some_and(Actor::is_alive))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|&(id, _)| id);
        self.me_mut().victim = top;
        top.is_some()
    }

    fn melee_attack_if_ready(&mut self) {
        let me = self.me();
        if me.swing_timer_ms != 0 {
            return;
        }
        let Some(target) = me.victim else {
            return;
        };
        let reach = self.statics.config.melee_reach;
        let Some(victim) = self.world.actor(target) else {
            return;
        };
        if !victim.is_alive() || victim.position.distance(&me.position) > reach {
            return;
        }

        let damage = me.attack_damage;
        self.me_mut().swing_timer_ms = SWING_INTERVAL_MS;
        self.me_mut().tagged = true;
        self.deal_damage(target, damage);
    }

    fn attack(&mut self, target: ActorId, _with_melee: bool) -> bool {
        if self.me().victim == Some(target) {
            return false;
        }
        if !self.world.actor(target).is_some_and(Actor::is_alive) {
            return false;
        }
        self.me_mut().victim = Some(target);
        true
    }

    fn add_threat(&mut self, target: ActorId, amount: f32) {
        self.me_mut().raise_threat(target, amount);
    }

    fn set_in_combat_with(&mut self, target: ActorId) {
        let id = self.id;
        self.me_mut().victim.get_or_insert(target);
        if let Some(other) = self.world.actor_mut(target) {
            other.victim.get_or_insert(id);
        }
    }

    fn start_chase(&mut self, target: ActorId) {
        self.me_mut().chase = Some(target);
    }

    fn stop_moving(&mut self) {
        self.me_mut().chase = None;
    }

    fn stop_attack(&mut self) {
        let me = self.me_mut();
        me.victim = None;
        me.chase = None;
    }

    fn cast(&mut self, target: ActorId, ability: AbilityId, triggered: bool) -> bool {
        let Some(definition) = self.statics.book.ability(ability) else {
            return false;
        };
        if !triggered && self.me().silenced {
            return false;
        }
        let (cost, kind) = (definition.power_cost, definition.power_kind);
        if !triggered && self.power(kind) < cost {
            return false;
        }
        if !self.world.actor(target).is_some_and(Actor::is_alive) {
            return false;
        }

        if !triggered {
            self.me_mut().power -= cost;
        }

        let effects: Vec<EffectKind> = definition.effects.iter().map(|slot| slot.kind).collect();
        debug!(caster = %self.id, %ability, %target, triggered, "cast");
        for kind in effects {
            match kind {
                EffectKind::SchoolDamage
                | EffectKind::EnvironmentalDamage
                | EffectKind::HealthLeech => self.deal_damage(target, CAST_DAMAGE),
                EffectKind::Instakill => {
                    let health = self.world.actor(target).map_or(0, |a| a.health);
                    self.deal_damage(target, health);
                }
                EffectKind::Heal | EffectKind::HealMechanical => self.heal(target, CAST_HEAL),
                EffectKind::HealMaxHealth => {
                    if let Some(actor) = self.world.actor_mut(target) {
                        actor.health = actor.max_health;
                    }
                }
                EffectKind::ApplyAura(aura) => {
                    if let Some(actor) = self.world.actor_mut(target) {
                        if !actor.auras.contains(&ability) {
                            actor.auras.push(ability);
                        }
                        if matches!(aura, AuraKind::PeriodicDamage) {
                            actor.raise_threat(self.id, 1.0);
                        }
                    }
                }
            }
        }
        true
    }

    fn modify_threat_percent(&mut self, target: ActorId, percent: i32) {
        if let Some(entry) = self
            .me_mut()
            .threat
            .iter_mut()
            .find(|(id, _)| *id == target)
        {
            entry.1 += entry.1 * percent as f32 / 100.0;
        }
    }

    fn evade_cleanup(&mut self) {
        debug!(actor = %self.id, "evade cleanup");
        let me = self.me_mut();
        me.auras.clear();
        me.threat.clear();
        me.victim = None;
        me.chase = None;
        me.tagged = false;
        me.evading = true;
    }
}
