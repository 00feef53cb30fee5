//! In-memory world and host fakes shared by the unit tests.

use crate::env::{CombatHost, Unit, WorldOracle};
use crate::types::{AbilityId, ActorId, ActorTypeId, Position, PowerKind};

#[derive(Clone, Debug)]
pub(crate) struct TestActor {
    pub id: ActorId,
    pub actor_type: ActorTypeId,
    pub position: Position,
    pub home: Position,
    pub power: u32,
    pub alive: bool,
    pub silenced: bool,
    pub evading: bool,
    pub crowd_controlled: bool,
    pub auras: Vec<AbilityId>,
    pub known: Vec<AbilityId>,
    pub victim: Option<ActorId>,
    pub team: u8,
    pub can_have_threat_list: bool,
    pub threat: Vec<(ActorId, f32)>,
}

impl TestActor {
    pub fn new(id: u32) -> Self {
        Self {
            id: ActorId(id),
            actor_type: ActorTypeId(0),
            position: Position::ORIGIN,
            home: Position::ORIGIN,
            power: 100,
            alive: true,
            silenced: false,
            evading: false,
            crowd_controlled: false,
            auras: Vec::new(),
            known: Vec::new(),
            victim: None,
            team: 0,
            can_have_threat_list: true,
            threat: Vec::new(),
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Position::new(x, y, z);
        self
    }

    pub fn on_team(mut self, team: u8) -> Self {
        self.team = team;
        self
    }
}

impl Unit for TestActor {
    fn id(&self) -> ActorId {
        self.id
    }
    fn actor_type(&self) -> ActorTypeId {
        self.actor_type
    }
    fn position(&self) -> Position {
        self.position
    }
    fn home_position(&self) -> Position {
        self.home
    }
    fn power(&self, _kind: PowerKind) -> u32 {
        self.power
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn is_silenced(&self) -> bool {
        self.silenced
    }
    fn is_evading(&self) -> bool {
        self.evading
    }
    fn is_crowd_controlled(&self) -> bool {
        self.crowd_controlled
    }
    fn has_aura(&self, ability: AbilityId) -> bool {
        self.auras.contains(&ability)
    }
    fn victim(&self) -> Option<ActorId> {
        self.victim
    }
    fn known_abilities(&self) -> &[AbilityId] {
        &self.known
    }
    fn can_have_threat_list(&self) -> bool {
        self.can_have_threat_list
    }
    fn threat_list(&self) -> Vec<ActorId> {
        self.threat.iter().map(|&(id, _)| id).collect()
    }
    fn threat(&self, target: ActorId) -> f32 {
        self.threat
            .iter()
            .find(|&&(id, _)| id == target)
            .map_or(0.0, |&(_, amount)| amount)
    }
}

#[derive(Debug, Default)]
pub(crate) struct TestWorld {
    pub actors: Vec<TestActor>,
}

impl TestWorld {
    pub fn actor(&self, id: ActorId) -> &TestActor {
        self.actors.iter().find(|a| a.id == id).expect("actor")
    }

    pub fn actor_mut(&mut self, id: ActorId) -> &mut TestActor {
        self.actors.iter_mut().find(|a| a.id == id).expect("actor")
    }
}

impl WorldOracle for TestWorld {
    fn actors_within(&self, origin: Position, range: f32) -> Vec<ActorId> {
        self.actors
            .iter()
            .filter(|a| a.position.distance(&origin) <= range)
            .map(|a| a.id)
            .collect()
    }

    fn unit(&self, id: ActorId) -> Option<&dyn Unit> {
        self.actors
            .iter()
            .find(|a| a.id == id)
            .map(|a| a as &dyn Unit)
    }

    fn are_friendly(&self, a: ActorId, b: ActorId) -> bool {
        let (Some(a), Some(b)) = (
            self.actors.iter().find(|actor| actor.id == a),
            self.actors.iter().find(|actor| actor.id == b),
        ) else {
            return false;
        };
        a.team == b.team
    }
}

/// Host over one acting actor; records calls so tests can assert on the
/// transition sequence.
pub(crate) struct TestHost<'a> {
    pub world: &'a mut TestWorld,
    pub id: ActorId,
    pub evade_cleanups: u32,
    pub melee_swings: u32,
    pub casts: Vec<(ActorId, AbilityId, bool)>,
    pub chases: Vec<ActorId>,
    pub stops: u32,
}

impl<'a> TestHost<'a> {
    pub fn new(world: &'a mut TestWorld, id: ActorId) -> Self {
        Self {
            world,
            id,
            evade_cleanups: 0,
            melee_swings: 0,
            casts: Vec::new(),
            chases: Vec::new(),
            stops: 0,
        }
    }

    fn me(&self) -> &TestActor {
        self.world.actor(self.id)
    }

    fn me_mut(&mut self) -> &mut TestActor {
        let id = self.id;
        self.world.actor_mut(id)
    }
}

impl Unit for TestHost<'_> {
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
        self.me().alive
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
        &self.world.actor(self.id).known
    }
    fn can_have_threat_list(&self) -> bool {
        self.me().can_have_threat_list
    }
    fn threat_list(&self) -> Vec<ActorId> {
        self.me().threat_list()
    }
    fn threat(&self, target: ActorId) -> f32 {
        self.me().threat(target)
    }
}

impl CombatHost for TestHost<'_> {
    fn world(&self) -> &dyn WorldOracle {
        self.world
    }

    fn select_hostile_target(&mut self) -> bool {
        let top = self
            .me()
            .threat
            .iter()
            .filter(|&&(id, _)| self.world.actor(id).alive)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|&(id, _)| id);
        self.me_mut().victim = top;
        top.is_some()
    }

    fn melee_attack_if_ready(&mut self) {
        self.melee_swings += 1;
    }

    fn attack(&mut self, target: ActorId, _with_melee: bool) -> bool {
        if !self.world.actor(target).alive {
            return false;
        }
        self.me_mut().victim = Some(target);
        true
    }

    fn add_threat(&mut self, target: ActorId, amount: f32) {
        let me = self.me_mut();
        if let Some(entry) = me.threat.iter_mut().find(|(id, _)| *id == target) {
            entry.1 += amount;
        } else {
            me.threat.push((target, amount));
        }
    }

    fn set_in_combat_with(&mut self, target: ActorId) {
        self.me_mut().victim = Some(target);
        let id = self.id;
        self.world.actor_mut(target).victim.get_or_insert(id);
    }

    fn start_chase(&mut self, target: ActorId) {
        self.chases.push(target);
    }

    fn stop_moving(&mut self) {
        self.stops += 1;
    }

    fn stop_attack(&mut self) {
        self.me_mut().victim = None;
    }

    fn cast(&mut self, target: ActorId, ability: AbilityId, triggered: bool) -> bool {
        self.casts.push((target, ability, triggered));
        true
    }

    fn modify_threat_percent(&mut self, target: ActorId, percent: i32) {
        if let Some(entry) = self.me_mut().threat.iter_mut().find(|(id, _)| *id == target) {
            entry.1 += entry.1 * percent as f32 / 100.0;
        }
    }

    fn evade_cleanup(&mut self) {
        self.evade_cleanups += 1;
        let me = self.me_mut();
        me.auras.clear();
        me.threat.clear();
        me.victim = None;
        me.evading = true;
    }
}
