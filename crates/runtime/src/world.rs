//! In-memory actor store backing the demo simulation.

use combat_core::{AbilityId, ActorId, ActorTypeId, Position, PowerKind, Unit, WorldOracle};

/// Live state of one simulated actor.
///
/// Fields are public: the world is a plain data store and every rule that
/// touches it lives in [`HostContext`](crate::host::HostContext) or the
/// scripts.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: ActorId,
    pub actor_type: ActorTypeId,
    pub position: Position,
    pub home: Position,
    pub health: u32,
    pub max_health: u32,
    pub power: u32,
    pub max_power: u32,
    pub power_kind: PowerKind,
    /// Side marker; actors on the same team never fight each other.
    pub team: u8,
    /// Damage of one melee swing.
    pub attack_damage: u32,
    pub silenced: bool,
    pub crowd_controlled: bool,
    pub evading: bool,
    /// Loot tag, cleared on evade.
    pub tagged: bool,
    pub auras: Vec<AbilityId>,
    pub known_abilities: Vec<AbilityId>,
    pub victim: Option<ActorId>,
    /// Accumulated threat per attacker; entries persist at zero.
    pub threat: Vec<(ActorId, f32)>,
    /// Target currently being chased, if any.
    pub chase: Option<ActorId>,
    /// Remaining time until the next melee swing is allowed.
    pub swing_timer_ms: u32,
}

impl Actor {
    pub fn spawn(id: ActorId, actor_type: ActorTypeId, position: Position, team: u8) -> Self {
        Self {
            id,
            actor_type,
            position,
            home: position,
            health: 100,
            max_health: 100,
            power: 100,
            max_power: 100,
            power_kind: PowerKind::Mana,
            team,
            attack_damage: 8,
            silenced: false,
            crowd_controlled: false,
            evading: false,
            tagged: false,
            auras: Vec::new(),
            known_abilities: Vec::new(),
            victim: None,
            threat: Vec::new(),
            chase: None,
            swing_timer_ms: 0,
        }
    }

    pub fn with_known_abilities(mut self, abilities: impl IntoIterator<Item = AbilityId>) -> Self {
        self.known_abilities = abilities.into_iter().collect();
        self
    }

    pub fn threat_of(&self, attacker: ActorId) -> f32 {
        self.threat
            .iter()
            .find(|&&(id, _)| id == attacker)
            .map_or(0.0, |&(_, amount)| amount)
    }

    pub fn raise_threat(&mut self, attacker: ActorId, amount: f32) {
        if let Some(entry) = self.threat.iter_mut().find(|(id, _)| *id == attacker) {
            entry.1 += amount;
        } else {
            self.threat.push((attacker, amount));
        }
    }
}

impl Unit for Actor {
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
    fn power(&self, kind: PowerKind) -> u32 {
        if kind == self.power_kind { self.power } else { 0 }
    }
    fn is_alive(&self) -> bool {
        self.health > 0
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
        &self.known_abilities
    }
    fn can_have_threat_list(&self) -> bool {
        true
    }
    fn threat_list(&self) -> Vec<ActorId> {
        self.threat.iter().map(|&(id, _)| id).collect()
    }
    fn threat(&self, target: ActorId) -> f32 {
        self.threat_of(target)
    }
}

/// Flat actor store with linear spatial queries.
///
/// Enumeration order for range queries is insertion order, which is all the
/// engine asks of its spatial index.
#[derive(Debug, Default)]
pub struct World {
    actors: Vec<Actor>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, actor: Actor) -> ActorId {
        let id = actor.id;
        self.actors.push(actor);
        id
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    /// Closest living enemy of `id` within `radius`, for idle target pickup.
    pub fn nearest_enemy(&self, id: ActorId, radius: f32) -> Option<ActorId> {
        let me = self.actor(id)?;
        self.actors
            .iter()
            .filter(|other| {
                other.id != id
                    && other.team != me.team
                    && other.is_alive()
                    && other.position.distance(&me.position) <= radius
            })
            .min_by(|a, b| {
                a.position
                    .distance(&me.position)
                    .total_cmp(&b.position.distance(&me.position))
            })
            .map(|other| other.id)
    }
}

impl WorldOracle for World {
    fn actors_within(&self, origin: Position, range: f32) -> Vec<ActorId> {
        self.actors
            .iter()
            .filter(|a| !range.is_finite() || a.position.distance(&origin) <= range)
            .map(|a| a.id)
            .collect()
    }

    fn unit(&self, id: ActorId) -> Option<&dyn Unit> {
        self.actor(id).map(|a| a as &dyn Unit)
    }

    fn are_friendly(&self, a: ActorId, b: ActorId) -> bool {
        match (self.actor(a), self.actor(b)) {
            (Some(a), Some(b)) => a.team == b.team,
            _ => false,
        }
    }
}
