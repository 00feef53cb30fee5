//! Hand-authored combat-area bounds, keyed by actor type.
//!
//! Some encounter actors must disengage when dragged out of their room.
//! Each such actor type gets one [`EvadeRegion`] describing where combat is
//! still legal; the per-tick boundary check in
//! [`CombatScript`](crate::script::CombatScript) forces an evade once the
//! actor leaves it. Types without an authored region fail open: the check
//! reports a diagnostic and never forces an evade.
//!
//! Adding a coverage rule for a new actor type is a table entry, not a code
//! change.

use std::collections::HashMap;

use crate::types::{ActorTypeId, Position};

/// Open-ended strict interval over one coordinate.
///
/// `None` leaves that side unbounded; comparisons are strict, matching the
/// hand-authored bounds this table was populated from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

impl Span {
    /// Unbounded span; every value is inside.
    pub const ANY: Self = Self {
        min: None,
        max: None,
    };

    pub const fn above(min: f32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn below(max: f32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn between(min: f32, max: f32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        self.min.is_none_or(|min| value > min) && self.max.is_none_or(|max| value < max)
    }
}

/// One actor type's authored combat area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvadeRegion {
    /// Absolute coordinate bounds; unspecified axes are unbounded.
    Bounds { x: Span, y: Span, z: Span },
    /// Within `radius` (2D) of a fixed point.
    NearPoint { x: f32, y: f32, radius: f32 },
    /// Within `radius` (2D) of the actor's recorded respawn point.
    NearHome { radius: f32 },
}

impl EvadeRegion {
    /// True if an actor at `position` (respawned at `home`) is still inside
    /// the region.
    pub fn contains(&self, position: Position, home: Position) -> bool {
        match *self {
            EvadeRegion::Bounds { x, y, z } => {
                x.contains(position.x) && y.contains(position.y) && z.contains(position.z)
            }
            EvadeRegion::NearPoint { x, y, radius } => {
                position.distance_2d(&Position::new(x, y, position.z)) < radius
            }
            EvadeRegion::NearHome { radius } => position.distance_2d(&home) < radius,
        }
    }
}

/// Immutable actor-type → region table.
///
/// Static configuration data: built once from authored content and never
/// mutated at runtime.
#[derive(Clone, Debug, Default)]
pub struct EvadeRegionTable {
    entries: HashMap<ActorTypeId, EvadeRegion>,
}

impl EvadeRegionTable {
    pub fn new(entries: HashMap<ActorTypeId, EvadeRegion>) -> Self {
        Self { entries }
    }

    pub fn region(&self, actor_type: ActorTypeId) -> Option<&EvadeRegion> {
        self.entries.get(&actor_type)
    }

    /// Evaluates the authored predicate for `actor_type`.
    ///
    /// Returns `None` for types with no authored region; the caller decides
    /// how to fail open.
    pub fn is_inside(
        &self,
        actor_type: ActorTypeId,
        position: Position,
        home: Position,
    ) -> Option<bool> {
        self.entries
            .get(&actor_type)
            .map(|region| region.contains(position, home))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ActorTypeId, EvadeRegion)> for EvadeRegionTable {
    fn from_iter<I: IntoIterator<Item = (ActorTypeId, EvadeRegion)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
