//! Content validation errors.

use combat_core::{AbilityId, ActorTypeId, RangeId};

/// Validation failure while assembling authored content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("ability {0} is defined twice")]
    DuplicateAbility(AbilityId),

    #[error("range entry {0} is defined twice")]
    DuplicateRange(RangeId),

    #[error("evade region for actor {0} is defined twice")]
    DuplicateRegion(ActorTypeId),

    #[error("ability {ability} references undefined range entry {range}")]
    UnknownRange { ability: AbilityId, range: RangeId },
}
