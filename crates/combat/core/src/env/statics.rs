//! Oracles over the persisted static databases.

use crate::ability::{AbilityDefinition, RangeDefinition};
use crate::types::{AbilityId, RangeId};

/// Read-only lookup into the static ability database.
///
/// Implementations must be stable for the process lifetime: the capability
/// index is built from this oracle once and never rebuilt.
pub trait AbilityOracle: Send + Sync {
    /// Definition of `id`, or `None` if the database has no such entry.
    fn ability(&self, id: AbilityId) -> Option<&AbilityDefinition>;

    /// Exclusive upper bound of ability ids; every valid id is below it.
    fn max_entry(&self) -> u32;
}

/// Read-only lookup into the static range table.
pub trait RangeOracle: Send + Sync {
    /// Range entry referenced by `id`, or `None` if missing. A missing
    /// entry makes the referencing ability unusable, never a hard error.
    fn range(&self, id: RangeId) -> Option<RangeDefinition>;
}
