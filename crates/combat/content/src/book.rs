//! Assembled static ability database.

use std::collections::HashMap;

use combat_core::{
    AbilityDefinition, AbilityId, AbilityOracle, RangeDefinition, RangeId, RangeOracle,
};

use crate::error::ContentError;

/// The ability database an assembled content set exposes to the engine.
///
/// Abilities live in a dense id-indexed table (sparse ids leave `None`
/// holes), ranges in a side table shared between abilities. Implements the
/// engine's static oracles directly, so a book plus a
/// [`CapabilityIndex`](combat_core::CapabilityIndex) built from it is all
/// the static data a simulation needs.
#[derive(Clone, Debug, Default)]
pub struct AbilityBook {
    abilities: Vec<Option<AbilityDefinition>>,
    ranges: HashMap<RangeId, RangeDefinition>,
}

impl AbilityBook {
    /// Assembles a book from authored entries.
    ///
    /// Sparse ability ids are allowed; a duplicate ability, range, or a
    /// reference to an undefined range entry is a validation error.
    pub fn from_entries(
        abilities: impl IntoIterator<Item = (AbilityId, AbilityDefinition)>,
        ranges: impl IntoIterator<Item = (RangeId, RangeDefinition)>,
    ) -> Result<Self, ContentError> {
        let mut book = Self::default();

        for (id, range) in ranges {
            if book.ranges.insert(id, range).is_some() {
                return Err(ContentError::DuplicateRange(id));
            }
        }

        for (id, ability) in abilities {
            let index = id.index();
            if book.abilities.len() <= index {
                book.abilities.resize(index + 1, None);
            }
            if book.abilities[index].is_some() {
                return Err(ContentError::DuplicateAbility(id));
            }
            if !book.ranges.contains_key(&ability.range) {
                return Err(ContentError::UnknownRange {
                    ability: id,
                    range: ability.range,
                });
            }
            book.abilities[index] = Some(ability);
        }

        Ok(book)
    }

    pub fn ability_count(&self) -> usize {
        self.abilities.iter().flatten().count()
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }
}

impl AbilityOracle for AbilityBook {
    fn ability(&self, id: AbilityId) -> Option<&AbilityDefinition> {
        self.abilities.get(id.index()).and_then(Option::as_ref)
    }

    fn max_entry(&self) -> u32 {
        self.abilities.len() as u32
    }
}

impl RangeOracle for AbilityBook {
    fn range(&self, id: RangeId) -> Option<RangeDefinition> {
        self.ranges.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{EffectKind, PowerKind, SchoolMask, TargetDescriptor};

    fn ability(range: u32) -> AbilityDefinition {
        AbilityDefinition::new(SchoolMask::FIRE, 10, PowerKind::Mana, RangeId(range))
            .with_effect(EffectKind::SchoolDamage, TargetDescriptor::SingleEnemy)
    }

    #[test]
    fn sparse_ids_leave_holes() {
        let book = AbilityBook::from_entries(
            [(AbilityId(0), ability(1)), (AbilityId(5), ability(1))],
            [(RangeId(1), RangeDefinition { min: 0.0, max: 30.0 })],
        )
        .unwrap();

        assert_eq!(book.max_entry(), 6);
        assert_eq!(book.ability_count(), 2);
        assert!(book.ability(AbilityId(0)).is_some());
        assert!(book.ability(AbilityId(3)).is_none());
        assert!(book.ability(AbilityId(99)).is_none());
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let err = AbilityBook::from_entries(
            [(AbilityId(2), ability(1)), (AbilityId(2), ability(1))],
            [(RangeId(1), RangeDefinition { min: 0.0, max: 30.0 })],
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateAbility(AbilityId(2))));

        let err = AbilityBook::from_entries(
            [],
            [
                (RangeId(1), RangeDefinition { min: 0.0, max: 30.0 }),
                (RangeId(1), RangeDefinition { min: 0.0, max: 40.0 }),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateRange(RangeId(1))));
    }

    #[test]
    fn dangling_range_references_are_rejected() {
        let err = AbilityBook::from_entries([(AbilityId(0), ability(7))], []).unwrap_err();
        assert!(matches!(
            err,
            ContentError::UnknownRange {
                ability: AbilityId(0),
                range: RangeId(7),
            }
        ));
    }
}
