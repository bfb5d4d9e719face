// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The membership collection shared by conduits and bundles.

use crate::entity::{Conduitable, EntityId};
use std::collections::BTreeMap;

/// An unordered collection of entities, keyed by their ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Members {
    entities: BTreeMap<EntityId, Conduitable>,
}

impl Members {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Returns an iterator over the entities, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Conduitable> {
        self.entities.values()
    }

    /// Returns an iterator over the ids of the entities, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// Returns the sum of the areas of all entities, in square inches.
    pub fn fill_area(&self) -> f64 {
        self.entities.values().map(Conduitable::area).sum()
    }

    pub fn current_carrying_count(&self) -> usize {
        self.entities
            .values()
            .map(Conduitable::current_carrying_count)
            .sum()
    }

    pub(crate) fn insert_all<'a>(&mut self, entities: impl IntoIterator<Item = &'a Conduitable>) {
        for entity in entities {
            self.entities.insert(entity.id(), entity.clone());
        }
    }

    pub(crate) fn remove_all<'a>(&mut self, entities: impl IntoIterator<Item = &'a Conduitable>) {
        for entity in entities {
            self.entities.remove(&entity.id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Insulation, Metal, Size};
    use crate::entity::{Cable, CableType, Conductor, ConductorRole};

    #[test]
    fn test_membership() {
        let hot = Conduitable::from(Conductor::new(Size::Awg10, Metal::Copper, Insulation::Thhn));
        let ground = Conduitable::from(
            Conductor::new(Size::Awg10, Metal::Copper, Insulation::Thhn)
                .with_role(ConductorRole::Ground),
        );
        let cable = Conduitable::from(Cable::new(CableType::Mc, Size::Awg12, 0.5));

        let mut members = Members::default();
        members.insert_all([&hot, &ground, &cable]);
        members.insert_all([&hot]);

        assert_eq!(members.len(), 3);
        assert!(members.contains(ground.id()));
        assert_eq!(members.current_carrying_count(), 2);
        assert!((members.fill_area() - (2.0 * 0.0211 + cable.area())).abs() < 1e-12);

        members.remove_all([&ground, &ground]);
        assert_eq!(members.len(), 2);
        assert!(!members.contains(ground.id()));
        assert!(members.ids().eq([hot.id(), cable.id()]));
    }
}
