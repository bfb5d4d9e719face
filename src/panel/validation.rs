// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Consistency checks between the circuits of a [`Panel`] and its shared
//! raceways.

use std::collections::BTreeSet;
use std::fmt::Display;

use super::{BundleId, CircuitId, ConduitId, Panel};
use crate::entity::{Conduitable, EntityId};
use crate::raceway::{Members, Raceway};
use crate::{Error, Load};

/// Panel validation.
impl<L> Panel<L>
where
    L: Load,
{
    /// Checks that every shared raceway holds exactly the entities of the
    /// circuits routed through it.
    ///
    /// Returns an error if a circuit is routed through a raceway the panel
    /// doesn't own, or if a raceway holds entities of circuits outside the
    /// panel.
    pub fn validate(&self) -> Result<(), Error> {
        let graph = self.routing_graph()?;

        for (index, conduit) in self.conduits.iter().enumerate() {
            let id = ConduitId(index);
            self.validate_members(id, conduit.borrow().members(), &graph.circuits_in_conduit(id))?;
        }
        for (index, bundle) in self.bundles.iter().enumerate() {
            let id = BundleId(index);
            self.validate_members(id, bundle.borrow().members(), &graph.circuits_in_bundle(id))?;
        }

        Ok(())
    }

    fn validate_members(
        &self,
        raceway: impl Display,
        members: &Members,
        circuits: &[CircuitId],
    ) -> Result<(), Error> {
        let mut expected = BTreeSet::new();
        for id in circuits {
            expected.extend(self.circuit(*id)?.entities().iter().map(Conduitable::id));
        }
        let actual = members.ids().collect::<BTreeSet<EntityId>>();

        if let Some(stray) = actual.difference(&expected).next() {
            return Err(Error::internal(format!(
                "{raceway} holds entity {stray}, which belongs to no circuit routed through it."
            )));
        }
        if let Some(missing) = expected.difference(&actual).next() {
            return Err(Error::internal(format!(
                "{raceway} is missing entity {missing} of a circuit routed through it."
            )));
        }

        Ok(())
    }
}
