// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Distribution of the parallel sets of a circuit over its private conduits.

use super::Mode;
use crate::messages::{
    ERROR_CONDUIT_COUNT_MODE, ERROR_SHARED_BUNDLE_SETS, ERROR_SHARED_CONDUIT_SETS, MODE_MESSAGES,
};
use crate::{Circuit, Load};

/// Set and conduit counts.
impl<L> Circuit<L>
where
    L: Load,
{
    /// Returns the number of parallel sets feeding the load.
    pub fn number_of_sets(&self) -> usize {
        self.number_of_sets
    }

    /// Returns the number of private conduits the sets are distributed over.
    pub fn number_of_conduits(&self) -> usize {
        self.number_of_conduits
    }

    /// Returns the number of sets in each conduit.  All conduits carry the
    /// same number of sets.
    pub fn sets_per_conduit(&self) -> usize {
        self.sets_per_conduit
    }

    /// Sets the number of parallel sets, with one set per conduit.
    ///
    /// Zero is ignored.  A circuit routed through a shared raceway can only
    /// have one set: asking for more records an error and moves the circuit
    /// to free air.
    pub fn set_number_of_sets(&mut self, sets: usize) {
        if sets == 0 || sets == self.number_of_sets {
            return;
        }
        self.number_of_sets = sets;
        self.number_of_conduits = sets;
        self.sets_per_conduit = 1;
        tracing::debug!("Circuit now has {sets} sets, one per conduit.");
        self.synchronize();

        if sets > 1 {
            let error = match self.mode() {
                Mode::SharedConduit => ERROR_SHARED_CONDUIT_SETS,
                Mode::SharedBundle => ERROR_SHARED_BUNDLE_SETS,
                _ => return,
            };
            self.messages.remove_all(MODE_MESSAGES);
            self.fall_back(&error);
            self.check_routing_practice();
        }
    }

    /// Moves to the next larger number of conduits that the sets can be
    /// evenly distributed over.  Does nothing when every set already has its
    /// own conduit.
    pub fn increase_conduits(&mut self) {
        let current = self.number_of_conduits;
        let next = (current + 1..=self.number_of_sets).find(|k| self.divides_sets(*k));
        self.redistribute(next);
    }

    /// Moves to the next smaller number of conduits that the sets can be
    /// evenly distributed over.  Does nothing when all sets already share one
    /// conduit.
    pub fn decrease_conduits(&mut self) {
        let current = self.number_of_conduits;
        let next = (1..current).rev().find(|k| self.divides_sets(*k));
        self.redistribute(next);
    }

    fn divides_sets(&self, conduits: usize) -> bool {
        self.number_of_sets % conduits == 0
    }

    fn redistribute(&mut self, conduits: Option<usize>) {
        if self.mode() != Mode::PrivateConduit {
            self.record(&ERROR_CONDUIT_COUNT_MODE);
            return;
        }
        self.messages.remove(ERROR_CONDUIT_COUNT_MODE.id());

        let Some(conduits) = conduits else {
            return;
        };
        self.number_of_conduits = conduits;
        self.sets_per_conduit = self.number_of_sets / conduits;
        tracing::debug!(
            "Distributed {} sets over {} conduits.",
            self.number_of_sets,
            conduits
        );
        self.synchronize();
    }
}

#[cfg(test)]
mod tests {
    use crate::circuit::test_utils::circuit;
    use crate::circuit::Mode;
    use crate::messages::{
        ERROR_CONDUIT_COUNT_MODE, ERROR_SHARED_BUNDLE_SETS, ERROR_SHARED_CONDUIT_SETS,
    };
    use crate::raceway::{Bundle, Conduit, Raceway, SharedBundle, SharedConduit};
    use crate::VoltageSystem;

    #[test]
    fn test_set_number_of_sets_resets_distribution() {
        let mut circuit = circuit(VoltageSystem::Ac480_3Ph3W);
        for sets in [1, 2, 5, 12, 3] {
            circuit.set_number_of_sets(sets);
            assert_eq!(circuit.number_of_sets(), sets);
            assert_eq!(circuit.number_of_conduits(), sets);
            assert_eq!(circuit.sets_per_conduit(), 1);
            assert_eq!(circuit.entities().len(), 4);
        }

        circuit.set_number_of_sets(0);
        assert_eq!(circuit.number_of_sets(), 3);
    }

    #[test]
    fn test_conduit_search() {
        let mut circuit = circuit(VoltageSystem::Ac480_3Ph3W);
        circuit.set_number_of_sets(12);

        let mut seen = vec![];
        for _ in 0..8 {
            circuit.decrease_conduits();
            seen.push(circuit.number_of_conduits());
            assert_eq!(
                circuit.number_of_conduits() * circuit.sets_per_conduit(),
                12
            );
        }
        assert_eq!(seen, [6, 4, 3, 2, 1, 1, 1, 1]);
        assert_eq!(circuit.sets_per_conduit(), 12);
        assert_eq!(circuit.entities().len(), 12 * 4);
        assert_eq!(circuit.private_conduit().filling_count(), 12 * 4);

        seen.clear();
        for _ in 0..7 {
            circuit.increase_conduits();
            seen.push(circuit.number_of_conduits());
        }
        assert_eq!(seen, [2, 3, 4, 6, 12, 12, 12]);
        assert_eq!(circuit.sets_per_conduit(), 1);
        assert_eq!(circuit.entities().len(), 4);
        assert!(!circuit.messages().has_errors());
    }

    #[test]
    fn test_prime_number_of_sets() {
        let mut circuit = circuit(VoltageSystem::Ac120_1Ph2W);
        circuit.set_number_of_sets(7);

        circuit.decrease_conduits();
        assert_eq!(circuit.number_of_conduits(), 1);
        assert_eq!(circuit.sets_per_conduit(), 7);

        circuit.increase_conduits();
        assert_eq!(circuit.number_of_conduits(), 7);
        assert_eq!(circuit.sets_per_conduit(), 1);
    }

    #[test]
    fn test_conduit_count_needs_private_conduit() {
        let mut circuit = circuit(VoltageSystem::Ac120_1Ph2W);
        circuit.set_number_of_sets(4);
        circuit.set_bundle_mode();

        circuit.decrease_conduits();
        assert!(circuit.messages().has_message(&ERROR_CONDUIT_COUNT_MODE));
        assert_eq!(circuit.number_of_conduits(), 4);
        assert_eq!(circuit.mode(), Mode::PrivateBundle);

        circuit.set_conduit_mode();
        assert!(!circuit.messages().has_message(&ERROR_CONDUIT_COUNT_MODE));
        circuit.decrease_conduits();
        assert_eq!(circuit.number_of_conduits(), 2);
        assert!(!circuit.messages().has_errors());
    }

    #[test]
    fn test_more_sets_leaves_shared_raceways() {
        let conduit = SharedConduit::new(Conduit::default());
        let mut circuit = circuit(VoltageSystem::Ac208_3Ph3W);
        circuit.set_shared_conduit_mode(Some(conduit.clone()));
        assert_eq!(conduit.borrow().filling_count(), 4);

        circuit.set_number_of_sets(2);
        assert!(circuit.messages().has_message(&ERROR_SHARED_CONDUIT_SETS));
        assert_eq!(circuit.mode(), Mode::FreeAir);
        assert!(conduit.borrow().is_empty());

        let bundle = SharedBundle::new(Bundle::new(2.0));
        circuit.set_number_of_sets(1);
        circuit.set_shared_bundle_mode(Some(bundle.clone()));
        assert!(!circuit.messages().has_errors());

        circuit.set_number_of_sets(3);
        assert!(circuit.messages().has_message(&ERROR_SHARED_BUNDLE_SETS));
        assert_eq!(circuit.mode(), Mode::FreeAir);
        assert!(bundle.borrow().is_empty());
    }

    #[test]
    fn test_cable_sets_ignore_distribution() {
        let mut circuit = circuit(VoltageSystem::Ac120_240_1Ph3W);
        circuit.set_using_cable(true);
        circuit.set_number_of_sets(6);
        assert_eq!(circuit.entities().len(), 6);

        circuit.decrease_conduits();
        assert_eq!(circuit.sets_per_conduit(), 2);
        assert_eq!(circuit.entities().len(), 6);
    }
}
