// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains helpers
//! that are shared by the tests of the `circuit` module and its users.

use crate::catalog::Size;
use crate::entity::{ConductorRole, Conduitable};
use crate::raceway::Raceway;
use crate::{BasicLoad, Circuit, CircuitConfig, Load, VoltageSystem};

/// Returns a 20A circuit for the given voltage system, with the default
/// configuration.
pub(crate) fn circuit(voltage_system: VoltageSystem) -> Circuit<BasicLoad> {
    Circuit::new(
        BasicLoad::new(voltage_system, 20.0),
        CircuitConfig::default(),
    )
}

/// Returns the role and size of each active entity of the circuit, in order.
pub(crate) fn roles_and_sizes<L: Load>(
    circuit: &Circuit<L>,
) -> Vec<(Option<ConductorRole>, Size)> {
    circuit
        .entities()
        .iter()
        .map(|e| (e.role(), e.size()))
        .collect()
}

/// Returns the number of raceways that hold or reference the entities of the
/// circuit.
pub(crate) fn occupied_raceways<L: Load>(circuit: &Circuit<L>) -> usize {
    [
        !circuit.private_conduit().is_empty(),
        !circuit.private_bundle().is_empty(),
        circuit.shared_conduit().is_some(),
        circuit.shared_bundle().is_some(),
    ]
    .into_iter()
    .filter(|occupied| *occupied)
    .count()
}

/// Returns the ids of the active entities of the circuit, sorted.
pub(crate) fn entity_ids<L: Load>(circuit: &Circuit<L>) -> Vec<crate::entity::EntityId> {
    let mut ids = circuit
        .entities()
        .iter()
        .map(Conduitable::id)
        .collect::<Vec<_>>();
    ids.sort();
    ids
}
