// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A coordinator that owns a set of circuits and the shared raceways they can
//! be routed through.

mod routing;
mod validation;

pub use routing::{RoutingGraph, RoutingNode};

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::ocpd::OcpdSelector;
use crate::raceway::{Bundle, Conduit, SharedBundle, SharedConduit};
use crate::{Circuit, Error, Load};

/// Identifies a circuit in a [`Panel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CircuitId(usize);

/// Identifies a shared conduit in a [`Panel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConduitId(usize);

/// Identifies a shared bundle in a [`Panel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BundleId(usize);

impl Display for CircuitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Circuit({})", self.0)
    }
}

impl Display for ConduitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Conduit({})", self.0)
    }
}

impl Display for BundleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bundle({})", self.0)
    }
}

/// Owns circuits and the shared conduits and bundles between them.
///
/// Shared raceways are mutated by every circuit routed through them, so the
/// panel is the single owner that serializes those mutations.  Circuits,
/// conduits and bundles are addressed by the ids handed out when they are
/// added.
#[derive(Debug)]
pub struct Panel<L>
where
    L: Load,
{
    circuits: BTreeMap<CircuitId, Circuit<L>>,
    next_circuit_id: usize,
    conduits: Vec<SharedConduit>,
    bundles: Vec<SharedBundle>,
}

impl<L> Default for Panel<L>
where
    L: Load,
{
    fn default() -> Self {
        Self {
            circuits: BTreeMap::new(),
            next_circuit_id: 0,
            conduits: vec![],
            bundles: vec![],
        }
    }
}

impl<L> Panel<L>
where
    L: Load,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a circuit to the panel and returns its id.
    pub fn add_circuit(&mut self, circuit: Circuit<L>) -> CircuitId {
        let id = CircuitId(self.next_circuit_id);
        self.next_circuit_id += 1;
        self.circuits.insert(id, circuit);
        id
    }

    /// Removes a circuit from the panel.  Its entities leave the shared
    /// raceway it was routed through.
    pub fn remove_circuit(&mut self, id: CircuitId) -> Result<Circuit<L>, Error> {
        let mut circuit = self.circuits.remove(&id).ok_or_else(|| circuit_not_found(id))?;
        circuit.set_conduit_mode();
        Ok(circuit)
    }

    /// Adds a shared conduit to the panel and returns its id.
    pub fn add_conduit(&mut self, conduit: Conduit) -> ConduitId {
        self.conduits.push(SharedConduit::new(conduit));
        ConduitId(self.conduits.len() - 1)
    }

    /// Adds a shared bundle to the panel and returns its id.
    pub fn add_bundle(&mut self, bundle: Bundle) -> BundleId {
        self.bundles.push(SharedBundle::new(bundle));
        BundleId(self.bundles.len() - 1)
    }

    /// Returns the circuit with the given id.
    pub fn circuit(&self, id: CircuitId) -> Result<&Circuit<L>, Error> {
        self.circuits.get(&id).ok_or_else(|| circuit_not_found(id))
    }

    /// Returns the circuit with the given id, to change its load or its
    /// conductor sets.
    pub fn circuit_mut(&mut self, id: CircuitId) -> Result<&mut Circuit<L>, Error> {
        self.circuits
            .get_mut(&id)
            .ok_or_else(|| circuit_not_found(id))
    }

    /// Returns an iterator over the circuits in the panel, in id order.
    pub fn circuits(&self) -> impl Iterator<Item = (CircuitId, &Circuit<L>)> {
        self.circuits.iter().map(|(id, circuit)| (*id, circuit))
    }

    /// Returns the shared conduit with the given id.
    pub fn conduit(&self, id: ConduitId) -> Result<&SharedConduit, Error> {
        self.conduits
            .get(id.0)
            .ok_or_else(|| Error::raceway_not_found(format!("{id} not found.")))
    }

    /// Returns the shared bundle with the given id.
    pub fn bundle(&self, id: BundleId) -> Result<&SharedBundle, Error> {
        self.bundles
            .get(id.0)
            .ok_or_else(|| Error::raceway_not_found(format!("{id} not found.")))
    }

    /// Routes a circuit through one of the panel's shared conduits.
    ///
    /// Returns an error only if either id is unknown.  If the circuit can't
    /// share a conduit, it falls back to free air and records why in its
    /// messages.
    pub fn route_through_conduit(
        &mut self,
        circuit: CircuitId,
        conduit: ConduitId,
    ) -> Result<(), Error> {
        let conduit = self.conduit(conduit)?.clone();
        self.circuit_mut(circuit)?
            .set_shared_conduit_mode(Some(conduit));
        Ok(())
    }

    /// Routes a circuit through one of the panel's shared bundles.
    ///
    /// Returns an error only if either id is unknown.
    pub fn route_through_bundle(
        &mut self,
        circuit: CircuitId,
        bundle: BundleId,
    ) -> Result<(), Error> {
        let bundle = self.bundle(bundle)?.clone();
        self.circuit_mut(circuit)?
            .set_shared_bundle_mode(Some(bundle));
        Ok(())
    }

    /// Returns the overcurrent device selector for the circuit with the given
    /// id.
    pub fn ocpd(&self, id: CircuitId) -> Result<OcpdSelector<'_, L>, Error> {
        self.circuit(id).map(Circuit::ocpd)
    }

    /// Returns the id of the given shared conduit, if the panel owns it.
    fn conduit_id(&self, conduit: &SharedConduit) -> Option<ConduitId> {
        self.conduits
            .iter()
            .position(|c| c.ptr_eq(conduit))
            .map(ConduitId)
    }

    /// Returns the id of the given shared bundle, if the panel owns it.
    fn bundle_id(&self, bundle: &SharedBundle) -> Option<BundleId> {
        self.bundles
            .iter()
            .position(|b| b.ptr_eq(bundle))
            .map(BundleId)
    }
}

fn circuit_not_found(id: CircuitId) -> Error {
    Error::circuit_not_found(format!("{id} not found."))
}
