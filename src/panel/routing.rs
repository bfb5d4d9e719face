// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph of the routes from the circuits of a [`Panel`] to its shared
//! raceways.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use super::{BundleId, CircuitId, ConduitId, Panel};
use crate::{Error, Load};

/// A node in a [`RoutingGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoutingNode {
    Circuit(CircuitId),
    Conduit(ConduitId),
    Bundle(BundleId),
}

/// The circuits of a panel and the shared raceways they are routed through.
///
/// Each edge goes from a circuit to the raceway holding its entities.
/// Circuits in free air or in their private raceways have no edges.
#[derive(Debug, Default)]
pub struct RoutingGraph {
    graph: DiGraph<RoutingNode, ()>,
    node_indices: HashMap<RoutingNode, NodeIndex>,
}

impl RoutingGraph {
    fn add_node(&mut self, node: RoutingNode) -> NodeIndex {
        if let Some(index) = self.node_indices.get(&node) {
            return *index;
        }
        let index = self.graph.add_node(node);
        self.node_indices.insert(node, index);
        index
    }

    fn add_route(&mut self, circuit: CircuitId, raceway: RoutingNode) {
        let source = self.add_node(RoutingNode::Circuit(circuit));
        let destination = self.add_node(raceway);
        self.graph.update_edge(source, destination, ());
    }

    /// Returns the circuits routed through the given conduit, in id order.
    pub fn circuits_in_conduit(&self, id: ConduitId) -> Vec<CircuitId> {
        self.circuits_in(RoutingNode::Conduit(id))
    }

    /// Returns the circuits routed through the given bundle, in id order.
    pub fn circuits_in_bundle(&self, id: BundleId) -> Vec<CircuitId> {
        self.circuits_in(RoutingNode::Bundle(id))
    }

    /// Returns the shared raceway the given circuit is routed through, if any.
    pub fn raceway_of(&self, id: CircuitId) -> Option<RoutingNode> {
        let index = self.node_indices.get(&RoutingNode::Circuit(id))?;
        self.graph
            .neighbors_directed(*index, Direction::Outgoing)
            .next()
            .map(|i| self.graph[i])
    }

    /// Returns the number of circuit-to-raceway routes in the graph.
    pub fn route_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn circuits_in(&self, raceway: RoutingNode) -> Vec<CircuitId> {
        let Some(index) = self.node_indices.get(&raceway) else {
            return vec![];
        };
        let mut circuits = self
            .graph
            .neighbors_directed(*index, Direction::Incoming)
            .filter_map(|i| match self.graph[i] {
                RoutingNode::Circuit(id) => Some(id),
                _ => None,
            })
            .collect::<Vec<_>>();
        circuits.sort();
        circuits
    }
}

/// Routing graph construction.
impl<L> Panel<L>
where
    L: Load,
{
    /// Builds the graph of routes from the panel's circuits to its shared
    /// raceways.
    ///
    /// Returns an error if a circuit is routed through a shared raceway the
    /// panel doesn't own.
    pub fn routing_graph(&self) -> Result<RoutingGraph, Error> {
        let mut graph = RoutingGraph::default();
        for index in 0..self.conduits.len() {
            graph.add_node(RoutingNode::Conduit(ConduitId(index)));
        }
        for index in 0..self.bundles.len() {
            graph.add_node(RoutingNode::Bundle(BundleId(index)));
        }

        for (id, circuit) in self.circuits() {
            graph.add_node(RoutingNode::Circuit(id));

            if let Some(conduit) = circuit.shared_conduit() {
                let conduit = self.conduit_id(conduit).ok_or_else(|| {
                    Error::raceway_not_found(format!(
                        "{id} is routed through a conduit that is not part of the panel."
                    ))
                })?;
                graph.add_route(id, RoutingNode::Conduit(conduit));
            } else if let Some(bundle) = circuit.shared_bundle() {
                let bundle = self.bundle_id(bundle).ok_or_else(|| {
                    Error::raceway_not_found(format!(
                        "{id} is routed through a bundle that is not part of the panel."
                    ))
                })?;
                graph.add_route(id, RoutingNode::Bundle(bundle));
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::test_utils::circuit;
    use crate::raceway::{Bundle, Conduit, SharedConduit};
    use crate::VoltageSystem;

    #[test]
    fn test_routing_graph() -> Result<(), Error> {
        let mut panel = Panel::new();
        let a = panel.add_circuit(circuit(VoltageSystem::Ac120_1Ph2W));
        let b = panel.add_circuit(circuit(VoltageSystem::Ac208_3Ph3W));
        let c = panel.add_circuit(circuit(VoltageSystem::Ac277_1Ph2W));
        let d = panel.add_circuit(circuit(VoltageSystem::Ac480_3Ph3W));
        let conduit = panel.add_conduit(Conduit::default());
        let empty = panel.add_conduit(Conduit::default());
        let bundle = panel.add_bundle(Bundle::default());

        panel.route_through_conduit(c, conduit)?;
        panel.route_through_conduit(a, conduit)?;
        panel.route_through_bundle(b, bundle)?;
        panel.circuit_mut(d)?.set_bundle_mode();

        let graph = panel.routing_graph()?;
        assert_eq!(graph.route_count(), 3);
        assert_eq!(graph.circuits_in_conduit(conduit), [a, c]);
        assert!(graph.circuits_in_conduit(empty).is_empty());
        assert_eq!(graph.circuits_in_bundle(bundle), [b]);
        assert_eq!(graph.raceway_of(a), Some(RoutingNode::Conduit(conduit)));
        assert_eq!(graph.raceway_of(b), Some(RoutingNode::Bundle(bundle)));
        assert_eq!(graph.raceway_of(d), None);
        assert_eq!(graph.raceway_of(CircuitId(42)), None);

        // Re-routing the same circuit doesn't duplicate the route.
        panel.route_through_conduit(a, conduit)?;
        assert_eq!(panel.routing_graph()?.route_count(), 3);

        Ok(())
    }

    #[test]
    fn test_foreign_raceway() -> Result<(), Error> {
        let mut panel = Panel::new();
        let id = panel.add_circuit(circuit(VoltageSystem::Ac120_1Ph2W));
        panel
            .circuit_mut(id)?
            .set_shared_conduit_mode(Some(SharedConduit::new(Conduit::default())));

        assert_eq!(
            panel.routing_graph().err(),
            Some(Error::raceway_not_found(
                "Circuit(0) is routed through a conduit that is not part of the panel."
            ))
        );

        Ok(())
    }
}
