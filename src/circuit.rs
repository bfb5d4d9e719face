// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A circuit feeding a load through one or more parallel sets of conductors or
//! cables, and the way those sets are routed.

mod distribution;
mod mode;
mod sync;

#[cfg(test)]
pub(crate) mod test_utils;

pub use mode::Mode;

use crate::catalog::{ConduitType, Size, TradeSize};
use crate::entity::{Cable, CableType, Conductor, Conduitable};
use crate::messages::{Message, Messages, Severity};
use crate::ocpd::OcpdSelector;
use crate::raceway::{Bundle, Conduit};
use crate::voltage_system::SetLayout;
use crate::{CircuitConfig, Load};

use mode::Routing;

/// A circuit, its conductor sets and the raceways they are routed through.
///
/// All mutating operations keep the circuit consistent and never fail.  When a
/// requested configuration breaks a rule, the circuit falls back to a safe
/// configuration and records an error in its [`Messages`], which callers are
/// expected to check after each change.
///
/// A new circuit has one set of conductors, in its private conduit.
#[derive(Debug)]
pub struct Circuit<L>
where
    L: Load,
{
    load: L,
    config: CircuitConfig,
    routing: Routing,
    private_conduit: Conduit,
    private_bundle: Bundle,
    using_cable: bool,
    conductor_template: Conductor,
    cable_template: Cable,
    layout: SetLayout,
    active: Vec<Conduitable>,
    number_of_sets: usize,
    number_of_conduits: usize,
    sets_per_conduit: usize,
    messages: Messages,
}

impl<L> Circuit<L>
where
    L: Load,
{
    /// Creates a new circuit for the given load.
    pub fn new(load: L, config: CircuitConfig) -> Self {
        let layout = SetLayout::new(load.voltage_system(), &config);
        let mut cable_template = Cable::new(CableType::Mc, Size::Awg12, 0.5);
        cable_template.set_conductors(layout.roles());

        let mut circuit = Self {
            load,
            config,
            routing: Routing::PrivateConduit,
            private_conduit: Conduit::new(ConduitType::Pvc40, TradeSize::T1_2),
            private_bundle: Bundle::default(),
            using_cable: false,
            conductor_template: Conductor::default(),
            cable_template,
            layout,
            active: vec![],
            number_of_sets: 1,
            number_of_conduits: 1,
            sets_per_conduit: 1,
            messages: Messages::new(),
        };
        circuit.check_load();
        circuit.rebuild();
        circuit.check_routing_practice();
        circuit
    }

    pub fn load(&self) -> &L {
        &self.load
    }

    /// Replaces the load and re-derives the conductor sets for it.
    pub fn set_load(&mut self, load: L) {
        self.load = load;
        self.synchronize();
    }

    /// Applies the given change to the load and re-derives the conductor sets
    /// for it.
    pub fn update_load(&mut self, update: impl FnOnce(&mut L)) {
        update(&mut self.load);
        self.synchronize();
    }

    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    /// Returns the messages recorded while validating the circuit.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Returns the entities currently in service.
    ///
    /// When using cables, there is one cable per set.  When using conductors,
    /// these are the conductors of the sets that go in one conduit.  The first
    /// entity is always the template the others are derived from.
    pub fn entities(&self) -> &[Conduitable] {
        &self.active
    }

    /// Returns the private conduit.  Its contents are only non-empty in
    /// private conduit mode.
    pub fn private_conduit(&self) -> &Conduit {
        &self.private_conduit
    }

    /// Returns the private conduit, to change its type, trade size or
    /// placement.
    pub fn private_conduit_mut(&mut self) -> &mut Conduit {
        &mut self.private_conduit
    }

    pub fn private_bundle(&self) -> &Bundle {
        &self.private_bundle
    }

    pub fn private_bundle_mut(&mut self) -> &mut Bundle {
        &mut self.private_bundle
    }

    /// Returns the selector for the circuit's overcurrent device.
    pub fn ocpd(&self) -> OcpdSelector<'_, L> {
        OcpdSelector::new(self)
    }

    fn record(&mut self, message: &Message) {
        if message.severity() == Severity::Error && !self.messages.has_message(message) {
            tracing::warn!("Circuit error {}: {}", message.id(), message.text());
        }
        self.messages.add_message(message);
    }
}

/// A dropped circuit leaves the shared raceway it was routed through.
impl<L> Drop for Circuit<L>
where
    L: Load,
{
    fn drop(&mut self) {
        if self.is_shared_raceway_borrowed() {
            tracing::warn!(
                "Shared raceway is borrowed, leaving {} entities in it.",
                self.active.len()
            );
            return;
        }
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::{circuit, occupied_raceways, roles_and_sizes};
    use super::*;
    use crate::entity::ConductorRole;
    use crate::messages::{ERROR_INVALID_LOAD, WARNING_CONDUCTORS_IN_FREE_AIR};
    use crate::raceway::{Raceway, SharedConduit};
    use crate::{BasicLoad, VoltageSystem};

    #[test]
    fn test_new_circuit() {
        let circuit = circuit(VoltageSystem::Ac208_1Ph2W);

        assert_eq!(circuit.mode(), Mode::PrivateConduit);
        assert_eq!(circuit.number_of_sets(), 1);
        assert_eq!(circuit.number_of_conduits(), 1);
        assert_eq!(circuit.sets_per_conduit(), 1);
        assert!(!circuit.is_using_cable());
        assert!(circuit.messages().is_empty());
        assert_eq!(
            roles_and_sizes(&circuit),
            [
                (Some(ConductorRole::Hot), Size::Awg12),
                (Some(ConductorRole::Hot), Size::Awg12),
                (Some(ConductorRole::Ground), Size::Awg12),
            ]
        );
        assert_eq!(circuit.entities()[0].id(), circuit.conductor_template().id());
        assert_eq!(circuit.private_conduit().filling_count(), 3);
        assert_eq!(occupied_raceways(&circuit), 1);
    }

    #[test]
    fn test_invalid_load() {
        let mut circuit = Circuit::new(
            BasicLoad::new(VoltageSystem::Ac120_1Ph2W, f64::NAN),
            CircuitConfig::default(),
        );
        assert!(circuit.messages().has_message(&ERROR_INVALID_LOAD));

        circuit.update_load(|load| load.set_min_conductor_ampacity(12.0));
        assert!(!circuit.messages().has_message(&ERROR_INVALID_LOAD));
        assert!(!circuit.messages().has_errors());
    }

    #[test]
    fn test_load_changes_are_pulled() {
        let mut circuit = circuit(VoltageSystem::Ac120_1Ph2W);
        assert_eq!(circuit.conductors_per_set(), 3);

        circuit.update_load(|load| load.set_voltage_system(VoltageSystem::Ac120_208_3Ph4W));
        assert_eq!(circuit.conductors_per_set(), 5);
        assert_eq!(circuit.entities().len(), 5);
        assert_eq!(circuit.private_conduit().filling_count(), 5);
        assert_eq!(circuit.private_conduit().current_carrying_count(), 3);

        circuit.set_load(BasicLoad::new(VoltageSystem::Ac480_3Ph3W, 30.0));
        assert_eq!(circuit.entities().len(), 4);
        assert_eq!(circuit.private_conduit().filling_count(), 4);
        assert_eq!(circuit.ocpd().rating(), 30);
    }

    #[test]
    fn test_drop_while_raceway_is_borrowed() {
        let shared = SharedConduit::new(Conduit::default());
        let mut first = circuit(VoltageSystem::Ac120_1Ph2W);
        let mut second = circuit(VoltageSystem::Ac120_1Ph2W);
        first.set_shared_conduit_mode(Some(shared.clone()));
        second.set_shared_conduit_mode(Some(shared.clone()));

        let contents = shared.borrow();
        drop(first);
        assert_eq!(contents.filling_count(), 6);
        drop(contents);

        drop(second);
        assert_eq!(shared.borrow().filling_count(), 3);
    }

    #[test]
    fn test_free_air_warning_from_start() {
        let mut circuit = circuit(VoltageSystem::Ac120_1Ph2W);
        circuit.set_free_air_mode();
        assert!(circuit
            .messages()
            .has_message(&WARNING_CONDUCTORS_IN_FREE_AIR));
        assert!(circuit.private_conduit().is_empty());
    }
}
