// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The routing modes of a circuit, and the transitions between them.

use std::fmt::Display;

use crate::messages::{
    Message, ERROR_SHARED_BUNDLE_MISSING, ERROR_SHARED_CONDUIT_MISSING,
    ERROR_SHARED_CONDUIT_SETS, MODE_MESSAGES, WARNING_CABLE_IN_CONDUIT,
    WARNING_CONDUCTORS_IN_BUNDLE, WARNING_CONDUCTORS_IN_FREE_AIR,
};
use crate::raceway::{SharedBundle, SharedConduit};
use crate::{Circuit, Load};

/// Represents how the sets of a circuit are routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    FreeAir,
    PrivateConduit,
    SharedConduit,
    PrivateBundle,
    SharedBundle,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::FreeAir => write!(f, "FreeAir"),
            Mode::PrivateConduit => write!(f, "PrivateConduit"),
            Mode::SharedConduit => write!(f, "SharedConduit"),
            Mode::PrivateBundle => write!(f, "PrivateBundle"),
            Mode::SharedBundle => write!(f, "SharedBundle"),
        }
    }
}

/// The raceway holding the entities of a circuit.
///
/// The private raceways are owned by the circuit itself and hold its entities
/// only in the corresponding mode; shared raceways are referenced only while
/// the circuit is routed through them.
#[derive(Clone, Debug)]
pub(super) enum Routing {
    FreeAir,
    PrivateConduit,
    SharedConduit(SharedConduit),
    PrivateBundle,
    SharedBundle(SharedBundle),
}

/// Mode transitions.
impl<L> Circuit<L>
where
    L: Load,
{
    pub fn mode(&self) -> Mode {
        match self.routing {
            Routing::FreeAir => Mode::FreeAir,
            Routing::PrivateConduit => Mode::PrivateConduit,
            Routing::SharedConduit(_) => Mode::SharedConduit,
            Routing::PrivateBundle => Mode::PrivateBundle,
            Routing::SharedBundle(_) => Mode::SharedBundle,
        }
    }

    /// Returns the shared conduit the circuit is routed through, if any.
    pub fn shared_conduit(&self) -> Option<&SharedConduit> {
        match &self.routing {
            Routing::SharedConduit(conduit) => Some(conduit),
            _ => None,
        }
    }

    /// Returns the shared bundle the circuit is routed through, if any.
    pub fn shared_bundle(&self) -> Option<&SharedBundle> {
        match &self.routing {
            Routing::SharedBundle(bundle) => Some(bundle),
            _ => None,
        }
    }

    /// Takes the circuit's entities out of any raceway.
    pub fn set_free_air_mode(&mut self) {
        self.begin_transition();
        self.route(Routing::FreeAir);
        self.check_routing_practice();
    }

    /// Routes the circuit's entities through its private conduit.
    pub fn set_conduit_mode(&mut self) {
        self.begin_transition();
        self.route(Routing::PrivateConduit);
        self.check_routing_practice();
    }

    /// Routes the circuit's entities through the given shared conduit.
    ///
    /// Only a circuit with a single set can share a conduit.  If there is no
    /// conduit, or the circuit has more than one set, an error is recorded and
    /// the circuit falls back to free air.
    pub fn set_shared_conduit_mode(&mut self, conduit: Option<SharedConduit>) {
        self.begin_transition();
        match conduit {
            None => self.fall_back(&ERROR_SHARED_CONDUIT_MISSING),
            Some(_) if self.number_of_sets > 1 => self.fall_back(&ERROR_SHARED_CONDUIT_SETS),
            Some(conduit) => self.route(Routing::SharedConduit(conduit)),
        }
        self.check_routing_practice();
    }

    /// Routes the circuit's entities through its private bundle.
    pub fn set_bundle_mode(&mut self) {
        self.begin_transition();
        self.route(Routing::PrivateBundle);
        self.check_routing_practice();
    }

    /// Routes the circuit's entities through the given shared bundle.
    ///
    /// If there is no bundle, an error is recorded and the circuit falls back to
    /// free air.
    pub fn set_shared_bundle_mode(&mut self, bundle: Option<SharedBundle>) {
        self.begin_transition();
        match bundle {
            None => self.fall_back(&ERROR_SHARED_BUNDLE_MISSING),
            Some(bundle) => self.route(Routing::SharedBundle(bundle)),
        }
        self.check_routing_practice();
    }

    fn begin_transition(&mut self) {
        self.messages.remove_all(MODE_MESSAGES);
        self.synchronize();
    }

    pub(super) fn fall_back(&mut self, error: &Message) {
        self.record(error);
        self.route(Routing::FreeAir);
    }

    fn route(&mut self, routing: Routing) {
        self.detach();
        self.routing = routing;
        self.attach();
        tracing::debug!(
            "Routed {} entities in {} mode.",
            self.active.len(),
            self.mode()
        );
    }

    pub(super) fn is_shared_raceway_borrowed(&self) -> bool {
        match &self.routing {
            Routing::SharedConduit(conduit) => conduit.is_borrowed(),
            Routing::SharedBundle(bundle) => bundle.is_borrowed(),
            _ => false,
        }
    }

    /// Removes the active entities from the raceway they are routed through.
    pub(super) fn detach(&mut self) {
        let active = &self.active;
        match &self.routing {
            Routing::FreeAir => {}
            Routing::PrivateConduit => self.private_conduit.members_mut().remove_all(active),
            Routing::SharedConduit(conduit) => conduit.borrow_mut().members_mut().remove_all(active),
            Routing::PrivateBundle => self.private_bundle.members_mut().remove_all(active),
            Routing::SharedBundle(bundle) => bundle.borrow_mut().members_mut().remove_all(active),
        }
    }

    /// Adds the active entities to the raceway they are routed through,
    /// replacing the copies it already holds.
    pub(super) fn attach(&mut self) {
        let active = &self.active;
        match &self.routing {
            Routing::FreeAir => {}
            Routing::PrivateConduit => self.private_conduit.members_mut().insert_all(active),
            Routing::SharedConduit(conduit) => conduit.borrow_mut().members_mut().insert_all(active),
            Routing::PrivateBundle => self.private_bundle.members_mut().insert_all(active),
            Routing::SharedBundle(bundle) => bundle.borrow_mut().members_mut().insert_all(active),
        }
    }

    /// Records the warning for the discouraged combination of entity kind and
    /// mode, if the circuit is in one.
    pub(super) fn check_routing_practice(&mut self) {
        for warning in [
            WARNING_CONDUCTORS_IN_FREE_AIR,
            WARNING_CONDUCTORS_IN_BUNDLE,
            WARNING_CABLE_IN_CONDUIT,
        ] {
            self.messages.remove(warning.id());
        }

        let warning = match (self.mode(), self.using_cable) {
            (Mode::FreeAir, false) => Some(WARNING_CONDUCTORS_IN_FREE_AIR),
            (Mode::PrivateBundle | Mode::SharedBundle, false) => Some(WARNING_CONDUCTORS_IN_BUNDLE),
            (Mode::PrivateConduit | Mode::SharedConduit, true) => Some(WARNING_CABLE_IN_CONDUIT),
            _ => None,
        };
        if let Some(warning) = warning {
            self.record(&warning);
        }
    }
}
