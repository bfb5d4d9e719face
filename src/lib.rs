// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Conduit Topology

This is a library for modelling the conductors of an electrical circuit, the
way they are routed through conduits and bundles, and the overcurrent device
that protects them.

## Circuits and loads

The main struct is [`Circuit`], which feeds a load through one or more
parallel sets of insulated conductors or cables.  The circuit doesn't know
about the load type and instead reads it through the [`Load`] trait, every
time it re-derives its conductor sets.  [`BasicLoad`] is a plain
implementation of the trait.

Each set holds one conductor per phase, a neutral when the
[`VoltageSystem`] has one, and a ground.  Whether a 3-phase 4-wire neutral is
current-carrying is decided by [`CircuitConfig::nonlinear_neutral`].

## Routing modes

A circuit is always in exactly one [`Mode`]:

- free air,
- its private conduit, or a [`SharedConduit`] it has in common with other
  circuits,
- its private bundle, or a [`SharedBundle`].

Parallel sets are distributed evenly over private conduits with
[`increase_conduits`][Circuit::increase_conduits] and
[`decrease_conduits`][Circuit::decrease_conduits].

## Messages

Mutating operations never fail.  When a request breaks a rule, the circuit
falls back to free air and records an error in its [`Messages`] ledger.
Discouraged but legal combinations, like cables in a conduit, record a
warning.  The ids are listed in the [`messages`] module.

## Panels

A [`Panel`] owns circuits and the shared raceways between them, addresses them
by id, and checks that every shared raceway holds exactly the entities of the
circuits routed through it.  Addressing a circuit that doesn't exist returns an
[`Error`].
*/

mod catalog;
pub use catalog::{ConduitType, Insulation, Metal, Size, TradeSize};

mod circuit;
pub use circuit::{Circuit, Mode};

mod config;
pub use config::CircuitConfig;

mod entity;
pub use entity::{Cable, CableType, Conductor, ConductorRole, Conduitable, EntityId};

mod error;
pub use error::Error;

mod load;
pub use load::{BasicLoad, Load};

pub mod messages;
pub use messages::{Message, Messages, Severity};

mod ocpd;
pub use ocpd::{rating_for, OcpdSelector};

mod panel;
pub use panel::{BundleId, CircuitId, ConduitId, Panel, RoutingGraph, RoutingNode};

mod raceway;
pub use raceway::{Bundle, Conduit, Members, Raceway, Shared, SharedBundle, SharedConduit};

pub mod tables;

mod voltage_system;
pub use voltage_system::{SetLayout, VoltageSystem};
