// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Multi-conductor cables.

use super::{ConductorRole, EntityId};
use crate::catalog::{Metal, Size};
use std::f64::consts::PI;
use std::fmt::Display;

/// Represents the type of a cable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CableType {
    Ac,
    #[default]
    Mc,
    Nm,
    Nmc,
    Uf,
    Tc,
}

impl Display for CableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CableType::Ac => write!(f, "AC"),
            CableType::Mc => write!(f, "MC"),
            CableType::Nm => write!(f, "NM"),
            CableType::Nmc => write!(f, "NMC"),
            CableType::Uf => write!(f, "UF"),
            CableType::Tc => write!(f, "TC"),
        }
    }
}

/// A cable: several conductors inside one jacket, handled as a single item
/// when placed in a conduit or a bundle.
#[derive(Clone, Debug, PartialEq)]
pub struct Cable {
    id: EntityId,
    cable_type: CableType,
    size: Size,
    metal: Metal,
    outer_diameter: f64,
    conductors: Vec<ConductorRole>,
}

impl Cable {
    /// Creates a new cable with the given outer diameter, in inches.
    ///
    /// The cable starts with a single hot conductor and a ground; circuits
    /// replace that complement with the one their voltage system requires.
    pub fn new(cable_type: CableType, size: Size, outer_diameter: f64) -> Self {
        Self {
            id: EntityId::next(),
            cable_type,
            size,
            metal: Metal::Copper,
            outer_diameter,
            conductors: vec![ConductorRole::Hot, ConductorRole::Ground],
        }
    }

    pub fn with_metal(mut self, metal: Metal) -> Self {
        self.metal = metal;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn cable_type(&self) -> CableType {
        self.cable_type
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn metal(&self) -> Metal {
        self.metal
    }

    pub fn outer_diameter(&self) -> f64 {
        self.outer_diameter
    }

    /// Returns the roles of the conductors inside the cable.
    pub fn conductors(&self) -> &[ConductorRole] {
        &self.conductors
    }

    pub fn current_carrying_count(&self) -> usize {
        self.conductors
            .iter()
            .filter(|r| r.is_current_carrying())
            .count()
    }

    /// Returns the overall area of the cable, in square inches.
    pub fn area(&self) -> f64 {
        PI * self.outer_diameter * self.outer_diameter / 4.0
    }

    /// Returns a new cable with the same attributes as this one, and a fresh
    /// id.
    pub fn make_like(&self) -> Self {
        Self {
            id: EntityId::next(),
            ..self.clone()
        }
    }

    pub(crate) fn set_conductors(&mut self, roles: impl IntoIterator<Item = ConductorRole>) {
        self.conductors = roles.into_iter().collect();
    }
}
