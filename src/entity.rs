// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The physical entities that can be routed through conduits and bundles:
//! insulated conductors and cables.

mod cable;
mod conductor;

pub use cable::{Cable, CableType};
pub use conductor::Conductor;

use crate::catalog::Size;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a physical entity.
///
/// Cloning an entity keeps its id, because the clone describes the same
/// physical conductor or cable.  Use `make_like` to create a new entity with
/// the same attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub(crate) fn next() -> Self {
        EntityId(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents the role of a conductor in a circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConductorRole {
    Hot,
    NeutralCurrentCarrying,
    NeutralNonCurrentCarrying,
    Ground,
}

impl ConductorRole {
    pub fn is_current_carrying(&self) -> bool {
        matches!(
            self,
            ConductorRole::Hot | ConductorRole::NeutralCurrentCarrying
        )
    }

    pub fn is_neutral(&self) -> bool {
        matches!(
            self,
            ConductorRole::NeutralCurrentCarrying | ConductorRole::NeutralNonCurrentCarrying
        )
    }
}

impl Display for ConductorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConductorRole::Hot => write!(f, "Hot"),
            ConductorRole::NeutralCurrentCarrying => write!(f, "NeutralCC"),
            ConductorRole::NeutralNonCurrentCarrying => write!(f, "NeutralNCC"),
            ConductorRole::Ground => write!(f, "Ground"),
        }
    }
}

/// A conductor or a cable: anything that can be placed in a conduit or a
/// bundle.
#[derive(Clone, Debug, PartialEq)]
pub enum Conduitable {
    Conductor(Conductor),
    Cable(Cable),
}

impl Conduitable {
    pub fn id(&self) -> EntityId {
        match self {
            Conduitable::Conductor(conductor) => conductor.id(),
            Conduitable::Cable(cable) => cable.id(),
        }
    }

    pub fn size(&self) -> Size {
        match self {
            Conduitable::Conductor(conductor) => conductor.size(),
            Conduitable::Cable(cable) => cable.size(),
        }
    }

    /// Returns the role of a conductor, or `None` for a cable.
    pub fn role(&self) -> Option<ConductorRole> {
        match self {
            Conduitable::Conductor(conductor) => Some(conductor.role()),
            Conduitable::Cable(_) => None,
        }
    }

    pub fn is_cable(&self) -> bool {
        matches!(self, Conduitable::Cable(_))
    }

    /// Returns the cross-sectional area of the entity, in square inches.  A
    /// cable contributes its overall area.
    pub fn area(&self) -> f64 {
        match self {
            Conduitable::Conductor(conductor) => conductor.area(),
            Conduitable::Cable(cable) => cable.area(),
        }
    }

    /// Returns the number of current-carrying conductors in the entity.
    pub fn current_carrying_count(&self) -> usize {
        match self {
            Conduitable::Conductor(conductor) => usize::from(conductor.is_current_carrying()),
            Conduitable::Cable(cable) => cable.current_carrying_count(),
        }
    }

    /// Returns a new, independent entity with the same attributes.
    pub fn make_like(&self) -> Self {
        match self {
            Conduitable::Conductor(conductor) => Conduitable::Conductor(conductor.make_like()),
            Conduitable::Cable(cable) => Conduitable::Cable(cable.make_like()),
        }
    }
}

impl From<Conductor> for Conduitable {
    fn from(conductor: Conductor) -> Self {
        Conduitable::Conductor(conductor)
    }
}

impl From<Cable> for Conduitable {
    fn from(cable: Cable) -> Self {
        Conduitable::Cable(cable)
    }
}
