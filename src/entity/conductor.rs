// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Insulated conductors.

use super::{ConductorRole, EntityId};
use crate::catalog::{Insulation, Metal, Size};
use crate::tables;

/// A single insulated conductor.
#[derive(Clone, Debug, PartialEq)]
pub struct Conductor {
    id: EntityId,
    role: ConductorRole,
    size: Size,
    metal: Metal,
    insulation: Insulation,
}

impl Conductor {
    /// Creates a new hot conductor.
    pub fn new(size: Size, metal: Metal, insulation: Insulation) -> Self {
        Self {
            id: EntityId::next(),
            role: ConductorRole::Hot,
            size,
            metal,
            insulation,
        }
    }

    /// Returns the conductor with the given role.
    pub fn with_role(mut self, role: ConductorRole) -> Self {
        self.role = role;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn role(&self) -> ConductorRole {
        self.role
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn metal(&self) -> Metal {
        self.metal
    }

    pub fn insulation(&self) -> Insulation {
        self.insulation
    }

    pub fn is_current_carrying(&self) -> bool {
        self.role.is_current_carrying()
    }

    /// Returns the area of the conductor including its insulation, in square
    /// inches.
    pub fn area(&self) -> f64 {
        tables::conductor_area(self.insulation, self.size)
    }

    /// Returns a new conductor with the same attributes as this one, and a
    /// fresh id.
    pub fn make_like(&self) -> Self {
        Self {
            id: EntityId::next(),
            ..self.clone()
        }
    }

    pub(crate) fn set_role(&mut self, role: ConductorRole) {
        self.role = role;
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl Default for Conductor {
    fn default() -> Self {
        Self::new(Size::Awg12, Metal::Copper, Insulation::Thhn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_like() {
        let template = Conductor::new(Size::Kcmil250, Metal::Aluminum, Insulation::Xhhw)
            .with_role(ConductorRole::NeutralCurrentCarrying);
        let copy = template.make_like();

        assert_ne!(copy.id(), template.id());
        assert_eq!(copy.role(), template.role());
        assert_eq!(copy.size(), template.size());
        assert_eq!(copy.metal(), Metal::Aluminum);
        assert_eq!(copy.insulation(), Insulation::Xhhw);

        let mut copy = copy;
        copy.set_size(Size::Kcmil300);
        assert_eq!(template.size(), Size::Kcmil250);
    }

    #[test]
    fn test_clone_keeps_identity() {
        let conductor = Conductor::default();
        assert_eq!(conductor.clone(), conductor);
        assert_eq!(conductor.role(), ConductorRole::Hot);
        assert_eq!(conductor.area(), 0.0133);
    }
}
