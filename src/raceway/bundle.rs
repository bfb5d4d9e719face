// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Bundles of conductors and cables run together without a raceway.

use super::{Members, Raceway};

/// A group of conductors or cables bundled together over a given distance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bundle {
    distance: f64,
    members: Members,
}

impl Bundle {
    /// Creates an empty bundle with the given length, in feet.
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            members: Members::default(),
        }
    }

    /// Returns the length over which the contents are bundled, in feet.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    pub(crate) fn members_mut(&mut self) -> &mut Members {
        &mut self.members
    }
}

impl Raceway for Bundle {
    fn members(&self) -> &Members {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Insulation, Metal, Size};
    use crate::entity::{Conductor, ConductorRole, Conduitable};

    #[test]
    fn test_bundle() {
        let mut bundle = Bundle::new(10.0);
        assert!(bundle.is_empty());

        let hot = Conduitable::from(Conductor::new(Size::Awg8, Metal::Copper, Insulation::Thw));
        let neutral = Conduitable::from(
            Conductor::new(Size::Awg8, Metal::Copper, Insulation::Thw)
                .with_role(ConductorRole::NeutralNonCurrentCarrying),
        );
        bundle.members_mut().insert_all([&hot, &neutral]);

        assert_eq!(bundle.distance(), 10.0);
        assert_eq!(bundle.filling_count(), 2);
        assert_eq!(bundle.current_carrying_count(), 1);

        bundle.members_mut().remove_all([&hot, &neutral]);
        assert!(bundle.is_empty());
    }
}
