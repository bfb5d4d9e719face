// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Selection of standard overcurrent protective device (OCPD) ratings.

use crate::tables::STANDARD_RATINGS;
use crate::{Circuit, Load};

/// Above this rating, the next higher standard rating can't be used
/// (NEC 240.4(B)(3)).
const NEXT_HIGHER_RATING_LIMIT: u32 = 800;

/// Returns the standard rating for a device protecting the given ampacity.
///
/// When no standard rating matches the ampacity exactly, the next lower
/// rating is returned, unless `next_higher_allowed` is true and the next
/// higher rating doesn't exceed 800A, in which case the next higher rating is
/// returned.  Ampacities below the smallest rating get the smallest one, and
/// those above the largest rating get the largest one.
pub fn rating_for(ampacity: f64, next_higher_allowed: bool) -> u32 {
    for (index, &rating) in STANDARD_RATINGS.iter().enumerate().rev() {
        if f64::from(rating) == ampacity {
            return rating;
        }
        if f64::from(rating) < ampacity {
            return match STANDARD_RATINGS.get(index + 1) {
                Some(&higher) if higher <= NEXT_HIGHER_RATING_LIMIT && next_higher_allowed => {
                    higher
                }
                _ => rating,
            };
        }
    }
    STANDARD_RATINGS[0]
}

/// Selects the overcurrent device rating for a circuit.
///
/// Created with [`Circuit::ocpd`], or with [`Panel::ocpd`][crate::Panel::ocpd]
/// when addressing circuits by id.
pub struct OcpdSelector<'a, L>
where
    L: Load,
{
    circuit: &'a Circuit<L>,
}

impl<'a, L> OcpdSelector<'a, L>
where
    L: Load,
{
    pub(crate) fn new(circuit: &'a Circuit<L>) -> Self {
        Self { circuit }
    }

    /// Returns the ampacity the device is selected for.
    ///
    /// That is the load's maximum device rating when the load sets one, and
    /// the ampacity of the circuit conductors otherwise.
    pub fn target_ampacity(&self) -> f64 {
        let load = self.circuit.load();
        if load.max_ocpd_rating() > 0.0 {
            load.max_ocpd_rating()
        } else {
            load.min_conductor_ampacity()
        }
    }

    /// Returns the standard rating of the device.
    pub fn rating(&self) -> u32 {
        rating_for(
            self.target_ampacity(),
            self.circuit.load().next_higher_rating_allowed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicLoad, CircuitConfig, VoltageSystem};

    #[test]
    fn test_exact_match() {
        assert_eq!(rating_for(15.0, true), 15);
        assert_eq!(rating_for(15.0, false), 15);
        assert_eq!(rating_for(800.0, true), 800);
        assert_eq!(rating_for(6000.0, false), 6000);
    }

    #[test]
    fn test_next_higher_rating() {
        assert_eq!(rating_for(16.0, true), 20);
        assert_eq!(rating_for(16.0, false), 15);
        assert_eq!(rating_for(112.5, true), 125);
        assert_eq!(rating_for(112.5, false), 110);
        assert_eq!(rating_for(799.0, true), 800);
    }

    #[test]
    fn test_no_next_higher_above_800() {
        assert_eq!(rating_for(850.0, true), 800);
        assert_eq!(rating_for(850.0, false), 800);
        assert_eq!(rating_for(1100.0, true), 1000);
    }

    #[test]
    fn test_out_of_table() {
        assert_eq!(rating_for(7000.0, true), 6000);
        assert_eq!(rating_for(7000.0, false), 6000);
        assert_eq!(rating_for(10.0, true), 15);
        assert_eq!(rating_for(0.0, false), 15);
    }

    #[test]
    fn test_selector() {
        let load = BasicLoad::new(VoltageSystem::Ac120_240_1Ph3W, 42.0);
        let circuit = Circuit::new(load.clone(), CircuitConfig::default());
        assert_eq!(circuit.ocpd().target_ampacity(), 42.0);
        assert_eq!(circuit.ocpd().rating(), 45);

        let circuit = Circuit::new(
            load.clone().with_next_higher_rating_allowed(false),
            CircuitConfig::default(),
        );
        assert_eq!(circuit.ocpd().rating(), 40);

        let circuit = Circuit::new(load.with_max_ocpd_rating(62.0), CircuitConfig::default());
        assert_eq!(circuit.ocpd().target_ampacity(), 62.0);
        assert_eq!(circuit.ocpd().rating(), 70);
    }
}
