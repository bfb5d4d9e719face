// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the `Load` trait, through which a circuit reads the
//! requirements of the load it feeds, and a plain-data implementation of it.

use crate::VoltageSystem;

/**
This trait needs to be implemented by the type that represents the load fed by
a [`Circuit`][crate::Circuit].

Circuits read these values every time they re-derive their conductor sets, so
changes to a load are picked up the next time the circuit is mutated.  Computing
the load current from its power, voltage and power factor is up to the
implementor.

<details>
<summary>Example implementation for a motor load:</summary>

```ignore
impl conduit_topology::Load for Motor {
    fn voltage_system(&self) -> conduit_topology::VoltageSystem {
        conduit_topology::VoltageSystem::Ac480_3Ph3W
    }

    fn min_conductor_ampacity(&self) -> f64 {
        1.25 * self.full_load_current
    }

    fn max_ocpd_rating(&self) -> f64 {
        2.5 * self.full_load_current
    }

    fn next_higher_rating_allowed(&self) -> bool {
        true
    }
}
```

</details>
*/
pub trait Load {
    /// Returns the voltage system the load is fed from.
    fn voltage_system(&self) -> VoltageSystem;
    /// Returns the minimum ampacity the circuit conductors must have.
    fn min_conductor_ampacity(&self) -> f64;
    /// Returns the maximum rating of the overcurrent device protecting the
    /// load, or zero when the load imposes no such limit.
    fn max_ocpd_rating(&self) -> f64;
    /// Returns true if the next higher standard rating may be used when no
    /// standard rating matches exactly.
    fn next_higher_rating_allowed(&self) -> bool;

    /// Returns true if the load reports quantities a circuit can be sized
    /// from.
    fn is_valid(&self) -> bool {
        let ampacity = self.min_conductor_ampacity();
        let rating = self.max_ocpd_rating();
        ampacity.is_finite() && ampacity >= 0.0 && rating.is_finite() && rating >= 0.0
    }
}

/// A load described directly by its sizing quantities.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicLoad {
    voltage_system: VoltageSystem,
    min_conductor_ampacity: f64,
    max_ocpd_rating: f64,
    next_higher_rating_allowed: bool,
}

impl BasicLoad {
    /// Creates a load without an overcurrent device limit, that allows the
    /// next higher standard rating.
    pub fn new(voltage_system: VoltageSystem, min_conductor_ampacity: f64) -> Self {
        Self {
            voltage_system,
            min_conductor_ampacity,
            max_ocpd_rating: 0.0,
            next_higher_rating_allowed: true,
        }
    }

    pub fn with_max_ocpd_rating(mut self, rating: f64) -> Self {
        self.max_ocpd_rating = rating;
        self
    }

    pub fn with_next_higher_rating_allowed(mut self, allowed: bool) -> Self {
        self.next_higher_rating_allowed = allowed;
        self
    }

    pub fn set_voltage_system(&mut self, voltage_system: VoltageSystem) {
        self.voltage_system = voltage_system;
    }

    pub fn set_min_conductor_ampacity(&mut self, ampacity: f64) {
        self.min_conductor_ampacity = ampacity;
    }
}

impl Load for BasicLoad {
    fn voltage_system(&self) -> VoltageSystem {
        self.voltage_system
    }

    fn min_conductor_ampacity(&self) -> f64 {
        self.min_conductor_ampacity
    }

    fn max_ocpd_rating(&self) -> f64 {
        self.max_ocpd_rating
    }

    fn next_higher_rating_allowed(&self) -> bool {
        self.next_higher_rating_allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        let load = BasicLoad::new(VoltageSystem::Ac120_1Ph2W, 16.0);
        assert!(load.is_valid());
        assert!(!BasicLoad::new(VoltageSystem::Ac120_1Ph2W, -1.0).is_valid());
        assert!(!BasicLoad::new(VoltageSystem::Ac120_1Ph2W, f64::NAN).is_valid());
        assert!(!load.clone().with_max_ocpd_rating(f64::INFINITY).is_valid());
        assert!(load.with_max_ocpd_rating(40.0).is_valid());
    }
}
