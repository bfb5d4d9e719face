// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Static lookup data from the NEC: conduit internal areas, conductor
//! cross-sectional areas and the standard overcurrent device ratings.
//!
//! All tables are compiled in and never change at runtime.

mod conductor_areas;
mod conduit_areas;

use crate::catalog::{ConduitType, Insulation, Size, TradeSize};

/// Standard ampere ratings for fuses and inverse time circuit breakers, in
/// ascending order (NEC 240.6(A)).
///
/// The last entry is the top of the table; no standard rating covers anything
/// above it.
pub const STANDARD_RATINGS: &[u32] = &[
    15, 20, 25, 30, 35, 40, 45, 50, 60, 70, 80, 90, 100, 110, 125, 150, 175, 200, 225, 250, 300,
    350, 400, 450, 500, 600, 700, 800, 1000, 1200, 1600, 2000, 2500, 3000, 4000, 5000, 6000,
];

/// Returns the internal cross-sectional area, in square inches, of a conduit of
/// the given type and trade size (NEC Chapter 9, Table 4).
///
/// Returns `None` when the trade size is not manufactured for that type.
pub fn conduit_area(conduit_type: ConduitType, trade_size: TradeSize) -> Option<f64> {
    conduit_areas::table(conduit_type)[trade_size as usize]
}

/// Returns the approximate cross-sectional area, in square inches, of an
/// insulated conductor (NEC Chapter 9, Table 5).
pub fn conductor_area(insulation: Insulation, size: Size) -> f64 {
    conductor_areas::table(insulation)[size as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ratings_are_ascending() {
        assert!(STANDARD_RATINGS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(STANDARD_RATINGS.first(), Some(&15));
        assert_eq!(STANDARD_RATINGS.last(), Some(&6000));
    }

    #[test]
    fn test_conduit_area() {
        assert_eq!(conduit_area(ConduitType::Emt, TradeSize::T1), Some(0.864));
        assert_eq!(conduit_area(ConduitType::Pvc40, TradeSize::T2), Some(3.291));
        assert_eq!(conduit_area(ConduitType::Rmc, TradeSize::T6), Some(29.158));
        assert_eq!(conduit_area(ConduitType::Emt, TradeSize::T6), None);
        assert_eq!(conduit_area(ConduitType::Imc, TradeSize::T3_8), None);
    }

    #[test]
    fn test_conduit_areas_grow_with_trade_size() {
        for conduit_type in ConduitType::ALL {
            let areas = TradeSize::ALL
                .iter()
                .filter_map(|t| conduit_area(conduit_type, *t))
                .collect::<Vec<_>>();
            assert!(!areas.is_empty(), "{conduit_type}");
            assert!(areas.windows(2).all(|w| w[0] < w[1]), "{conduit_type}");
        }
    }

    #[test]
    fn test_conductor_area() {
        assert_eq!(conductor_area(Insulation::Thhn, Size::Awg12), 0.0133);
        assert_eq!(conductor_area(Insulation::Thw, Size::Kcmil500), 0.7901);
        assert_eq!(
            conductor_area(Insulation::Xhhw, Size::Awg4_0),
            conductor_area(Insulation::Xhhw2, Size::Awg4_0)
        );
        for insulation in Insulation::ALL {
            assert!(Size::ALL
                .windows(2)
                .all(|w| conductor_area(insulation, w[0]) < conductor_area(insulation, w[1])));
        }
    }
}
