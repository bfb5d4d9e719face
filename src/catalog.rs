// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the catalogs of standard designations used to describe
//! conductors and conduits: wire sizes, metals, insulation types, conduit
//! types and trade sizes.

use std::fmt::Display;

/// Represents a standard conductor size, in AWG or kcmil.
///
/// Variants are declared from the smallest to the largest size, so sizes can be
/// compared with the usual ordering operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    Awg14,
    Awg12,
    Awg10,
    Awg8,
    Awg6,
    Awg4,
    Awg3,
    Awg2,
    Awg1,
    Awg1_0,
    Awg2_0,
    Awg3_0,
    Awg4_0,
    Kcmil250,
    Kcmil300,
    Kcmil350,
    Kcmil400,
    Kcmil500,
    Kcmil600,
    Kcmil700,
    Kcmil750,
    Kcmil800,
    Kcmil900,
    Kcmil1000,
}

impl Size {
    /// All sizes, from the smallest to the largest.
    pub const ALL: [Size; 24] = [
        Size::Awg14,
        Size::Awg12,
        Size::Awg10,
        Size::Awg8,
        Size::Awg6,
        Size::Awg4,
        Size::Awg3,
        Size::Awg2,
        Size::Awg1,
        Size::Awg1_0,
        Size::Awg2_0,
        Size::Awg3_0,
        Size::Awg4_0,
        Size::Kcmil250,
        Size::Kcmil300,
        Size::Kcmil350,
        Size::Kcmil400,
        Size::Kcmil500,
        Size::Kcmil600,
        Size::Kcmil700,
        Size::Kcmil750,
        Size::Kcmil800,
        Size::Kcmil900,
        Size::Kcmil1000,
    ];
}

impl Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Size::Awg14 => write!(f, "AWG 14"),
            Size::Awg12 => write!(f, "AWG 12"),
            Size::Awg10 => write!(f, "AWG 10"),
            Size::Awg8 => write!(f, "AWG 8"),
            Size::Awg6 => write!(f, "AWG 6"),
            Size::Awg4 => write!(f, "AWG 4"),
            Size::Awg3 => write!(f, "AWG 3"),
            Size::Awg2 => write!(f, "AWG 2"),
            Size::Awg1 => write!(f, "AWG 1"),
            Size::Awg1_0 => write!(f, "AWG 1/0"),
            Size::Awg2_0 => write!(f, "AWG 2/0"),
            Size::Awg3_0 => write!(f, "AWG 3/0"),
            Size::Awg4_0 => write!(f, "AWG 4/0"),
            Size::Kcmil250 => write!(f, "250 KCMIL"),
            Size::Kcmil300 => write!(f, "300 KCMIL"),
            Size::Kcmil350 => write!(f, "350 KCMIL"),
            Size::Kcmil400 => write!(f, "400 KCMIL"),
            Size::Kcmil500 => write!(f, "500 KCMIL"),
            Size::Kcmil600 => write!(f, "600 KCMIL"),
            Size::Kcmil700 => write!(f, "700 KCMIL"),
            Size::Kcmil750 => write!(f, "750 KCMIL"),
            Size::Kcmil800 => write!(f, "800 KCMIL"),
            Size::Kcmil900 => write!(f, "900 KCMIL"),
            Size::Kcmil1000 => write!(f, "1000 KCMIL"),
        }
    }
}

/// Represents the metal of a conductor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metal {
    #[default]
    Copper,
    Aluminum,
}

impl Display for Metal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metal::Copper => write!(f, "CU"),
            Metal::Aluminum => write!(f, "AL"),
        }
    }
}

/// Represents the insulation type of a conductor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Insulation {
    Thw,
    #[default]
    Thhn,
    Thwn2,
    Xhhw,
    Xhhw2,
}

impl Insulation {
    pub const ALL: [Insulation; 5] = [
        Insulation::Thw,
        Insulation::Thhn,
        Insulation::Thwn2,
        Insulation::Xhhw,
        Insulation::Xhhw2,
    ];
}

impl Display for Insulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Insulation::Thw => write!(f, "THW"),
            Insulation::Thhn => write!(f, "THHN"),
            Insulation::Thwn2 => write!(f, "THWN-2"),
            Insulation::Xhhw => write!(f, "XHHW"),
            Insulation::Xhhw2 => write!(f, "XHHW-2"),
        }
    }
}

/// Represents the type of a conduit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConduitType {
    Emt,
    Ent,
    Fmc,
    Imc,
    Lfmc,
    Rmc,
    #[default]
    Pvc40,
    Pvc80,
}

impl ConduitType {
    pub const ALL: [ConduitType; 8] = [
        ConduitType::Emt,
        ConduitType::Ent,
        ConduitType::Fmc,
        ConduitType::Imc,
        ConduitType::Lfmc,
        ConduitType::Rmc,
        ConduitType::Pvc40,
        ConduitType::Pvc80,
    ];
}

impl Display for ConduitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConduitType::Emt => write!(f, "EMT"),
            ConduitType::Ent => write!(f, "ENT"),
            ConduitType::Fmc => write!(f, "FMC"),
            ConduitType::Imc => write!(f, "IMC"),
            ConduitType::Lfmc => write!(f, "LFMC"),
            ConduitType::Rmc => write!(f, "RMC"),
            ConduitType::Pvc40 => write!(f, "PVC-40"),
            ConduitType::Pvc80 => write!(f, "PVC-80"),
        }
    }
}

/// Represents the trade size of a conduit.
///
/// Variants are declared from the smallest to the largest size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TradeSize {
    T3_8,
    #[default]
    T1_2,
    T3_4,
    T1,
    T1_1_4,
    T1_1_2,
    T2,
    T2_1_2,
    T3,
    T3_1_2,
    T4,
    T5,
    T6,
}

impl TradeSize {
    /// All trade sizes, from the smallest to the largest.
    pub const ALL: [TradeSize; 13] = [
        TradeSize::T3_8,
        TradeSize::T1_2,
        TradeSize::T3_4,
        TradeSize::T1,
        TradeSize::T1_1_4,
        TradeSize::T1_1_2,
        TradeSize::T2,
        TradeSize::T2_1_2,
        TradeSize::T3,
        TradeSize::T3_1_2,
        TradeSize::T4,
        TradeSize::T5,
        TradeSize::T6,
    ];
}

impl Display for TradeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSize::T3_8 => write!(f, "3/8\""),
            TradeSize::T1_2 => write!(f, "1/2\""),
            TradeSize::T3_4 => write!(f, "3/4\""),
            TradeSize::T1 => write!(f, "1\""),
            TradeSize::T1_1_4 => write!(f, "1-1/4\""),
            TradeSize::T1_1_2 => write!(f, "1-1/2\""),
            TradeSize::T2 => write!(f, "2\""),
            TradeSize::T2_1_2 => write!(f, "2-1/2\""),
            TradeSize::T3 => write!(f, "3\""),
            TradeSize::T3_1_2 => write!(f, "3-1/2\""),
            TradeSize::T4 => write!(f, "4\""),
            TradeSize::T5 => write!(f, "5\""),
            TradeSize::T6 => write!(f, "6\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_ordering() {
        assert!(Size::Awg14 < Size::Awg12);
        assert!(Size::Awg1 < Size::Awg1_0);
        assert!(Size::Awg4_0 < Size::Kcmil250);
        assert!(Size::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(TradeSize::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Size::Awg2_0.to_string(), "AWG 2/0");
        assert_eq!(Size::Kcmil500.to_string(), "500 KCMIL");
        assert_eq!(Insulation::Thwn2.to_string(), "THWN-2");
        assert_eq!(ConduitType::Pvc80.to_string(), "PVC-80");
        assert_eq!(TradeSize::T1_1_4.to_string(), "1-1/4\"");
        assert_eq!(Metal::default().to_string(), "CU");
    }
}
