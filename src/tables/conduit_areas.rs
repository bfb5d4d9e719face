// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Conduit internal areas (100%), in square inches, indexed by
//! [`TradeSize`][crate::catalog::TradeSize] from 3/8" to 6".

use crate::catalog::ConduitType;

type Row = [Option<f64>; 13];

const EMT: Row = [
    None,
    Some(0.304),
    Some(0.533),
    Some(0.864),
    Some(1.496),
    Some(2.036),
    Some(3.356),
    Some(5.858),
    Some(8.846),
    Some(11.545),
    Some(14.753),
    None,
    None,
];

const ENT: Row = [
    None,
    Some(0.285),
    Some(0.508),
    Some(0.832),
    Some(1.453),
    Some(1.986),
    Some(3.291),
    None,
    None,
    None,
    None,
    None,
    None,
];

const FMC: Row = [
    Some(0.116),
    Some(0.317),
    Some(0.533),
    Some(0.817),
    Some(1.277),
    Some(1.858),
    Some(3.269),
    Some(4.909),
    Some(7.069),
    Some(9.621),
    Some(12.566),
    None,
    None,
];

const IMC: Row = [
    None,
    Some(0.342),
    Some(0.586),
    Some(0.959),
    Some(1.647),
    Some(2.225),
    Some(3.630),
    Some(5.135),
    Some(7.922),
    Some(10.584),
    Some(13.631),
    None,
    None,
];

const LFMC: Row = [
    Some(0.192),
    Some(0.314),
    Some(0.541),
    Some(0.873),
    Some(1.277),
    Some(1.858),
    Some(3.269),
    Some(4.909),
    Some(7.069),
    Some(9.621),
    Some(12.566),
    None,
    None,
];

const RMC: Row = [
    None,
    Some(0.314),
    Some(0.549),
    Some(0.887),
    Some(1.526),
    Some(2.071),
    Some(3.408),
    Some(4.866),
    Some(7.499),
    Some(10.010),
    Some(12.882),
    Some(20.212),
    Some(29.158),
];

const PVC40: Row = [
    None,
    Some(0.285),
    Some(0.508),
    Some(0.832),
    Some(1.453),
    Some(1.986),
    Some(3.291),
    Some(4.695),
    Some(7.268),
    Some(9.737),
    Some(12.554),
    Some(19.761),
    Some(28.567),
];

const PVC80: Row = [
    None,
    Some(0.217),
    Some(0.409),
    Some(0.688),
    Some(1.237),
    Some(1.711),
    Some(2.874),
    Some(4.119),
    Some(6.442),
    Some(8.688),
    Some(11.258),
    Some(17.855),
    Some(25.598),
];

pub(super) fn table(conduit_type: ConduitType) -> &'static Row {
    match conduit_type {
        ConduitType::Emt => &EMT,
        ConduitType::Ent => &ENT,
        ConduitType::Fmc => &FMC,
        ConduitType::Imc => &IMC,
        ConduitType::Lfmc => &LFMC,
        ConduitType::Rmc => &RMC,
        ConduitType::Pvc40 => &PVC40,
        ConduitType::Pvc80 => &PVC80,
    }
}
