// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Approximate areas of insulated conductors, in square inches, indexed by
//! [`Size`][crate::catalog::Size] from AWG 14 to 1000 kcmil.

use crate::catalog::Insulation;

type Row = [f64; 24];

const THW: Row = [
    0.0209, 0.0260, 0.0333, 0.0556, 0.0726, 0.0973, 0.1134, 0.1333, 0.1901, 0.2223, 0.2624,
    0.3117, 0.3718, 0.4596, 0.5281, 0.5958, 0.6619, 0.7901, 0.9729, 1.1010, 1.1652, 1.2272,
    1.3561, 1.4784,
];

// THWN-2 shares the THHN dimensions.
const THHN: Row = [
    0.0097, 0.0133, 0.0211, 0.0366, 0.0507, 0.0824, 0.0973, 0.1158, 0.1562, 0.1855, 0.2223,
    0.2679, 0.3237, 0.3970, 0.4608, 0.5242, 0.5863, 0.7073, 0.8676, 0.9887, 1.0496, 1.1085,
    1.2311, 1.3478,
];

// XHHW-2 shares the XHHW dimensions.
const XHHW: Row = [
    0.0139, 0.0181, 0.0243, 0.0437, 0.0590, 0.0814, 0.0962, 0.1146, 0.1534, 0.1825, 0.2190,
    0.2642, 0.3197, 0.3904, 0.4536, 0.5166, 0.5782, 0.6984, 0.8709, 0.9923, 1.0532, 1.1122,
    1.2351, 1.3519,
];

pub(super) fn table(insulation: Insulation) -> &'static Row {
    match insulation {
        Insulation::Thw => &THW,
        Insulation::Thhn | Insulation::Thwn2 => &THHN,
        Insulation::Xhhw | Insulation::Xhhw2 => &XHHW,
    }
}
