// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Conduits, and the fill calculations for them.

use super::{Members, Raceway};
use crate::catalog::{ConduitType, TradeSize};
use crate::tables;

/// Raceways less than this distance above a rooftop, in inches, get a
/// temperature adder (NEC 310.15(B)(2)).
const ROOFTOP_DISTANCE_LIMIT: f64 = 7.0 / 8.0;

/// Temperature adder for raceways close to a rooftop, in °C.
const ROOFTOP_TEMPERATURE_ADDER: f64 = 33.0;

/// A conduit of a given type and trade size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conduit {
    conduit_type: ConduitType,
    trade_size: TradeSize,
    nipple: bool,
    rooftop_distance: Option<f64>,
    members: Members,
}

impl Conduit {
    pub fn new(conduit_type: ConduitType, trade_size: TradeSize) -> Self {
        Self {
            conduit_type,
            trade_size,
            ..Default::default()
        }
    }

    pub fn conduit_type(&self) -> ConduitType {
        self.conduit_type
    }

    pub fn set_conduit_type(&mut self, conduit_type: ConduitType) {
        self.conduit_type = conduit_type;
    }

    pub fn trade_size(&self) -> TradeSize {
        self.trade_size
    }

    pub fn set_trade_size(&mut self, trade_size: TradeSize) {
        self.trade_size = trade_size;
    }

    /// Returns true if the conduit is a nipple, i.e. no longer than 24".
    pub fn is_nipple(&self) -> bool {
        self.nipple
    }

    pub fn set_nipple(&mut self, nipple: bool) {
        self.nipple = nipple;
    }

    /// Returns the distance of the conduit above a rooftop, in inches, or
    /// `None` if it doesn't run over a rooftop.
    pub fn rooftop_distance(&self) -> Option<f64> {
        self.rooftop_distance
    }

    pub fn set_rooftop_distance(&mut self, distance: Option<f64>) {
        self.rooftop_distance = distance;
    }

    pub(crate) fn members_mut(&mut self) -> &mut Members {
        &mut self.members
    }

    /// Returns the internal area of the conduit, in square inches, or `None`
    /// if the trade size is not available for the conduit type.
    pub fn area(&self) -> Option<f64> {
        tables::conduit_area(self.conduit_type, self.trade_size)
    }

    /// Returns the total area of the conduit's contents, in square inches.
    pub fn fill_area(&self) -> f64 {
        self.members.fill_area()
    }

    /// Returns the percentage of the conduit's area occupied by its contents.
    ///
    /// Returns zero if the trade size is not available for the conduit type.
    pub fn fill_percentage(&self) -> f64 {
        match self.area() {
            Some(area) => 100.0 * self.fill_area() / area,
            None => 0.0,
        }
    }

    /// Returns the maximum fill percentage allowed for the conduit's contents
    /// (NEC Chapter 9, Table 1 and Note 4).
    pub fn allowed_fill_percentage(&self) -> f64 {
        if self.nipple {
            return 60.0;
        }
        match self.filling_count() {
            0 | 1 => 53.0,
            2 => 31.0,
            _ => 40.0,
        }
    }

    /// Returns true if the trade size exists for the conduit type and the fill
    /// doesn't exceed the allowed percentage.
    pub fn is_fill_compliant(&self) -> bool {
        self.area().is_some() && self.fill_percentage() <= self.allowed_fill_percentage()
    }

    /// Returns the temperature adder, in °C, for the conduit's distance above
    /// a rooftop.
    pub fn rooftop_temperature_adder(&self) -> f64 {
        match self.rooftop_distance {
            Some(distance) if distance < ROOFTOP_DISTANCE_LIMIT => ROOFTOP_TEMPERATURE_ADDER,
            _ => 0.0,
        }
    }
}

impl Raceway for Conduit {
    fn members(&self) -> &Members {
        &self.members
    }
}
