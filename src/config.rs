// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for a `Circuit`.

/// Configuration options for a `Circuit`.
#[derive(Clone, Default, Debug)]
pub struct CircuitConfig {
    /// Whether the neutral of a 3-phase, 4-wire system counts as a
    /// current-carrying conductor.
    ///
    /// This is the case when the major portion of the load is nonlinear, so
    /// that harmonic currents return on the neutral.  When `false`, the neutral
    /// only carries the unbalanced current of a balanced load and is treated as
    /// non-current-carrying.
    pub nonlinear_neutral: bool,
}
