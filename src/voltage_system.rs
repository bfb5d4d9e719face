// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Voltage systems and the conductor roles they require in each set.

use crate::entity::ConductorRole;
use crate::CircuitConfig;
use std::fmt::Display;

/// Represents the AC voltage system a load is fed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoltageSystem {
    Ac120_1Ph2W,
    Ac208_1Ph2W,
    Ac240_1Ph2W,
    Ac277_1Ph2W,
    Ac480_1Ph2W,
    Ac120_240_1Ph3W,
    Ac208_3Ph3W,
    Ac120_208_3Ph4W,
    Ac240_3Ph3W,
    Ac480_3Ph3W,
    Ac277_480_3Ph4W,
}

impl VoltageSystem {
    pub const ALL: [VoltageSystem; 11] = [
        VoltageSystem::Ac120_1Ph2W,
        VoltageSystem::Ac208_1Ph2W,
        VoltageSystem::Ac240_1Ph2W,
        VoltageSystem::Ac277_1Ph2W,
        VoltageSystem::Ac480_1Ph2W,
        VoltageSystem::Ac120_240_1Ph3W,
        VoltageSystem::Ac208_3Ph3W,
        VoltageSystem::Ac120_208_3Ph4W,
        VoltageSystem::Ac240_3Ph3W,
        VoltageSystem::Ac480_3Ph3W,
        VoltageSystem::Ac277_480_3Ph4W,
    ];

    /// Returns the nominal voltage of the system.  For systems with a neutral
    /// and more than one hot conductor, this is the line-to-line voltage.
    pub fn voltage(&self) -> f64 {
        match self {
            VoltageSystem::Ac120_1Ph2W => 120.0,
            VoltageSystem::Ac208_1Ph2W
            | VoltageSystem::Ac208_3Ph3W
            | VoltageSystem::Ac120_208_3Ph4W => 208.0,
            VoltageSystem::Ac240_1Ph2W
            | VoltageSystem::Ac120_240_1Ph3W
            | VoltageSystem::Ac240_3Ph3W => 240.0,
            VoltageSystem::Ac277_1Ph2W => 277.0,
            VoltageSystem::Ac480_1Ph2W
            | VoltageSystem::Ac480_3Ph3W
            | VoltageSystem::Ac277_480_3Ph4W => 480.0,
        }
    }

    pub fn phases(&self) -> u8 {
        match self {
            VoltageSystem::Ac208_3Ph3W
            | VoltageSystem::Ac120_208_3Ph4W
            | VoltageSystem::Ac240_3Ph3W
            | VoltageSystem::Ac480_3Ph3W
            | VoltageSystem::Ac277_480_3Ph4W => 3,
            _ => 1,
        }
    }

    pub fn wires(&self) -> u8 {
        match self {
            VoltageSystem::Ac120_1Ph2W
            | VoltageSystem::Ac208_1Ph2W
            | VoltageSystem::Ac240_1Ph2W
            | VoltageSystem::Ac277_1Ph2W
            | VoltageSystem::Ac480_1Ph2W => 2,
            VoltageSystem::Ac120_240_1Ph3W
            | VoltageSystem::Ac208_3Ph3W
            | VoltageSystem::Ac240_3Ph3W
            | VoltageSystem::Ac480_3Ph3W => 3,
            VoltageSystem::Ac120_208_3Ph4W | VoltageSystem::Ac277_480_3Ph4W => 4,
        }
    }

    /// Returns true if the load connects to the neutral of the system.
    pub fn has_neutral(&self) -> bool {
        matches!(
            self,
            VoltageSystem::Ac120_1Ph2W
                | VoltageSystem::Ac277_1Ph2W
                | VoltageSystem::Ac120_240_1Ph3W
                | VoltageSystem::Ac120_208_3Ph4W
                | VoltageSystem::Ac277_480_3Ph4W
        )
    }
}

impl Display for VoltageSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoltageSystem::Ac120_1Ph2W => write!(f, "120V 1Ø 2W"),
            VoltageSystem::Ac208_1Ph2W => write!(f, "208V 1Ø 2W"),
            VoltageSystem::Ac240_1Ph2W => write!(f, "240V 1Ø 2W"),
            VoltageSystem::Ac277_1Ph2W => write!(f, "277V 1Ø 2W"),
            VoltageSystem::Ac480_1Ph2W => write!(f, "480V 1Ø 2W"),
            VoltageSystem::Ac120_240_1Ph3W => write!(f, "120/240V 1Ø 3W"),
            VoltageSystem::Ac208_3Ph3W => write!(f, "208V 3Ø 3W"),
            VoltageSystem::Ac120_208_3Ph4W => write!(f, "120/208V 3Ø 4W"),
            VoltageSystem::Ac240_3Ph3W => write!(f, "240V 3Ø 3W"),
            VoltageSystem::Ac480_3Ph3W => write!(f, "480V 3Ø 3W"),
            VoltageSystem::Ac277_480_3Ph4W => write!(f, "277/480V 3Ø 4W"),
        }
    }
}

/// The conductors that make up one set of a circuit fed from a given voltage
/// system.
///
/// Every set has a phase A hot conductor and a ground.  Phase B, phase C and
/// the neutral depend on the system:
///
/// | System                         | Phase B | Phase C | Neutral                 |
/// |--------------------------------|---------|---------|-------------------------|
/// | 1Ø 2W, line to neutral         | -       | -       | current-carrying        |
/// | 1Ø 2W, line to line            | yes     | -       | -                       |
/// | 1Ø 3W                          | yes     | -       | current-carrying        |
/// | 3Ø 3W                          | yes     | yes     | -                       |
/// | 3Ø 4W                          | yes     | yes     | per `nonlinear_neutral` |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetLayout {
    phase_b: bool,
    phase_c: bool,
    neutral: Option<ConductorRole>,
}

impl SetLayout {
    pub fn new(system: VoltageSystem, config: &CircuitConfig) -> Self {
        let three_phase = system.phases() == 3;
        let neutral = match (system.has_neutral(), three_phase) {
            (false, _) => None,
            (true, false) => Some(ConductorRole::NeutralCurrentCarrying),
            (true, true) if config.nonlinear_neutral => Some(ConductorRole::NeutralCurrentCarrying),
            (true, true) => Some(ConductorRole::NeutralNonCurrentCarrying),
        };
        let phase_b = three_phase || system.wires() == 3 || !system.has_neutral();

        Self {
            phase_b,
            phase_c: three_phase,
            neutral,
        }
    }

    pub fn has_phase_b(&self) -> bool {
        self.phase_b
    }

    pub fn has_phase_c(&self) -> bool {
        self.phase_c
    }

    /// Returns the role of the neutral, if the set has one.
    pub fn neutral(&self) -> Option<ConductorRole> {
        self.neutral
    }

    pub fn conductors_per_set(&self) -> usize {
        2 + usize::from(self.phase_b) + usize::from(self.phase_c) + usize::from(self.neutral.is_some())
    }

    /// Returns the roles of one set, in order: phase A, phase B, phase C, the
    /// neutral and the ground.
    pub fn roles(&self) -> Vec<ConductorRole> {
        let mut roles = vec![ConductorRole::Hot];
        if self.phase_b {
            roles.push(ConductorRole::Hot);
        }
        if self.phase_c {
            roles.push(ConductorRole::Hot);
        }
        roles.extend(self.neutral);
        roles.push(ConductorRole::Ground);
        roles
    }
}
