// ABOUTME: Closed enumeration of leak (technique-flaw) flags emitted by the scorers
// ABOUTME: Tokens are the bridge between scoring output and drill prescription
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named technique flaw inferred from scoring-component thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeakFlag {
    /// Torso fails to amplify pelvis momentum
    #[serde(rename = "flag_weak_transfer")]
    WeakTransfer,
    /// Arms fail to amplify torso momentum
    #[serde(rename = "flag_arm_drag")]
    ArmDrag,
    /// Arms generate speed on their own, torso bypassed
    #[serde(rename = "flag_torso_bypass")]
    TorsoBypass,
    /// Pelvis and torso fire together with no separation in time
    #[serde(rename = "flag_simultaneous")]
    Simultaneous,
    /// Torso waits too long after the pelvis peaks
    #[serde(rename = "flag_over_separated")]
    OverSeparated,
    /// Lower half fires late relative to forward move
    #[serde(rename = "flag_late_legs")]
    LateLegs,
    /// Forward drift finishes too early
    #[serde(rename = "flag_early_drift")]
    EarlyDrift,
    /// Segments do not decelerate before contact
    #[serde(rename = "flag_no_brake")]
    NoBrake,
    /// Kinetic chain fires badly out of order
    #[serde(rename = "flag_no_sequence")]
    NoSequence,
    /// One pair of segments fires out of order
    #[serde(rename = "flag_partial_sequence")]
    PartialSequence,
    /// Little of the body's energy reaches the bat at contact
    #[serde(rename = "flag_energy_leak")]
    EnergyLeak,
    /// Small torso/pelvis separation
    #[serde(rename = "flag_low_separation")]
    LowSeparation,
    /// Separation beyond the controllable window
    #[serde(rename = "flag_over_rotation")]
    OverRotation,
    /// Barrel path leaves the hands early and varies swing to swing
    #[serde(rename = "flag_casting")]
    Casting,
    /// Exit velocity varies widely between swings
    #[serde(rename = "flag_inconsistent_contact")]
    InconsistentContact,
    /// Frequent topped, popped or weak contact
    #[serde(rename = "flag_mishits")]
    Mishits,
}

impl LeakFlag {
    /// Every flag token
    pub const ALL: [Self; 16] = [
        Self::WeakTransfer,
        Self::ArmDrag,
        Self::TorsoBypass,
        Self::Simultaneous,
        Self::OverSeparated,
        Self::LateLegs,
        Self::EarlyDrift,
        Self::NoBrake,
        Self::NoSequence,
        Self::PartialSequence,
        Self::EnergyLeak,
        Self::LowSeparation,
        Self::OverRotation,
        Self::Casting,
        Self::InconsistentContact,
        Self::Mishits,
    ];

    /// Wire token for this flag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeakTransfer => "flag_weak_transfer",
            Self::ArmDrag => "flag_arm_drag",
            Self::TorsoBypass => "flag_torso_bypass",
            Self::Simultaneous => "flag_simultaneous",
            Self::OverSeparated => "flag_over_separated",
            Self::LateLegs => "flag_late_legs",
            Self::EarlyDrift => "flag_early_drift",
            Self::NoBrake => "flag_no_brake",
            Self::NoSequence => "flag_no_sequence",
            Self::PartialSequence => "flag_partial_sequence",
            Self::EnergyLeak => "flag_energy_leak",
            Self::LowSeparation => "flag_low_separation",
            Self::OverRotation => "flag_over_rotation",
            Self::Casting => "flag_casting",
            Self::InconsistentContact => "flag_inconsistent_contact",
            Self::Mishits => "flag_mishits",
        }
    }

    /// Coach-facing name of the leak
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WeakTransfer => "Weak transfer",
            Self::ArmDrag => "Arm drag",
            Self::TorsoBypass => "Torso bypass",
            Self::Simultaneous => "Simultaneous rotation",
            Self::OverSeparated => "Over-separated",
            Self::LateLegs => "Late legs",
            Self::EarlyDrift => "Early drift",
            Self::NoBrake => "No brake",
            Self::NoSequence => "No sequence",
            Self::PartialSequence => "Sequence break",
            Self::EnergyLeak => "Energy leak",
            Self::LowSeparation => "Low separation",
            Self::OverRotation => "Over-rotation",
            Self::Casting => "Casting",
            Self::InconsistentContact => "Inconsistent contact",
            Self::Mishits => "Mishits",
        }
    }
}

impl fmt::Display for LeakFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeakFlag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let normalized = token.strip_prefix("flag_").unwrap_or(token);
        Self::ALL
            .into_iter()
            .find(|flag| flag.as_str().trim_start_matches("flag_") == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown leak flag: '{token}'")))
    }
}
