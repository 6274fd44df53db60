// ABOUTME: Drill catalog and motor-profile rules for corrective drill prescription
// ABOUTME: Declares which leaks each drill addresses and how well it fits each profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Prescription Configuration
//!
//! The catalog is plain data: a drill lists the leak flags that trigger it and a
//! fit level per motor profile. A profile's hard restrictions are the union of
//! its explicit restriction list and every drill whose fit for it is `no`.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use swinglab_core::models::{LeakFlag, MotorProfile};

/// How suitable a drill is for a motor profile, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitLevel {
    /// Core drill for this profile
    Critical,
    /// Good fit
    Yes,
    /// Usable, not targeted
    Maybe,
    /// Usable with coaching oversight
    Careful,
    /// Never prescribe
    No,
}

impl FitLevel {
    /// Whether the drill is withheld for this fit
    #[must_use]
    pub const fn is_restricted(self) -> bool {
        matches!(self, Self::No)
    }
}

/// Fit of a drill for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFit {
    /// Fit level
    pub level: FitLevel,
    /// Coach-facing reason
    pub rationale: String,
}

/// One corrective drill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillDefinition {
    /// Stable identifier
    pub slug: String,
    /// Display name
    pub name: String,
    /// Drill family
    pub category: String,
    /// Leak flags this drill addresses
    pub triggers: Vec<LeakFlag>,
    /// Fit per motor profile; absent profiles are treated as `maybe`
    #[serde(default)]
    pub fits: BTreeMap<MotorProfile, ProfileFit>,
    /// Situations in which the drill should not be used
    #[serde(default)]
    pub contraindications: Vec<String>,
}

impl DrillDefinition {
    fn new(slug: &str, name: &str, category: &str, triggers: &[LeakFlag]) -> Self {
        Self {
            slug: slug.to_owned(),
            name: name.to_owned(),
            category: category.to_owned(),
            triggers: triggers.to_vec(),
            fits: BTreeMap::new(),
            contraindications: Vec::new(),
        }
    }

    fn fit(mut self, profile: MotorProfile, level: FitLevel, rationale: &str) -> Self {
        self.fits.insert(
            profile,
            ProfileFit {
                level,
                rationale: rationale.to_owned(),
            },
        );
        self
    }

    fn contraindication(mut self, note: &str) -> Self {
        self.contraindications.push(note.to_owned());
        self
    }

    /// Fit level for `profile`
    #[must_use]
    pub fn fit_for(&self, profile: MotorProfile) -> FitLevel {
        self.fits
            .get(&profile)
            .map_or(FitLevel::Maybe, |fit| fit.level)
    }

    /// Whether this drill addresses `flag`
    #[must_use]
    pub fn is_triggered_by(&self, flag: LeakFlag) -> bool {
        self.triggers.contains(&flag)
    }
}

/// Drill catalog, profile restrictions and output cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionConfig {
    /// Drills in catalog order
    pub catalog: Vec<DrillDefinition>,
    /// Explicit per-profile restriction lists (slugs)
    pub restrictions: BTreeMap<MotorProfile, Vec<String>>,
    /// Maximum drills returned by one prescription
    pub max_drills: usize,
}

impl PrescriptionConfig {
    /// Look up a drill by slug
    #[must_use]
    pub fn drill(&self, slug: &str) -> Option<&DrillDefinition> {
        self.catalog.iter().find(|drill| drill.slug == slug)
    }

    /// Slugs never prescribed to `profile`
    #[must_use]
    pub fn restricted_slugs(&self, profile: MotorProfile) -> HashSet<&str> {
        let explicit = self
            .restrictions
            .get(&profile)
            .into_iter()
            .flatten()
            .map(String::as_str);
        let by_fit = self
            .catalog
            .iter()
            .filter(|drill| drill.fit_for(profile).is_restricted())
            .map(|drill| drill.slug.as_str());
        explicit.chain(by_fit).collect()
    }

    /// Slugs must be unique, restrictions must name catalog drills and every drill needs a trigger
    ///
    /// # Errors
    /// Returns `ConfigError` describing the first inconsistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_drills == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "prescription.max_drills must be at least 1",
            ));
        }
        if self.catalog.is_empty() {
            return Err(ConfigError::MissingField("prescription.catalog"));
        }
        let mut seen = HashSet::new();
        for drill in &self.catalog {
            if !seen.insert(drill.slug.as_str()) {
                return Err(ConfigError::Catalog(format!(
                    "duplicate drill slug '{}'",
                    drill.slug
                )));
            }
            if drill.triggers.is_empty() {
                return Err(ConfigError::Catalog(format!(
                    "drill '{}' has no trigger flags",
                    drill.slug
                )));
            }
        }
        for (profile, slugs) in &self.restrictions {
            if let Some(unknown) = slugs.iter().find(|slug| !seen.contains(slug.as_str())) {
                return Err(ConfigError::Catalog(format!(
                    "restriction for {profile} names unknown drill '{unknown}'"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PrescriptionConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            restrictions: BTreeMap::from([
                (
                    MotorProfile::Whipper,
                    vec![
                        "constraint-rope-drill".to_owned(),
                        "heavy-bat-overload".to_owned(),
                    ],
                ),
                (
                    MotorProfile::Slingshotter,
                    vec!["connection-ball-drill".to_owned()],
                ),
                (MotorProfile::Titan, vec!["step-through-drill".to_owned()]),
                (MotorProfile::Spinner, vec!["stop-rotation-drill".to_owned()]),
            ]),
            max_drills: 4,
        }
    }
}

fn default_catalog() -> Vec<DrillDefinition> {
    use FitLevel::{Careful, Critical, Maybe, No, Yes};
    use LeakFlag::{
        ArmDrag, Casting, EarlyDrift, EnergyLeak, InconsistentContact, LateLegs, LowSeparation,
        Mishits, NoBrake, NoSequence, OverRotation, OverSeparated, PartialSequence, Simultaneous,
        TorsoBypass, WeakTransfer,
    };
    use MotorProfile::{Slingshotter, Spinner, Titan, Whipper};

    vec![
        DrillDefinition::new(
            "constraint-rope-drill",
            "Constraint Rope",
            "Bat path",
            &[Casting, ArmDrag],
        )
        .fit(Spinner, Yes, "Keeps the barrel tight to a rotational turn")
        .fit(Whipper, No, "Fights the lag a whipper depends on")
        .fit(Slingshotter, Maybe, "Useful once separation is controlled")
        .fit(Titan, Yes, "Shortens a strength-driven path"),
        DrillDefinition::new(
            "step-through-drill",
            "Step-Through",
            "Lower half",
            &[LateLegs, WeakTransfer, Simultaneous],
        )
        .fit(Spinner, Yes, "Adds a linear move ahead of rotation")
        .fit(Whipper, Maybe, "Helps if the lower half stalls")
        .fit(Slingshotter, Critical, "Builds the stretch the profile relies on")
        .fit(Titan, No, "Momentum drift overloads a ground-force hitter"),
        DrillDefinition::new(
            "hip-lead-drill",
            "Hip Lead",
            "Sequencing",
            &[NoSequence, PartialSequence, Simultaneous],
        )
        .fit(Spinner, Critical, "Pelvis must start the turn")
        .fit(Whipper, Yes, "Creates the lag the hands release")
        .fit(Slingshotter, Yes, "Sets the stretch order")
        .fit(Titan, Yes, "Organises force from the ground up"),
        DrillDefinition::new(
            "separation-hold-drill",
            "Separation Hold",
            "Sequencing",
            &[LowSeparation, Simultaneous],
        )
        .fit(Spinner, Yes, "Teaches torso to wait on the pelvis")
        .fit(Whipper, Yes, "Loads the trunk before the hands fire")
        .fit(Slingshotter, Careful, "Already stretches; cap the hold time")
        .fit(Titan, Yes, "Adds elastic load to raw strength"),
        DrillDefinition::new(
            "posture-wall-drill",
            "Posture Wall",
            "Posture",
            &[OverRotation, OverSeparated],
        )
        .fit(Spinner, Yes, "Keeps the spine angle through the turn")
        .fit(Whipper, Maybe, "Secondary for hand-dominant swings")
        .fit(Slingshotter, Critical, "Reins in excessive stretch")
        .fit(Titan, Maybe, "Secondary for strength hitters"),
        DrillDefinition::new(
            "front-leg-brace-drill",
            "Front-Leg Brace",
            "Lower half",
            &[NoBrake, EnergyLeak, EarlyDrift],
        )
        .fit(Spinner, Critical, "A firm front side stops the pelvis")
        .fit(Whipper, Yes, "Transfers lower-half energy into the hands")
        .fit(Slingshotter, Yes, "Stops the linear move at landing")
        .fit(Titan, Critical, "Converts ground force into rotation"),
        DrillDefinition::new(
            "stop-rotation-drill",
            "Stop Rotation",
            "Deceleration",
            &[NoBrake, TorsoBypass],
        )
        .fit(Spinner, No, "Stopping rotation breaks a rotational engine")
        .fit(Whipper, Yes, "Braking the torso speeds the release")
        .fit(Slingshotter, Maybe, "Helps when the trunk keeps spinning")
        .fit(Titan, Yes, "Teaches segment braking"),
        DrillDefinition::new(
            "connection-ball-drill",
            "Connection Ball",
            "Connection",
            &[TorsoBypass, Casting, ArmDrag],
        )
        .fit(Spinner, Yes, "Keeps the arms tied to the turn")
        .fit(Whipper, Critical, "Stops the hands running away from the body")
        .fit(Slingshotter, No, "Pins the arms the stretch needs free")
        .fit(Titan, Yes, "Links arms to the trunk"),
        DrillDefinition::new(
            "heavy-bat-overload",
            "Heavy Bat Overload",
            "Strength",
            &[WeakTransfer, EnergyLeak],
        )
        .fit(Spinner, Maybe, "Adds load to rotational speed")
        .fit(Whipper, No, "Extra mass kills bat lag")
        .fit(Slingshotter, Maybe, "Builds strength in the stretch")
        .fit(Titan, Careful, "Monitor volume with strength hitters")
        .contraindication("Avoid for 10U/12U hitters"),
        DrillDefinition::new(
            "tee-pathway-drill",
            "Tee Pathway",
            "Bat path",
            &[Casting, InconsistentContact, Mishits],
        )
        .fit(Spinner, Yes, "Grooves a repeatable path")
        .fit(Whipper, Critical, "Keeps the barrel on plane through release")
        .fit(Slingshotter, Yes, "Stabilises contact depth")
        .fit(Titan, Yes, "Turns strength into squared-up contact"),
        DrillDefinition::new(
            "rhythm-load-drill",
            "Rhythm Load",
            "Timing",
            &[EarlyDrift, LateLegs, OverSeparated],
        )
        .fit(Spinner, Maybe, "Secondary for rotational hitters")
        .fit(Whipper, Yes, "Syncs the load with the hands")
        .fit(Slingshotter, Careful, "Long loads exaggerate drift")
        .fit(Titan, Yes, "Smooths the move into landing"),
        DrillDefinition::new(
            "med-ball-scoop-toss",
            "Med Ball Scoop Toss",
            "Power",
            &[WeakTransfer, NoSequence],
        )
        .fit(Spinner, Yes, "Trains ground-up rotation")
        .fit(Whipper, Maybe, "Secondary for hand-dominant hitters")
        .fit(Slingshotter, Yes, "Trains stretch-shortening")
        .fit(Titan, Critical, "Channels strength through the chain"),
    ]
}
