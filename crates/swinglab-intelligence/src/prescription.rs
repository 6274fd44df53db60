// ABOUTME: Drill prescription resolver mapping leak flags and motor profile to corrective drills
// ABOUTME: Unions triggered drills, enforces profile restrictions, orders by fit and caps output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! # Drill Prescription
//!
//! Resolution runs in four steps:
//!
//! 1. Union the drills triggered by each flag, in first-appearance order
//! 2. Withhold drills restricted for the motor profile
//! 3. Stable-sort the remainder by fit (critical, yes, maybe, careful)
//! 4. Cap the list at `max_drills`
//!
//! A restricted drill is never returned, whatever the flags.

use crate::config::intelligence::{
    DrillDefinition, FitLevel, IntelligenceConfig, PrescriptionConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use swinglab_core::models::{LeakFlag, MotorProfile};
use tracing::{debug, warn};

/// A drill selected for the hitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescribedDrill {
    /// Drill identifier
    pub slug: String,
    /// Display name
    pub name: String,
    /// Drill family
    pub category: String,
    /// Fit for the hitter's profile
    pub fit: FitLevel,
    /// Why the drill suits (or needs care for) the profile
    pub rationale: Option<String>,
    /// Requested flags this drill addresses
    pub addresses: Vec<LeakFlag>,
    /// Situations in which the drill should not be used
    pub contraindications: Vec<String>,
}

/// Drill usable only with coaching oversight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CautionNote {
    /// Drill identifier
    pub slug: String,
    /// Reason for care
    pub note: String,
}

/// Result of resolving flags for one hitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Profile the drills were filtered for
    pub profile: MotorProfile,
    /// Drills to run, best fit first
    pub drills: Vec<PrescribedDrill>,
    /// Triggered drills withheld by profile restrictions
    pub withheld: Vec<String>,
    /// Allowed drills beyond the output cap
    pub deferred: Vec<String>,
    /// Caution notes for the prescribed drills
    pub cautions: Vec<CautionNote>,
}

/// Resolves leak flags into profile-safe drills
#[derive(Debug, Clone)]
pub struct PrescriptionResolver {
    config: PrescriptionConfig,
}

impl Default for PrescriptionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PrescriptionResolver {
    /// Resolver using the process-wide drill catalog
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().prescription.clone())
    }

    /// Resolver using an injected catalog
    #[must_use]
    pub const fn with_config(config: PrescriptionConfig) -> Self {
        Self { config }
    }

    /// Slugs of drills triggered by any flag, de-duplicated in first-appearance order
    #[must_use]
    pub fn get_drills_for_flags(&self, flags: &[LeakFlag]) -> Vec<String> {
        let mut seen = HashSet::new();
        flags
            .iter()
            .flat_map(|flag| {
                self.config
                    .catalog
                    .iter()
                    .filter(move |drill| drill.is_triggered_by(*flag))
            })
            .filter(|drill| seen.insert(drill.slug.as_str()))
            .map(|drill| drill.slug.clone())
            .collect()
    }

    /// As [`Self::get_drills_for_flags`] for wire tokens; unknown tokens are logged and skipped
    #[must_use]
    pub fn get_drills_for_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        self.get_drills_for_flags(&parse_flags(tokens))
    }

    /// Remove slugs restricted for `profile`, preserving order
    #[must_use]
    pub fn filter_drills_by_profile(&self, slugs: &[String], profile: MotorProfile) -> Vec<String> {
        let restricted = self.config.restricted_slugs(profile);
        slugs
            .iter()
            .filter(|slug| !restricted.contains(slug.as_str()))
            .cloned()
            .collect()
    }

    /// Caution notes for slugs whose fit for `profile` is `careful`
    #[must_use]
    pub fn cautions_for(&self, slugs: &[String], profile: MotorProfile) -> Vec<CautionNote> {
        slugs
            .iter()
            .filter_map(|slug| self.config.drill(slug))
            .filter_map(|drill| {
                let fit = drill.fits.get(&profile)?;
                (fit.level == FitLevel::Careful).then(|| CautionNote {
                    slug: drill.slug.clone(),
                    note: fit.rationale.clone(),
                })
            })
            .collect()
    }

    /// Full prescription for `flags` and `profile`
    #[must_use]
    pub fn prescribe(&self, flags: &[LeakFlag], profile: MotorProfile) -> Prescription {
        let triggered = self.get_drills_for_flags(flags);
        let allowed = self.filter_drills_by_profile(&triggered, profile);
        let allowed_set: HashSet<&str> = allowed.iter().map(String::as_str).collect();
        let withheld: Vec<String> = triggered
            .iter()
            .filter(|slug| !allowed_set.contains(slug.as_str()))
            .cloned()
            .collect();

        let mut ranked: Vec<&DrillDefinition> = allowed
            .iter()
            .filter_map(|slug| self.config.drill(slug))
            .collect();
        ranked.sort_by_key(|drill| drill.fit_for(profile));

        let cap = self.config.max_drills;
        let deferred = ranked
            .iter()
            .skip(cap)
            .map(|drill| drill.slug.clone())
            .collect();
        let drills: Vec<PrescribedDrill> = ranked
            .into_iter()
            .take(cap)
            .map(|drill| prescribed(drill, flags, profile))
            .collect();
        let selected: Vec<String> = drills.iter().map(|drill| drill.slug.clone()).collect();
        let cautions = self.cautions_for(&selected, profile);

        debug!(
            profile = %profile,
            flags = flags.len(),
            triggered = triggered.len(),
            withheld = withheld.len(),
            prescribed = drills.len(),
            "Resolved drill prescription"
        );

        Prescription {
            profile,
            drills,
            withheld,
            deferred,
            cautions,
        }
    }

    /// Prescription from wire tokens
    ///
    /// Unknown flags are skipped and an unknown profile becomes Spinner.
    #[must_use]
    pub fn prescribe_tokens<S: AsRef<str>>(
        &self,
        flag_tokens: &[S],
        profile: &str,
    ) -> Prescription {
        self.prescribe(&parse_flags(flag_tokens), MotorProfile::parse_or_default(profile))
    }
}

fn prescribed(
    drill: &DrillDefinition,
    flags: &[LeakFlag],
    profile: MotorProfile,
) -> PrescribedDrill {
    let fit = drill.fits.get(&profile);
    PrescribedDrill {
        slug: drill.slug.clone(),
        name: drill.name.clone(),
        category: drill.category.clone(),
        fit: drill.fit_for(profile),
        rationale: fit.map(|fit| fit.rationale.clone()),
        addresses: flags
            .iter()
            .copied()
            .filter(|flag| drill.is_triggered_by(*flag))
            .collect(),
        contraindications: drill.contraindications.clone(),
    }
}

fn parse_flags<S: AsRef<str>>(tokens: &[S]) -> Vec<LeakFlag> {
    tokens
        .iter()
        .filter_map(|token| {
            let token = token.as_ref();
            token
                .parse::<LeakFlag>()
                .map_err(|e| warn!(flag.token = %token, error = %e, "Skipping unknown leak flag"))
                .ok()
        })
        .collect()
}
