// ABOUTME: Kinematic extraction from a full-body momentum/energy time series
// ABOUTME: Finds segment peaks, detects the contact frame and derives SwingMetrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! # Kinematics
//!
//! Both scorers read the same series through [`MomentumSeries`], so the 4B
//! scorer and the kinetic fingerprint agree on peak frames and contact.
//! Frame positions are sample indices.

use serde::{Deserialize, Serialize};
use swinglab_core::constants::numeric::ZERO_EPSILON;
use swinglab_core::models::{MomentumFrame, Segment, SwingMetrics};

/// How the contact frame was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    /// Supplied by the caller
    Explicit,
    /// First sign change of time relative to peak hand speed
    HandSpeedCrossing,
    /// No crossing found; the last frame was used
    LastFrame,
}

/// Detected contact frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFrame {
    /// Frame index
    pub index: usize,
    /// Detection method
    pub method: ContactMethod,
    /// Set when the frame sits on a series boundary or the fallback was used
    pub low_confidence: bool,
}

/// Peak of one segment's absolute angular momentum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentPeak {
    /// Segment
    pub segment: Segment,
    /// Frame index of the peak
    pub frame: usize,
    /// Absolute momentum at the peak
    pub magnitude: f64,
}

/// Read-only view over a momentum time series
#[derive(Debug, Clone, Copy)]
pub struct MomentumSeries<'a> {
    frames: &'a [MomentumFrame],
}

impl<'a> MomentumSeries<'a> {
    /// Wrap a series
    #[must_use]
    pub const fn new(frames: &'a [MomentumFrame]) -> Self {
        Self { frames }
    }

    /// Number of frames
    #[must_use]
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the series has no frames
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Locate contact
    ///
    /// An explicit index is clamped into the series. Otherwise contact is the
    /// first frame `i > 0` where `time_from_max_hand` goes from negative to
    /// non-negative, falling back to the last frame.
    #[must_use]
    pub fn detect_contact(&self, explicit: Option<usize>) -> Option<ContactFrame> {
        let last = self.frames.len().checked_sub(1)?;
        let (index, method) = match explicit {
            Some(index) => (index.min(last), ContactMethod::Explicit),
            None => self
                .hand_speed_crossing()
                .map_or((last, ContactMethod::LastFrame), |index| {
                    (index, ContactMethod::HandSpeedCrossing)
                }),
        };
        let on_boundary = index == 0 || index == last;
        Some(ContactFrame {
            index,
            method,
            low_confidence: on_boundary || method == ContactMethod::LastFrame,
        })
    }

    fn hand_speed_crossing(&self) -> Option<usize> {
        self.frames
            .windows(2)
            .position(|pair| {
                matches!(
                    (pair[0].time_from_max_hand, pair[1].time_from_max_hand),
                    (Some(before), Some(after)) if before < 0.0 && after >= 0.0
                )
            })
            .map(|position| position + 1)
    }

    /// Peak absolute momentum of `segment`; the earliest frame wins ties
    #[must_use]
    pub fn peak(&self, segment: Segment) -> Option<SegmentPeak> {
        self.frames
            .iter()
            .enumerate()
            .map(|(frame, sample)| (frame, segment.momentum(sample).abs()))
            .filter(|(_, magnitude)| magnitude.is_finite())
            .fold(None, |best: Option<SegmentPeak>, (frame, magnitude)| match best {
                Some(peak) if peak.magnitude >= magnitude => Some(peak),
                _ => Some(SegmentPeak {
                    segment,
                    frame,
                    magnitude,
                }),
            })
    }

    /// Peaks of all four segments in kinetic-chain order
    #[must_use]
    pub fn chain_peaks(&self) -> Option<[SegmentPeak; 4]> {
        let [pelvis, torso, arms, bat] = Segment::KINETIC_CHAIN;
        Some([
            self.peak(pelvis)?,
            self.peak(torso)?,
            self.peak(arms)?,
            self.peak(bat)?,
        ])
    }

    /// Percentage `segment` slowed from its peak by `contact`
    ///
    /// `None` when the peak is zero or falls after contact.
    #[must_use]
    pub fn decel_pct(&self, segment: Segment, contact: usize) -> Option<f64> {
        let peak = self.peak(segment)?;
        let at_contact = segment.momentum(self.frames.get(contact)?).abs();
        if peak.magnitude < ZERO_EPSILON || peak.frame > contact || !at_contact.is_finite() {
            return None;
        }
        Some((peak.magnitude - at_contact) / peak.magnitude * 100.0)
    }

    /// Largest absolute torso/pelvis rotation difference (degrees)
    #[must_use]
    pub fn x_factor_deg(&self) -> Option<f64> {
        self.frames
            .iter()
            .filter_map(|frame| {
                let separation = (frame.torso_rotation_deg? - frame.pelvis_rotation_deg?).abs();
                separation.is_finite().then_some(separation)
            })
            .reduce(f64::max)
    }

    /// Bat kinetic energy as a percentage of total recorded energy at `contact`
    #[must_use]
    pub fn energy_delivery_pct(&self, contact: usize) -> Option<f64> {
        let frame = self.frames.get(contact)?;
        let bat = Segment::Bat.energy(frame)?;
        let total: f64 = Segment::KINETIC_CHAIN
            .iter()
            .filter_map(|segment| segment.energy(frame))
            .sum();
        if !total.is_finite() || total < ZERO_EPSILON {
            return None;
        }
        Some(bat / total * 100.0)
    }

    /// Kinematic summary of the series
    ///
    /// Fills momentum peaks, peak frames, contact frame and pelvis/torso
    /// deceleration; outcome and drift fields are left empty.
    #[must_use]
    pub fn to_metrics(&self, contact: Option<ContactFrame>) -> SwingMetrics {
        let peak = |segment| self.peak(segment);
        let (pelvis, torso, arms, bat) = (
            peak(Segment::Pelvis),
            peak(Segment::Torso),
            peak(Segment::Arms),
            peak(Segment::Bat),
        );
        let contact_index = contact.map(|contact| contact.index);
        SwingMetrics {
            pelvis_momentum_peak: pelvis.map(|p| p.magnitude),
            torso_momentum_peak: torso.map(|p| p.magnitude),
            arms_momentum_peak: arms.map(|p| p.magnitude),
            bat_momentum_peak: bat.map(|p| p.magnitude),
            pelvis_peak_frame: pelvis.map(|p| p.frame as f64),
            torso_peak_frame: torso.map(|p| p.frame as f64),
            arms_peak_frame: arms.map(|p| p.frame as f64),
            bat_peak_frame: bat.map(|p| p.frame as f64),
            contact_frame: contact_index.map(|index| index as f64),
            pelvis_decel_pct: contact_index
                .and_then(|index| self.decel_pct(Segment::Pelvis, index)),
            torso_decel_pct: contact_index.and_then(|index| self.decel_pct(Segment::Torso, index)),
            ..SwingMetrics::default()
        }
    }
}

/// Count of segment pairs that peak out of kinetic-chain order
#[must_use]
pub fn sequence_inversions(peaks: &[SegmentPeak]) -> usize {
    peaks
        .iter()
        .enumerate()
        .map(|(i, earlier)| {
            peaks[i + 1..]
                .iter()
                .filter(|later| earlier.frame > later.frame)
                .count()
        })
        .sum()
}
