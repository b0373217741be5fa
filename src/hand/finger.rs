//! Extended/folded classification of individual fingers.
//!
//! The classification is purely geometric: each finger is judged by the angles its joints form,
//! computed from the landmark positions of a single frame. No state is carried between frames;
//! temporal smoothing is the job of [`crate::debounce`].

use std::fmt;

use itertools::Itertools;

use crate::geom::segment_angle;
use crate::hand::landmark::{LandmarkIdx, Landmarks};

/// The five fingers, in landmark order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];
}

/// Per-finger classification result for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerState {
    extended: [bool; 5],
}

impl FingerState {
    /// Returns whether `finger` was classified as extended.
    #[inline]
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.extended[finger as usize]
    }

    /// Returns the number of extended fingers (0 to 5).
    pub fn count(&self) -> usize {
        self.extended.iter().filter(|&&e| e).count()
    }

    /// Returns the per-finger flags in [`Finger::ALL`] order.
    pub fn flags(&self) -> [bool; 5] {
        self.extended
    }

    /// Iterates over the fingers classified as extended.
    pub fn extended_fingers(&self) -> impl Iterator<Item = Finger> + '_ {
        Finger::ALL.into_iter().filter(|&f| self.is_extended(f))
    }
}

impl fmt::Display for FingerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = self
            .extended
            .iter()
            .map(|&e| if e { '1' } else { '0' })
            .join("");
        write!(f, "count={} [{}]", self.count(), flags)
    }
}

/// Decision thresholds used by [`FingerClassifier`].
///
/// The defaults were tuned against the upstream estimator's output and produce the documented
/// behavior; tests and callers can override individual fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Maximum angle (degrees) at the wrist between the wrist→PIP and wrist→DIP segments for a
    /// finger to still count as straight. Default: 40°.
    pub max_base_angle: f64,
    /// Minimum angle (degrees) at the DIP between the DIP→PIP and DIP→tip segments; a curled
    /// finger folds its tip back towards the palm, collapsing this angle. Default: 120°.
    pub min_joint_angle: f64,
    /// Minimum angle (degrees) between the wrist→thumb-tip and wrist→pinky-MCP segments for the
    /// thumb to count as spread away from the palm. Default: 55°.
    pub min_thumb_angle: f64,
    /// Minimum angle (degrees) at the thumb MCP between the MCP→wrist and MCP→tip segments,
    /// used when the thumb tip is in front of the wrist (negative Z). Default: 160°.
    pub min_thumb_joint_angle: f64,
    /// Minimum distance (normalized image units) between the index MCP and the thumb MCP, used
    /// when the depth ordering is ambiguous (non-negative Z). Default: 0.0435.
    pub min_thumb_spread: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_base_angle: 40.0,
            min_joint_angle: 120.0,
            min_thumb_angle: 55.0,
            min_thumb_joint_angle: 160.0,
            min_thumb_spread: 0.0435,
        }
    }
}

/// Classifies each finger of a hand as extended or folded.
///
/// Classification is deterministic and side-effect free: the same [`Landmarks`] always produce
/// the same [`FingerState`].
#[derive(Debug, Clone, Default)]
pub struct FingerClassifier {
    config: ClassifierConfig,
}

impl FingerClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies all five fingers of `hand`.
    pub fn classify(&self, hand: &Landmarks) -> FingerState {
        let mut extended = [false; 5];
        extended[Finger::Thumb as usize] = self.classify_thumb(hand);
        for (i, state) in extended.iter_mut().enumerate().skip(1) {
            *state = self.classify_finger(hand, i);
        }
        FingerState { extended }
    }

    /// Classifies one of the four non-thumb fingers (`finger` in 1..=4).
    ///
    /// A straight finger keeps its PIP nearly colinear with the wrist→DIP line (small angle at
    /// the wrist), while curling collapses the angle at the DIP between its neighboring joint
    /// and the tip. The conjunction of both separates "straight" from "curled".
    fn classify_finger(&self, hand: &Landmarks, finger: usize) -> bool {
        let base = hand[LandmarkIdx::Wrist];
        let b = finger * 4;
        let knuckle = hand[b + 1];
        let joint = hand[b + 2];
        let tip = hand[b + 4];

        let base_angle = segment_angle(base, knuckle, base, joint);
        let joint_angle = segment_angle(joint, knuckle, joint, tip);

        base_angle < self.config.max_base_angle && joint_angle > self.config.min_joint_angle
    }

    /// Classifies the thumb.
    ///
    /// The thumb does not curl in the same plane as the other fingers, so the generic rule does
    /// not apply. It is judged by how far it is spread away from the palm, combined with one of
    /// two secondary checks depending on the sign of the tip's depth. The two branches are
    /// deliberately kept separate; they use different metrics and cannot be folded into a single
    /// rule without changing behavior.
    fn classify_thumb(&self, hand: &Landmarks) -> bool {
        let wrist = hand[LandmarkIdx::Wrist];
        let tip = hand[LandmarkIdx::ThumbTip];
        let index_mcp = hand[LandmarkIdx::IndexFingerMcp];
        let pinky_mcp = hand[LandmarkIdx::PinkyMcp];
        let thumb_mcp = hand[LandmarkIdx::ThumbMcp];

        let spread_angle = segment_angle(wrist, tip, wrist, pinky_mcp);

        if tip.z < 0.0 {
            // Tip closer to the camera than the wrist: a near-straight thumb joint means the
            // thumb is extended.
            let joint_angle = segment_angle(thumb_mcp, wrist, thumb_mcp, tip);
            spread_angle > self.config.min_thumb_angle
                && joint_angle > self.config.min_thumb_joint_angle
        } else {
            // Depth ordering is ambiguous; fall back to a planar distance proxy for "thumb
            // pulled away from the palm".
            let spread = index_mcp.distance_to(thumb_mcp);
            spread_angle > self.config.min_thumb_angle && spread > self.config.min_thumb_spread
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geom::{pt3, Point3};

    use super::*;

    fn landmarks_with(points: &[(usize, Point3)]) -> Landmarks {
        let mut positions = vec![Point3::ZERO; Landmarks::NUM_LANDMARKS];
        for &(i, p) in points {
            positions[i] = p;
        }
        Landmarks::new(&positions).unwrap()
    }

    #[test]
    fn straight_index_finger_is_extended() {
        // Wrist at the origin, index finger chain on a straight ray.
        let hand = landmarks_with(&[
            (5, pt3(0.0, 1.0, 0.0)),
            (6, pt3(0.0, 2.0, 0.0)),
            (8, pt3(0.0, 4.0, 0.0)),
        ]);

        let state = FingerClassifier::new().classify(&hand);
        assert!(state.is_extended(Finger::Index));
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn curled_index_finger_is_folded() {
        // The tip folds back near the wrist, collapsing the angle at the DIP.
        let hand = landmarks_with(&[
            (5, pt3(0.0, 1.0, 0.0)),
            (6, pt3(0.0, 2.0, 0.0)),
            (8, pt3(0.1, 0.1, 0.0)),
        ]);

        let state = FingerClassifier::new().classify(&hand);
        assert!(!state.is_extended(Finger::Index));
    }

    #[test]
    fn extension_is_monotonic_in_joint_threshold() {
        let hand = landmarks_with(&[
            (5, pt3(0.0, 1.0, 0.0)),
            (6, pt3(0.0, 2.0, 0.0)),
            (8, pt3(0.0, 4.0, 0.0)),
        ]);

        let default = FingerClassifier::new().classify(&hand);
        assert!(default.is_extended(Finger::Index));

        // Raising the joint threshold can only turn results off, never on.
        let strict = FingerClassifier::with_config(ClassifierConfig {
            min_joint_angle: 181.0,
            ..ClassifierConfig::default()
        })
        .classify(&hand);
        assert!(!strict.is_extended(Finger::Index));
    }

    #[test]
    fn straight_thumb_in_front_of_wrist_is_extended() {
        // Thumb tip at ~60° from the wrist→pinky-MCP segment and in front of the wrist
        // (negative Z), with a straight MCP joint.
        let hand = landmarks_with(&[
            (2, pt3(0.25, 0.433, -0.01)),
            (4, pt3(0.5, 0.866, -0.02)),
            (17, pt3(1.0, 0.0, 0.0)),
        ]);

        let state = FingerClassifier::new().classify(&hand);
        assert!(state.is_extended(Finger::Thumb));
    }

    #[test]
    fn bent_thumb_joint_is_folded() {
        // Same spread, but the MCP is moved off the wrist→tip line, bending the joint well
        // below the 160° threshold.
        let hand = landmarks_with(&[
            (2, pt3(0.4, 0.2, -0.01)),
            (4, pt3(0.5, 0.866, -0.02)),
            (17, pt3(1.0, 0.0, 0.0)),
        ]);

        let state = FingerClassifier::new().classify(&hand);
        assert!(!state.is_extended(Finger::Thumb));
    }

    #[test]
    fn thumb_depth_fallback_uses_palm_distance() {
        // Tip depth is non-negative, so the spread distance between index MCP and thumb MCP
        // decides.
        let spread_out = landmarks_with(&[
            (2, pt3(0.5, 0.5, 0.0)),
            (4, pt3(0.5, 0.866, 0.01)),
            (5, pt3(0.0, 1.0, 0.0)),
            (17, pt3(1.0, 0.0, 0.0)),
        ]);
        let state = FingerClassifier::new().classify(&spread_out);
        assert!(state.is_extended(Finger::Thumb));

        let tucked_in = landmarks_with(&[
            (2, pt3(0.0, 1.01, 0.0)),
            (4, pt3(0.5, 0.866, 0.01)),
            (5, pt3(0.0, 1.0, 0.0)),
            (17, pt3(1.0, 0.0, 0.0)),
        ]);
        let state = FingerClassifier::new().classify(&tucked_in);
        assert!(!state.is_extended(Finger::Thumb));
    }

    #[test]
    fn degenerate_hand_reports_nothing_extended() {
        // All landmarks coincident: every angle is NaN, every threshold comparison false.
        let hand = landmarks_with(&[]);
        let state = FingerClassifier::new().classify(&hand);
        assert_eq!(state.count(), 0);
        for finger in Finger::ALL {
            assert!(!state.is_extended(finger));
        }
    }

    #[test]
    fn display_shows_count_and_flags() {
        let hand = landmarks_with(&[
            (5, pt3(0.0, 1.0, 0.0)),
            (6, pt3(0.0, 2.0, 0.0)),
            (8, pt3(0.0, 4.0, 0.0)),
        ]);
        let state = FingerClassifier::new().classify(&hand);
        assert_eq!(state.to_string(), "count=1 [01000]");
        assert_eq!(state.flags(), [false, true, false, false, false]);
        assert_eq!(state.extended_fingers().collect::<Vec<_>>(), [Finger::Index]);
    }
}
