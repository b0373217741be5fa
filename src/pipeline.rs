//! Per-frame driver connecting the presence debouncer and the finger classifier.
//!
//! The surrounding video pipeline reports one [`Frame`] per camera frame; this module decides
//! whether classification runs for it and aggregates the per-hand results.

use crate::debounce::PresenceDebouncer;
use crate::hand::finger::{FingerClassifier, FingerState};
use crate::hand::landmark::Landmarks;

/// Per-frame signals from the upstream detection graph.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Whether the dedicated palm-detection branch reported a palm box this frame.
    pub palm_present: bool,
    /// Whether the landmark branch produced landmarks this frame.
    pub landmark_present: bool,
    /// One landmark set per detected hand; empty when `landmark_present` is `false`.
    pub hands: Vec<Landmarks>,
}

/// Classification output for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    states: Vec<FingerState>,
    count: usize,
}

impl FrameReport {
    /// Per-hand finger states, in the order the hands were reported.
    pub fn hands(&self) -> &[FingerState] {
        &self.states
    }

    /// Total number of extended fingers across all hands in the frame.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Drives classification across frames.
///
/// Holds the only cross-frame state (the [`PresenceDebouncer`] counter); everything else is
/// recomputed per frame.
#[derive(Debug, Clone, Default)]
pub struct FrameClassifier {
    debouncer: PresenceDebouncer,
    classifier: FingerClassifier,
}

impl FrameClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(debouncer: PresenceDebouncer, classifier: FingerClassifier) -> Self {
        Self {
            debouncer,
            classifier,
        }
    }

    /// Processes one frame, returning a report when classification ran.
    ///
    /// The upstream graph runs separate palm and landmark detectors, and its palm branch only
    /// reports a box for hands it is not tracking yet. A reported palm therefore means a newly
    /// (re)acquired hand: it resets the warm-up counter and suppresses classification for this
    /// frame, while "no palm box" counts as continuous presence. Classification runs once
    /// landmarks are present and the hand has been stable for the whole warm-up window.
    pub fn process(&mut self, frame: &Frame) -> Option<FrameReport> {
        let state = self.debouncer.update(!frame.palm_present);

        if frame.palm_present || !frame.landmark_present || !state.is_stable() {
            return None;
        }

        let mut states = Vec::with_capacity(frame.hands.len());
        let mut count = 0;
        for (i, hand) in frame.hands.iter().enumerate() {
            let fingers = self.classifier.classify(hand);
            log::debug!("hand {i}: {fingers}");
            count += fingers.count();
            states.push(fingers);
        }
        log::info!("finger count: {count}");

        Some(FrameReport { states, count })
    }
}
