//! The 21-point hand landmark set.

use std::ops::Index;

use crate::geom::Point3;

/// Error produced when constructing [`Landmarks`] from malformed input.
#[derive(Debug, thiserror::Error)]
pub enum LandmarkError {
    /// The upstream estimator's contract is exactly [`Landmarks::NUM_LANDMARKS`] points per hand;
    /// anything else indicates a broken producer and is rejected instead of being read out of
    /// bounds.
    #[error("invalid landmark count: expected {expected} points, got {found}")]
    InvalidCount { expected: usize, found: usize },
}

/// The landmarks of one detected hand.
///
/// Landmarks are stored in the fixed anatomical order used by the upstream estimator (see
/// [`LandmarkIdx`]): index 0 is the wrist, indices 1-4 are the thumb from base to tip, and each
/// following group of 4 is one finger from base to tip. The order is part of the estimator's
/// contract and must never be reindexed.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks {
    positions: [Point3; Self::NUM_LANDMARKS],
}

impl Landmarks {
    /// Number of landmarks on a hand.
    pub const NUM_LANDMARKS: usize = 21;

    /// Creates a [`Landmarks`] collection from exactly 21 points.
    ///
    /// Returns [`LandmarkError::InvalidCount`] when `points` has any other length.
    pub fn new(points: &[Point3]) -> Result<Self, LandmarkError> {
        let positions = points
            .try_into()
            .map_err(|_| LandmarkError::InvalidCount {
                expected: Self::NUM_LANDMARKS,
                found: points.len(),
            })?;
        Ok(Self { positions })
    }

    /// Returns all landmark positions, in anatomical order.
    pub fn positions(&self) -> &[Point3; Self::NUM_LANDMARKS] {
        &self.positions
    }

    /// Returns the position of the landmark `idx`.
    pub fn get(&self, idx: LandmarkIdx) -> Point3 {
        self.positions[idx as usize]
    }
}

impl Index<usize> for Landmarks {
    type Output = Point3;

    #[inline]
    fn index(&self, index: usize) -> &Point3 {
        &self.positions[index]
    }
}

impl Index<LandmarkIdx> for Landmarks {
    type Output = Point3;

    #[inline]
    fn index(&self, index: LandmarkIdx) -> &Point3 {
        &self.positions[index as usize]
    }
}

/// Names for the hand landmarks.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}
