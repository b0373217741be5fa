//! Hand-presence debouncing.
//!
//! Landmark estimates are least reliable during the first frames after a hand (re)appears, so
//! classification is held back until the hand has been continuously present for a short warm-up
//! window.

/// Debouncer state, derived from the presence counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// The hand (re)appeared less than the warm-up window ago; classification is suppressed.
    Settling,
    /// The hand has been present long enough for its landmarks to be trusted.
    Stable,
}

impl DebounceState {
    #[inline]
    pub fn is_stable(self) -> bool {
        matches!(self, DebounceState::Stable)
    }
}

/// Tracks for how many consecutive frames a hand has been present.
///
/// The counter is owned by the per-frame driving loop and updated exactly once per frame; it is
/// the only state in the crate.
#[derive(Debug, Clone)]
pub struct PresenceDebouncer {
    frames: u32,
    warmup: u32,
}

impl PresenceDebouncer {
    /// Number of consecutive frames a hand must be present before it is trusted.
    pub const DEFAULT_WARMUP_FRAMES: u32 = 20;

    pub fn new() -> Self {
        Self::with_warmup(Self::DEFAULT_WARMUP_FRAMES)
    }

    /// Creates a debouncer with a custom warm-up window.
    pub fn with_warmup(frames: u32) -> Self {
        Self {
            frames: 0,
            warmup: frames,
        }
    }

    /// Feeds one frame's presence flag and returns the updated state.
    ///
    /// An absent hand resets the counter; a present hand increments it, saturating at the
    /// warm-up threshold.
    pub fn update(&mut self, present: bool) -> DebounceState {
        if present {
            self.frames = (self.frames + 1).min(self.warmup);
        } else {
            self.frames = 0;
        }
        self.state()
    }

    /// Returns the current state without consuming a frame.
    pub fn state(&self) -> DebounceState {
        if self.frames >= self.warmup {
            DebounceState::Stable
        } else {
            DebounceState::Settling
        }
    }
}

impl Default for PresenceDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
