// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition over caller-supplied timestamps.
//!
//! The detector keeps exactly one timestamp: the moment of the most recent
//! single-finger tap. A new tap within the window of the stored one is a
//! double tap and consumes the timestamp; any other tap replaces it. The
//! caller supplies milliseconds from whatever monotonic source it has
//! (`Event.timeStamp` in a browser), so tests drive the detector with plain
//! constants.
//!
//! ## Minimal example
//!
//! ```
//! use lightbox_gestures::tap::{TapResult, TapState};
//!
//! let mut taps = TapState::new();
//! assert_eq!(taps.on_tap(1_000), TapResult::Single);
//! assert_eq!(taps.on_tap(1_250), TapResult::Double);
//!
//! // The double tap consumed the timestamp: the pair does not chain.
//! assert_eq!(taps.on_tap(1_400), TapResult::Single);
//! ```

/// Default double-tap window in milliseconds.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Classification of a tap fed into [`TapState::on_tap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// A lone tap; its timestamp is now stored.
    Single,
    /// A second tap within the window of the previous one.
    Double,
}

/// Tracks the timestamp of the most recent single-finger tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapState {
    last_tap_ms: Option<u64>,
    window_ms: u64,
}

impl TapState {
    /// Creates a detector with the default [`DOUBLE_TAP_WINDOW_MS`] window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(DOUBLE_TAP_WINDOW_MS)
    }

    /// Creates a detector with a custom window in milliseconds.
    #[must_use]
    pub fn with_window(window_ms: u64) -> Self {
        Self {
            last_tap_ms: None,
            window_ms,
        }
    }

    /// Feeds a tap at `now_ms`, classifying it against the stored one.
    ///
    /// A tap no later than `window_ms` after the stored tap is a
    /// [`TapResult::Double`] and clears the store; any other tap records
    /// `now_ms` and is a [`TapResult::Single`]. Timestamps are expected to
    /// be non-decreasing.
    pub fn on_tap(&mut self, now_ms: u64) -> TapResult {
        match self.last_tap_ms {
            Some(last) if now_ms.saturating_sub(last) <= self.window_ms => {
                self.last_tap_ms = None;
                TapResult::Double
            }
            _ => {
                self.last_tap_ms = Some(now_ms);
                TapResult::Single
            }
        }
    }

    /// Returns the configured window in milliseconds.
    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}

impl Default for TapState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{DOUBLE_TAP_WINDOW_MS, TapResult, TapState};

    #[test]
    fn first_tap_is_single() {
        let mut taps = TapState::new();

        assert_eq!(taps.on_tap(1_000), TapResult::Single);
    }

    #[test]
    fn quick_second_tap_is_double() {
        let mut taps = TapState::new();
        taps.on_tap(1_000);

        assert_eq!(taps.on_tap(1_200), TapResult::Double);
    }

    #[test]
    fn a_tap_exactly_at_the_window_is_double() {
        let mut taps = TapState::new();
        taps.on_tap(1_000);

        assert_eq!(taps.on_tap(1_000 + DOUBLE_TAP_WINDOW_MS), TapResult::Double);
    }

    #[test]
    fn slow_second_tap_is_single_and_rearms() {
        let mut taps = TapState::new();
        taps.on_tap(1_000);

        // Too slow to pair with the first tap, but it becomes the new anchor.
        assert_eq!(taps.on_tap(1_400), TapResult::Single);
        assert_eq!(taps.on_tap(1_500), TapResult::Double);
    }

    #[test]
    fn double_consumes_the_stored_timestamp() {
        let mut taps = TapState::new();
        taps.on_tap(1_000);
        taps.on_tap(1_100);

        // A third quick tap starts a fresh pair instead of chaining.
        assert_eq!(taps.on_tap(1_200), TapResult::Single);
    }

    #[test]
    fn custom_window_is_honored() {
        let mut taps = TapState::with_window(50);
        taps.on_tap(1_000);

        assert_eq!(taps.on_tap(1_100), TapResult::Single);
        assert_eq!(taps.on_tap(1_140), TapResult::Double);
    }
}
