// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session helper: incremental scale ratios from two-finger distances.
//!
//! A session stores the most recent inter-touch distance. Each move divides
//! the new distance by the stored one and then replaces it, so every ratio
//! is relative to the previous move rather than to the gesture start. The
//! stored distance must be strictly positive before a ratio is produced;
//! dividing by zero would poison the scale with a non-finite value.
//!
//! ## Minimal example
//!
//! ```
//! use lightbox_gestures::pinch::PinchSession;
//!
//! let mut pinch = PinchSession::begin(100.0);
//!
//! // Fingers spread to 150 px apart: scale by 1.5.
//! assert_eq!(pinch.rebase(150.0), Some(1.5));
//!
//! // Further spread to 180 px: the ratio is relative to 150, not 100.
//! assert_eq!(pinch.rebase(180.0), Some(1.2));
//! ```

use kurbo::Point;

/// Euclidean distance between two touch points.
#[must_use]
pub fn touch_distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Tracks the inter-touch distance across a pinch gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    last_distance: f64,
}

impl PinchSession {
    /// Starts a pinch with the initial inter-touch distance.
    #[must_use]
    pub fn begin(distance: f64) -> Self {
        Self {
            last_distance: distance,
        }
    }

    /// Feeds the next inter-touch distance, returning the scale ratio.
    ///
    /// Returns `None` while the stored distance is not strictly positive;
    /// the stored distance is replaced either way, so one degenerate reading
    /// only mutes a single move and the gesture recovers on the next one.
    pub fn rebase(&mut self, distance: f64) -> Option<f64> {
        let ratio = (self.last_distance > 0.0).then(|| distance / self.last_distance);
        self.last_distance = distance;
        ratio
    }

    /// Returns the most recently stored inter-touch distance.
    #[must_use]
    pub fn last_distance(&self) -> f64 {
        self.last_distance
    }
}
