// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan session helper: derive the image offset from the live pointer position.
//!
//! A session snapshots the pointer position and the image offset at gesture
//! start. Every later pointer position yields the full offset in one step
//! (`origin + (current - start)`), so a dropped intermediate move event can
//! never accumulate drift.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lightbox_gestures::pan::PanSession;
//!
//! // Pointer goes down at (100, 100) while the image sits at its origin.
//! let pan = PanSession::begin(Point::new(100.0, 100.0), Vec2::ZERO);
//!
//! // Pointer reaches (150, 130): the image offset becomes (50, 30).
//! assert_eq!(pan.offset_for(Point::new(150.0, 130.0)), Vec2::new(50.0, 30.0));
//! ```

use kurbo::{Point, Vec2};

/// Snapshot of a single pan gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSession {
    start: Point,
    origin: Vec2,
}

impl PanSession {
    /// Starts a pan at pointer position `start` with the image at `origin`.
    #[must_use]
    pub fn begin(start: Point, origin: Vec2) -> Self {
        Self { start, origin }
    }

    /// Returns the image offset for a pointer now at `current`.
    ///
    /// The result is absolute (snapshot origin plus total pointer travel),
    /// not an increment over the previous move.
    #[must_use]
    pub fn offset_for(&self, current: Point) -> Vec2 {
        self.origin + (current - self.start)
    }

    /// Returns the pointer position at gesture start.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the image offset at gesture start.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}
