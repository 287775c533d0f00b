// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_css --heading-base-level=0

//! Lightbox CSS: render binding from transform state to style strings.
//!
//! This crate turns a [`lightbox_transform::Transform`] plus the gesture
//! activity flag into the CSS the browser needs:
//!
//! - [`transform_value`]: the `translate(..px, ..px) scale(..)` shorthand,
//!   scaled about the element center.
//! - [`transition_value`]: `none` while a gesture is live so frames track
//!   the finger, a short ease-out snap once it ends.
//! - Containment policy for the viewport: the container suppresses native
//!   browser gestures, the image is contain-fitted.
//!
//! It builds strings only; applying them to elements is the adapter's job
//! (`lightbox_web` in a browser).
//!
//! ## Minimal example
//!
//! ```rust
//! use lightbox_css::{transform_value, transition_value};
//! use lightbox_transform::Transform;
//!
//! let t = Transform::new(2.5, 10.0, -4.0);
//! assert_eq!(transform_value(t), "translate(10px, -4px) scale(2.5)");
//!
//! // Idle: ease the next change. Mid-gesture: render immediately.
//! assert_eq!(transition_value(false), "transform 0.2s ease-out");
//! assert_eq!(transition_value(true), "none");
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;

use lightbox_transform::Transform;

/// `transform-origin` for the image: scale about the element center.
pub const TRANSFORM_ORIGIN: &str = "center";

/// `transition` while the view is idle: a short ease-out snap.
pub const IDLE_TRANSITION: &str = "transform 0.2s ease-out";

/// `transition` while a gesture is live: none, frames track the finger.
pub const GESTURE_TRANSITION: &str = "none";

/// `touch-action` for the container, so touches reach the gesture layer
/// instead of scrolling or zooming the page.
pub const CONTAINER_TOUCH_ACTION: &str = "none";

/// `overscroll-behavior` for the container: no scroll chaining or bounce.
pub const CONTAINER_OVERSCROLL_BEHAVIOR: &str = "contain";

/// `object-fit` for the image: fully visible at identity scale, aspect
/// ratio preserved, never cropped.
pub const IMAGE_OBJECT_FIT: &str = "contain";

/// Renders the CSS `transform` value for a view transform.
///
/// Numbers use the shortest round-trip form (`50` rather than `50.0`), so
/// the output matches what a hand-written template string would produce.
#[must_use]
pub fn transform_value(t: Transform) -> String {
    format!("translate({}px, {}px) scale({})", t.x, t.y, t.scale)
}

/// Renders the CSS `transition` value for the given gesture activity.
#[must_use]
pub fn transition_value(gesture_active: bool) -> &'static str {
    if gesture_active {
        GESTURE_TRANSITION
    } else {
        IDLE_TRANSITION
    }
}

/// Renders the complete inline declaration list for the image element.
#[must_use]
pub fn image_style(t: Transform, gesture_active: bool) -> String {
    format!(
        "object-fit: {}; transform-origin: {}; transform: {}; transition: {}",
        IMAGE_OBJECT_FIT,
        TRANSFORM_ORIGIN,
        transform_value(t),
        transition_value(gesture_active),
    )
}

/// Renders the complete inline declaration list for the container element.
#[must_use]
pub fn container_style() -> String {
    format!(
        "touch-action: {}; overscroll-behavior: {}",
        CONTAINER_TOUCH_ACTION, CONTAINER_OVERSCROLL_BEHAVIOR,
    )
}
