// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_transform --heading-base-level=0

//! Lightbox Transform: the pan/zoom transform of an image viewport.
//!
//! This crate provides the small, headless transform model at the heart of
//! the Lightbox viewer:
//! - [`Transform`]: a uniform zoom scale plus an x/y pan offset in device
//!   pixels, convertible to a [`kurbo::Affine`].
//! - [`TransformState`]: the owned current transform with a single clamping
//!   setter, reset, and multiplicative zoom steps.
//!
//! It does **not** interpret input events or render anything. Callers are
//! expected to:
//! - Drive [`TransformState::apply`] from a gesture layer (for example
//!   `lightbox_gestures`).
//! - Derive a presentation of the current [`Transform`] at a higher layer
//!   (for example the CSS binding in `lightbox_css`).
//!
//! ## Minimal example
//!
//! ```rust
//! use lightbox_transform::{Transform, TransformState};
//!
//! let mut state = TransformState::new();
//! assert_eq!(state.transform(), Transform::IDENTITY);
//!
//! // Pan is unconstrained; scale is clamped into the configured range.
//! state.apply(Transform::new(9.0, 40.0, -25.0));
//! assert_eq!(state.scale(), 5.0);
//! assert_eq!(state.transform().x, 40.0);
//!
//! state.reset();
//! assert_eq!(state.transform(), Transform::IDENTITY);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is a **uniform** scalar; rotation and non-uniform scaling are
//!   intentionally left out.
//! - The pan offset is deliberately unbounded. The image may leave the
//!   viewport entirely; reset and the gesture layer's double-tap recover it.
//! - There are no error conditions: out-of-range scales are silently
//!   clamped, never rejected.
//!
//! This crate is `no_std`.

#![no_std]

mod state;
mod transform;

pub use state::{MAX_SCALE, MIN_SCALE, TransformState};
pub use transform::Transform;
