// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_viewer --heading-base-level=0

//! Lightbox Viewer: the composed headless image viewport.
//!
//! [`Viewer`] ties the Lightbox pieces together into one component:
//!
//! - Owns the [`lightbox_transform::TransformState`] and the
//!   [`lightbox_gestures::machine::GestureMachine`], forwarding input
//!   events between them.
//! - Tracks the image source identity and resets the view whenever it
//!   changes, so a new image never inherits the previous zoom.
//! - Offers the manual controls around the gestures: zoom in/out buttons,
//!   explicit reset, and share/download actions.
//! - Talks to the embedding application through the [`ViewerHost`] seam:
//!   clipboard, downloads, and deep links stay on the host side, and their
//!   failures surface as a transient status string instead of an error.
//!
//! ## Minimal example
//!
//! ```rust
//! use lightbox_viewer::Viewer;
//!
//! let mut viewer = Viewer::new("https://example.com/renders/chair.png");
//! viewer.zoom_in();
//! assert!(viewer.transform().scale > 1.0);
//!
//! // A different rendering arrives: the view starts over.
//! viewer.set_source("https://example.com/renders/chair-oak.png");
//! assert_eq!(viewer.transform().scale, 1.0);
//! ```
//!
//! ## Degraded mode
//!
//! A failing host capability never panics and never touches the transform;
//! the viewer shows a short status message and the viewport keeps working.
//! See [`Viewer::status`].
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod share;
mod viewer;

pub use share::{
    HostError, ViewerHost, encode_component, mail_link, suggested_filename, whatsapp_link,
};
pub use viewer::{STATUS_TTL_MS, Viewer};
