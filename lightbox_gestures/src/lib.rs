// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_gestures --heading-base-level=0

//! Lightbox Gestures: input state machines for the image viewport.
//!
//! This crate turns pointer, touch, and wheel input into pan/zoom updates on
//! a [`lightbox_transform::TransformState`]. Each module handles a specific
//! interaction pattern:
//!
//! - [`pan`]: Derive an absolute pan offset from the live pointer position
//! - [`pinch`]: Turn two-finger distance changes into incremental scale ratios
//! - [`tap`]: Recognize double taps over caller-supplied timestamps
//! - [`machine`]: Compose the above into one idle/panning/pinching machine
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute the next
//!   transform from the newest event
//! - **Clock- and platform-free**: Accept pre-computed positions and
//!   millisecond timestamps, never read a clock or a DOM
//!
//! The crate does not assume any particular UI framework or event system.
//! Browser integration lives in `lightbox_web`, which converts DOM events
//! into the [`machine::InputEvent`] values consumed here; tests drive the
//! same machine with synthetic events.
//!
//! ## Usage Patterns
//!
//! ### Driving the machine
//!
//! ```rust
//! use kurbo::Point;
//! use lightbox_gestures::machine::{GestureMachine, GestureEvent, InputEvent};
//! use lightbox_transform::TransformState;
//!
//! let mut state = TransformState::new();
//! let mut machine = GestureMachine::new();
//!
//! // Press at (100, 100), drag to (150, 130).
//! machine.on_event(&mut state, InputEvent::PointerDown { pos: Point::new(100.0, 100.0) });
//! let did = machine.on_event(&mut state, InputEvent::PointerMove { pos: Point::new(150.0, 130.0) });
//! assert_eq!(did, Some(GestureEvent::PanMove));
//! assert_eq!(state.translation(), (50.0, 30.0).into());
//!
//! // Release: the machine is idle again, easing may resume.
//! machine.on_event(&mut state, InputEvent::PointerUp);
//! assert!(!machine.is_active());
//! ```
//!
//! ### Standalone pan math
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use lightbox_gestures::pan::PanSession;
//!
//! let pan = PanSession::begin(Point::new(10.0, 10.0), Vec2::ZERO);
//! assert_eq!(pan.offset_for(Point::new(14.0, 7.0)), Vec2::new(4.0, -3.0));
//! ```
//!
//! ### Double-tap recognition
//!
//! ```rust
//! use lightbox_gestures::tap::{TapResult, TapState};
//!
//! let mut taps = TapState::new();
//! assert_eq!(taps.on_tap(1_000), TapResult::Single);
//! assert_eq!(taps.on_tap(1_200), TapResult::Double);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod machine;
pub mod pan;
pub mod pinch;
pub mod tap;
