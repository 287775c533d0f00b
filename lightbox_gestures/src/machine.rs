// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed gesture machine: idle / panning / pinching.
//!
//! [`GestureMachine`] consumes platform-neutral [`InputEvent`]s and drives a
//! [`TransformState`] through its clamping setter. It owns one session at a
//! time plus the double-tap detector; feeding it synthetic events from a
//! test exercises exactly the code a browser adapter exercises.

use kurbo::{Point, Vec2};
use lightbox_transform::{Transform, TransformState};

use crate::pan::PanSession;
use crate::pinch::{PinchSession, touch_distance};
use crate::tap::{TapResult, TapState};

/// Multiplicative zoom step applied per wheel event.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Multiplicative zoom step applied per zoom button press.
pub const BUTTON_ZOOM_STEP: f64 = 3.0 * WHEEL_ZOOM_STEP;

/// Scale applied when double-tapping an unzoomed image.
pub const DOUBLE_TAP_ZOOM: f64 = 2.5;

/// Above this scale a double tap resets the view instead of zooming in.
pub const DOUBLE_TAP_RESET_THRESHOLD: f64 = 1.1;

/// Returns the multiplicative zoom factor for a wheel event.
///
/// Scrolling down (`delta_y > 0`) zooms out by one [`WHEEL_ZOOM_STEP`]; any
/// other delta, including zero, zooms in by one step. The step is flat
/// regardless of the delta magnitude or the platform's wheel mode.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if delta_y > 0.0 {
        1.0 - WHEEL_ZOOM_STEP
    } else {
        1.0 + WHEEL_ZOOM_STEP
    }
}

/// Active touch points of a touch event, capped at the two this layer uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Touches {
    /// A single touch point.
    One(Point),
    /// Two touch points, in contact order.
    Two(Point, Point),
}

impl Touches {
    /// Builds from a slice of active touch positions.
    ///
    /// Returns `None` for zero or more than two touches; such events carry
    /// no gesture meaning here and adapters drop them.
    #[must_use]
    pub fn from_slice(touches: &[Point]) -> Option<Self> {
        match *touches {
            [p] => Some(Self::One(p)),
            [a, b] => Some(Self::Two(a, b)),
            _ => None,
        }
    }

    /// Returns the first touch point.
    #[must_use]
    pub fn primary(&self) -> Point {
        match *self {
            Self::One(p) | Self::Two(p, _) => p,
        }
    }

    /// Returns the inter-touch distance of a two-finger event.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        match *self {
            Self::One(_) => None,
            Self::Two(a, b) => Some(touch_distance(a, b)),
        }
    }
}

/// A platform-neutral input event fed to [`GestureMachine::on_event`].
///
/// Positions are in any consistent coordinate space (client pixels in a
/// browser); timestamps are milliseconds from any non-decreasing source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary-button press. Adapters filter out secondary buttons.
    PointerDown {
        /// Pointer position.
        pos: Point,
    },
    /// Pointer motion, with or without a button held.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// Primary-button release.
    PointerUp,
    /// One or two fingers down, carrying the full current touch set.
    TouchStart {
        /// All active touches after this contact.
        touches: Touches,
        /// Event timestamp in milliseconds, for double-tap detection.
        time_ms: u64,
    },
    /// Touch motion, carrying the full current touch set.
    TouchMove {
        /// All active touches.
        touches: Touches,
    },
    /// A finger lifted.
    TouchEnd,
    /// The platform aborted the touch sequence.
    TouchCancel,
    /// Wheel or trackpad scroll over the viewport.
    Wheel {
        /// Vertical scroll amount; only the sign matters here.
        delta_y: f64,
    },
}

/// Named phase of the gesture machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A pointer or single finger is dragging the image.
    Panning,
    /// Two fingers are rescaling the image.
    Pinching,
}

/// What an input event did, for hosts that react to gesture edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEvent {
    /// A pan session began.
    PanStart,
    /// An active pan moved the image.
    PanMove,
    /// A pinch session began.
    PinchStart,
    /// An active pinch rescaled the image.
    PinchMove,
    /// A wheel event stepped the zoom.
    WheelZoom,
    /// A double tap toggled the zoom.
    DoubleTap,
    /// The active session ended; the machine is idle again.
    End,
}

#[derive(Clone, Copy, Debug)]
enum Session {
    Idle,
    Pan(PanSession),
    Pinch(PinchSession),
}

/// Interprets pointer, touch, and wheel input into pan/zoom updates.
///
/// | phase    | event                                    | effect                                            | next phase     |
/// |----------|------------------------------------------|---------------------------------------------------|----------------|
/// | any      | `PointerDown`                            | snapshot a pan session                            | Panning        |
/// | Panning  | `PointerMove` / one-finger `TouchMove`   | offset = session origin + total pointer travel    | Panning        |
/// | any      | one-finger `TouchStart`                  | double tap: toggle zoom; single: snapshot a pan   | Idle / Panning |
/// | any      | two-finger `TouchStart`                  | snapshot a pinch session                          | Pinching       |
/// | Pinching | two-finger `TouchMove`                   | scale multiplied by the re-based distance ratio   | Pinching       |
/// | active   | `PointerUp` / `TouchEnd` / `TouchCancel` | clear the session                                 | Idle           |
/// | any      | `Wheel`                                  | scale stepped by [`wheel_zoom_factor`]            | unchanged      |
///
/// Events without a row for the current phase report `None` and change
/// nothing. Starting a gesture replaces any live session wholesale: the
/// session is re-derived from the current touch count, never merged with a
/// previous one.
#[derive(Clone, Debug)]
pub struct GestureMachine {
    session: Session,
    taps: TapState,
}

impl GestureMachine {
    /// Creates an idle machine with the default double-tap window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::Idle,
            taps: TapState::new(),
        }
    }

    /// Creates an idle machine with a custom double-tap window.
    #[must_use]
    pub fn with_tap_window(window_ms: u64) -> Self {
        Self {
            session: Session::Idle,
            taps: TapState::with_window(window_ms),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.session {
            Session::Idle => GesturePhase::Idle,
            Session::Pan(_) => GesturePhase::Panning,
            Session::Pinch(_) => GesturePhase::Pinching,
        }
    }

    /// Returns `true` while a pan or pinch session is live.
    ///
    /// Hosts disable transition easing exactly while this holds, so gesture
    /// frames track the finger instead of lagging behind an animation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.session, Session::Idle)
    }

    /// Feeds one input event, updating `state` through its clamping setter.
    ///
    /// Returns what the event did, or `None` when it had no gesture meaning
    /// in the current phase.
    pub fn on_event(
        &mut self,
        state: &mut TransformState,
        event: InputEvent,
    ) -> Option<GestureEvent> {
        match event {
            InputEvent::PointerDown { pos } => Some(self.begin_pan(pos, state)),
            InputEvent::PointerMove { pos } => self.move_pan(pos, state),
            InputEvent::PointerUp | InputEvent::TouchEnd | InputEvent::TouchCancel => self.end(),
            InputEvent::TouchStart { touches, time_ms } => {
                Some(self.touch_start(touches, time_ms, state))
            }
            InputEvent::TouchMove { touches } => match touches {
                Touches::One(pos) => self.move_pan(pos, state),
                Touches::Two(a, b) => self.move_pinch(touch_distance(a, b), state),
            },
            InputEvent::Wheel { delta_y } => {
                state.zoom_by(wheel_zoom_factor(delta_y));
                Some(GestureEvent::WheelZoom)
            }
        }
    }

    fn begin_pan(&mut self, pos: Point, state: &TransformState) -> GestureEvent {
        self.session = Session::Pan(PanSession::begin(pos, state.translation()));
        GestureEvent::PanStart
    }

    fn move_pan(&mut self, pos: Point, state: &mut TransformState) -> Option<GestureEvent> {
        let Session::Pan(pan) = self.session else {
            return None;
        };
        let Vec2 { x, y } = pan.offset_for(pos);
        state.apply(state.transform().with_offset(x, y));
        Some(GestureEvent::PanMove)
    }

    fn move_pinch(&mut self, distance: f64, state: &mut TransformState) -> Option<GestureEvent> {
        let Session::Pinch(ref mut pinch) = self.session else {
            return None;
        };
        // A collapsed previous reading mutes this move; `rebase` still
        // records `distance` so the next move recovers.
        let ratio = pinch.rebase(distance)?;
        let current = state.transform();
        state.apply(current.with_scale(current.scale * ratio));
        Some(GestureEvent::PinchMove)
    }

    fn touch_start(
        &mut self,
        touches: Touches,
        time_ms: u64,
        state: &mut TransformState,
    ) -> GestureEvent {
        match touches {
            Touches::One(pos) => match self.taps.on_tap(time_ms) {
                TapResult::Double => {
                    self.session = Session::Idle;
                    toggle_tap_zoom(state);
                    GestureEvent::DoubleTap
                }
                TapResult::Single => self.begin_pan(pos, state),
            },
            Touches::Two(a, b) => {
                self.session = Session::Pinch(PinchSession::begin(touch_distance(a, b)));
                GestureEvent::PinchStart
            }
        }
    }

    fn end(&mut self) -> Option<GestureEvent> {
        if matches!(self.session, Session::Idle) {
            return None;
        }
        self.session = Session::Idle;
        Some(GestureEvent::End)
    }
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Zooms an unzoomed view to [`DOUBLE_TAP_ZOOM`] at the center, or resets a
/// zoomed one. Zooming in discards the pan offset on purpose: the double
/// tap targets the image center, not the tapped point.
fn toggle_tap_zoom(state: &mut TransformState) {
    if state.scale() > DOUBLE_TAP_RESET_THRESHOLD {
        state.reset();
    } else {
        state.apply(Transform::new(DOUBLE_TAP_ZOOM, 0.0, 0.0));
    }
}
