// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_web --heading-base-level=0

//! Browser bindings for the Lightbox viewport when targeting `wasm32`.
//!
//! This crate converts `web_sys` mouse, touch, and wheel events into the
//! platform-neutral [`InputEvent`]s consumed by `lightbox_gestures`, and
//! writes the `lightbox_css` viewport styles onto DOM elements.
//!
//! # Usage
//!
//! Wire each DOM event handler to a converter and feed the result to the
//! gesture machine (or to a `lightbox_viewer::Viewer`):
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn on_wheel(
//!     machine: &mut lightbox_gestures::machine::GestureMachine,
//!     state: &mut lightbox_transform::TransformState,
//!     event: &web_sys::WheelEvent,
//! ) {
//!     machine.on_event(state, lightbox_web::wheel(event));
//! }
//! ```
//!
//! Notes:
//! - Converters returning `Option` yield `None` for events this layer
//!   ignores (secondary mouse buttons, three or more fingers); handlers
//!   drop those without touching the machine.
//! - A mouse drag keeps panning after the cursor leaves the viewer element
//!   only while window-level handlers are registered. [`DragListeners`]
//!   owns that registration and removes it on drop, so an aborted drag
//!   never leaves a live window callback behind.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::vec::Vec;
#[cfg(target_arch = "wasm32")]
use core::fmt;

#[cfg(target_arch = "wasm32")]
use kurbo::Point;
#[cfg(target_arch = "wasm32")]
use lightbox_gestures::machine::{InputEvent, Touches};
#[cfg(target_arch = "wasm32")]
use lightbox_transform::Transform;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlElement, MouseEvent, Touch, TouchEvent, WheelEvent, Window};

#[cfg(target_arch = "wasm32")]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Event timestamps are whole-millisecond scale, far below 2^53."
)]
fn ms_to_u64(ms: f64) -> u64 {
    ms as u64
}

#[cfg(target_arch = "wasm32")]
fn mouse_position(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

#[cfg(target_arch = "wasm32")]
fn touch_position(touch: &Touch) -> Point {
    Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()))
}

#[cfg(target_arch = "wasm32")]
fn touch_set(event: &TouchEvent) -> Option<Touches> {
    let list = event.touches();
    let mut points = Vec::new();
    for index in 0..list.length() {
        points.push(touch_position(&list.get(index)?));
    }
    Touches::from_slice(&points)
}

/// Current time in milliseconds, for status and tap timestamps.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn now_ms() -> u64 {
    ms_to_u64(js_sys::Date::now())
}

/// Converts a mouse press to a pan start.
///
/// Returns `None` for anything but the primary button.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn pointer_down(event: &MouseEvent) -> Option<InputEvent> {
    (event.button() == 0).then(|| InputEvent::PointerDown {
        pos: mouse_position(event),
    })
}

/// Converts a mouse move.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn pointer_move(event: &MouseEvent) -> InputEvent {
    InputEvent::PointerMove {
        pos: mouse_position(event),
    }
}

/// The event for a mouse release.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub const fn pointer_up() -> InputEvent {
    InputEvent::PointerUp
}

/// Converts a touch contact, carrying the event timestamp for double-tap
/// detection.
///
/// Returns `None` when the active touch set has no gesture meaning (zero
/// or more than two fingers).
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn touch_start(event: &TouchEvent) -> Option<InputEvent> {
    Some(InputEvent::TouchStart {
        touches: touch_set(event)?,
        time_ms: ms_to_u64(event.time_stamp()),
    })
}

/// Converts a touch move.
///
/// Returns `None` when the active touch set has no gesture meaning.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn touch_move(event: &TouchEvent) -> Option<InputEvent> {
    Some(InputEvent::TouchMove {
        touches: touch_set(event)?,
    })
}

/// The event for a lifted finger.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub const fn touch_end() -> InputEvent {
    InputEvent::TouchEnd
}

/// The event for a platform-aborted touch sequence.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub const fn touch_cancel() -> InputEvent {
    InputEvent::TouchCancel
}

/// Converts a wheel or trackpad scroll.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn wheel(event: &WheelEvent) -> InputEvent {
    InputEvent::Wheel {
        delta_y: event.delta_y(),
    }
}

/// Writes the viewport styles onto the image element.
///
/// `active` suppresses the transition while a gesture is live so frames
/// track the pointer instead of easing after it.
#[cfg(target_arch = "wasm32")]
pub fn apply_image_style(
    element: &HtmlElement,
    transform: Transform,
    active: bool,
) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("object-fit", lightbox_css::IMAGE_OBJECT_FIT)?;
    style.set_property("transform-origin", lightbox_css::TRANSFORM_ORIGIN)?;
    style.set_property("transform", &lightbox_css::transform_value(transform))?;
    style.set_property("transition", lightbox_css::transition_value(active))?;
    Ok(())
}

/// Writes the gesture-capture styles onto the container element.
#[cfg(target_arch = "wasm32")]
pub fn apply_container_style(element: &HtmlElement) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("touch-action", lightbox_css::CONTAINER_TOUCH_ACTION)?;
    style.set_property(
        "overscroll-behavior",
        lightbox_css::CONTAINER_OVERSCROLL_BEHAVIOR,
    )?;
    Ok(())
}

/// Window-level drag handlers that deregister themselves on drop.
///
/// Attach when a drag starts so it keeps panning after the cursor leaves
/// the viewer element; drop when it ends. Dropping removes both handlers
/// exactly once, on every exit path.
#[cfg(target_arch = "wasm32")]
pub struct DragListeners {
    window: Window,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for DragListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DragListeners { .. }")
    }
}

#[cfg(target_arch = "wasm32")]
impl DragListeners {
    /// Registers `mousemove` and `mouseup` handlers on the window.
    ///
    /// Each handler receives the already-converted [`InputEvent`].
    pub fn attach(
        window: &Window,
        mut on_move: impl FnMut(InputEvent) + 'static,
        mut on_up: impl FnMut(InputEvent) + 'static,
    ) -> Result<Self, JsValue> {
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            on_move(pointer_move(&event));
        });
        let on_up = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            on_up(pointer_up());
        });
        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
        Ok(Self {
            window: window.clone(),
            on_move,
            on_up,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DragListeners {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "mouseup",
            self.on_up.as_ref().unchecked_ref(),
        );
    }
}
