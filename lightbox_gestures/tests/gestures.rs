// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `lightbox_gestures` crate.
//!
//! These drive complete user sessions through `GestureMachine` with
//! synthetic events, the same call path a browser adapter uses, with a
//! focus on how consecutive gestures hand over to each other.

use kurbo::Point;
use lightbox_gestures::machine::{GestureEvent, GestureMachine, GesturePhase, InputEvent, Touches};
use lightbox_transform::{Transform, TransformState};

fn touch_start(touches: Touches, time_ms: u64) -> InputEvent {
    InputEvent::TouchStart { touches, time_ms }
}

fn touch_move(touches: Touches) -> InputEvent {
    InputEvent::TouchMove { touches }
}

fn one(x: f64, y: f64) -> Touches {
    Touches::One(Point::new(x, y))
}

fn two(ax: f64, ay: f64, bx: f64, by: f64) -> Touches {
    Touches::Two(Point::new(ax, ay), Point::new(bx, by))
}

#[test]
fn mouse_drag_session_from_press_to_release() {
    let mut state = TransformState::new();
    let mut machine = GestureMachine::new();

    machine.on_event(
        &mut state,
        InputEvent::PointerDown {
            pos: Point::new(100.0, 100.0),
        },
    );
    machine.on_event(
        &mut state,
        InputEvent::PointerMove {
            pos: Point::new(120.0, 90.0),
        },
    );
    machine.on_event(
        &mut state,
        InputEvent::PointerMove {
            pos: Point::new(150.0, 130.0),
        },
    );
    let done = machine.on_event(&mut state, InputEvent::PointerUp);

    assert_eq!(done, Some(GestureEvent::End));
    assert_eq!(machine.phase(), GesturePhase::Idle);
    // Only the last position matters: total travel is (50, 30).
    assert_eq!(state.transform(), Transform::new(1.0, 50.0, 30.0));
}

#[test]
fn pan_then_pinch_then_pan_keeps_sessions_separate() {
    let mut state = TransformState::new();
    let mut machine = GestureMachine::new();

    // Finger one drags the image 10 px right.
    machine.on_event(&mut state, touch_start(one(50.0, 50.0), 1_000));
    machine.on_event(&mut state, touch_move(one(60.0, 50.0)));
    assert_eq!(state.translation(), (10.0, 0.0).into());

    // Finger two lands: the pan is replaced by a pinch that doubles the
    // scale without touching the pan offset.
    machine.on_event(&mut state, touch_start(two(60.0, 50.0, 160.0, 50.0), 1_100));
    machine.on_event(&mut state, touch_move(two(10.0, 50.0, 210.0, 50.0)));
    assert_eq!(state.scale(), 2.0);
    assert_eq!(state.translation(), (10.0, 0.0).into());

    // Everything lifts; a fresh one-finger drag starts from the kept offset.
    machine.on_event(&mut state, InputEvent::TouchEnd);
    machine.on_event(&mut state, touch_start(one(0.0, 0.0), 2_000));
    machine.on_event(&mut state, touch_move(one(-5.0, 15.0)));

    assert_eq!(state.transform(), Transform::new(2.0, 5.0, 15.0));
}

#[test]
fn double_tap_toggles_between_zoomed_and_reset() {
    let mut state = TransformState::new();
    let mut machine = GestureMachine::new();

    machine.on_event(&mut state, touch_start(one(80.0, 80.0), 1_000));
    machine.on_event(&mut state, InputEvent::TouchEnd);
    let zoomed = machine.on_event(&mut state, touch_start(one(80.0, 80.0), 1_180));
    assert_eq!(zoomed, Some(GestureEvent::DoubleTap));
    assert_eq!(state.transform(), Transform::new(2.5, 0.0, 0.0));

    machine.on_event(&mut state, InputEvent::TouchEnd);
    machine.on_event(&mut state, touch_start(one(80.0, 80.0), 2_000));
    machine.on_event(&mut state, InputEvent::TouchEnd);
    let reset = machine.on_event(&mut state, touch_start(one(80.0, 80.0), 2_120));

    assert_eq!(reset, Some(GestureEvent::DoubleTap));
    assert_eq!(state.transform(), Transform::IDENTITY);
}

#[test]
fn aborted_touch_sequence_leaves_a_clean_machine() {
    let mut state = TransformState::new();
    let mut machine = GestureMachine::new();

    machine.on_event(&mut state, touch_start(one(10.0, 10.0), 500));
    machine.on_event(&mut state, touch_move(one(40.0, 10.0)));
    let cancelled = machine.on_event(&mut state, InputEvent::TouchCancel);

    assert_eq!(cancelled, Some(GestureEvent::End));
    assert!(!machine.is_active());
    // The partial pan survives; only the session is gone.
    assert_eq!(state.translation(), (30.0, 0.0).into());

    // Moves after the cancel are inert until a new gesture starts.
    assert_eq!(machine.on_event(&mut state, touch_move(one(90.0, 90.0))), None);
    assert_eq!(state.translation(), (30.0, 0.0).into());
}

#[test]
fn wheel_and_pinch_zoom_compose_with_clamping() {
    let mut state = TransformState::new();
    let mut machine = GestureMachine::new();

    // Ten wheel steps up from identity: 1.1^10, still inside the range.
    for _ in 0..10 {
        machine.on_event(&mut state, InputEvent::Wheel { delta_y: -3.0 });
    }
    let wheeled = state.scale();
    assert!((wheeled - 1.1_f64.powi(10)).abs() < 1e-9);

    // A wide pinch saturates at the maximum and stays there.
    machine.on_event(&mut state, touch_start(two(0.0, 0.0, 50.0, 0.0), 3_000));
    machine.on_event(&mut state, touch_move(two(0.0, 0.0, 800.0, 0.0)));
    machine.on_event(&mut state, touch_move(two(0.0, 0.0, 900.0, 0.0)));
    assert_eq!(state.scale(), state.max_scale());

    machine.on_event(&mut state, InputEvent::TouchEnd);

    // Wheel steps down walk the scale back below the ceiling.
    machine.on_event(&mut state, InputEvent::Wheel { delta_y: 3.0 });
    assert!((state.scale() - state.max_scale() * 0.9).abs() < 1e-9);
}

#[test]
fn easing_is_suppressed_exactly_while_a_session_is_live() {
    let mut state = TransformState::new();
    let mut machine = GestureMachine::new();

    assert!(!machine.is_active());

    machine.on_event(&mut state, touch_start(one(0.0, 0.0), 100));
    assert!(machine.is_active());

    machine.on_event(&mut state, touch_move(one(10.0, 0.0)));
    assert!(machine.is_active());

    // Wheel zoom mid-pan changes the scale but not the session.
    machine.on_event(&mut state, InputEvent::Wheel { delta_y: -1.0 });
    assert!(machine.is_active());

    machine.on_event(&mut state, InputEvent::TouchEnd);
    assert!(!machine.is_active());
}
