// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted gesture session against the headless viewer.
//!
//! Feeds the same event stream a browser adapter would and prints the
//! resulting transform after each step.
//!
//! Run:
//! - `cargo run -p lightbox_demos --example gesture_session`

use kurbo::Point;
use lightbox_gestures::machine::{InputEvent, Touches};
use lightbox_viewer::Viewer;

fn show(viewer: &Viewer, label: &str) {
    let t = viewer.transform();
    println!(
        "{label:<26} scale={:<5.2} offset=({:>6.1}, {:>6.1}) active={}",
        t.scale,
        t.x,
        t.y,
        viewer.is_gesture_active()
    );
}

fn main() {
    let mut viewer = Viewer::new("https://example.com/renders/armchair.png");
    show(&viewer, "fresh viewer");

    // Mouse drag: the offset is start-position plus total travel.
    viewer.on_event(InputEvent::PointerDown {
        pos: Point::new(100.0, 100.0),
    });
    viewer.on_event(InputEvent::PointerMove {
        pos: Point::new(150.0, 130.0),
    });
    show(&viewer, "dragging");
    viewer.on_event(InputEvent::PointerUp);
    show(&viewer, "released");

    // Wheel steps are flat: sign in, magnitude ignored.
    viewer.on_event(InputEvent::Wheel { delta_y: -120.0 });
    viewer.on_event(InputEvent::Wheel { delta_y: -1.0 });
    show(&viewer, "two wheel steps in");

    // Two fingers: scale follows the spread ratio, re-based every move.
    viewer.on_event(InputEvent::TouchStart {
        touches: Touches::Two(Point::new(160.0, 200.0), Point::new(260.0, 200.0)),
        time_ms: 1_000,
    });
    viewer.on_event(InputEvent::TouchMove {
        touches: Touches::Two(Point::new(140.0, 200.0), Point::new(290.0, 200.0)),
    });
    show(&viewer, "pinching out");
    viewer.on_event(InputEvent::TouchEnd);
    show(&viewer, "fingers lifted");

    // A double tap on a zoomed view resets it.
    viewer.on_event(InputEvent::TouchStart {
        touches: Touches::One(Point::new(200.0, 200.0)),
        time_ms: 2_000,
    });
    viewer.on_event(InputEvent::TouchEnd);
    viewer.on_event(InputEvent::TouchStart {
        touches: Touches::One(Point::new(200.0, 200.0)),
        time_ms: 2_200,
    });
    show(&viewer, "double tapped");

    println!();
    println!("container style: {}", viewer.container_style());
    println!("image style:     {}", viewer.image_style());
}
