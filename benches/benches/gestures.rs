// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the `lightbox_gestures` machine.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use lightbox_gestures::machine::{GestureMachine, InputEvent, Touches};
use lightbox_transform::TransformState;

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn pan_script(moves: u32) -> Vec<InputEvent> {
    let mut script = vec![InputEvent::PointerDown { pos: Point::ZERO }];
    for i in 0..moves {
        let t = f64::from(i);
        script.push(InputEvent::PointerMove {
            pos: Point::new(t * 1.5, t * 0.75),
        });
    }
    script.push(InputEvent::PointerUp);
    script
}

fn pinch_script(moves: u32) -> Vec<InputEvent> {
    let mut script = vec![InputEvent::TouchStart {
        touches: Touches::Two(Point::ZERO, Point::new(100.0, 0.0)),
        time_ms: 0,
    }];
    for i in 0..moves {
        // Oscillate the spread so the scale keeps hitting its clamp range.
        let spread = 100.0 + 80.0 * f64::from(i % 50) / 50.0;
        script.push(InputEvent::TouchMove {
            touches: Touches::Two(Point::ZERO, Point::new(spread, 0.0)),
        });
    }
    script.push(InputEvent::TouchEnd);
    script
}

fn wheel_script(events: u32) -> Vec<InputEvent> {
    (0..events)
        .map(|i| InputEvent::Wheel {
            delta_y: if i % 3 == 0 { 120.0 } else { -120.0 },
        })
        .collect()
}

fn storm_script(events: u32, seed: u64) -> Vec<InputEvent> {
    let mut rng = Lcg::new(seed);
    let mut script = Vec::with_capacity(events as usize);
    for _ in 0..events {
        let x = f64::from(rng.next_u32() % 800);
        let y = f64::from(rng.next_u32() % 600);
        let event = match rng.next_u32() % 8 {
            0 => InputEvent::PointerDown {
                pos: Point::new(x, y),
            },
            1 | 2 => InputEvent::PointerMove {
                pos: Point::new(x, y),
            },
            3 => InputEvent::TouchStart {
                touches: Touches::One(Point::new(x, y)),
                time_ms: u64::from(rng.next_u32() % 10_000),
            },
            4 => InputEvent::TouchStart {
                touches: Touches::Two(Point::new(x, y), Point::new(y, x)),
                time_ms: u64::from(rng.next_u32() % 10_000),
            },
            5 => InputEvent::TouchMove {
                touches: Touches::Two(Point::new(x, y), Point::new(x + 40.0, y)),
            },
            6 => InputEvent::Wheel { delta_y: x - 400.0 },
            _ => InputEvent::TouchEnd,
        };
        script.push(event);
    }
    script
}

fn run_script(script: &[InputEvent]) -> TransformState {
    let mut machine = GestureMachine::new();
    let mut state = TransformState::new();
    for &event in script {
        black_box(machine.on_event(&mut state, event));
    }
    state
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_gestures");
    group.sample_size(50);

    for &moves in &[64_u32, 1_024_u32] {
        let pan = pan_script(moves);
        group.bench_function(format!("pan_drag(moves={moves})"), |b| {
            b.iter(|| run_script(&pan).transform());
        });

        let pinch = pinch_script(moves);
        group.bench_function(format!("pinch(moves={moves})"), |b| {
            b.iter(|| run_script(&pinch).transform());
        });

        let wheel = wheel_script(moves);
        group.bench_function(format!("wheel(events={moves})"), |b| {
            b.iter(|| run_script(&wheel).transform());
        });

        let storm = storm_script(moves, 0x11B0_0000_0000_0001);
        group.bench_function(format!("mixed_storm(events={moves})"), |b| {
            b.iter(|| run_script(&storm).transform());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
