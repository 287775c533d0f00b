// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `lightbox_css` style rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lightbox_transform::Transform;

fn sample_transforms() -> Vec<Transform> {
    let mut transforms = Vec::with_capacity(64);
    for i in 0..64 {
        let t = f64::from(i);
        transforms.push(Transform::new(1.0 + t * 0.05, t * 3.25, -t * 1.5));
    }
    transforms
}

fn bench_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_css");
    let transforms = sample_transforms();

    group.bench_function("transform_value", |b| {
        b.iter(|| {
            for &t in &transforms {
                black_box(lightbox_css::transform_value(black_box(t)));
            }
        });
    });

    group.bench_function("image_style_idle", |b| {
        b.iter(|| {
            for &t in &transforms {
                black_box(lightbox_css::image_style(black_box(t), false));
            }
        });
    });

    group.bench_function("image_style_active", |b| {
        b.iter(|| {
            for &t in &transforms {
                black_box(lightbox_css::image_style(black_box(t), true));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_styles);
criterion_main!(benches);
