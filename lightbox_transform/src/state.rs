// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::transform::Transform;

/// Default minimum zoom scale: the image is never smaller than its
/// contain-fitted size.
pub const MIN_SCALE: f64 = 1.0;

/// Default maximum zoom scale.
pub const MAX_SCALE: f64 = 5.0;

/// Owned pan/zoom state with a clamped scale range.
///
/// All mutation funnels through [`TransformState::apply`]: candidate scales
/// are clamped into `[min_scale, max_scale]`, pan offsets pass through
/// unconstrained. At every instant the held scale is inside the configured
/// range; there are no error conditions.
#[derive(Clone, Debug)]
pub struct TransformState {
    current: Transform,
    min_scale: f64,
    max_scale: f64,
}

impl TransformState {
    /// Creates state at the identity transform with the default scale range
    /// of [`MIN_SCALE`] to [`MAX_SCALE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Transform::IDENTITY,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.current
    }

    /// Returns the current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.current.scale
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.current.translation()
    }

    /// Returns the minimum zoom scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the maximum zoom scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the minimum and maximum zoom scales.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`.
    /// The current scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.apply(self.current);
    }

    /// Applies a candidate transform, clamping its scale into range.
    ///
    /// The pan offset is taken as-is; panning is deliberately unbounded. A
    /// non-finite candidate scale keeps the current scale instead of
    /// poisoning the state.
    pub fn apply(&mut self, candidate: Transform) {
        let scale = if candidate.scale.is_finite() {
            candidate.scale.clamp(self.min_scale, self.max_scale)
        } else {
            self.current.scale
        };
        self.current = Transform::new(scale, candidate.x, candidate.y);
    }

    /// Returns to the identity transform (clamped into the scale range).
    ///
    /// Resetting an already-reset state changes nothing.
    pub fn reset(&mut self) {
        self.apply(Transform::IDENTITY);
    }

    /// Multiplies the current scale by `factor`, clamped; pan is held.
    ///
    /// Non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        self.apply(self.current.with_scale(self.current.scale * factor));
    }

    /// Offsets the pan by a delta in device pixels; scale is held.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let Vec2 { x, y } = self.current.translation() + delta;
        self.apply(self.current.with_offset(x, y));
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}
