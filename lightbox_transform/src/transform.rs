// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

/// View transform applied to the displayed image.
///
/// `scale` is a uniform zoom factor; `x`/`y` are a pan offset in device
/// pixels applied to the scaled image. The composition order matches the
/// CSS `translate(x, y) scale(scale)` shorthand with the scale origin at
/// the element center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Horizontal pan offset in device pixels.
    pub x: f64,
    /// Vertical pan offset in device pixels.
    pub y: f64,
}

impl Transform {
    /// The untransformed view: unit scale, zero pan.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Creates a transform from a scale and a pan offset.
    #[must_use]
    pub const fn new(scale: f64, x: f64, y: f64) -> Self {
        Self { scale, x, y }
    }

    /// Returns this transform with the scale replaced, pan unchanged.
    #[must_use]
    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Returns this transform with the pan offset replaced, scale unchanged.
    #[must_use]
    pub const fn with_offset(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Returns the pan offset as a vector.
    #[must_use]
    pub const fn translation(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the equivalent affine map for element-centered coordinates.
    ///
    /// For a coordinate system whose origin sits at the element center this
    /// reproduces the CSS rendering: scale about the center first, then
    /// translate the scaled result by the pan offset.
    #[must_use]
    pub fn as_affine(self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
