// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The content region a zoom control scales.

use kurbo::{Affine, Point, Vec2};

use crate::levels::BASELINE_LEVEL;

/// Transform origin, as a fraction of the content box: top edge, horizontal center.
pub const TRANSFORM_ORIGIN: Point = Point::new(0.5, 0.0);

/// Scale applied to the content region for a given zoom level.
///
/// The content is scaled about its top-center and its width is divided by the
/// scale, so that once scaled it occupies the same width as its parent
/// instead of overflowing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform {
    /// Uniform scale factor; `1.0` at 100%.
    pub scale: f64,
    /// Width of the content box as a percentage of its parent.
    pub width_percent: f64,
}

impl ContentTransform {
    /// Transform for `level` percent.
    #[must_use]
    pub fn for_level(level: u16) -> Self {
        let scale = f64::from(level) / f64::from(BASELINE_LEVEL);
        Self {
            scale,
            width_percent: 100.0 / scale,
        }
    }

    /// Layout width of the content box inside a parent of `parent_width`.
    #[must_use]
    pub fn layout_width(&self, parent_width: f64) -> f64 {
        parent_width * self.width_percent / 100.0
    }

    /// Affine mapping content-local coordinates to their scaled position,
    /// pivoting on [`TRANSFORM_ORIGIN`] of a box `layout_width` wide.
    #[must_use]
    pub fn affine(&self, layout_width: f64) -> Affine {
        let pivot = Vec2::new(layout_width * TRANSFORM_ORIGIN.x, 0.0);
        Affine::translate(pivot) * Affine::scale(self.scale) * Affine::translate(-pivot)
    }
}

/// Handle to the content region scaled by the control.
///
/// The owner of the control supplies this instead of the control looking the
/// region up by name.
pub trait ZoomTarget {
    /// Applies `transform` to the content region.
    fn apply(&mut self, transform: ContentTransform);
}

impl<T: ZoomTarget + ?Sized> ZoomTarget for &mut T {
    fn apply(&mut self, transform: ContentTransform) {
        (**self).apply(transform);
    }
}
