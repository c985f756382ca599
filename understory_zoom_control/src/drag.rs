// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state for repositioning the control within the viewport.
//!
//! ## Usage
//!
//! 1) Begin with [`ControlDrag::start`], passing the pointer position and the
//!    control's current origin.
//! 2) On each move event, call [`ControlDrag::update`] to get the new, clamped origin.
//! 3) End with [`ControlDrag::end`].
//!
//! The new origin is always computed from the total pointer offset since the
//! start, so a pointer that wanders past the viewport edge and comes back
//! resumes exact tracking.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_zoom_control::drag::ControlDrag;
//!
//! let viewport = Size::new(800.0, 600.0);
//! let control = Size::new(200.0, 50.0);
//! let mut drag = ControlDrag::default();
//!
//! drag.start(Point::new(110.0, 120.0), Point::new(100.0, 100.0));
//! assert!(drag.is_dragging());
//!
//! let origin = drag.update(Point::new(130.0, 90.0), viewport, control).unwrap();
//! assert_eq!(origin, Point::new(120.0, 70.0));
//!
//! // Clamped at the left edge.
//! let origin = drag.update(Point::new(-500.0, 90.0), viewport, control).unwrap();
//! assert_eq!(origin, Point::new(0.0, 70.0));
//! ```

use kurbo::{Point, Size};

/// Tracks an in-progress drag of the control.
#[derive(Debug, Clone, Default, Copy)]
pub struct ControlDrag {
    /// Pointer position when the drag started.
    pub pointer_start: Option<Point>,
    /// Control origin when the drag started.
    pub origin_start: Point,
}

impl ControlDrag {
    /// Start tracking a drag from `pointer`, with the control at `origin`.
    pub fn start(&mut self, pointer: Point, origin: Point) {
        self.pointer_start = Some(pointer);
        self.origin_start = origin;
    }

    /// Returns the control origin for `pointer`, clamped to the viewport.
    ///
    /// Returns `None` while idle.
    pub fn update(&self, pointer: Point, viewport: Size, control: Size) -> Option<Point> {
        let pointer_start = self.pointer_start?;
        let moved = self.origin_start + (pointer - pointer_start);
        Some(clamp_origin(moved, viewport, control))
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        self.pointer_start = None;
        self.origin_start = Point::ZERO;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.pointer_start.is_some()
    }
}

/// Clamps a control origin so the control stays inside the viewport.
///
/// Each axis is limited to `[0, viewport - control]`; when the control is
/// larger than the viewport the upper bound is `0`.
#[must_use]
pub fn clamp_origin(origin: Point, viewport: Size, control: Size) -> Point {
    let max_x = (viewport.width - control.width).max(0.0);
    let max_y = (viewport.height - control.height).max(0.0);
    Point::new(origin.x.clamp(0.0, max_x), origin.y.clamp(0.0, max_y))
}
