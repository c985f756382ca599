// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control surface geometry and hit testing.
//!
//! A [`ControlLayout`] describes the control in its own coordinate space: its
//! overall [`Size`] and the rectangles of the interactive parts placed on it.
//! Hit testing answers whether a viewport point is outside the control, on one
//! of its interactive parts, or on the plain body (where a drag may start).
//!
//! ```
//! use kurbo::Point;
//! use understory_zoom_control::layout::{ControlLayout, ControlPart};
//!
//! let layout = ControlLayout::standard(false);
//! let origin = Point::new(100.0, 100.0);
//!
//! assert_eq!(layout.hit_test(origin, Point::new(0.0, 0.0)), None);
//! assert_eq!(layout.hit_test(origin, Point::new(101.0, 101.0)), Some(ControlPart::Body));
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

/// A region of the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlPart {
    /// Non-interactive surface; the drag handle.
    Body,
    /// The zoom-out button.
    ZoomOut,
    /// The level slider.
    Slider,
    /// The zoom-in button.
    ZoomIn,
    /// The reset-to-100% button.
    Reset,
    /// The close button.
    Close,
}

impl ControlPart {
    /// Returns `true` for parts that handle their own pointer input.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        !matches!(self, Self::Body)
    }
}

/// Geometry of the control surface, relative to its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlLayout {
    size: Size,
    parts: Vec<(ControlPart, Rect)>,
}

const PADDING_X: f64 = 24.0;
const PADDING_Y: f64 = 12.0;
const GAP: f64 = 16.0;
const BUTTON: f64 = 32.0;
const READOUT_WIDTH: f64 = 35.0;
const READOUT_GAP: f64 = 12.0;
const SLIDER_WIDTH: f64 = 160.0;
const SLIDER_HEIGHT: f64 = 8.0;
const DIVIDER_WIDTH: f64 = 1.0;

impl ControlLayout {
    /// A layout of the given size with no interactive parts.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            parts: Vec::new(),
        }
    }

    /// Adds an interactive part covering `rect`.
    ///
    /// Later parts win where rectangles overlap.
    #[must_use]
    pub fn with_part(mut self, part: ControlPart, rect: Rect) -> Self {
        self.parts.push((part, rect));
        self
    }

    /// The pill-shaped row: zoom out, readout, optional slider, zoom in,
    /// divider, reset, close.
    #[must_use]
    pub fn standard(with_slider: bool) -> Self {
        let height = PADDING_Y * 2.0 + BUTTON;
        let mut parts = Vec::with_capacity(5);
        let mut x = PADDING_X;

        let mut button = |part: ControlPart, x: &mut f64| {
            parts.push((
                part,
                Rect::from_origin_size((*x, PADDING_Y), (BUTTON, BUTTON)),
            ));
            *x += BUTTON + GAP;
        };

        button(ControlPart::ZoomOut, &mut x);
        x += READOUT_WIDTH;
        let slider = with_slider.then(|| {
            let rect = Rect::from_origin_size(
                (x + READOUT_GAP, (height - SLIDER_HEIGHT) / 2.0),
                (SLIDER_WIDTH, SLIDER_HEIGHT),
            );
            x += READOUT_GAP + SLIDER_WIDTH;
            rect
        });
        x += GAP;
        button(ControlPart::ZoomIn, &mut x);
        x += DIVIDER_WIDTH + GAP;
        button(ControlPart::Reset, &mut x);
        button(ControlPart::Close, &mut x);
        let width = x - GAP + PADDING_X;

        if let Some(rect) = slider {
            parts.push((ControlPart::Slider, rect));
        }
        Self {
            size: Size::new(width, height),
            parts,
        }
    }

    /// Overall size of the control.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Rectangle of `part` relative to the control origin, if present.
    #[must_use]
    pub fn part_rect(&self, part: ControlPart) -> Option<Rect> {
        if part == ControlPart::Body {
            return Some(self.size.to_rect());
        }
        self.parts
            .iter()
            .rev()
            .find_map(|(p, rect)| (*p == part).then_some(*rect))
    }

    /// Classifies a viewport `point` for a control placed at `origin`.
    ///
    /// Returns `None` when the point is outside the control.
    #[must_use]
    pub fn hit_test(&self, origin: Point, point: Point) -> Option<ControlPart> {
        let local = Point::new(point.x - origin.x, point.y - origin.y);
        if !self.size.to_rect().contains(local) {
            return None;
        }
        let part = self
            .parts
            .iter()
            .rev()
            .find_map(|(part, rect)| rect.contains(local).then_some(*part));
        Some(part.unwrap_or(ControlPart::Body))
    }
}

impl Default for ControlLayout {
    fn default() -> Self {
        Self::standard(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(layout: &ControlLayout, part: ControlPart) -> Point {
        layout.part_rect(part).unwrap().center()
    }

    #[test]
    fn standard_without_slider_measures_the_pill() {
        let layout = ControlLayout::standard(false);
        // 24 + 32 + 16 + 35 + 16 + 32 + 16 + 1 + 16 + 32 + 16 + 32 + 24
        assert_eq!(layout.size(), Size::new(292.0, 56.0));
        assert_eq!(layout.part_rect(ControlPart::Slider), None);
    }

    #[test]
    fn standard_with_slider_is_wider() {
        let layout = ControlLayout::standard(true);
        assert_eq!(layout.size(), Size::new(464.0, 56.0));
        let slider = layout.part_rect(ControlPart::Slider).unwrap();
        assert_eq!(slider.width(), 160.0);
        assert_eq!(slider.x0, 24.0 + 32.0 + 16.0 + 35.0 + 12.0);
    }

    #[test]
    fn parts_do_not_overlap() {
        let layout = ControlLayout::standard(true);
        let parts = [
            ControlPart::ZoomOut,
            ControlPart::Slider,
            ControlPart::ZoomIn,
            ControlPart::Reset,
            ControlPart::Close,
        ];
        for (i, a) in parts.iter().enumerate() {
            for b in &parts[i + 1..] {
                let ra = layout.part_rect(*a).unwrap();
                let rb = layout.part_rect(*b).unwrap();
                assert!(ra.intersect(rb).area() <= 0.0, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn hit_test_classifies_points() {
        let layout = ControlLayout::standard(true);
        let origin = Point::new(50.0, 400.0);
        let offset = origin.to_vec2();

        for part in [
            ControlPart::ZoomOut,
            ControlPart::Slider,
            ControlPart::ZoomIn,
            ControlPart::Reset,
            ControlPart::Close,
        ] {
            let p = center_of(&layout, part) + offset;
            assert_eq!(layout.hit_test(origin, p), Some(part));
        }

        // Padding is body.
        assert_eq!(
            layout.hit_test(origin, Point::new(52.0, 402.0)),
            Some(ControlPart::Body)
        );
        // Outside on every side.
        assert_eq!(layout.hit_test(origin, Point::new(49.0, 410.0)), None);
        assert_eq!(layout.hit_test(origin, Point::new(60.0, 399.0)), None);
        assert_eq!(layout.hit_test(origin, Point::new(600.0, 410.0)), None);
        assert_eq!(layout.hit_test(origin, Point::new(60.0, 500.0)), None);
    }

    #[test]
    fn custom_parts_overlay_in_insertion_order() {
        let layout = ControlLayout::new(Size::new(100.0, 40.0))
            .with_part(ControlPart::Reset, Rect::new(0.0, 0.0, 50.0, 40.0))
            .with_part(ControlPart::Close, Rect::new(40.0, 0.0, 60.0, 40.0));
        assert_eq!(
            layout.hit_test(Point::ZERO, Point::new(45.0, 10.0)),
            Some(ControlPart::Close)
        );
        assert_eq!(
            layout.hit_test(Point::ZERO, Point::new(10.0, 10.0)),
            Some(ControlPart::Reset)
        );
        assert_eq!(
            layout.hit_test(Point::ZERO, Point::new(80.0, 10.0)),
            Some(ControlPart::Body)
        );
    }

    #[test]
    fn only_body_is_not_interactive() {
        assert!(!ControlPart::Body.is_interactive());
        assert!(ControlPart::Close.is_interactive());
        assert!(ControlPart::Slider.is_interactive());
    }
}
