// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, Size};

use crate::config::ZoomConfig;
use crate::drag::{ControlDrag, clamp_origin};
use crate::layout::{ControlLayout, ControlPart};
use crate::levels::{BASELINE_LEVEL, ZoomLevels};
use crate::store::{LevelStore, MemoryStore, read_level, write_level};
use crate::target::{ContentTransform, ZoomTarget};

/// Distance between the bottom of the viewport and the bottom of the control
/// when it sits at its default anchor.
pub const DEFAULT_BOTTOM_OFFSET: f64 = 80.0;

/// What a pointer-down did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The control is closed, or the press was outside while dragging.
    Ignored,
    /// The press was outside the control; the owner was asked to close it.
    CloseRequested,
    /// The press landed on an interactive part, which handles it.
    Child(ControlPart),
    /// The press landed on the body and started a drag.
    DragStarted,
    /// The press landed on the body of a control that does not drag.
    Inside,
}

/// What activating a part did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The level changed to the contained value.
    Zoomed(u16),
    /// The level was already at the relevant bound.
    Unchanged,
    /// The owner was asked to close the control.
    CloseRequested,
}

type LevelCallback = Box<dyn FnMut(u16)>;
type CloseCallback = Box<dyn FnMut()>;

/// Floating zoom control state.
///
/// Owns the current zoom level, the drag position of the control and the
/// wiring to the content region ([`ZoomTarget`]) and persistence
/// ([`LevelStore`]). Visibility belongs to the owner: the control is told
/// with [`set_open`](Self::set_open) and asks to be closed through the
/// [`on_close`](Self::on_close) callback.
///
/// Level changes apply the transform to the target, notify the
/// [`on_zoom_change`](Self::on_zoom_change) callback, and persist when a
/// storage key is configured, in that order.
pub struct ZoomControl<T, S = MemoryStore> {
    config: ZoomConfig,
    level: u16,
    open: bool,
    position: Option<Point>,
    drag: ControlDrag,
    viewport: Size,
    layout: ControlLayout,
    target: Option<T>,
    store: S,
    on_zoom_change: Option<LevelCallback>,
    on_close: Option<CloseCallback>,
}

impl<T: ZoomTarget, S: LevelStore> ZoomControl<T, S> {
    /// Mounts a control.
    ///
    /// The level is read from `store` when `config` has a storage key, and is
    /// [`BASELINE_LEVEL`] otherwise. The control starts closed, with no target
    /// and an empty viewport.
    pub fn new(config: ZoomConfig, store: S) -> Self {
        let layout = ControlLayout::standard(config.levels.is_stepped());
        let mut control = Self {
            config,
            level: BASELINE_LEVEL,
            open: false,
            position: None,
            drag: ControlDrag::default(),
            viewport: Size::ZERO,
            layout,
            target: None,
            store,
            on_zoom_change: None,
            on_close: None,
        };
        if let Some(level) = control.persisted_level() {
            control.level = level;
        }
        crate::debug!(zoom = control.level, "zoom control mounted");
        control
    }

    /// Registers the callback invoked with every new level.
    pub fn on_zoom_change(&mut self, callback: impl FnMut(u16) + 'static) {
        self.on_zoom_change = Some(Box::new(callback));
    }

    /// Registers the callback invoked when the control asks to be closed.
    pub fn on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Attaches the content region and applies the current level to it.
    pub fn set_target(&mut self, target: T) {
        self.target = Some(target);
        self.apply_zoom();
    }

    /// Detaches and returns the content region.
    pub fn clear_target(&mut self) -> Option<T> {
        self.target.take()
    }

    /// The attached content region.
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// The attached content region, mutably.
    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    /// The persistence store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unmounts the control, returning the store.
    ///
    /// Everything but the persisted level is dropped.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The configuration the control was mounted with.
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// The allowed levels.
    pub fn levels(&self) -> &ZoomLevels {
        &self.config.levels
    }

    /// Current level, in percent.
    pub fn level(&self) -> u16 {
        self.level
    }

    /// Readout text for the current level, for example `"120%"`.
    pub fn level_label(&self) -> String {
        format!("{}%", self.level)
    }

    /// Returns `true` if [`zoom_in`](Self::zoom_in) would change the level.
    pub fn can_zoom_in(&self) -> bool {
        self.config.levels.next_above(self.level).is_some()
    }

    /// Returns `true` if [`zoom_out`](Self::zoom_out) would change the level.
    pub fn can_zoom_out(&self) -> bool {
        self.config.levels.next_below(self.level).is_some()
    }

    /// Moves to the next allowed level above the current one.
    ///
    /// Returns the new level, or `None` at the maximum, in which case nothing
    /// happens.
    pub fn zoom_in(&mut self) -> Option<u16> {
        let next = self.config.levels.next_above(self.level)?;
        self.commit(next);
        Some(next)
    }

    /// Moves to the next allowed level below the current one.
    ///
    /// Returns the new level, or `None` at the minimum, in which case nothing
    /// happens.
    pub fn zoom_out(&mut self) -> Option<u16> {
        let next = self.config.levels.next_below(self.level)?;
        self.commit(next);
        Some(next)
    }

    /// Returns to [`BASELINE_LEVEL`], even if already there.
    pub fn reset(&mut self) -> u16 {
        self.commit(BASELINE_LEVEL);
        BASELINE_LEVEL
    }

    /// Sets the level from a slider value, snapped to the nearest allowed level.
    ///
    /// Returns the new level, or `None` if the snapped value equals the current
    /// level, in which case nothing happens.
    pub fn set_level(&mut self, value: u16) -> Option<u16> {
        let level = self.config.levels.snap(value);
        if level == self.level {
            return None;
        }
        self.commit(level);
        Some(level)
    }

    /// Applies the current level to the content region.
    ///
    /// Does nothing when no target is attached.
    pub fn apply_zoom(&mut self) {
        let Some(target) = self.target.as_mut() else {
            crate::trace!(zoom = self.level, "no zoom target attached");
            return;
        };
        target.apply(ContentTransform::for_level(self.level));
    }

    fn commit(&mut self, level: u16) {
        crate::debug!(from = self.level, to = level, "zoom level changed");
        self.level = level;
        self.apply_zoom();
        if let Some(callback) = self.on_zoom_change.as_mut() {
            callback(level);
        }
        if let Some(key) = self.config.storage_key.as_deref() {
            write_level(&mut self.store, key, level);
        }
    }

    fn persisted_level(&self) -> Option<u16> {
        let key = self.config.storage_key.as_deref()?;
        read_level(&self.store, key, &self.config.levels)
    }

    /// Returns `true` while the owner shows the control.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Reports the owner's visibility state.
    ///
    /// Opening re-reads the persisted level and applies it, notifying the
    /// [`on_zoom_change`](Self::on_zoom_change) callback if the level moved.
    /// Opening never writes to the store. Closing cancels any drag in progress.
    pub fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        if open {
            let previous = self.level;
            if let Some(level) = self.persisted_level() {
                self.level = level;
            }
            self.apply_zoom();
            if self.level != previous
                && let Some(callback) = self.on_zoom_change.as_mut()
            {
                callback(self.level);
            }
        } else {
            self.drag.end();
        }
        crate::debug!(open, zoom = self.level, "zoom control visibility changed");
    }

    /// Asks the owner to close the control.
    pub fn close(&mut self) {
        crate::debug!("zoom control close requested");
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    /// Performs the click action of `part`.
    ///
    /// The slider and the body have no click action and report
    /// [`Activation::Unchanged`]; use [`set_level`](Self::set_level) for the
    /// slider.
    pub fn activate(&mut self, part: ControlPart) -> Activation {
        let changed = match part {
            ControlPart::ZoomIn => self.zoom_in(),
            ControlPart::ZoomOut => self.zoom_out(),
            ControlPart::Reset => Some(self.reset()),
            ControlPart::Close => {
                self.close();
                return Activation::CloseRequested;
            }
            ControlPart::Slider | ControlPart::Body => None,
        };
        changed.map_or(Activation::Unchanged, Activation::Zoomed)
    }

    /// The control surface geometry.
    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Replaces the control surface geometry, for toolkits that measure it.
    pub fn set_layout(&mut self, layout: ControlLayout) {
        self.layout = layout;
        self.reclamp();
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Reports a viewport resize. A dragged position is clamped into it.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.reclamp();
    }

    fn reclamp(&mut self) {
        if let Some(position) = self.position {
            self.position = Some(clamp_origin(position, self.viewport, self.layout.size()));
        }
    }

    /// Position the control was dragged to, if it has been dragged.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Top-left corner of the control in the viewport.
    ///
    /// Before any drag this is the default anchor: horizontally centered,
    /// [`DEFAULT_BOTTOM_OFFSET`] above the bottom edge.
    pub fn origin(&self) -> Point {
        self.position.unwrap_or_else(|| {
            let size = self.layout.size();
            let anchor = Point::new(
                (self.viewport.width - size.width) / 2.0,
                self.viewport.height - size.height - DEFAULT_BOTTOM_OFFSET,
            );
            clamp_origin(anchor, self.viewport, size)
        })
    }

    /// Bounds of the control in the viewport.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.layout.size())
    }

    /// Returns `true` while the control is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Handles a pointer press at `point`, in viewport coordinates.
    ///
    /// While open, a press outside the control asks the owner to close it,
    /// unless a drag is in progress. A press on the body starts a drag when
    /// the control is draggable.
    pub fn pointer_down(&mut self, point: Point) -> PointerOutcome {
        if !self.open {
            return PointerOutcome::Ignored;
        }
        let origin = self.origin();
        match self.layout.hit_test(origin, point) {
            None if self.drag.is_dragging() => PointerOutcome::Ignored,
            None => {
                self.close();
                PointerOutcome::CloseRequested
            }
            Some(ControlPart::Body) if self.config.draggable => {
                self.drag.start(point, origin);
                crate::trace!(x = origin.x, y = origin.y, "zoom control drag started");
                PointerOutcome::DragStarted
            }
            Some(ControlPart::Body) => PointerOutcome::Inside,
            Some(part) => PointerOutcome::Child(part),
        }
    }

    /// Handles pointer movement. Returns the new position while dragging.
    pub fn pointer_move(&mut self, point: Point) -> Option<Point> {
        let position = self
            .drag
            .update(point, self.viewport, self.layout.size())?;
        self.position = Some(position);
        Some(position)
    }

    /// Handles a pointer release anywhere, ending any drag.
    pub fn pointer_up(&mut self, point: Point) {
        if self.drag.is_dragging() {
            self.pointer_move(point);
            self.drag.end();
            crate::trace!("zoom control drag ended");
        }
    }
}

impl<T, S> fmt::Debug for ZoomControl<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomControl")
            .field("config", &self.config)
            .field("level", &self.level)
            .field("open", &self.open)
            .field("position", &self.position)
            .field("drag", &self.drag)
            .field("viewport", &self.viewport)
            .field("has_target", &self.target.is_some())
            .finish_non_exhaustive()
    }
}
