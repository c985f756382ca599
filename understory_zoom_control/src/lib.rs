// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_control --heading-base-level=0

//! Understory Zoom Control: headless state for a floating zoom control.
//!
//! A zoom control is a small panel that scales one content region between
//! bounded zoom levels. This crate owns the interaction state of that panel
//! and leaves drawing to the toolkit:
//!
//! - [`levels`]: validated level scales, stepped (slider) or discrete (presets).
//! - [`ZoomControl`]: zoom in/out/reset/slider operations, persistence, and
//!   outside-press dismissal.
//! - [`drag`]: repositioning the panel, clamped to the viewport.
//! - [`layout`]: panel geometry and hit testing.
//! - [`store`]: the persistence port.
//! - [`target`]: the content region port and its scale transform.
//!
//! ## Ownership
//!
//! The control never reaches for globals. The content region is a
//! [`ZoomTarget`] handed over by the owner, persistence is a [`LevelStore`],
//! and visibility belongs to the owner: the control is told whether it is open
//! and asks to be closed through a callback.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use understory_zoom_control::{
//!     ContentTransform, MemoryStore, PointerOutcome, ZoomConfig, ZoomControl, ZoomTarget,
//! };
//!
//! #[derive(Default)]
//! struct Content {
//!     scale: f64,
//! }
//!
//! impl ZoomTarget for Content {
//!     fn apply(&mut self, transform: ContentTransform) {
//!         self.scale = transform.scale;
//!     }
//! }
//!
//! let mut control = ZoomControl::new(ZoomConfig::persisted_presets(), MemoryStore::new());
//! control.set_viewport(Size::new(1280.0, 720.0));
//! control.set_target(Content::default());
//!
//! let closed = Rc::new(Cell::new(false));
//! let flag = closed.clone();
//! control.on_close(move || flag.set(true));
//! control.set_open(true);
//!
//! assert_eq!(control.zoom_in(), Some(110));
//! assert_eq!(control.target().unwrap().scale, 1.1);
//!
//! // A press far away from the panel asks the owner to close it.
//! assert_eq!(control.pointer_down(Point::new(1.0, 1.0)), PointerOutcome::CloseRequested);
//! assert!(closed.get());
//!
//! // The level survives a remount.
//! let store = control.into_store();
//! let control = ZoomControl::<Content>::new(ZoomConfig::persisted_presets(), store);
//! assert_eq!(control.level(), 110);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for level changes, visibility and drag
//!   transitions (enabled by default).
//! - `serde`: derive `Serialize`/`Deserialize` for [`ZoomConfig`] and the level types.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) use debug;
pub(crate) use trace;

mod config;
mod control;
pub mod drag;
pub mod layout;
pub mod levels;
pub mod store;
pub mod target;

pub use config::{DEFAULT_STORAGE_KEY, ZoomConfig};
pub use control::{Activation, DEFAULT_BOTTOM_OFFSET, PointerOutcome, ZoomControl};
pub use layout::{ControlLayout, ControlPart};
pub use levels::{BASELINE_LEVEL, LevelScale, LevelsError, ZoomLevels};
pub use store::{LevelStore, MemoryStore};
pub use target::{ContentTransform, ZoomTarget};
