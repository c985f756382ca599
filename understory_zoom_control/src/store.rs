// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistence port for the zoom level.
//!
//! The control never touches ambient storage. Hosts inject a [`LevelStore`]
//! (browser local storage, a settings file, a test double) and the control
//! reads it on mount and on every reopen, and writes it on every level change.
//! Values are stored as decimal integer strings.

use alloc::string::{String, ToString};

use hashbrown::HashMap;

use crate::levels::ZoomLevels;

/// A minimal string key-value store.
///
/// Writes are last-writer-wins and never fail from the control's point of
/// view; an implementation that cannot persist should drop the value.
pub trait LevelStore {
    /// Returns the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str);
}

impl<S: LevelStore + ?Sized> LevelStore for &mut S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) {
        (**self).save(key, value);
    }
}

/// In-memory [`LevelStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LevelStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.into(), value.into());
    }
}

/// Reads a level from `store`, snapping it into `levels`.
///
/// Unparsable values read as absent.
pub(crate) fn read_level<S: LevelStore + ?Sized>(
    store: &S,
    key: &str,
    levels: &ZoomLevels,
) -> Option<u16> {
    let raw = store.load(key)?;
    let value = raw.trim().parse::<u16>().ok()?;
    Some(levels.snap(value))
}

pub(crate) fn write_level<S: LevelStore + ?Sized>(store: &mut S, key: &str, level: u16) {
    store.save(key, &level.to_string());
}
