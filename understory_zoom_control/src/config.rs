// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::levels::ZoomLevels;

/// Storage key used by [`ZoomConfig::persisted_presets`].
pub const DEFAULT_STORAGE_KEY: &str = "zoom-level";

/// Static configuration of a [`ZoomControl`](crate::ZoomControl).
///
/// The two constructors reflect the two shipped behaviors of the control,
/// which disagree on bounds and persistence:
///
/// - [`ZoomConfig::slider`]: 50% to 200% in steps of 10, nothing persisted,
///   fixed at the bottom of the viewport.
/// - [`ZoomConfig::persisted_presets`]: 100% to 130% in four presets,
///   persisted under [`DEFAULT_STORAGE_KEY`], draggable.
///
/// Neither is canonical; pick the one the host wants or build a custom
/// config.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomConfig {
    /// Allowed levels.
    pub levels: ZoomLevels,
    /// Key under which the level is persisted, or `None` to keep it ephemeral.
    pub storage_key: Option<String>,
    /// Whether the control body can be dragged around the viewport.
    pub draggable: bool,
}

impl ZoomConfig {
    /// Slider configuration: stepped levels, no persistence, not draggable.
    #[must_use]
    pub fn slider() -> Self {
        Self {
            levels: ZoomLevels::slider(),
            storage_key: None,
            draggable: false,
        }
    }

    /// Preset configuration: discrete levels, persisted, draggable.
    #[must_use]
    pub fn persisted_presets() -> Self {
        Self {
            levels: ZoomLevels::presets(),
            storage_key: Some(DEFAULT_STORAGE_KEY.into()),
            draggable: true,
        }
    }

    /// Returns `true` when a storage key is configured.
    #[must_use]
    pub fn persists(&self) -> bool {
        self.storage_key.is_some()
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::persisted_presets()
    }
}
