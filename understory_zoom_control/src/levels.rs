// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded zoom level scales.
//!
//! A [`ZoomLevels`] is a validated, monotonic set of integer percentages. It
//! answers the questions a zoom control asks on every click: which level is
//! next, which one came before, and which member is closest to an arbitrary
//! value coming from a slider or from storage.
//!
//! Two shapes are supported:
//!
//! - [`LevelScale::Stepped`]: every `step` from `min` through `max`, as a
//!   range slider produces.
//! - [`LevelScale::Discrete`]: an explicit list of levels.
//!
//! Both must contain [`BASELINE_LEVEL`] so that a reset always lands inside
//! the set.
//!
//! ```
//! use understory_zoom_control::levels::{LevelScale, ZoomLevels};
//!
//! let levels = ZoomLevels::new(LevelScale::Stepped { min: 50, max: 200, step: 10 }).unwrap();
//! assert_eq!(levels.next_above(100), Some(110));
//! assert_eq!(levels.next_above(200), None);
//! assert_eq!(levels.snap(144), 140);
//! ```

use alloc::vec::Vec;
use core::fmt;

/// The neutral zoom level, in percent.
pub const BASELINE_LEVEL: u16 = 100;

/// Unvalidated description of a level scale.
///
/// Pass it to [`ZoomLevels::new`] to obtain a usable scale.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LevelScale {
    /// Every `step` percent from `min` through `max`.
    Stepped {
        /// Lowest level.
        min: u16,
        /// Highest level. Lowered to the last reachable step if needed.
        max: u16,
        /// Distance between neighbouring levels.
        step: u16,
    },
    /// An explicit set of levels, in any order.
    Discrete(Vec<u16>),
}

/// Reasons a [`LevelScale`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelsError {
    /// A discrete scale with no levels.
    Empty,
    /// A stepped scale with a step of zero.
    ZeroStep,
    /// A stepped scale whose bounds are reversed.
    InvertedRange {
        /// The requested minimum.
        min: u16,
        /// The requested maximum.
        max: u16,
    },
    /// The scale does not contain [`BASELINE_LEVEL`].
    MissingBaseline,
}

impl fmt::Display for LevelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "zoom level set is empty"),
            Self::ZeroStep => write!(f, "zoom level step must be greater than zero"),
            Self::InvertedRange { min, max } => {
                write!(f, "zoom level range is inverted: min {min} > max {max}")
            }
            Self::MissingBaseline => {
                write!(f, "zoom level set does not contain {BASELINE_LEVEL}%")
            }
        }
    }
}

impl core::error::Error for LevelsError {}

/// A validated, ordered set of allowed zoom levels.
///
/// Invariants:
/// - The set is non-empty and contains [`BASELINE_LEVEL`].
/// - Discrete levels are strictly increasing.
/// - A stepped `max` is reachable from `min` in whole steps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "LevelScale", into = "LevelScale")
)]
pub struct ZoomLevels {
    scale: LevelScale,
}

impl ZoomLevels {
    /// Validates and normalizes `scale`.
    pub fn new(scale: LevelScale) -> Result<Self, LevelsError> {
        let scale = match scale {
            LevelScale::Stepped { min, max, step } => {
                if step == 0 {
                    return Err(LevelsError::ZeroStep);
                }
                if min > max {
                    return Err(LevelsError::InvertedRange { min, max });
                }
                let max = min + (max - min) / step * step;
                if !(min..=max).contains(&BASELINE_LEVEL)
                    || !(BASELINE_LEVEL - min).is_multiple_of(step)
                {
                    return Err(LevelsError::MissingBaseline);
                }
                LevelScale::Stepped { min, max, step }
            }
            LevelScale::Discrete(mut levels) => {
                if levels.is_empty() {
                    return Err(LevelsError::Empty);
                }
                levels.sort_unstable();
                levels.dedup();
                if levels.binary_search(&BASELINE_LEVEL).is_err() {
                    return Err(LevelsError::MissingBaseline);
                }
                LevelScale::Discrete(levels)
            }
        };
        Ok(Self { scale })
    }

    /// 50% through 200% in steps of 10, as offered by the range slider.
    #[must_use]
    pub fn slider() -> Self {
        Self {
            scale: LevelScale::Stepped {
                min: 50,
                max: 200,
                step: 10,
            },
        }
    }

    /// The four discrete presets 100%, 110%, 120% and 130%.
    #[must_use]
    pub fn presets() -> Self {
        Self {
            scale: LevelScale::Discrete(alloc::vec![100, 110, 120, 130]),
        }
    }

    /// Returns the normalized scale.
    #[must_use]
    pub fn scale(&self) -> &LevelScale {
        &self.scale
    }

    /// Returns `true` for a stepped (slider) scale.
    #[must_use]
    pub fn is_stepped(&self) -> bool {
        matches!(self.scale, LevelScale::Stepped { .. })
    }

    /// Lowest allowed level.
    #[must_use]
    pub fn min(&self) -> u16 {
        match &self.scale {
            LevelScale::Stepped { min, .. } => *min,
            LevelScale::Discrete(levels) => levels[0],
        }
    }

    /// Highest allowed level.
    #[must_use]
    pub fn max(&self) -> u16 {
        match &self.scale {
            LevelScale::Stepped { max, .. } => *max,
            LevelScale::Discrete(levels) => levels[levels.len() - 1],
        }
    }

    /// Returns `true` if `level` is a member of the set.
    #[must_use]
    pub fn contains(&self, level: u16) -> bool {
        match &self.scale {
            LevelScale::Stepped { min, max, step } => {
                (*min..=*max).contains(&level) && (level - min).is_multiple_of(*step)
            }
            LevelScale::Discrete(levels) => levels.binary_search(&level).is_ok(),
        }
    }

    /// Smallest member strictly greater than `level`, if any.
    #[must_use]
    pub fn next_above(&self, level: u16) -> Option<u16> {
        match &self.scale {
            LevelScale::Stepped { min, max, step } => {
                if level < *min {
                    return Some(*min);
                }
                let steps = u32::from((level - min) / step) + 1;
                let next = u32::from(*min) + steps * u32::from(*step);
                u16::try_from(next).ok().filter(|next| next <= max)
            }
            LevelScale::Discrete(levels) => levels.iter().copied().find(|l| *l > level),
        }
    }

    /// Largest member strictly less than `level`, if any.
    #[must_use]
    pub fn next_below(&self, level: u16) -> Option<u16> {
        match &self.scale {
            LevelScale::Stepped { min, max, step } => {
                if level > *max {
                    return Some(*max);
                }
                if level <= *min {
                    return None;
                }
                Some(min + (level - min - 1) / step * step)
            }
            LevelScale::Discrete(levels) => levels.iter().rev().copied().find(|l| *l < level),
        }
    }

    /// Member nearest to `value`.
    ///
    /// Stepped scales round half-way values up, like a range input does.
    /// Discrete scales resolve ties toward the lower level.
    #[must_use]
    pub fn snap(&self, value: u16) -> u16 {
        match &self.scale {
            LevelScale::Stepped { min, max, step } => {
                let value = value.clamp(*min, *max);
                let offset = u32::from(value - min);
                let step32 = u32::from(*step);
                let rounded = (offset + step32 / 2) / step32 * step32;
                let snapped = u32::from(*min) + rounded;
                u16::try_from(snapped).map_or(*max, |snapped| snapped.min(*max))
            }
            LevelScale::Discrete(levels) => {
                let mut best = levels[0];
                for &level in levels {
                    if level.abs_diff(value) < best.abs_diff(value) {
                        best = level;
                    }
                }
                best
            }
        }
    }
}

impl Default for ZoomLevels {
    fn default() -> Self {
        Self::presets()
    }
}

impl TryFrom<LevelScale> for ZoomLevels {
    type Error = LevelsError;

    fn try_from(scale: LevelScale) -> Result<Self, Self::Error> {
        Self::new(scale)
    }
}

impl From<ZoomLevels> for LevelScale {
    fn from(levels: ZoomLevels) -> Self {
        levels.scale
    }
}
