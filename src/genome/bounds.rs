//! Bounds for gene values
//!
//! This module provides the bounded range a gene reports its value in,
//! together with the linear remapping used to move between that range and
//! the normalized `[0, 1]` representation.

use serde::{Deserialize, Serialize};

/// Linearly remap `value` from `[from_min, from_max]` to `[to_min, to_max]`.
///
/// A degenerate source interval (`from_min == from_max`) maps every value
/// to `to_min`.
pub fn remap(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let span = from_max - from_min;
    if span == 0.0 {
        return to_min;
    }
    (value - from_min) / span * (to_max - to_min) + to_min
}

/// Constrain `value` to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: with `min > max` the lower limit wins.
pub fn constrain(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Bounds for a single gene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds.
    ///
    /// The limits are not validated; keeping `min <= max` is up to the caller.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Create unit bounds [0, 1]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Normalize a value from bounds to [0, 1]
    pub fn normalize(&self, value: f64) -> f64 {
        remap(value, self.min, self.max, 0.0, 1.0)
    }

    /// Denormalize a value from [0, 1] to bounds
    pub fn denormalize(&self, value: f64) -> f64 {
        remap(value, 0.0, 1.0, self.min, self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unit()
    }
}
