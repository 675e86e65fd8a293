//! Bounded, optionally wrapping real-valued gene
//!
//! A gene stores its position as a normalized value in `[0, 1]` and reports
//! it remapped into a user-facing `[min, max]` range. Changing the limits
//! does not touch the normalized position, so the reported value shifts
//! proportionally with the new range.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::bounds::{constrain, Bounds};

/// Atomic encoding unit of a chromosome
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    /// Position within the bounds, in `[0, 1]`
    normalized: f64,
    /// User-facing range
    bounds: Bounds,
    /// Treat the normalized range as circular
    wrap: bool,
}

impl Gene {
    /// Create a gene with unit bounds, no wrapping and a centered value
    pub fn new() -> Self {
        Self {
            normalized: 0.5,
            bounds: Bounds::unit(),
            wrap: false,
        }
    }

    /// Create a centered gene with the given limits.
    ///
    /// The limits are not validated; keeping `min <= max` is up to the caller.
    pub fn with_bounds(min: f64, max: f64, wrap: bool) -> Self {
        Self {
            normalized: 0.5,
            bounds: Bounds::new(min, max),
            wrap,
        }
    }

    /// Value remapped into `[min, max]`
    pub fn value(&self) -> f64 {
        self.bounds.denormalize(self.normalized)
    }

    /// Set the value; input outside `[min, max]` is clamped first
    pub fn set_value(&mut self, value: f64) {
        let clamped = constrain(value, self.bounds.min, self.bounds.max);
        self.normalized = self.bounds.normalize(clamped);
    }

    /// Internal normalized position
    pub fn normalized_value(&self) -> f64 {
        self.normalized
    }

    /// Set the normalized position directly, clamped into `[0, 1]`
    pub fn set_normalized_value(&mut self, normalized: f64) {
        self.normalized = constrain(normalized, 0.0, 1.0);
    }

    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    /// Changing the lower limit rescales the reported value
    pub fn set_min(&mut self, min: f64) {
        self.bounds.min = min;
    }

    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Changing the upper limit rescales the reported value
    pub fn set_max(&mut self, max: f64) {
        self.bounds.max = max;
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Perturb the gene by a uniform offset drawn from `[-ratio, ratio)`.
    ///
    /// Wrapping genes cycle around the normalized range. Non-wrapping genes
    /// are clamped to `[min, max]` applied to the *normalized* value, which
    /// only keeps it in `[0, 1]` for unit bounds; see [`Gene::mutate_within_unit`].
    ///
    /// Consumes exactly one draw from `rng` when `ratio` is valid and none
    /// otherwise.
    pub fn mutate<R: Rng>(&mut self, ratio: f64, rng: &mut R) -> Result<(), GenomeError> {
        let delta = Self::draw_delta(ratio, rng)?;
        self.normalized = if self.wrap {
            (1.0 + self.normalized + delta) % 1.0
        } else {
            constrain(self.normalized + delta, self.bounds.min, self.bounds.max)
        };
        Ok(())
    }

    /// Same as [`Gene::mutate`], except that non-wrapping genes are clamped
    /// to `[0, 1]` regardless of their bounds.
    pub fn mutate_within_unit<R: Rng>(
        &mut self,
        ratio: f64,
        rng: &mut R,
    ) -> Result<(), GenomeError> {
        let delta = Self::draw_delta(ratio, rng)?;
        self.normalized = if self.wrap {
            (1.0 + self.normalized + delta) % 1.0
        } else {
            constrain(self.normalized + delta, 0.0, 1.0)
        };
        Ok(())
    }

    fn draw_delta<R: Rng>(ratio: f64, rng: &mut R) -> Result<f64, GenomeError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(GenomeError::InvalidRatio(ratio));
        }
        Ok(rng.gen::<f64>() * (2.0 * ratio) - ratio)
    }

    /// Draw a fresh uniform normalized position
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.normalized = rng.gen::<f64>();
    }

    /// Two genes are compatible when their limits and wrap flag match.
    /// Current values are ignored.
    pub fn is_compatible_with(&self, other: &Gene) -> bool {
        self.bounds.min == other.bounds.min
            && self.bounds.max == other.bounds.max
            && self.wrap == other.wrap
    }

    /// Crossover with a uniformly drawn ratio
    pub fn crossover<R: Rng>(&self, other: &Gene, rng: &mut R) -> Result<Gene, GenomeError> {
        let ratio = rng.gen::<f64>();
        self.crossover_with_ratio(other, ratio)
    }

    /// Blend two compatible genes.
    ///
    /// `ratio = 1.0` yields `self`, `ratio = 0.0` yields `other`. Wrapping
    /// genes more than half the range apart are closer across the origin,
    /// so they are blended along that arc and wrapped back into `[0, 1)`.
    pub fn crossover_with_ratio(&self, other: &Gene, ratio: f64) -> Result<Gene, GenomeError> {
        self.crossover_by(other, ratio, |a, b| (a - b).abs() > 0.5)
    }

    /// Like [`Gene::crossover_with_ratio`], but wrapping genes cross the
    /// origin whenever their mean normalized position exceeds `0.5`.
    ///
    /// The mean test blends pairs such as `0.05`/`0.95` through the middle,
    /// and shifts a wrapping gene above `0.5` crossed with itself by `0.5`.
    pub fn crossover_mean_threshold_with_ratio(
        &self,
        other: &Gene,
        ratio: f64,
    ) -> Result<Gene, GenomeError> {
        self.crossover_by(other, ratio, |a, b| ((a + b) / 2.0).abs() > 0.5)
    }

    fn crossover_by(
        &self,
        other: &Gene,
        ratio: f64,
        across_origin: impl Fn(f64, f64) -> bool,
    ) -> Result<Gene, GenomeError> {
        if !self.is_compatible_with(other) {
            return Err(GenomeError::IncompatibleGenes);
        }
        if !(0.0..=1.0).contains(&ratio) {
            return Err(GenomeError::InvalidRatio(ratio));
        }

        let a = self.normalized;
        let b = other.normalized;
        let mut result = self.copy();
        result.normalized = if self.wrap && across_origin(a, b) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            (low * ratio + (high - 1.0) * (1.0 - ratio) + 1.0) % 1.0
        } else {
            a * ratio + b * (1.0 - ratio)
        };
        Ok(result)
    }

    /// Independent copy carrying the same limits, wrap flag and value.
    ///
    /// The value is transferred through [`Gene::value`], so a gene with
    /// degenerate bounds (`min == max`) copies to normalized position `0`.
    pub fn copy(&self) -> Gene {
        let mut result = Gene::new();
        result.set_min(self.min());
        result.set_max(self.max());
        result.set_value(self.value());
        result.set_wrap(self.wrap());
        result
    }

    /// Take limits and wrap flag from `template`, keeping the normalized position
    pub fn adjust_by_template(&mut self, template: &Gene) {
        self.bounds = template.bounds;
        self.wrap = template.wrap;
    }
}

impl Default for Gene {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gene: value {} | normalized {} | min {} | max {} | wrap {}",
            self.value(),
            self.normalized,
            self.bounds.min,
            self.bounds.max,
            self.wrap
        )
    }
}
