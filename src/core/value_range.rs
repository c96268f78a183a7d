use serde::{Deserialize, Serialize};

/// Auto-expanding min/max over observed channel values.
///
/// Starts at the `+inf/-inf` sentinels and only ever widens until `reset`.
/// NaN inputs never change either bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueRange {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Creates a range already covering `[min, max]`.
    ///
    /// Non-finite bounds fall back to the sentinels.
    #[must_use]
    pub fn seeded(min: f64, max: f64) -> Self {
        let mut range = Self::new();
        range.observe_value(min);
        range.observe_value(max);
        range
    }

    /// Widens the range with every non-NaN value of a channel slice.
    ///
    /// The time slot must not be part of `values`.
    pub fn observe(&mut self, values: &[f64]) {
        for &value in values {
            self.observe_value(value);
        }
    }

    /// Widens the range with one value; NaN and infinities are skipped.
    pub fn observe_value(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Returns `true` until at least one finite value has been observed.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min > self.max
    }

    #[must_use]
    pub fn bounds(self) -> Option<(f64, f64)> {
        if self.is_empty() {
            None
        } else {
            Some((self.min, self.max))
        }
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
