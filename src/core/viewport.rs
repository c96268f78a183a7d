use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ValueRange;
use crate::error::{ChartError, ChartResult};

/// Fixed upper time bound. The newest sample always sits at this time.
pub const PRESENT: f64 = 0.0;
/// Number of steps shown by `zoom_reset`.
pub const DEFAULT_STEPS: f64 = 100.0;
/// Smallest number of steps a zoom-in may leave visible.
pub const MIN_ZOOM_STEPS: f64 = 10.0;
/// Zoom factors this close to `1.0` are ignored.
pub const ZOOM_EPSILON: f64 = 1e-6;

const STEP_TOLERANCE: f64 = 1e-9;

/// Pixel deltas accumulated across pan gesture events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanAccumulator {
    pub total_dx: f64,
    pub total_dy: f64,
}

/// Visible time/value window over the buffered history.
///
/// Time is relative age: the newest sample is at [`PRESENT`] and older samples
/// have negative times. Pan and zoom land on multiples of `x_incr`; the window
/// never extends past `PRESENT` nor before `PRESENT - capacity * x_incr`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_incr: f64,
    y_incr: f64,
    capacity: usize,
    #[serde(skip)]
    pan: PanAccumulator,
}

impl Viewport {
    /// Creates a viewport showing the default window (see [`Viewport::zoom_reset`]).
    pub fn new(
        x_incr: f64,
        y_incr: f64,
        capacity: usize,
        y_min: f64,
        y_max: f64,
    ) -> ChartResult<Self> {
        if !x_incr.is_finite() || x_incr <= 0.0 {
            return Err(ChartError::InvalidData(
                "viewport x increment must be finite and > 0".to_owned(),
            ));
        }
        if !y_incr.is_finite() || y_incr < 0.0 {
            return Err(ChartError::InvalidData(
                "viewport y increment must be finite and >= 0".to_owned(),
            ));
        }
        if capacity == 0 {
            return Err(ChartError::InvalidCapacity { capacity });
        }
        validate_value_bounds(y_min, y_max)?;

        let mut viewport = Self {
            x_min: PRESENT - x_incr,
            x_max: PRESENT,
            y_min,
            y_max,
            x_incr,
            y_incr,
            capacity,
            pan: PanAccumulator::default(),
        };
        viewport.apply_default_window();
        Ok(viewport)
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    #[must_use]
    pub fn x_incr(&self) -> f64 {
        self.x_incr
    }

    #[must_use]
    pub fn y_incr(&self) -> f64 {
        self.y_incr
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Visible time span.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn visible_steps(&self) -> f64 {
        self.range() / self.x_incr
    }

    #[must_use]
    pub fn abs_max(&self) -> f64 {
        PRESENT
    }

    /// Oldest time a full store can represent.
    #[must_use]
    pub fn abs_min(&self) -> f64 {
        PRESENT - self.max_range()
    }

    #[must_use]
    pub fn max_range(&self) -> f64 {
        self.capacity as f64 * self.x_incr
    }

    #[must_use]
    pub fn pending_pan(&self) -> PanAccumulator {
        self.pan
    }

    /// Pans by accumulated pixel deltas over a plot `width_px` wide.
    ///
    /// Positive `dx` (content dragged right) moves the window back in time.
    /// Deltas keep accumulating until they add up to at least one `x_incr`
    /// step; until then nothing changes and `false` is returned. `dy` is only
    /// accumulated.
    ///
    /// Returns `true` when a redraw is needed.
    pub fn shift(&mut self, dx: f64, dy: f64, width_px: f64) -> bool {
        if !dx.is_finite() || !dy.is_finite() || !width_px.is_finite() || width_px <= 0.0 {
            return false;
        }

        self.pan.total_dx += dx;
        self.pan.total_dy += dy;

        let rx = self.pan.total_dx / width_px;
        let range = self.range();
        let units = whole_steps(range * rx.abs() / self.x_incr);
        if units == 0.0 {
            return false;
        }
        self.pan = PanAccumulator::default();

        let shift = rx.signum() * units * self.x_incr;
        let abs_min = self.abs_min();
        let abs_max = self.abs_max();

        let (mut x_min, mut x_max);
        if shift > 0.0 {
            x_min = abs_min.max(self.x_min - self.x_incr.max(shift));
            x_max = x_min + range;
            if x_max > abs_max {
                x_max = abs_max;
                x_min = abs_max - range;
            }
        } else {
            x_max = abs_max.min(self.x_max - (-self.x_incr).min(shift));
            x_min = x_max - range;
            if x_min < abs_min {
                x_min = abs_min;
                x_max = abs_min + range;
            }
        }

        self.x_min = x_min.max(abs_min);
        self.x_max = x_max.min(abs_max);
        debug!(
            steps = rx.signum() * units,
            x_min = self.x_min,
            x_max = self.x_max,
            "viewport shifted"
        );
        true
    }

    /// Restores the default window ending at [`PRESENT`].
    ///
    /// Always returns `true` (a redraw is needed).
    pub fn zoom_reset(&mut self) -> bool {
        self.apply_default_window();
        self.pan = PanAccumulator::default();
        debug!(x_min = self.x_min, x_max = self.x_max, "viewport zoom reset");
        true
    }

    /// Zooms the time axis by `factor` (`> 1` zooms in, `< 1` zooms out).
    ///
    /// The zoom is pinned at the `x_max` edge; the anchor arguments are
    /// accepted for gesture symmetry and do not move the pinned edge. Both
    /// bounds are quantized to `x_incr` and at least [`MIN_ZOOM_STEPS`] steps
    /// stay visible while the history allows it.
    ///
    /// Returns `true` when a redraw is needed.
    pub fn zoom(&mut self, factor: f64, _anchor_x: f64, _anchor_y: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 || (factor - 1.0).abs() < ZOOM_EPSILON {
            return false;
        }

        let range = self.range();
        let mut new_min = self.x_max - range / factor;
        if (self.x_max - new_min) / self.x_incr < MIN_ZOOM_STEPS {
            new_min = self.x_max - MIN_ZOOM_STEPS * self.x_incr;
        }

        let abs_min = self.abs_min();
        let abs_max = self.abs_max();
        let mut x_min = quantize_to_increment(new_min, self.x_incr).clamp(abs_min, abs_max);
        let mut x_max = quantize_to_increment(self.x_max, self.x_incr).clamp(abs_min, abs_max);

        if x_max - x_min <= self.x_incr * (1.0 + STEP_TOLERANCE) {
            if factor < 1.0 {
                return false;
            }
            x_min = x_max - self.x_incr;
            if x_min < abs_min {
                x_min = abs_min;
                x_max = (abs_min + self.x_incr).min(abs_max);
            }
        }

        self.x_min = x_min;
        self.x_max = x_max;
        debug!(
            factor,
            x_min = self.x_min,
            x_max = self.x_max,
            "viewport zoomed"
        );
        true
    }

    /// Widens the value window so it covers `range`. Never narrows.
    ///
    /// Returns `true` when either bound moved.
    pub fn widen_values(&mut self, range: ValueRange) -> bool {
        let Some((min, max)) = range.bounds() else {
            return false;
        };
        let y_min = self.y_min.min(min);
        let y_max = self.y_max.max(max);
        let changed = y_min != self.y_min || y_max != self.y_max;
        self.y_min = y_min;
        self.y_max = y_max;
        changed
    }

    pub fn set_value_bounds(&mut self, y_min: f64, y_max: f64) -> ChartResult<()> {
        validate_value_bounds(y_min, y_max)?;
        self.y_min = y_min;
        self.y_max = y_max;
        Ok(())
    }

    fn apply_default_window(&mut self) {
        self.x_max = PRESENT;
        let width = (DEFAULT_STEPS * self.x_incr).max(1.0).min(self.max_range());
        self.x_min = (self.x_max - width).max(self.abs_min());
    }
}

fn validate_value_bounds(y_min: f64, y_max: f64) -> ChartResult<()> {
    if !y_min.is_finite() || !y_max.is_finite() || y_min > y_max {
        return Err(ChartError::InvalidData(
            "value bounds must be finite with min <= max".to_owned(),
        ));
    }
    Ok(())
}

/// Truncates a non-negative step count, snapping values within float noise
/// of the next integer up to it.
fn whole_steps(steps: f64) -> f64 {
    let nearest = steps.round();
    if (steps - nearest).abs() <= STEP_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        steps.trunc()
    }
}

/// Quantizes `value` to a multiple of `incr`, truncating toward zero.
#[must_use]
pub fn quantize_to_increment(value: f64, incr: f64) -> f64 {
    let steps = value / incr;
    let snapped = if steps < 0.0 {
        -whole_steps(-steps)
    } else {
        whole_steps(steps)
    };
    snapped * incr
}
