use crate::error::{ChartError, ChartResult};

/// Linear mapping between a data interval and a pixel extent.
///
/// A zero-width domain is allowed; every value then maps to the middle of the
/// extent instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start > domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and ordered".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() <= f64::EPSILON * self.domain_start.abs().max(self.domain_end.abs()).max(1.0)
    }

    /// Pixels per domain unit for an extent, `0.0` for a degenerate domain.
    #[must_use]
    pub fn pixels_per_unit(self, extent_px: f64) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            extent_px / self.span()
        }
    }

    /// Maps a domain value onto `[0, extent_px]` (start of domain at 0).
    #[must_use]
    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> f64 {
        if self.is_degenerate() {
            return extent_px * 0.5;
        }
        (value - self.domain_start) * self.pixels_per_unit(extent_px)
    }

    /// Maps a normalized position in `[0, 1]` back into the domain.
    #[must_use]
    pub fn normalized_to_domain(self, normalized: f64) -> f64 {
        self.domain_start + normalized * self.span()
    }
}
