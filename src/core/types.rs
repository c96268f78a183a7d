use serde::{Deserialize, Serialize};

/// Pixel size of the plotting rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: u32,
    pub height: u32,
}

impl PlotArea {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }

    /// Returns `true` when `(x, y)` lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.width_px()).contains(&x) && (0.0..=self.height_px()).contains(&y)
    }
}
