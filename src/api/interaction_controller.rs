use tracing::debug;

use crate::core::PlotArea;
use crate::error::ChartResult;
use crate::interaction::{RedrawReason, RedrawToken};

use super::StripChartEngine;
use super::validation::validate_plot_area;

impl StripChartEngine {
    /// Pans by a pointer drag delta in pixels.
    ///
    /// Sub-step drags accumulate in the viewport and do not request a redraw.
    pub fn pan(&mut self, dx_px: f64, dy_px: f64) -> Option<RedrawToken> {
        if self
            .viewport
            .shift(dx_px, dy_px, self.plot_area.width_px())
        {
            self.request_redraw(RedrawReason::Viewport)
        } else {
            None
        }
    }

    /// Zooms the time axis; `factor > 1` zooms in. Anchors are normalized
    /// pointer coordinates and do not move the pinned `x_max` edge.
    pub fn zoom_by(
        &mut self,
        factor: f64,
        anchor_x_norm: f64,
        anchor_y_norm: f64,
    ) -> Option<RedrawToken> {
        if self.viewport.zoom(factor, anchor_x_norm, anchor_y_norm) {
            self.request_redraw(RedrawReason::Viewport)
        } else {
            None
        }
    }

    pub fn zoom_reset(&mut self) -> Option<RedrawToken> {
        self.viewport.zoom_reset();
        self.request_redraw(RedrawReason::Viewport)
    }

    /// Updates the plot size. The time window is kept; only the pixel scale
    /// changes.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<Option<RedrawToken>> {
        let area = validate_plot_area(PlotArea::new(width, height))?;
        if area == self.plot_area {
            return Ok(None);
        }
        self.plot_area = area;
        debug!(width, height, "plot area resized");
        Ok(self.request_redraw(RedrawReason::Resize))
    }
}
