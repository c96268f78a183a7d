use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::interaction::{RedrawReason, RedrawToken};

use super::StripChartEngine;

impl StripChartEngine {
    /// Appends one sample from the producer.
    ///
    /// With value auto-scaling enabled the value window widens to cover
    /// everything observed so far. Always requests a redraw.
    pub fn append(&mut self, time: f64, values: &[f64]) -> ChartResult<Option<RedrawToken>> {
        self.store.append(time, values)?;
        if self.auto_scale_values && self.viewport.widen_values(self.store.value_range()) {
            trace!(
                y_min = self.viewport.y_min(),
                y_max = self.viewport.y_max(),
                "value window widened"
            );
        }
        Ok(self.request_redraw(RedrawReason::Append))
    }

    /// Drops all samples and restores the initial window.
    pub fn clear(&mut self) -> Option<RedrawToken> {
        let (value_min, value_max) = self.initial_value_bounds;
        self.store.clear();
        self.viewport.zoom_reset();
        // bounds were validated at construction
        if let Err(err) = self.viewport.set_value_bounds(value_min, value_max) {
            debug!(error = %err, "keeping current value window after clear");
        }
        debug!(capacity = self.store.capacity(), "strip chart cleared");
        self.request_redraw(RedrawReason::Clear)
    }
}
