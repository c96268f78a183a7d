use crate::error::{ChartError, ChartResult};

use super::{EngineSnapshot, StripChartEngine};

impl StripChartEngine {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport,
            plot_area: self.plot_area,
            store_len: self.store.len(),
            capacity: self.store.capacity(),
            channel_count: self.store.channel_count(),
            total_appends: self.store.total_appends(),
            observed_values: self.store.value_range().bounds(),
            newest_time: self.store.newest().map(|sample| sample.time()),
            redraw_pending: self.scheduler.is_pending(),
            marker_lines: self.markers.len(),
            last_render: self.last_render_stats,
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
