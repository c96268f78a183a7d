use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::render::RenderStats;

/// Serializable state snapshot used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub store_len: usize,
    pub capacity: usize,
    pub channel_count: usize,
    pub total_appends: u64,
    /// `None` until a finite value has been observed.
    pub observed_values: Option<(f64, f64)>,
    pub newest_time: Option<f64>,
    pub redraw_pending: bool,
    pub marker_lines: usize,
    pub last_render: Option<RenderStats>,
}
