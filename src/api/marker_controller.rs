use tracing::debug;

use crate::error::ChartResult;
use crate::extensions::{MarkerLine, MarkerLineSet};
use crate::interaction::{RedrawReason, RedrawToken};

use super::StripChartEngine;

impl StripChartEngine {
    #[must_use]
    pub fn marker_lines(&self) -> &MarkerLineSet {
        &self.markers
    }

    /// Registers or replaces the marker line stored under `id`.
    pub fn add_marker_line(
        &mut self,
        id: impl Into<String>,
        line: MarkerLine,
    ) -> ChartResult<Option<RedrawToken>> {
        let id = id.into();
        let replaced = self.markers.insert(id.clone(), line)?.is_some();
        debug!(id = %id, value = line.value, replaced, "marker line registered");
        Ok(self.request_redraw(RedrawReason::Markers))
    }

    /// Returns the removed line and a redraw token when something was removed.
    pub fn remove_marker_line(&mut self, id: &str) -> Option<(MarkerLine, Option<RedrawToken>)> {
        let line = self.markers.remove(id)?;
        debug!(id, "marker line removed");
        Some((line, self.request_redraw(RedrawReason::Markers)))
    }
}
