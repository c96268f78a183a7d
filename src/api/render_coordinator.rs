use tracing::warn;

use crate::error::ChartResult;
use crate::interaction::RedrawToken;
use crate::render::{DrawingSurface, RenderStats, TraceRenderer};

use super::StripChartEngine;

impl StripChartEngine {
    /// Paints the current state unconditionally.
    ///
    /// A full paint satisfies any outstanding redraw, so the pending token is
    /// dropped and a later `run_redraw` with it becomes a no-op.
    pub fn paint<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> ChartResult<RenderStats> {
        self.scheduler.cancel();
        let stats = TraceRenderer::new(&self.style).paint(
            &self.viewport,
            self.plot_area,
            &self.store,
            &self.markers,
            surface,
        )?;
        self.last_render_stats = Some(stats);
        Ok(stats)
    }

    /// Paints only when a redraw is outstanding.
    pub fn paint_if_pending<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> ChartResult<Option<RenderStats>> {
        if !self.scheduler.is_pending() {
            return Ok(None);
        }
        self.paint(surface).map(Some)
    }

    /// Runs the deferred paint scheduled for `token`.
    ///
    /// Stale tokens (cancelled, replaced or already satisfied) paint nothing.
    pub fn run_redraw<S: DrawingSurface + ?Sized>(
        &mut self,
        token: RedrawToken,
        surface: &mut S,
    ) -> ChartResult<Option<RenderStats>> {
        if self.scheduler.pending() != Some(token) {
            return Ok(None);
        }
        match self.paint(surface) {
            Ok(stats) => Ok(Some(stats)),
            Err(err) => {
                warn!(error = %err, token = token.id(), "deferred redraw failed");
                Err(err)
            }
        }
    }
}
