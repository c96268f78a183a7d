use std::fmt;

use tracing::debug;

use crate::core::{PlotArea, SampleStore, Viewport};
use crate::error::ChartResult;
use crate::extensions::MarkerLineSet;
use crate::interaction::{RedrawReason, RedrawScheduler, RedrawToken};
use crate::query::ReadingFormatter;
use crate::render::{RenderStats, TraceStyle};

use super::StripChartConfig;
use super::validation::validate_config;

/// Main orchestration facade consumed by host applications.
///
/// `StripChartEngine` owns the sample history, the visible window and the
/// redraw slot. Mutations that change what is on screen request a redraw and
/// hand back a [`RedrawToken`] when the host has to schedule a deferred paint.
pub struct StripChartEngine {
    pub(super) store: SampleStore,
    pub(super) viewport: Viewport,
    pub(super) plot_area: PlotArea,
    pub(super) style: TraceStyle,
    pub(super) markers: MarkerLineSet,
    pub(super) scheduler: RedrawScheduler,
    pub(super) formatter: Box<dyn ReadingFormatter>,
    pub(super) auto_scale_values: bool,
    pub(super) initial_value_bounds: (f64, f64),
    pub(super) last_render_stats: Option<RenderStats>,
}

impl StripChartEngine {
    pub fn new(config: StripChartConfig) -> ChartResult<Self> {
        validate_config(&config)?;
        let store = SampleStore::new(config.capacity, config.channel_count)?;
        let viewport = Viewport::new(
            config.x_incr,
            config.y_incr,
            config.capacity,
            config.value_min,
            config.value_max,
        )?;

        debug!(
            capacity = config.capacity,
            channel_count = config.channel_count,
            width = config.plot_area.width,
            height = config.plot_area.height,
            "strip chart engine created"
        );
        Ok(Self {
            store,
            viewport,
            plot_area: config.plot_area,
            style: config.style,
            markers: MarkerLineSet::new(),
            scheduler: RedrawScheduler::new(),
            formatter: Box::new(config.formatter),
            auto_scale_values: config.auto_scale_values,
            initial_value_bounds: (config.value_min, config.value_max),
            last_render_stats: None,
        })
    }

    #[must_use]
    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    #[must_use]
    pub fn style(&self) -> &TraceStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TraceStyle) -> ChartResult<Option<RedrawToken>> {
        style.validate()?;
        self.style = style;
        Ok(self.request_redraw(RedrawReason::Style))
    }

    pub fn set_channel_visible(&mut self, channel: usize, visible: bool) -> Option<RedrawToken> {
        if self.style.is_channel_visible(channel) == visible {
            return None;
        }
        self.style.set_channel_visible(channel, visible);
        self.request_redraw(RedrawReason::Style)
    }

    pub fn set_formatter(&mut self, formatter: impl ReadingFormatter + 'static) {
        self.formatter = Box::new(formatter);
    }

    #[must_use]
    pub fn auto_scale_values(&self) -> bool {
        self.auto_scale_values
    }

    pub fn set_auto_scale_values(&mut self, enabled: bool) -> Option<RedrawToken> {
        self.auto_scale_values = enabled;
        if enabled && self.viewport.widen_values(self.store.value_range()) {
            return self.request_redraw(RedrawReason::Viewport);
        }
        None
    }

    /// Outstanding redraw token, if any.
    #[must_use]
    pub fn pending_redraw(&self) -> Option<RedrawToken> {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn redraw_scheduler(&self) -> &RedrawScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn last_render_stats(&self) -> Option<RenderStats> {
        self.last_render_stats
    }

    pub(super) fn request_redraw(&mut self, reason: RedrawReason) -> Option<RedrawToken> {
        self.scheduler.request(reason)
    }
}

impl fmt::Debug for StripChartEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripChartEngine")
            .field("store_len", &self.store.len())
            .field("capacity", &self.store.capacity())
            .field("viewport", &self.viewport)
            .field("plot_area", &self.plot_area)
            .field("markers", &self.markers.len())
            .field("pending_redraw", &self.scheduler.pending())
            .finish_non_exhaustive()
    }
}
