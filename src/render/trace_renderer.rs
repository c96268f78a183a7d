use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{LinearScale, PRESENT, PlotArea, SampleRef, SampleStore, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::MarkerLineSet;
use crate::render::{DrawingSurface, LineDash, TraceStyle};

/// Counters reported by one paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Samples read from the store, including the newest one.
    pub samples_visited: usize,
    /// Channel segments emitted (clipped ones included).
    pub segments_drawn: usize,
    pub head_markers: usize,
    pub marker_lines: usize,
}

/// Paints the buffered traces newest-to-oldest into a drawing surface.
///
/// Plot space: the surface is translated to the bottom-right corner and
/// flipped vertically, so the `x_max` edge of the viewport is pixel x=0,
/// older time runs toward x=-width, and `y_min` is y=0. The walk stops at the
/// first sample left of the plot, so the cost is bounded by what fits in the
/// viewport rather than by the store length.
#[derive(Debug, Clone, Copy)]
pub struct TraceRenderer<'a> {
    style: &'a TraceStyle,
}

impl<'a> TraceRenderer<'a> {
    #[must_use]
    pub fn new(style: &'a TraceStyle) -> Self {
        Self { style }
    }

    pub fn paint<S: DrawingSurface + ?Sized>(
        &self,
        viewport: &Viewport,
        area: PlotArea,
        store: &SampleStore,
        markers: &MarkerLineSet,
        surface: &mut S,
    ) -> ChartResult<RenderStats> {
        if !area.is_valid() {
            return Err(ChartError::InvalidPlotArea {
                width: area.width,
                height: area.height,
            });
        }

        surface.clear()?;
        surface.save()?;
        surface.translate(area.width_px(), area.height_px());
        surface.scale(1.0, -1.0);
        let result = self.paint_plot_space(viewport, area, store, markers, surface);
        surface.restore()?;

        if let Ok(stats) = &result {
            trace!(
                samples_visited = stats.samples_visited,
                segments_drawn = stats.segments_drawn,
                store_len = store.len(),
                "painted traces"
            );
        }
        result
    }

    fn paint_plot_space<S: DrawingSurface + ?Sized>(
        &self,
        viewport: &Viewport,
        area: PlotArea,
        store: &SampleStore,
        markers: &MarkerLineSet,
        surface: &mut S,
    ) -> ChartResult<RenderStats> {
        let width = area.width_px();
        let height = area.height_px();
        let axis = TimeAxis {
            x_min: viewport.x_min(),
            x_max: viewport.x_max(),
            x_scale: width / viewport.range(),
            width,
        };
        let values = LinearScale::new(viewport.y_min(), viewport.y_max())?;
        let project = |value: f64| values.domain_to_pixel(value, height);

        let mut stats = RenderStats::default();
        let mut samples = store.iter();
        if let Some(newest) = samples.next() {
            stats.samples_visited = 1;
            stats.head_markers = self.paint_head_markers(newest, &axis, &project, surface)?;

            let mut paths = ChannelPaths::new(store.channel_count());
            self.walk_segments(newest, samples, &axis, &project, &mut paths, &mut stats);
            self.stroke_paths(&paths, surface)?;
        }

        stats.marker_lines = self.paint_marker_lines(markers, width, &project, surface)?;
        Ok(stats)
    }

    fn paint_head_markers<S: DrawingSurface + ?Sized>(
        &self,
        newest: SampleRef<'_>,
        axis: &TimeAxis,
        project: &impl Fn(f64) -> f64,
        surface: &mut S,
    ) -> ChartResult<usize> {
        if self.style.head_marker_radius <= 0.0 || PRESENT > axis.x_max {
            return Ok(0);
        }

        let head_x = axis.to_pixel(PRESENT);
        let mut drawn = 0;
        for (channel, &value) in newest.values().iter().enumerate() {
            if !self.style.is_channel_visible(channel) || !value.is_finite() {
                continue;
            }
            surface.set_fill_color(self.style.channel_color(channel));
            surface.fill_circle(head_x, project(value), self.style.head_marker_radius)?;
            drawn += 1;
        }
        Ok(drawn)
    }

    /// Walks pairs `(current, prev)` from the newest sample back.
    ///
    /// Positions are tracked as time relative to the newest sample and only
    /// converted to pixels for output, so the edge tests are exact for sample
    /// times that land on the viewport bounds.
    fn walk_segments<'s>(
        &self,
        newest: SampleRef<'s>,
        older: impl Iterator<Item = SampleRef<'s>>,
        axis: &TimeAxis,
        project: &impl Fn(f64) -> f64,
        paths: &mut ChannelPaths,
        stats: &mut RenderStats,
    ) {
        let mut current = newest;
        let mut start = PRESENT;
        let mut end = PRESENT;

        for prev in older {
            stats.samples_visited += 1;

            // rewound or duplicated clock: no segment across the discontinuity
            if !(current.time() > prev.time()) {
                paths.break_all();
                current = prev;
                end = start;
                continue;
            }

            start -= current.time() - prev.time();
            if start < axis.x_max {
                let end_px = axis.to_pixel(end);
                let start_px = axis.to_pixel(start);
                let clipped = start < axis.x_min || end > axis.x_max;
                let clip_left = if start < axis.x_min { -axis.width } else { start_px };
                let clip_right = if end > axis.x_max { 0.0 } else { end_px };
                let span = end_px - start_px;

                for channel in 0..paths.len() {
                    if !self.style.is_channel_visible(channel) {
                        continue;
                    }
                    let (current_value, prev_value) = (current.value(channel), prev.value(channel));
                    if !current_value.is_finite() || !prev_value.is_finite() {
                        paths.break_run(channel);
                        continue;
                    }

                    let current_y = project(current_value);
                    let prev_y = project(prev_value);
                    let (from, to) = if clipped {
                        let slope = if span > 0.0 {
                            (current_y - prev_y) / span
                        } else {
                            0.0
                        };
                        (
                            (clip_right, current_y - slope * (end_px - clip_right)),
                            (clip_left, prev_y + slope * (clip_left - start_px)),
                        )
                    } else {
                        ((end_px, current_y), (start_px, prev_y))
                    };
                    paths.push_segment(channel, from, to);
                    stats.segments_drawn += 1;
                }
            } else {
                paths.break_all();
            }

            if start <= axis.x_min {
                break;
            }
            current = prev;
            end = start;
        }
    }

    fn stroke_paths<S: DrawingSurface + ?Sized>(
        &self,
        paths: &ChannelPaths,
        surface: &mut S,
    ) -> ChartResult<()> {
        surface.set_line_width(self.style.line_width);
        surface.set_line_dash(LineDash::Solid);
        for (channel, runs) in paths.iter() {
            if runs.is_empty() {
                continue;
            }
            surface.set_stroke_color(self.style.channel_color(channel));
            for run in runs {
                let Some((&(x0, y0), rest)) = run.split_first() else {
                    continue;
                };
                surface.move_to(x0, y0);
                for &(x, y) in rest {
                    surface.line_to(x, y);
                }
            }
            surface.stroke()?;
        }
        Ok(())
    }

    fn paint_marker_lines<S: DrawingSurface + ?Sized>(
        &self,
        markers: &MarkerLineSet,
        width: f64,
        project: &impl Fn(f64) -> f64,
        surface: &mut S,
    ) -> ChartResult<usize> {
        if markers.is_empty() {
            return Ok(0);
        }

        surface.set_line_width(self.style.marker_line_width);
        for (_, line) in markers.iter() {
            let y = project(line.value);
            surface.set_stroke_color(line.color);
            surface.set_line_dash(line.dash);
            surface.move_to(-width, y);
            surface.line_to(0.0, y);
            surface.stroke()?;
        }
        surface.set_line_dash(LineDash::Solid);
        Ok(markers.len())
    }
}

/// Maps time relative to the newest sample onto plot-space x.
struct TimeAxis {
    x_min: f64,
    x_max: f64,
    x_scale: f64,
    width: f64,
}

impl TimeAxis {
    fn to_pixel(&self, time: f64) -> f64 {
        (time - self.x_max) * self.x_scale
    }
}

type Run = Vec<(f64, f64)>;

/// Per-channel polyline runs collected during the walk.
///
/// A run stays open while consecutive segments share an endpoint and is
/// closed on any discontinuity.
struct ChannelPaths {
    channels: SmallVec<[ChannelPath; 4]>,
}

#[derive(Default)]
struct ChannelPath {
    runs: Vec<Run>,
    open: bool,
}

impl ChannelPaths {
    fn new(channel_count: usize) -> Self {
        Self {
            channels: (0..channel_count).map(|_| ChannelPath::default()).collect(),
        }
    }

    fn len(&self) -> usize {
        self.channels.len()
    }

    fn push_segment(&mut self, channel: usize, from: (f64, f64), to: (f64, f64)) {
        let path = &mut self.channels[channel];
        match path.runs.last_mut() {
            Some(run) if path.open => run.push(to),
            _ => path.runs.push(vec![from, to]),
        }
        path.open = true;
    }

    fn break_run(&mut self, channel: usize) {
        self.channels[channel].open = false;
    }

    fn break_all(&mut self) {
        for path in &mut self.channels {
            path.open = false;
        }
    }

    fn iter(&self) -> impl Iterator<Item = (usize, &[Run])> {
        self.channels
            .iter()
            .enumerate()
            .map(|(channel, path)| (channel, path.runs.as_slice()))
    }
}
