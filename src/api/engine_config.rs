use serde::{Deserialize, Serialize};

use crate::core::PlotArea;
use crate::query::PlainReadingFormatter;
use crate::render::TraceStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings;
/// loading it from disk is left to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripChartConfig {
    pub capacity: usize,
    pub channel_count: usize,
    pub plot_area: PlotArea,
    #[serde(default = "default_increment")]
    pub x_incr: f64,
    /// Informational; pan and zoom only use `x_incr`.
    #[serde(default = "default_increment")]
    pub y_incr: f64,
    #[serde(default)]
    pub value_min: f64,
    #[serde(default = "default_value_max")]
    pub value_max: f64,
    /// Widen the value window from observed samples after each append.
    #[serde(default = "default_auto_scale_values")]
    pub auto_scale_values: bool,
    #[serde(default)]
    pub style: TraceStyle,
    #[serde(default)]
    pub formatter: PlainReadingFormatter,
}

impl StripChartConfig {
    /// Creates a config with unit increments and a `0..=1` value window.
    #[must_use]
    pub fn new(capacity: usize, channel_count: usize, plot_area: PlotArea) -> Self {
        Self {
            capacity,
            channel_count,
            plot_area,
            x_incr: default_increment(),
            y_incr: default_increment(),
            value_min: 0.0,
            value_max: default_value_max(),
            auto_scale_values: default_auto_scale_values(),
            style: TraceStyle::default(),
            formatter: PlainReadingFormatter::default(),
        }
    }

    #[must_use]
    pub fn with_increments(mut self, x_incr: f64, y_incr: f64) -> Self {
        self.x_incr = x_incr;
        self.y_incr = y_incr;
        self
    }

    /// Sets the initial value window.
    #[must_use]
    pub fn with_value_bounds(mut self, value_min: f64, value_max: f64) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }

    #[must_use]
    pub fn with_auto_scale_values(mut self, enabled: bool) -> Self {
        self.auto_scale_values = enabled;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: TraceStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: PlainReadingFormatter) -> Self {
        self.formatter = formatter;
        self
    }
}

fn default_increment() -> f64 {
    1.0
}

fn default_value_max() -> f64 {
    1.0
}

fn default_auto_scale_values() -> bool {
    true
}
