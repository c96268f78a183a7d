use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, TRACE_PALETTE};

/// Style contract for the trace paint pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStyle {
    /// Per-channel stroke colors; channels past the end fall back to the palette.
    #[serde(default)]
    pub channel_colors: Vec<Color>,
    /// Channels that are neither drawn nor marked.
    #[serde(default)]
    pub hidden_channels: Vec<usize>,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_head_marker_radius")]
    pub head_marker_radius: f64,
    #[serde(default = "default_marker_line_width")]
    pub marker_line_width: f64,
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self {
            channel_colors: Vec::new(),
            hidden_channels: Vec::new(),
            line_width: default_line_width(),
            head_marker_radius: default_head_marker_radius(),
            marker_line_width: default_marker_line_width(),
        }
    }
}

impl TraceStyle {
    #[must_use]
    pub fn with_channel_colors(mut self, colors: Vec<Color>) -> Self {
        self.channel_colors = colors;
        self
    }

    #[must_use]
    pub fn with_hidden_channel(mut self, channel: usize) -> Self {
        if !self.hidden_channels.contains(&channel) {
            self.hidden_channels.push(channel);
        }
        self
    }

    #[must_use]
    pub fn channel_color(&self, channel: usize) -> Color {
        self.channel_colors
            .get(channel)
            .copied()
            .unwrap_or(TRACE_PALETTE[channel % TRACE_PALETTE.len()])
    }

    #[must_use]
    pub fn is_channel_visible(&self, channel: usize) -> bool {
        !self.hidden_channels.contains(&channel)
    }

    pub fn set_channel_visible(&mut self, channel: usize, visible: bool) {
        self.hidden_channels.retain(|&hidden| hidden != channel);
        if !visible {
            self.hidden_channels.push(channel);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in &self.channel_colors {
            color.validate()?;
        }
        for (name, width) in [
            ("line width", self.line_width),
            ("marker line width", self.marker_line_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.head_marker_radius.is_finite() || self.head_marker_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "head marker radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_line_width() -> f64 {
    1.5
}

fn default_head_marker_radius() -> f64 {
    3.0
}

fn default_marker_line_width() -> f64 {
    1.0
}
