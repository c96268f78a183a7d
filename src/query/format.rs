use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::query::PointReading;

/// Turns a reading into host-facing text.
pub trait ReadingFormatter {
    fn format(&self, reading: &PointReading) -> String;
}

impl<F> ReadingFormatter for F
where
    F: Fn(&PointReading) -> String,
{
    fn format(&self, reading: &PointReading) -> String {
        self(reading)
    }
}

/// How a channel's values are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelKind {
    #[default]
    Continuous,
    /// Counts and states, shown as rounded integers.
    Discrete,
}

/// Formats readings as `t=<time>  <label>=<value> ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainReadingFormatter {
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub kinds: Vec<ChannelKind>,
    #[serde(default = "default_missing")]
    pub missing: String,
}

impl Default for PlainReadingFormatter {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            labels: Vec::new(),
            kinds: Vec::new(),
            missing: default_missing(),
        }
    }
}

impl PlainReadingFormatter {
    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_channel_kind(mut self, channel: usize, kind: ChannelKind) -> Self {
        if self.kinds.len() <= channel {
            self.kinds.resize(channel + 1, ChannelKind::Continuous);
        }
        self.kinds[channel] = kind;
        self
    }

    #[must_use]
    pub fn channel_kind(&self, channel: usize) -> ChannelKind {
        self.kinds.get(channel).copied().unwrap_or_default()
    }

    fn push_label(&self, out: &mut String, channel: usize) {
        match self.labels.get(channel) {
            Some(label) => out.push_str(label),
            None => {
                let _ = write!(out, "ch{channel}");
            }
        }
    }
}

impl ReadingFormatter for PlainReadingFormatter {
    fn format(&self, reading: &PointReading) -> String {
        let decimals = self.decimals;
        let mut out = String::with_capacity(16 + reading.channels.len() * 16);
        let _ = write!(out, "t={:.decimals$}", reading.time);

        for channel_reading in &reading.channels {
            out.push_str("  ");
            self.push_label(&mut out, channel_reading.channel);
            out.push('=');
            match (channel_reading.value, self.channel_kind(channel_reading.channel)) {
                (None, _) => out.push_str(&self.missing),
                (Some(value), ChannelKind::Continuous) => {
                    let _ = write!(out, "{value:.decimals$}");
                }
                (Some(value), ChannelKind::Discrete) => {
                    let _ = write!(out, "{:.0}", value.round());
                }
            }
        }
        out
    }
}

fn default_decimals() -> usize {
    3
}

fn default_missing() -> String {
    "n/a".to_owned()
}
