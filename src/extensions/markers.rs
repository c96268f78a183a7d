use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineDash};

/// Horizontal reference line drawn across the full plot width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub value: f64,
    pub color: Color,
    #[serde(default)]
    pub dash: LineDash,
}

impl MarkerLine {
    #[must_use]
    pub fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            dash: LineDash::Dashed,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(
                "marker line value must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Marker lines keyed by id, drawn in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerLineSet {
    lines: IndexMap<String, MarkerLine>,
}

impl MarkerLineSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces a line, returning the replaced one.
    ///
    /// A replaced line keeps its original drawing position.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        line: MarkerLine,
    ) -> ChartResult<Option<MarkerLine>> {
        line.validate()?;
        Ok(self.lines.insert(id.into(), line))
    }

    pub fn remove(&mut self, id: &str) -> Option<MarkerLine> {
        self.lines.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MarkerLine> {
        self.lines.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MarkerLine)> {
        self.lines.iter().map(|(id, line)| (id.as_str(), line))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
