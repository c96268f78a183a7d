use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, LineDash};

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    Clear,
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    LineDash(LineDash),
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
    FillCircle { x: f64, y: f64, radius: f64 },
}

/// Headless surface used by tests and hosts without a drawing backend.
///
/// It records every command and rejects non-finite geometry so tests catch
/// invalid output before a real backend sees it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    depth: usize,
    invalid_geometry: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current `save` nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Stroke))
    }

    #[must_use]
    pub fn line_to_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::LineTo { .. }))
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::FillCircle { .. }))
    }

    /// Path vertices (`move_to`/`line_to`) in recording order.
    #[must_use]
    pub fn path_points(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => Some((x, y)),
                _ => None,
            })
            .collect()
    }

    fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    fn record_point(&mut self, command: DrawCommand, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            self.invalid_geometry += 1;
        }
        self.commands.push(command);
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        if self.depth == 0 {
            return Err(ChartError::InvalidData(
                "restore without matching save".to_owned(),
            ));
        }
        self.depth -= 1;
        self.commands.push(DrawCommand::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.commands.push(DrawCommand::Scale { sx, sy });
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_line_dash(&mut self, dash: LineDash) {
        self.commands.push(DrawCommand::LineDash(dash));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record_point(DrawCommand::MoveTo { x, y }, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record_point(DrawCommand::LineTo { x, y }, x, y);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        if self.invalid_geometry > 0 {
            let count = std::mem::take(&mut self.invalid_geometry);
            return Err(ChartError::InvalidData(format!(
                "path contains {count} non-finite vertices"
            )));
        }
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> ChartResult<()> {
        if !x.is_finite() || !y.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle geometry must be finite with radius > 0".to_owned(),
            ));
        }
        self.commands.push(DrawCommand::FillCircle { x, y, radius });
        Ok(())
    }
}
