use crate::error::ChartResult;
use crate::render::{Color, LineDash};

/// Stateful 2D drawing surface consumed by the paint pass.
///
/// Implementations keep a transform stack (`save`/`restore`) and a current
/// path built with `move_to`/`line_to` and flushed by `stroke`. Coordinates
/// passed to drawing calls are in the current user space.
pub trait DrawingSurface {
    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    /// Clears the whole surface.
    fn clear(&mut self) -> ChartResult<()>;

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, dash: LineDash);

    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self) -> ChartResult<()>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> ChartResult<()>;
}
