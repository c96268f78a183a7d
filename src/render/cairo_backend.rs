use cairo::{Context, Format, ImageSurface, Operator};
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, LineDash};

/// [`DrawingSurface`] backed by a Cairo context.
///
/// Works either offscreen on an owned image surface or in place on an external
/// context, for example inside a GTK `DrawingArea` draw callback.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    clear_color: Color,
    stroke_color: Color,
    fill_color: Color,
}

impl CairoSurface {
    pub fn offscreen(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self::with_context(context, Some(image)))
    }

    /// Draws on an external context. The context is reference counted, so the
    /// caller keeps its own handle.
    #[must_use]
    pub fn from_context(context: &Context) -> Self {
        Self::with_context(context.clone(), None)
    }

    fn with_context(context: Context, image: Option<ImageSurface>) -> Self {
        Self {
            context,
            image,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            fill_color: Color::rgb(0.0, 0.0, 0.0),
        }
    }

    /// Offscreen target, `None` when drawing on an external context.
    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    fn set_source(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}

impl DrawingSurface for CairoSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.context.translate(dx, dy);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.context.scale(sx, sy);
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.save()?;
        self.context.set_operator(Operator::Source);
        self.set_source(self.clear_color);
        let painted = self
            .context
            .paint()
            .map_err(|err| map_backend_error("failed to clear cairo surface", err));
        self.restore()?;
        painted
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_dash(&mut self, dash: LineDash) {
        self.context.set_dash(dash.pattern(), 0.0);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.set_source(self.stroke_color);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> ChartResult<()> {
        self.context.new_path();
        self.context.arc(x, y, radius, 0.0, TAU);
        self.set_source(self.fill_color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
