mod primitives;
mod recording_surface;
mod style;
mod surface;
mod trace_renderer;

pub use primitives::{Color, LineDash, TRACE_PALETTE};
pub use recording_surface::{DrawCommand, RecordingSurface};
pub use style::TraceStyle;
pub use surface::DrawingSurface;
pub use trace_renderer::{RenderStats, TraceRenderer};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
