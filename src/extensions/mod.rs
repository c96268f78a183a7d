//! Optional overlays drawn on top of the traces.

pub mod markers;

pub use markers::{MarkerLine, MarkerLineSet};
