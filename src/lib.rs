//! strip-chart: streaming strip-chart engine for multi-channel time series.
//!
//! Samples from a running simulation are kept in a fixed-capacity ring,
//! painted newest-to-oldest through a backend-agnostic drawing surface, and
//! navigated with pan/zoom that always lands on whole time steps. Point
//! queries interpolate channel values under the pointer.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod query;
pub mod render;
pub mod telemetry;

pub use api::{EngineSnapshot, StripChartConfig, StripChartEngine};
pub use error::{ChartError, ChartResult};
