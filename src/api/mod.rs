mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod marker_controller;
mod query_controller;
mod render_coordinator;
mod snapshot_controller;
mod validation;

pub use engine::StripChartEngine;
pub use engine_config::StripChartConfig;
pub use engine_snapshot::EngineSnapshot;
