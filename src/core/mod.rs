pub mod sample_store;
pub mod scale;
pub mod types;
pub mod value_range;
pub mod viewport;

pub use sample_store::{SampleIter, SampleRef, SampleStore};
pub use scale::LinearScale;
pub use types::PlotArea;
pub use value_range::ValueRange;
pub use viewport::{
    DEFAULT_STEPS, MIN_ZOOM_STEPS, PRESENT, PanAccumulator, Viewport, ZOOM_EPSILON,
    quantize_to_increment,
};
