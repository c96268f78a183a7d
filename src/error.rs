use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid sample store capacity: {capacity} (must be > 0)")]
    InvalidCapacity { capacity: usize },

    #[error("invalid channel count: {channels} (must be > 0)")]
    InvalidChannelCount { channels: usize },

    #[error("sample has {actual} channel values, store expects {expected}")]
    ChannelCountMismatch { expected: usize, actual: usize },

    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
