mod format;
mod resolver;
mod selector;

pub use format::{ChannelKind, PlainReadingFormatter, ReadingFormatter};
pub use resolver::{ChannelReading, PointQueryResolver, PointReading};
pub use selector::{AllChannels, ChannelList, ChannelSelector, SingleChannel};
