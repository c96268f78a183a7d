use smallvec::SmallVec;

/// Chooses which channels a point query reports.
pub trait ChannelSelector {
    fn selects(&self, channel: usize) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllChannels;

impl ChannelSelector for AllChannels {
    fn selects(&self, _channel: usize) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleChannel(pub usize);

impl ChannelSelector for SingleChannel {
    fn selects(&self, channel: usize) -> bool {
        self.0 == channel
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelList(pub SmallVec<[usize; 4]>);

impl ChannelList {
    #[must_use]
    pub fn new(channels: impl IntoIterator<Item = usize>) -> Self {
        Self(channels.into_iter().collect())
    }
}

impl ChannelSelector for ChannelList {
    fn selects(&self, channel: usize) -> bool {
        self.0.contains(&channel)
    }
}

impl<F> ChannelSelector for F
where
    F: Fn(usize) -> bool,
{
    fn selects(&self, channel: usize) -> bool {
        self(channel)
    }
}
