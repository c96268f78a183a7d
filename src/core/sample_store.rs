use std::iter::FusedIterator;

use tracing::trace;

use crate::core::ValueRange;
use crate::error::{ChartError, ChartResult};

/// Fixed-capacity circular store of time-stamped multi-channel samples.
///
/// Samples are laid out in one flat buffer with a stride of `channels + 1`
/// (time first). Appending past capacity evicts the logically oldest sample.
/// Iteration is newest-first and does not imply ascending time: producers may
/// append out of order or restart their clock.
///
/// Every append widens the store's [`ValueRange`] over the channel values.
#[derive(Debug, Clone)]
pub struct SampleStore {
    capacity: usize,
    channel_count: usize,
    data: Vec<f64>,
    cursor: usize,
    len: usize,
    total_appends: u64,
    value_range: ValueRange,
}

impl SampleStore {
    pub fn new(capacity: usize, channel_count: usize) -> ChartResult<Self> {
        if capacity == 0 {
            return Err(ChartError::InvalidCapacity { capacity });
        }
        if channel_count == 0 {
            return Err(ChartError::InvalidChannelCount {
                channels: channel_count,
            });
        }
        let stride = channel_count + 1;
        let slots = capacity.checked_mul(stride).ok_or_else(|| {
            ChartError::InvalidData("sample store size overflows usize".to_owned())
        })?;

        Ok(Self {
            capacity,
            channel_count,
            data: vec![f64::NAN; slots],
            cursor: 0,
            len: 0,
            total_appends: 0,
            value_range: ValueRange::new(),
        })
    }

    /// Appends one sample built from `time` and exactly `channel_count` values.
    pub fn append(&mut self, time: f64, values: &[f64]) -> ChartResult<()> {
        if values.len() != self.channel_count {
            return Err(ChartError::ChannelCountMismatch {
                expected: self.channel_count,
                actual: values.len(),
            });
        }

        let stride = self.stride();
        let offset = self.cursor * stride;
        let slot = &mut self.data[offset..offset + stride];
        slot[0] = time;
        slot[1..].copy_from_slice(values);

        self.value_range.observe(values);
        self.cursor = (self.cursor + 1) % self.capacity;
        self.len = (self.len + 1).min(self.capacity);
        self.total_appends += 1;
        trace!(len = self.len, capacity = self.capacity, "append sample");
        Ok(())
    }

    /// Appends a sample whose time is already spliced in at index 0.
    pub fn append_sample(&mut self, sample: &[f64]) -> ChartResult<()> {
        match sample.split_first() {
            Some((&time, values)) => self.append(time, values),
            None => Err(ChartError::ChannelCountMismatch {
                expected: self.channel_count,
                actual: 0,
            }),
        }
    }

    /// Newest-to-oldest iteration over the samples held right now.
    ///
    /// The logical length is captured when the iterator is created.
    #[must_use]
    pub fn iter(&self) -> SampleIter<'_> {
        SampleIter {
            store: self,
            next_age: 0,
            end_age: self.len,
        }
    }

    /// Returns the sample `age` appends back from the newest (0 = newest).
    #[must_use]
    pub fn get(&self, age: usize) -> Option<SampleRef<'_>> {
        if age >= self.len {
            return None;
        }
        let slot_index = (self.cursor + self.capacity - 1 - age) % self.capacity;
        let stride = self.stride();
        let offset = slot_index * stride;
        Some(SampleRef {
            slot: &self.data[offset..offset + stride],
        })
    }

    #[must_use]
    pub fn newest(&self) -> Option<SampleRef<'_>> {
        self.get(0)
    }

    #[must_use]
    pub fn oldest(&self) -> Option<SampleRef<'_>> {
        self.len.checked_sub(1).and_then(|age| self.get(age))
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Number of appends since construction or the last `clear`.
    #[must_use]
    pub fn total_appends(&self) -> u64 {
        self.total_appends
    }

    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        self.value_range
    }

    /// Drops every sample and resets the observed value range.
    pub fn clear(&mut self) {
        self.data.fill(f64::NAN);
        self.cursor = 0;
        self.len = 0;
        self.total_appends = 0;
        self.value_range.reset();
    }

    fn stride(&self) -> usize {
        self.channel_count + 1
    }
}

/// Borrowed view of one stored sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRef<'a> {
    slot: &'a [f64],
}

impl<'a> SampleRef<'a> {
    #[must_use]
    pub fn time(self) -> f64 {
        self.slot[0]
    }

    /// Value of `channel`, or NaN when the channel does not exist.
    #[must_use]
    pub fn value(self, channel: usize) -> f64 {
        self.slot.get(channel + 1).copied().unwrap_or(f64::NAN)
    }

    /// Channel values without the time slot.
    #[must_use]
    pub fn values(self) -> &'a [f64] {
        &self.slot[1..]
    }

    #[must_use]
    pub fn channel_count(self) -> usize {
        self.slot.len() - 1
    }
}

/// Restartable newest-first iterator returned by [`SampleStore::iter`].
#[derive(Debug, Clone)]
pub struct SampleIter<'a> {
    store: &'a SampleStore,
    next_age: usize,
    end_age: usize,
}

impl<'a> Iterator for SampleIter<'a> {
    type Item = SampleRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_age >= self.end_age {
            return None;
        }
        let sample = self.store.get(self.next_age);
        self.next_age += 1;
        sample
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end_age - self.next_age;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleIter<'_> {}

impl FusedIterator for SampleIter<'_> {}

#[cfg(test)]
mod tests {
    use super::SampleStore;
    use crate::error::ChartError;

    fn times(store: &SampleStore) -> Vec<f64> {
        store.iter().map(|sample| sample.time()).collect()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = SampleStore::new(0, 1).expect_err("zero capacity must fail");
        assert!(matches!(err, ChartError::InvalidCapacity { capacity: 0 }));
    }

    #[test]
    fn zero_channels_are_rejected() {
        let err = SampleStore::new(4, 0).expect_err("zero channels must fail");
        assert!(matches!(err, ChartError::InvalidChannelCount { channels: 0 }));
    }

    #[test]
    fn iteration_is_newest_first() {
        let mut store = SampleStore::new(4, 1).expect("store");
        for t in 0..3 {
            store.append(f64::from(t), &[f64::from(t) * 2.0]).expect("append");
        }
        assert_eq!(times(&store), vec![2.0, 1.0, 0.0]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn append_past_capacity_evicts_oldest() {
        let mut store = SampleStore::new(3, 2).expect("store");
        for t in 0..5 {
            let t = f64::from(t);
            store.append(t, &[t, -t]).expect("append");
        }
        assert_eq!(store.len(), 3);
        assert_eq!(times(&store), vec![4.0, 3.0, 2.0]);
        let oldest = store.oldest().expect("oldest");
        assert_eq!(oldest.values(), &[2.0, -2.0]);
        assert_eq!(store.total_appends(), 5);
    }

    #[test]
    fn mismatched_channel_count_leaves_store_untouched() {
        let mut store = SampleStore::new(3, 2).expect("store");
        let err = store.append(0.0, &[1.0]).expect_err("mismatch");
        assert!(matches!(
            err,
            ChartError::ChannelCountMismatch {
                expected: 2,
                actual: 1
            }
        ));
        assert!(store.is_empty());
        assert!(store.value_range().is_empty());
    }

    #[test]
    fn append_sample_splits_time_slot() {
        let mut store = SampleStore::new(2, 2).expect("store");
        store.append_sample(&[7.0, 1.0, 2.0]).expect("append");
        let newest = store.newest().expect("newest");
        assert_eq!(newest.time(), 7.0);
        assert_eq!(newest.values(), &[1.0, 2.0]);
        assert!(store.append_sample(&[]).is_err());
    }

    #[test]
    fn append_widens_value_range_without_time_slot() {
        let mut store = SampleStore::new(4, 2).expect("store");
        store.append(1_000.0, &[1.0, f64::NAN]).expect("append");
        store.append(2_000.0, &[-3.0, 5.0]).expect("append");
        assert_eq!(store.value_range().bounds(), Some((-3.0, 5.0)));
    }

    #[test]
    fn iterator_is_restartable_and_exact_size() {
        let mut store = SampleStore::new(5, 1).expect("store");
        for t in 0..4 {
            store.append(f64::from(t), &[0.0]).expect("append");
        }
        let iter = store.iter();
        assert_eq!(iter.len(), 4);
        let first: Vec<f64> = iter.clone().map(|s| s.time()).collect();
        let second: Vec<f64> = iter.map(|s| s.time()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn clear_resets_length_and_range() {
        let mut store = SampleStore::new(3, 1).expect("store");
        store.append(0.0, &[4.0]).expect("append");
        store.clear();
        assert!(store.is_empty());
        assert!(store.newest().is_none());
        assert!(store.value_range().is_empty());
        assert_eq!(store.total_appends(), 0);
    }

    #[test]
    fn missing_channel_reads_as_nan() {
        let mut store = SampleStore::new(1, 1).expect("store");
        store.append(0.0, &[1.0]).expect("append");
        assert!(store.newest().expect("newest").value(3).is_nan());
    }
}
