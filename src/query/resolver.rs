use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PRESENT, PlotArea, SampleRef, SampleStore, Viewport};
use crate::query::ChannelSelector;

/// Interpolated value of one channel, `None` where either bracketing sample
/// has no data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelReading {
    pub channel: usize,
    pub value: Option<f64>,
}

/// Result of a point query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointReading {
    /// Interpolated sample time, in the producer's clock.
    pub time: f64,
    /// Queried time relative to the newest sample (`<= 0`).
    pub relative_time: f64,
    /// Value under the pointer; `None` for data-space queries.
    pub value: Option<f64>,
    pub channels: SmallVec<[ChannelReading; 4]>,
}

impl PointReading {
    #[must_use]
    pub fn channel(&self, channel: usize) -> Option<f64> {
        self.channels
            .iter()
            .find(|reading| reading.channel == channel)
            .and_then(|reading| reading.value)
    }
}

/// Maps pointer positions to interpolated per-channel readings.
///
/// Stateless; the store and viewport are only read.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointQueryResolver;

impl PointQueryResolver {
    /// Resolves a pixel position measured from the top-left corner of the
    /// plot area.
    ///
    /// Returns `None` outside the area or when no stored samples bracket the
    /// queried time.
    pub fn resolve<S: ChannelSelector + ?Sized>(
        &self,
        pixel_x: f64,
        pixel_y: f64,
        viewport: &Viewport,
        area: PlotArea,
        store: &SampleStore,
        selector: &S,
    ) -> Option<PointReading> {
        if !area.is_valid() || !area.contains(pixel_x, pixel_y) {
            return None;
        }

        let sx = pixel_x / area.width_px();
        let sy = 1.0 - pixel_y / area.height_px();
        let query_time = viewport.x_min() + sx * viewport.range();
        let query_value = viewport.y_min() + sy * (viewport.y_max() - viewport.y_min());

        let mut reading = self.resolve_relative_time(query_time, store, selector)?;
        reading.value = Some(query_value);
        Some(reading)
    }

    /// Resolves a time relative to the newest sample.
    ///
    /// Walks newest to oldest; backwards steps in the producer clock advance
    /// the elapsed time by zero. A zero-width bracket reports the newer
    /// sample.
    pub fn resolve_relative_time<S: ChannelSelector + ?Sized>(
        &self,
        query_time: f64,
        store: &SampleStore,
        selector: &S,
    ) -> Option<PointReading> {
        if !query_time.is_finite() || query_time > PRESENT {
            return None;
        }

        let mut samples = store.iter();
        let mut current = samples.next()?;
        if query_time == PRESENT {
            return Some(interpolate(current, current, 0.0, query_time, selector));
        }

        let mut elapsed = PRESENT;
        for prev in samples {
            let dt = current.time() - prev.time();
            elapsed -= dt.max(0.0);
            if elapsed <= query_time {
                let fraction = if dt > 0.0 {
                    1.0 - (query_time - elapsed) / dt
                } else {
                    0.0
                };
                return Some(interpolate(current, prev, fraction, query_time, selector));
            }
            current = prev;
        }
        None
    }
}

fn interpolate<S: ChannelSelector + ?Sized>(
    current: SampleRef<'_>,
    prev: SampleRef<'_>,
    fraction: f64,
    relative_time: f64,
    selector: &S,
) -> PointReading {
    let mix = |newer: f64, older: f64| {
        if fraction == 0.0 {
            newer
        } else if fraction == 1.0 {
            older
        } else {
            (1.0 - fraction) * newer + fraction * older
        }
    };

    let channels = (0..current.channel_count())
        .filter(|&channel| selector.selects(channel))
        .map(|channel| {
            let (newer, older) = (current.value(channel), prev.value(channel));
            let value = (newer.is_finite() && older.is_finite()).then(|| mix(newer, older));
            ChannelReading { channel, value }
        })
        .collect();

    PointReading {
        time: mix(current.time(), prev.time()),
        relative_time,
        value: None,
        channels,
    }
}

#[cfg(test)]
mod tests {
    use super::PointQueryResolver;
    use crate::core::{PlotArea, SampleStore, Viewport};
    use crate::query::{AllChannels, SingleChannel};

    fn tens_store() -> SampleStore {
        let mut store = SampleStore::new(5, 1).expect("store");
        for t in 0..7 {
            let t = f64::from(t);
            store.append(t, &[t * 10.0]).expect("append");
        }
        store
    }

    #[test]
    fn interpolates_between_bracketing_samples() {
        let store = tens_store();
        let reading = PointQueryResolver
            .resolve_relative_time(-1.5, &store, &AllChannels)
            .expect("reading");
        assert!((reading.time - 4.5).abs() <= 1e-9);
        assert!((reading.channel(0).expect("value") - 45.0).abs() <= 1e-9);
        assert_eq!(reading.value, None);
    }

    #[test]
    fn bracket_endpoints_are_exact() {
        let store = tens_store();
        let at_newest = PointQueryResolver
            .resolve_relative_time(0.0, &store, &AllChannels)
            .expect("newest");
        assert_eq!(at_newest.channel(0), Some(60.0));

        let at_sample = PointQueryResolver
            .resolve_relative_time(-2.0, &store, &AllChannels)
            .expect("sample");
        assert_eq!(at_sample.channel(0), Some(40.0));
        assert_eq!(at_sample.time, 4.0);
    }

    #[test]
    fn beyond_history_or_future_has_no_data() {
        let store = tens_store();
        assert!(
            PointQueryResolver
                .resolve_relative_time(-4.5, &store, &AllChannels)
                .is_none()
        );
        assert!(
            PointQueryResolver
                .resolve_relative_time(0.5, &store, &AllChannels)
                .is_none()
        );
        let empty = SampleStore::new(5, 1).expect("store");
        assert!(
            PointQueryResolver
                .resolve_relative_time(0.0, &empty, &AllChannels)
                .is_none()
        );
    }

    #[test]
    fn nan_endpoint_reports_missing_channel_only() {
        let mut store = SampleStore::new(8, 2).expect("store");
        store.append(0.0, &[1.0, f64::NAN]).expect("append");
        store.append(1.0, &[3.0, 5.0]).expect("append");

        let reading = PointQueryResolver
            .resolve_relative_time(-0.5, &store, &AllChannels)
            .expect("reading");
        assert_eq!(reading.channels.len(), 2);
        assert_eq!(reading.channel(0), Some(2.0));
        assert_eq!(reading.channel(1), None);
    }

    #[test]
    fn selector_filters_channels() {
        let mut store = SampleStore::new(8, 3).expect("store");
        store.append(0.0, &[1.0, 2.0, 3.0]).expect("append");
        store.append(1.0, &[1.0, 2.0, 3.0]).expect("append");

        let single = PointQueryResolver
            .resolve_relative_time(-0.5, &store, &SingleChannel(2))
            .expect("reading");
        assert_eq!(single.channels.len(), 1);
        assert_eq!(single.channel(2), Some(3.0));

        let even = PointQueryResolver
            .resolve_relative_time(-0.5, &store, &|channel: usize| channel % 2 == 0)
            .expect("reading");
        let picked: Vec<usize> = even.channels.iter().map(|reading| reading.channel).collect();
        assert_eq!(picked, vec![0, 2]);
    }

    #[test]
    fn rewound_clock_adds_no_elapsed_time() {
        let mut store = SampleStore::new(8, 1).expect("store");
        store.append(0.0, &[0.0]).expect("append");
        store.append(1.0, &[10.0]).expect("append");
        store.append(0.5, &[20.0]).expect("append");

        // newest (0.5) -> 1.0 steps backwards and contributes no time
        let reading = PointQueryResolver
            .resolve_relative_time(-0.5, &store, &AllChannels)
            .expect("reading");
        assert!((reading.channel(0).expect("value") - 5.0).abs() <= 1e-9);
    }

    #[test]
    fn pixel_query_maps_through_viewport() {
        let store = tens_store();
        let viewport = Viewport::new(1.0, 1.0, 5, 0.0, 100.0).expect("viewport");
        assert_eq!(viewport.x_bounds(), (-5.0, 0.0));
        let area = PlotArea::new(100, 50);

        // x=70 -> -5 + 0.7 * 5 = -1.5
        let reading = PointQueryResolver
            .resolve(70.0, 10.0, &viewport, area, &store, &AllChannels)
            .expect("reading");
        assert!((reading.relative_time + 1.5).abs() <= 1e-9);
        assert!((reading.channel(0).expect("value") - 45.0).abs() <= 1e-9);
        assert!((reading.value.expect("pointer value") - 80.0).abs() <= 1e-9);

        assert!(
            PointQueryResolver
                .resolve(120.0, 10.0, &viewport, area, &store, &AllChannels)
                .is_none()
        );
    }
}
