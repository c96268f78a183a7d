use approx::assert_abs_diff_eq;
use strip_chart::core::{PlotArea, SampleStore, Viewport};
use strip_chart::query::{AllChannels, ChannelList, PointQueryResolver};

fn tens_store() -> SampleStore {
    let mut store = SampleStore::new(5, 1).expect("store");
    for t in 0..7 {
        let t = f64::from(t);
        store.append(t, &[t * 10.0]).expect("append");
    }
    store
}

#[test]
fn evicting_store_interpolates_between_remaining_samples() {
    let store = tens_store();
    let times: Vec<f64> = store.iter().map(|sample| sample.time()).collect();
    assert_eq!(times, vec![6.0, 5.0, 4.0, 3.0, 2.0]);

    // absolute time 4.5 is 1.5 before the newest sample
    let reading = PointQueryResolver
        .resolve_relative_time(-1.5, &store, &AllChannels)
        .expect("reading");
    assert_abs_diff_eq!(reading.time, 4.5, epsilon = 1e-9);
    assert_abs_diff_eq!(reading.channel(0).expect("value"), 45.0, epsilon = 1e-9);
}

#[test]
fn bracket_round_trip_is_exact_at_endpoints_and_midpoint() {
    let mut store = SampleStore::new(4, 1).expect("store");
    store.append(10.0, &[-7.25]).expect("append");
    store.append(12.0, &[3.5]).expect("append");

    let newest = PointQueryResolver
        .resolve_relative_time(0.0, &store, &AllChannels)
        .expect("newest");
    assert_eq!(newest.channel(0), Some(3.5));

    let oldest = PointQueryResolver
        .resolve_relative_time(-2.0, &store, &AllChannels)
        .expect("oldest");
    assert_eq!(oldest.channel(0), Some(-7.25));

    let middle = PointQueryResolver
        .resolve_relative_time(-1.0, &store, &AllChannels)
        .expect("middle");
    assert_abs_diff_eq!(
        middle.channel(0).expect("value"),
        (3.5 - 7.25) / 2.0,
        epsilon = 1e-12
    );
}

#[test]
fn duplicate_timestamps_report_newer_sample() {
    let mut store = SampleStore::new(4, 1).expect("store");
    store.append(0.0, &[1.0]).expect("append");
    store.append(1.0, &[2.0]).expect("append");
    store.append(1.0, &[9.0]).expect("append");

    let reading = PointQueryResolver
        .resolve_relative_time(0.0, &store, &AllChannels)
        .expect("reading");
    assert_eq!(reading.channel(0), Some(9.0));

    // the zero-width pair adds no elapsed time
    let reading = PointQueryResolver
        .resolve_relative_time(-1.0, &store, &AllChannels)
        .expect("reading");
    assert_eq!(reading.channel(0), Some(1.0));
}

#[test]
fn pixel_queries_outside_the_area_have_no_data() {
    let store = tens_store();
    let viewport = Viewport::new(1.0, 1.0, 5, 0.0, 100.0).expect("viewport");
    let area = PlotArea::new(200, 100);

    for (x, y) in [(-1.0, 10.0), (201.0, 10.0), (10.0, -0.5), (10.0, 100.5)] {
        assert!(
            PointQueryResolver
                .resolve(x, y, &viewport, area, &store, &AllChannels)
                .is_none()
        );
    }

    let reading = PointQueryResolver
        .resolve(200.0, 100.0, &viewport, area, &store, &ChannelList::new([0]))
        .expect("corner");
    assert_eq!(reading.channel(0), Some(60.0));
    assert_eq!(reading.value, Some(0.0));
}

#[test]
fn left_edge_beyond_history_has_no_data() {
    let mut store = SampleStore::new(100, 1).expect("store");
    for t in 0..10 {
        store.append(f64::from(t), &[1.0]).expect("append");
    }
    let viewport = Viewport::new(1.0, 1.0, 100, 0.0, 2.0).expect("viewport");
    let area = PlotArea::new(100, 50);

    assert!(
        PointQueryResolver
            .resolve(10.0, 25.0, &viewport, area, &store, &AllChannels)
            .is_none()
    );
    assert!(
        PointQueryResolver
            .resolve(95.0, 25.0, &viewport, area, &store, &AllChannels)
            .is_some()
    );
}
