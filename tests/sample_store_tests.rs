use strip_chart::ChartError;
use strip_chart::core::SampleStore;

#[test]
fn overwrites_oldest_and_iterates_newest_first() {
    let mut store = SampleStore::new(5, 1).expect("store");
    for t in 0..7 {
        let t = f64::from(t);
        store.append(t, &[t * 10.0]).expect("append");
    }

    assert_eq!(store.len(), 5);
    assert_eq!(store.total_appends(), 7);
    let times: Vec<f64> = store.iter().map(|sample| sample.time()).collect();
    assert_eq!(times, vec![6.0, 5.0, 4.0, 3.0, 2.0]);
    let values: Vec<f64> = store.iter().map(|sample| sample.value(0)).collect();
    assert_eq!(values, vec![60.0, 50.0, 40.0, 30.0, 20.0]);
    assert_eq!(store.oldest().map(|sample| sample.time()), Some(2.0));
}

#[test]
fn construction_fails_fast_on_zero_sizes() {
    assert!(matches!(
        SampleStore::new(0, 1),
        Err(ChartError::InvalidCapacity { capacity: 0 })
    ));
    assert!(matches!(
        SampleStore::new(4, 0),
        Err(ChartError::InvalidChannelCount { channels: 0 })
    ));
}

#[test]
fn mismatched_append_leaves_store_untouched() {
    let mut store = SampleStore::new(4, 2).expect("store");
    store.append(0.0, &[1.0, 2.0]).expect("append");

    let err = store.append(1.0, &[1.0]).expect_err("mismatch");
    assert!(matches!(
        err,
        ChartError::ChannelCountMismatch {
            expected: 2,
            actual: 1
        }
    ));
    assert_eq!(store.len(), 1);
    assert_eq!(store.newest().map(|sample| sample.time()), Some(0.0));
}

#[test]
fn value_range_ignores_nan_and_survives_eviction() {
    let mut store = SampleStore::new(2, 2).expect("store");
    store.append(0.0, &[-3.0, f64::NAN]).expect("append");
    store.append(1.0, &[1.0, 2.0]).expect("append");
    store.append(2.0, &[0.5, 0.5]).expect("append");

    // the sample that set the minimum was evicted; the range never narrows
    assert_eq!(store.value_range().bounds(), Some((-3.0, 2.0)));

    store.clear();
    assert!(store.is_empty());
    assert!(store.value_range().is_empty());
}

#[test]
fn iterator_snapshot_is_exact_size() {
    let mut store = SampleStore::new(8, 1).expect("store");
    for t in 0..3 {
        store.append(f64::from(t), &[0.0]).expect("append");
    }
    let iter = store.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.count(), 3);
    assert!(store.get(3).is_none());
}
