use std::sync::{Arc, Mutex};
use std::time::Duration;

use goodish::{
    combinations_of, copy_props, observe, range_arr, union, ChangeKind, CopyOptions, Random,
    Rectangle, Throttler, Vector2D,
};
use serde_json::json;

#[test]
fn helpers_are_reachable_from_the_facade() {
    let mut rng = Random::seeded(1);
    assert_eq!(rng.random_int(1, 10000), 1316);

    let pairs: Vec<Vec<i32>> = combinations_of(&range_arr(0, 4), 2).collect();
    assert_eq!(pairs.len(), 6);

    assert_eq!(union(&[1, 2], &[2, 3]), vec![1, 2, 3]);

    let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(&Vector2D::new(5.0, 5.0)));

    let src = json!({"a": 1, "b": 2}).as_object().cloned().unwrap();
    let copied = copy_props(&src, &CopyOptions::blocked(["b"])).unwrap();
    assert_eq!(copied.keys().collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn observable_is_reachable_from_the_facade() {
    let mut doc = json!({"n": 0});
    let mut o = observe(&mut doc).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    o.on(ChangeKind::Changed, move |ev| s.lock().unwrap().push(ev.value().cloned()));
    o.at("/n").set(json!(1)).unwrap();
    drop(o);
    assert_eq!(*seen.lock().unwrap(), vec![Some(json!(1))]);
    assert_eq!(doc, json!({"n": 1}));
}

#[tokio::test(start_paused = true)]
async fn throttler_is_reachable_from_the_facade() {
    let throttler = Throttler::new(Duration::from_millis(5));
    let start = tokio::time::Instant::now();
    throttler.throttle().await;
    throttler.throttle().await;
    assert!(start.elapsed() >= Duration::from_millis(10));
}
