use std::sync::{Arc, Mutex};

use goodish_core::{ChangeEvent, ChangeKind, Observable, PathStep};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone)]
enum Op {
    Set(String, i64),
    Delete(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let key = "[a-d]";
    prop_oneof![
        (key, 0i64..4).prop_map(|(k, v)| Op::Set(k, v)),
        key.prop_map(Op::Delete),
    ]
}

fn replay(events: &[ChangeEvent]) -> Map<String, Value> {
    let mut shadow = Map::new();
    for event in events {
        let Some(PathStep::Key(key)) = event.path().first() else {
            panic!("unexpected path in {event:?}");
        };
        match event {
            ChangeEvent::Added { value, .. } | ChangeEvent::Changed { value, .. } => {
                shadow.insert(key.clone(), value.clone());
            }
            ChangeEvent::Deleted { .. } => {
                shadow.remove(key);
            }
        }
    }
    shadow
}

proptest! {
    #[test]
    fn events_replay_to_the_same_document(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut o = Observable::new(json!({})).unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        for kind in ChangeKind::ALL {
            let events = Arc::clone(&events);
            o.on(kind, move |ev| events.lock().unwrap().push(ev.clone()));
        }

        for op in &ops {
            match op {
                Op::Set(key, value) => o.set(&[PathStep::Key(key.clone())], json!(value)).unwrap(),
                Op::Delete(key) => {
                    o.delete(&[PathStep::Key(key.clone())]).unwrap();
                }
            }
        }

        let events = events.lock().unwrap();
        let shadow = replay(&events);
        let doc = o.value().as_object().unwrap();
        prop_assert_eq!(shadow.len(), doc.len());
        for (key, value) in doc {
            prop_assert_eq!(shadow.get(key), Some(value));
        }
    }

    #[test]
    fn setting_an_equal_value_is_silent(value in 0i64..100) {
        let mut o = Observable::new(json!({"k": value})).unwrap();
        let count = Arc::new(Mutex::new(0usize));
        for kind in ChangeKind::ALL {
            let count = Arc::clone(&count);
            o.on(kind, move |_| *count.lock().unwrap() += 1);
        }
        o.at("/k").set(json!(value)).unwrap();
        prop_assert_eq!(*count.lock().unwrap(), 0);
    }
}
