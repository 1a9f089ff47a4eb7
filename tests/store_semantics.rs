use std::cell::RefCell;
use std::rc::Rc;

use eframe_squares::{Command, SquaresEngine, SquaresState, StateStore};
use egui::pos2;

#[test]
fn subscribe_replays_the_current_snapshot_exactly_once() {
    let mut engine = SquaresEngine::new();
    engine.submit(Command::StartDrag(pos2(1.0, 2.0))).unwrap();

    let seen: Rc<RefCell<Vec<SquaresState>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    // Exactly one delivery happened before subscribe returned, and it was
    // the current state, not some default.
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].is_dragging());
    assert_eq!(seen[0].anchor, pos2(1.0, 2.0));
}

#[test]
fn publish_notifies_observers_in_registration_order() {
    let mut store = StateStore::new();
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let sink = Rc::clone(&order);
        store.subscribe(move |_| sink.borrow_mut().push(tag));
    }

    order.borrow_mut().clear(); // drop the replay deliveries
    store.publish(SquaresState::initial());

    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn unsubscribed_observers_stop_receiving() {
    let mut engine = SquaresEngine::new();

    let deliveries = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&deliveries);
    let handle = engine.subscribe(move |_| *sink.borrow_mut() += 1);
    assert_eq!(*deliveries.borrow(), 1); // the replay

    engine.submit(Command::StartDrag(pos2(0.0, 0.0))).unwrap();
    assert_eq!(*deliveries.borrow(), 2);

    assert!(engine.unsubscribe(handle));
    engine.submit(Command::Move(pos2(9.0, 9.0))).unwrap();
    assert_eq!(*deliveries.borrow(), 2);

    // A handle can only be removed once.
    assert!(!engine.unsubscribe(handle));
}

#[test]
fn current_queries_without_subscribing() {
    let mut store = StateStore::new();
    assert_eq!(store.current(), &SquaresState::initial());
    assert_eq!(store.observer_count(), 0);

    let published = SquaresState {
        shape_count: 3,
        ..SquaresState::initial()
    };
    store.publish(published.clone());

    assert_eq!(store.current(), &published);
    assert_eq!(store.observer_count(), 0);
}

#[test]
fn the_store_keeps_only_the_latest_snapshot() {
    let mut store = StateStore::new();

    for count in 1..=5 {
        store.publish(SquaresState {
            shape_count: count,
            ..SquaresState::initial()
        });
    }

    // A late subscriber sees the newest value, nothing older.
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.shape_count));

    assert_eq!(*seen.borrow(), vec![5]);
}
