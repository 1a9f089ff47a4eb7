use eframe_squares::{Command, SquaresEngine, SquaresState};
use egui::pos2;

#[test]
fn snapshots_round_trip_through_serde() {
    let mut engine = SquaresEngine::new();
    engine.submit(Command::StartDrag(pos2(50.0, 70.0))).unwrap();
    engine.submit(Command::Move(pos2(10.0, 10.0))).unwrap();

    let state = engine.current();
    let json = serde_json::to_string(state).unwrap();
    let back: SquaresState = serde_json::from_str(&json).unwrap();

    assert_eq!(*state, back);
    assert!(back.direction.dragging_left);
    assert!(back.direction.dragging_up);
    assert_eq!(back.last_command, Some(Command::Move(pos2(10.0, 10.0))));
}

#[test]
fn the_initial_snapshot_serializes_with_no_command() {
    let json = serde_json::to_string(&SquaresState::initial()).unwrap();
    let back: SquaresState = serde_json::from_str(&json).unwrap();

    assert_eq!(back, SquaresState::initial());
    assert_eq!(back.last_command, None);
}
