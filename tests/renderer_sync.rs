use eframe_squares::{Command, Renderer, SquaresEngine};
use egui::pos2;

fn drag(engine: &mut SquaresEngine, from: (f32, f32), to: (f32, f32)) {
    engine
        .submit(Command::StartDrag(pos2(from.0, from.1)))
        .unwrap();
    engine.submit(Command::Move(pos2(to.0, to.1))).unwrap();
    engine.submit(Command::EndDrag(pos2(to.0, to.1))).unwrap();
}

#[test]
fn renderer_tracks_commits_undo_and_clear() {
    let mut engine = SquaresEngine::new();
    let renderer = Renderer::attach(&mut engine);

    drag(&mut engine, (0.0, 0.0), (10.0, 10.0));
    drag(&mut engine, (20.0, 20.0), (40.0, 30.0));
    assert_eq!(renderer.committed().len(), 2);

    // Undo removes the most recently committed rectangle, not the oldest.
    engine.submit(Command::Undo).unwrap();
    let committed = renderer.committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].min, pos2(0.0, 0.0));

    engine.submit(Command::Clear).unwrap();
    assert!(renderer.committed().is_empty());
}

#[test]
fn preview_follows_the_drag_and_ends_with_it() {
    let mut engine = SquaresEngine::new();
    let renderer = Renderer::attach(&mut engine);
    assert_eq!(renderer.preview(), None);

    engine.submit(Command::StartDrag(pos2(10.0, 10.0))).unwrap();
    engine.submit(Command::Move(pos2(50.0, 70.0))).unwrap();

    let preview = renderer.preview().expect("a drag is in progress");
    assert_eq!(preview.min, pos2(10.0, 10.0));
    assert_eq!(preview.width(), 40.0);
    assert_eq!(preview.height(), 60.0);
    assert!(renderer.committed().is_empty());

    engine.submit(Command::EndDrag(pos2(50.0, 70.0))).unwrap();
    assert_eq!(renderer.preview(), None);
    assert_eq!(renderer.committed().len(), 1);
}

#[test]
fn clear_mid_drag_keeps_the_preview() {
    let mut engine = SquaresEngine::new();
    let renderer = Renderer::attach(&mut engine);

    drag(&mut engine, (0.0, 0.0), (5.0, 5.0));
    engine.submit(Command::StartDrag(pos2(30.0, 30.0))).unwrap();
    engine.submit(Command::Move(pos2(60.0, 50.0))).unwrap();

    engine.submit(Command::Clear).unwrap();

    assert!(renderer.committed().is_empty());
    assert!(renderer.preview().is_some());
}

#[test]
fn attaching_mid_drag_picks_up_the_preview() {
    let mut engine = SquaresEngine::new();
    engine.submit(Command::StartDrag(pos2(10.0, 10.0))).unwrap();
    engine.submit(Command::Move(pos2(20.0, 25.0))).unwrap();

    // Replay-last hands the renderer the in-progress gesture on attach.
    let renderer = Renderer::attach(&mut engine);
    let preview = renderer.preview().expect("replayed snapshot is mid-drag");
    assert_eq!(preview.min, pos2(10.0, 10.0));
}
