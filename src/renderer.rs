use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, Painter, Rect, Stroke};
use log::debug;

use crate::command::Command;
use crate::engine::SquaresEngine;
use crate::state::SquaresState;
use crate::store::ObserverId;

const FILL: Color32 = Color32::from_rgba_premultiplied(14, 30, 52, 40);
const OUTLINE: Color32 = Color32::from_rgb(58, 123, 213);

/// What the renderer has committed to the display.
///
/// The core only counts shapes; the rectangle list itself, and the
/// most-recently-committed-first undo convention, live here.
#[derive(Debug, Default)]
struct ShapeLog {
    committed: Vec<Rect>,
    preview: Option<Rect>,
}

impl ShapeLog {
    fn apply(&mut self, snapshot: &SquaresState) {
        match snapshot.last_command {
            Some(Command::StartDrag(_)) | Some(Command::Move(_)) => {
                self.preview = Some(snapshot.rect());
            }
            Some(Command::EndDrag(_)) => {
                self.committed.push(snapshot.rect());
                self.preview = None;
                debug!("committed shape #{}", self.committed.len());
            }
            Some(Command::Undo) => {
                self.committed.pop();
            }
            Some(Command::Clear) => {
                self.committed.clear();
            }
            // The snapshot replayed at subscription time; nothing has been
            // drawn yet, but a mid-gesture attach still gets its preview.
            None => {
                self.preview = snapshot.is_dragging().then(|| snapshot.rect());
            }
        }
    }
}

/// Store observer that keeps the committed rectangles and paints them.
pub struct Renderer {
    shapes: Rc<RefCell<ShapeLog>>,
    subscription: ObserverId,
}

impl Renderer {
    /// Subscribes to the engine's store; the snapshot replayed on
    /// subscription seeds the shape log.
    pub fn attach(engine: &mut SquaresEngine) -> Self {
        let shapes = Rc::new(RefCell::new(ShapeLog::default()));
        let sink = Rc::clone(&shapes);
        let subscription = engine.subscribe(move |snapshot| sink.borrow_mut().apply(snapshot));
        Self {
            shapes,
            subscription,
        }
    }

    /// The store handle for this renderer, e.g. to detach it.
    pub fn subscription(&self) -> ObserverId {
        self.subscription
    }

    /// The rectangles currently on display, oldest first.
    pub fn committed(&self) -> Vec<Rect> {
        self.shapes.borrow().committed.clone()
    }

    /// The in-progress rectangle, while a drag is active.
    pub fn preview(&self) -> Option<Rect> {
        self.shapes.borrow().preview
    }

    /// Paints the committed rectangles and the in-progress preview.
    pub fn render(&self, painter: &Painter) {
        let shapes = self.shapes.borrow();
        for rect in &shapes.committed {
            painter.rect_filled(*rect, 0.0, FILL);
            painter.rect_stroke(*rect, 0.0, Stroke::new(2.0, OUTLINE));
        }
        if let Some(rect) = shapes.preview {
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, OUTLINE));
        }
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("shapes", &self.shapes.borrow())
            .field("subscription", &self.subscription)
            .finish()
    }
}
