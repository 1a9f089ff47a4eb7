use egui::Pos2;
use serde::{Deserialize, Serialize};

mod ledger;
pub use ledger::ShapeLedger;

/// The abstract commands the engine accepts.
///
/// The host's input adapter maps raw device events onto these: a gesture is
/// `StartDrag` followed by any number of `Move`s and one `EndDrag`, while
/// `Undo` and `Clear` may arrive in any phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Pointer pressed: anchor a new rectangle at this position.
    StartDrag(Pos2),
    /// Pointer moved while pressed: stretch the in-progress rectangle.
    Move(Pos2),
    /// Pointer released: commit the rectangle spanned so far.
    EndDrag(Pos2),
    /// Remove the most recently committed shape.
    Undo,
    /// Remove every committed shape.
    Clear,
}

impl Command {
    /// The pointer position carried by the command, if any.
    pub fn point(&self) -> Option<Pos2> {
        match self {
            Command::StartDrag(p) | Command::Move(p) | Command::EndDrag(p) => Some(*p),
            Command::Undo | Command::Clear => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::StartDrag(_) => "StartDrag",
            Command::Move(_) => "Move",
            Command::EndDrag(_) => "EndDrag",
            Command::Undo => "Undo",
            Command::Clear => "Clear",
        }
    }
}
