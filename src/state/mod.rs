use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::geometry::{self, DragDirection};

mod machine;
pub use machine::DragStateMachine;

/// The interaction mode of the gesture machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionPhase {
    /// Between gestures. The initial state, and where every gesture ends.
    Idle,
    /// Strictly between a `StartDrag` and its matching `EndDrag`.
    Dragging,
}

/// One immutable published state value: phase, gesture geometry and the
/// committed-shape count at a point in time.
///
/// `shape_count` is what the renderer is *expected* to display; the core
/// never inspects the renderer's actual contents. The normalized rectangle
/// is derived from `anchor`/`current` on demand rather than stored, so the
/// geometry resolver stays the single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquaresState {
    pub phase: InteractionPhase,
    /// Pointer position recorded at gesture start; one rectangle corner.
    pub anchor: Pos2,
    /// Most recent pointer position during the gesture.
    pub current: Pos2,
    pub direction: DragDirection,
    /// The command that produced this snapshot; `None` only for the state
    /// held before any command has been accepted.
    pub last_command: Option<Command>,
    pub shape_count: usize,
}

impl SquaresState {
    /// The state before any command has been accepted.
    pub fn initial() -> Self {
        Self {
            phase: InteractionPhase::Idle,
            anchor: Pos2::ZERO,
            current: Pos2::ZERO,
            direction: DragDirection::default(),
            last_command: None,
            shape_count: 0,
        }
    }

    /// The normalized rectangle spanned by the gesture.
    pub fn rect(&self) -> Rect {
        geometry::resolve(self.anchor, self.current)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, InteractionPhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, InteractionPhase::Dragging)
    }
}

impl Default for SquaresState {
    fn default() -> Self {
        Self::initial()
    }
}
