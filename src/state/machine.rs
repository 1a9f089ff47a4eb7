use egui::Pos2;

use crate::command::{Command, ShapeLedger};
use crate::geometry::DragDirection;

use super::{InteractionPhase, SquaresState};

/// The drag state machine: applies one command at a time to the latest
/// snapshot, producing the next one.
///
/// Guarded-out commands (`Move`/`EndDrag` while idle, `StartDrag` mid-drag,
/// `Undo`/`Clear` with nothing committed) are accepted but return `None`,
/// and nothing gets published for them.
#[derive(Debug, Default)]
pub struct DragStateMachine {
    latest: SquaresState,
}

impl DragStateMachine {
    pub fn new() -> Self {
        Self {
            latest: SquaresState::initial(),
        }
    }

    pub fn latest(&self) -> &SquaresState {
        &self.latest
    }

    /// Runs one transition. The ledger is updated in the same step, so the
    /// returned snapshot already carries the new count.
    pub fn apply(&mut self, command: Command, ledger: &mut ShapeLedger) -> Option<SquaresState> {
        let next = match (self.latest.phase, command) {
            (InteractionPhase::Idle, Command::StartDrag(p)) => {
                Some(self.gesture(InteractionPhase::Dragging, p, p, command, ledger))
            }
            (InteractionPhase::Dragging, Command::Move(p)) => {
                Some(self.gesture(InteractionPhase::Dragging, self.latest.anchor, p, command, ledger))
            }
            (InteractionPhase::Dragging, Command::EndDrag(p)) => {
                ledger.commit();
                Some(self.gesture(InteractionPhase::Idle, self.latest.anchor, p, command, ledger))
            }
            // Not part of a valid gesture in the current phase.
            (InteractionPhase::Idle, Command::Move(_) | Command::EndDrag(_)) => None,
            (InteractionPhase::Dragging, Command::StartDrag(_)) => None,
            // Phase-independent: the user may undo or clear mid-drag.
            (_, Command::Undo) => ledger.undo().then(|| self.bookkeeping(command, ledger)),
            (_, Command::Clear) => ledger.clear().then(|| self.bookkeeping(command, ledger)),
        };

        if let Some(snapshot) = &next {
            self.latest = snapshot.clone();
        }
        next
    }

    fn gesture(
        &self,
        phase: InteractionPhase,
        anchor: Pos2,
        current: Pos2,
        command: Command,
        ledger: &ShapeLedger,
    ) -> SquaresState {
        SquaresState {
            phase,
            anchor,
            current,
            direction: DragDirection::between(anchor, current),
            last_command: Some(command),
            shape_count: ledger.count(),
        }
    }

    /// Ledger-only update: phase and gesture geometry carry over unchanged.
    fn bookkeeping(&self, command: Command, ledger: &ShapeLedger) -> SquaresState {
        SquaresState {
            last_command: Some(command),
            shape_count: ledger.count(),
            ..self.latest.clone()
        }
    }
}
