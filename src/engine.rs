use log::{debug, warn};

use crate::command::{Command, ShapeLedger};
use crate::error::CommandError;
use crate::state::{DragStateMachine, SquaresState};
use crate::store::{ObserverId, StateStore};

/// One drawing surface's worth of core state: the drag state machine, the
/// shape ledger and the snapshot store.
///
/// Engines are explicitly constructed and owned — there is no ambient
/// shared instance — so independent canvases can coexist and tests get
/// fresh isolated state.
///
/// Dispatch is single-threaded and strictly synchronous: each submitted
/// command is fully processed (transition, ledger update, publish, observer
/// notification) before `submit` returns. A multi-threaded host must
/// serialize command delivery through its own exclusive-access gate.
pub struct SquaresEngine {
    machine: DragStateMachine,
    ledger: ShapeLedger,
    store: StateStore,
}

impl Default for SquaresEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SquaresEngine {
    pub fn new() -> Self {
        Self {
            machine: DragStateMachine::new(),
            ledger: ShapeLedger::new(),
            store: StateStore::new(),
        }
    }

    /// Runs one command to completion.
    ///
    /// Transition, ledger update and publish happen as one indivisible step:
    /// observers only ever see fully applied commands. Commands that are
    /// no-ops in the current phase are accepted and publish nothing. The
    /// only error is an intake contract violation ([`CommandError`]).
    pub fn submit(&mut self, command: Command) -> Result<(), CommandError> {
        validate(command)?;

        match self.machine.apply(command, &mut self.ledger) {
            Some(snapshot) => {
                debug!(
                    "{}: phase {:?}, {} committed shapes",
                    command.name(),
                    snapshot.phase,
                    snapshot.shape_count
                );
                self.store.publish(snapshot);
            }
            None => debug!("{} is a no-op in the current state", command.name()),
        }
        Ok(())
    }

    /// Registers an observer of published snapshots; it is handed the
    /// current snapshot once before this returns (replay-last).
    pub fn subscribe(&mut self, observer: impl FnMut(&SquaresState) + 'static) -> ObserverId {
        self.store.subscribe(observer)
    }

    /// Stops deliveries to a previously registered observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.store.unsubscribe(id)
    }

    /// The latest snapshot, without subscribing.
    pub fn current(&self) -> &SquaresState {
        self.store.current()
    }

    pub fn shape_count(&self) -> usize {
        self.ledger.count()
    }

    /// Whether `Undo` (or `Clear`) would currently do anything; the host's
    /// UI controls key off this.
    pub fn can_undo(&self) -> bool {
        self.ledger.can_undo()
    }
}

fn validate(command: Command) -> Result<(), CommandError> {
    if let Some(p) = command.point() {
        if !p.x.is_finite() || !p.y.is_finite() {
            warn!("rejecting {} with non-finite point {:?}", command.name(), p);
            return Err(CommandError::NonFinitePoint {
                command: command.name(),
                x: p.x,
                y: p.y,
            });
        }
    }
    Ok(())
}
