use thiserror::Error;

/// A host-side contract violation surfaced at command intake.
///
/// The core itself has no recoverable failures: every command is valid in
/// every phase (invalid-for-phase commands are no-ops) and geometry is
/// total over real coordinates. What remains is input the host should never
/// have produced, reported to the caller instead of silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CommandError {
    /// The command carried a NaN or infinite coordinate. Mapping raw events
    /// into commands is the host's job, so this indicates a host bug.
    #[error("non-finite pointer coordinate ({x}, {y}) in {command}")]
    NonFinitePoint {
        command: &'static str,
        x: f32,
        y: f32,
    },
}
