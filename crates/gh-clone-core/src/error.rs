//! Failure taxonomy
//!
//! Every failure in this crate is captured into one of these types and
//! delivered on an observable channel; nothing escapes as a panic or an
//! unhandled fault that could tear down the coordinator.

use thiserror::Error;

/// Synchronous refusal from [`crate::command::AsyncCommand::try_begin`].
///
/// A refused invocation has no side effect: no directory is touched and no
/// delegate is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandRefused {
    /// `can_execute` is currently false.
    #[error("command is disabled")]
    Disabled,
    /// A previous invocation has not completed. Cloning is not reentrant;
    /// concurrent requests are refused, never queued.
    #[error("a previous invocation is still running")]
    AlreadyRunning,
}

/// Terminal failure outcome of one clone invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloneError {
    /// The command body was reached without a selection. No I/O was
    /// performed. With the enablement wiring intact this is unreachable.
    #[error("no repository is selected")]
    NoSelection,
    /// The destination root could not be created; the clone delegate was
    /// never invoked.
    #[error("could not create destination directory {path}: {reason}")]
    DirectoryCreation { path: String, reason: String },
    /// The clone delegate reported failure. The reason is carried verbatim;
    /// a directory created beforehand is left in place.
    #[error("clone failed: {0}")]
    CloneFailed(String),
}

/// Population state of the source list.
///
/// Starts at `Loading` (the fetch is kicked off at construction) and moves
/// to `Loaded` or `Failed` exactly once. On failure the source list keeps
/// whatever was populated before; there is no automatic retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}
