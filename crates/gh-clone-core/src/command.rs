//! Single-flight asynchronous command
//!
//! An explicit {Idle, Running} state machine around a unit of async work.
//! The gate is synchronous: a disabled or already-running command refuses
//! the invocation before any work starts. The asynchronous body runs
//! elsewhere (the coordinator spawns it) and reports back through
//! [`AsyncCommand::finish`], which releases the running flag and delivers
//! the terminal outcome to observers exactly once per invocation, on the
//! success and the failure path alike.

use std::sync::{Arc, Mutex};

use crate::error::CommandRefused;
use crate::observable::{ObservableProperty, ReadOnlyProperty};

type OutcomeCallback<O> = Box<dyn FnMut(&O) + Send>;

/// Wraps an asynchronous action so at most one invocation is in flight.
///
/// `O` is the terminal outcome type. Outcomes are delivered through a plain
/// subscriber list rather than an equality-gated property: two identical
/// outcomes in a row are still two deliveries.
pub struct AsyncCommand<O> {
    can_execute: ReadOnlyProperty<bool>,
    is_executing: ObservableProperty<bool>,
    outcome_subscribers: Arc<Mutex<Vec<OutcomeCallback<O>>>>,
}

impl<O> AsyncCommand<O> {
    /// Build a command gated by the supplied enablement cell.
    pub fn new(can_execute: ReadOnlyProperty<bool>) -> Self {
        Self {
            can_execute,
            is_executing: ObservableProperty::new(false),
            outcome_subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Whether an invocation would currently be accepted.
    pub fn can_execute(&self) -> ReadOnlyProperty<bool> {
        self.can_execute.clone()
    }

    /// Observable busy flag, true from `try_begin` until `finish`.
    pub fn is_executing(&self) -> ReadOnlyProperty<bool> {
        self.is_executing.read_only()
    }

    /// Synchronous invocation gate.
    ///
    /// Refuses with [`CommandRefused::Disabled`] when the enablement cell is
    /// false and with [`CommandRefused::AlreadyRunning`] while a previous
    /// invocation has not finished. On success the running flag is set and
    /// the caller must eventually call [`AsyncCommand::finish`].
    ///
    /// Must be called from the task that owns the command's state; the gate
    /// relies on the owner serializing invocations.
    pub fn try_begin(&self) -> Result<(), CommandRefused> {
        if !self.can_execute.get() {
            return Err(CommandRefused::Disabled);
        }
        if self.is_executing.get() {
            return Err(CommandRefused::AlreadyRunning);
        }
        self.is_executing.set(true);
        Ok(())
    }

    /// Complete the in-flight invocation.
    ///
    /// Clears the running flag, then notifies every outcome subscriber with
    /// the terminal outcome. Called once per successful `try_begin`.
    pub fn finish(&self, outcome: O) {
        self.is_executing.set(false);
        let mut subscribers = self
            .outcome_subscribers
            .lock()
            .expect("outcome subscriber lock poisoned");
        for callback in subscribers.iter_mut() {
            callback(&outcome);
        }
    }

    /// Observe terminal outcomes.
    pub fn on_outcome<F>(&self, callback: F)
    where
        F: FnMut(&O) + Send + 'static,
    {
        self.outcome_subscribers
            .lock()
            .expect("outcome subscriber lock poisoned")
            .push(Box::new(callback));
    }
}
