use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::domain::workflow::ports::TriggerControl;

/// Lifecycle of one user-triggered analysis.
///
/// `Idle → Validating → Sending → {Succeeded, Failed} → Idle`, with
/// `Validating → Idle` when the input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowEvent {
    Triggered,
    InputRejected,
    InputAccepted,
    RequestSucceeded,
    RequestFailed,
    Settled,
}

impl WorkflowState {
    /// Returns the next state, or `None` if `event` is not allowed here.
    pub fn next(self, event: WorkflowEvent) -> Option<WorkflowState> {
        use WorkflowEvent as E;
        use WorkflowState as S;

        match (self, event) {
            (S::Idle, E::Triggered) => Some(S::Validating),
            (S::Validating, E::InputRejected) => Some(S::Idle),
            (S::Validating, E::InputAccepted) => Some(S::Sending),
            (S::Sending, E::RequestSucceeded) => Some(S::Succeeded),
            (S::Sending, E::RequestFailed) => Some(S::Failed),
            (S::Succeeded | S::Failed, E::Settled) => Some(S::Idle),
            _ => None,
        }
    }
}

/// State cell shared by one workflow's activations.
#[derive(Debug, Default)]
pub struct WorkflowMachine {
    name: &'static str,
    state: Mutex<WorkflowState>,
}

impl WorkflowMachine {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(WorkflowState::Idle),
        }
    }

    pub fn state(&self) -> WorkflowState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves `Idle → Validating`. Returns false if an activation is already
    /// under way.
    pub fn try_trigger(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match state.next(WorkflowEvent::Triggered) {
            Some(next) => {
                *state = next;
                true
            }
            None => {
                debug!(workflow = self.name, state = ?*state, "trigger ignored, workflow busy");
                false
            }
        }
    }

    /// Applies `event`. Illegal transitions leave the state untouched and
    /// return `None`.
    pub fn fire(&self, event: WorkflowEvent) -> Option<WorkflowState> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match state.next(event) {
            Some(next) => {
                debug!(workflow = self.name, from = ?*state, to = ?next, "workflow transition");
                *state = next;
                Some(next)
            }
            None => {
                warn!(workflow = self.name, state = ?*state, ?event, "illegal workflow transition");
                None
            }
        }
    }

    /// Returns to `Idle` from wherever the machine is. Only used when an
    /// in-flight request is abandoned.
    fn reset(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state != WorkflowState::Idle {
            debug!(workflow = self.name, from = ?*state, "workflow reset");
            *state = WorkflowState::Idle;
        }
    }
}

/// Held while a request is outstanding. Disables the trigger on creation;
/// on drop re-enables it and settles the machine back to `Idle`, whether the
/// request finished or the future was dropped.
pub(crate) struct InFlight<'a> {
    machine: &'a WorkflowMachine,
    trigger: &'a dyn TriggerControl,
}

impl<'a> InFlight<'a> {
    pub(crate) fn begin(machine: &'a WorkflowMachine, trigger: &'a dyn TriggerControl) -> Self {
        trigger.set_enabled(false);
        Self { machine, trigger }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        match self.machine.state() {
            WorkflowState::Succeeded | WorkflowState::Failed => {
                self.machine.fire(WorkflowEvent::Settled);
            }
            _ => self.machine.reset(),
        }
        self.trigger.set_enabled(true);
    }
}
