/*
[INPUT]:  Controller operations mutating session, collections and workflows
[OUTPUT]: One explicit state container consumed by the presentation layer
[POS]:    Application state - the single home of all mutable client state
[UPDATE]: When adding state fields or changing reset semantics
*/

use taskboard_client::{Identity, StatusFilter, Task};

use super::workflow::DeletionFlow;

/// Which auth panel the UI should present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

/// Target of an in-flight mutation.
///
/// One global slot: while any mutation is in flight, no second mutation may
/// be initiated for any task. Create occupies the slot without a task id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyTarget {
    Create,
    Task(i64),
}

/// Mode of the open task form
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(Task),
}

/// All mutable client state, owned by the controller.
///
/// No other component holds state of its own; the presentation layer reads
/// this container and calls controller operations to change it.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current identity, absent when logged out
    pub identity: Option<Identity>,
    /// Error shown on the auth screen (validation or server-sourced)
    pub auth_error: Option<String>,
    /// Which auth panel is showing
    pub auth_view: AuthView,
    /// Whether the initial session check is still running
    pub session_loading: bool,
    /// Task collection, in server order
    pub tasks: Vec<Task>,
    /// Assignable users, in server order
    pub users: Vec<Identity>,
    /// Whether a task list fetch is in flight
    pub tasks_loading: bool,
    /// Whether a user list fetch is in flight
    pub users_loading: bool,
    /// Error shown in the task workspace (sync or mutation failures)
    pub board_error: Option<String>,
    /// Error shown in the task form (local validation)
    pub form_error: Option<String>,
    /// In-flight mutation guard
    pub busy: Option<BusyTarget>,
    /// Active view filter
    pub filter: StatusFilter,
    /// Open task form, if any
    pub form: Option<FormMode>,
    /// Two-phase deletion workflow
    pub deletion: DeletionFlow,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any collection fetch is in flight
    pub fn is_syncing(&self) -> bool {
        self.tasks_loading || self.users_loading
    }

    /// Task currently being edited, if the form is in edit mode
    pub fn editing_task(&self) -> Option<&Task> {
        match self.form.as_ref()? {
            FormMode::Edit(task) => Some(task),
            FormMode::Create => None,
        }
    }

    /// Whether a modal surface (form or delete confirmation) is showing.
    ///
    /// The host surface suppresses background scrolling while this holds.
    pub fn overlay_active(&self) -> bool {
        self.form.is_some() || self.deletion.staged().is_some()
    }

    /// Acquire the global mutation slot. Not re-entrant: fails while held.
    pub(crate) fn try_acquire_busy(&mut self, target: BusyTarget) -> bool {
        if self.busy.is_some() {
            return false;
        }
        self.busy = Some(target);
        true
    }

    /// Release the mutation slot. Safe to call when already released.
    pub(crate) fn release_busy(&mut self) {
        self.busy = None;
    }

    /// Clear everything that depends on a valid session.
    ///
    /// Identity, collections, workflows, busy marker and filter all reset;
    /// the auth error becomes `message`. Idempotent.
    pub(crate) fn reset(&mut self, message: Option<String>) {
        self.identity = None;
        self.tasks.clear();
        self.users.clear();
        self.tasks_loading = false;
        self.users_loading = false;
        self.board_error = None;
        self.form_error = None;
        self.busy = None;
        self.filter = StatusFilter::All;
        self.form = None;
        self.deletion = DeletionFlow::Idle;
        self.auth_error = message;
    }
}
