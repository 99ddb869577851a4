/*
[INPUT]:  User-initiated form and deletion intents
[OUTPUT]: Validated workflow transitions for the modal surfaces
[POS]:    Workflow layer - task form and two-phase deletion coordination
[UPDATE]: When modal exclusivity rules or deletion phases change
*/

use taskboard_client::Task;
use tracing::debug;

use super::AppController;
use super::state::{AuthView, BusyTarget, FormMode};

/// Two-phase deletion workflow.
///
/// `request` only stages a task; no network happens until `begin_confirm`.
/// A failed confirmation falls back to `Staged` so the user can retry or
/// cancel; cancel is ignored while the delete is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeletionFlow {
    #[default]
    Idle,
    Staged(Task),
    Confirming(Task),
}

impl DeletionFlow {
    /// Stage a task for deletion. Restaging replaces the staged task;
    /// blocked while a delete is confirming.
    pub fn request(&mut self, task: Task) -> bool {
        match self {
            DeletionFlow::Confirming(_) => false,
            _ => {
                *self = DeletionFlow::Staged(task);
                true
            }
        }
    }

    /// Move from staged to confirming, yielding the task to delete
    pub fn begin_confirm(&mut self) -> Option<Task> {
        match self {
            DeletionFlow::Staged(task) => {
                let task = task.clone();
                *self = DeletionFlow::Confirming(task.clone());
                Some(task)
            }
            _ => None,
        }
    }

    /// Resolve a confirming delete: idle on success, back to staged on failure
    pub fn finish(&mut self, success: bool) {
        if let DeletionFlow::Confirming(task) = self {
            *self = if success {
                DeletionFlow::Idle
            } else {
                DeletionFlow::Staged(task.clone())
            };
        }
    }

    /// Dismiss a staged deletion. Ignored while confirming; no-op when idle.
    pub fn cancel(&mut self) -> bool {
        match self {
            DeletionFlow::Staged(_) => {
                *self = DeletionFlow::Idle;
                true
            }
            _ => false,
        }
    }

    /// Task awaiting confirmation, if any (still shown while confirming)
    pub fn staged(&self) -> Option<&Task> {
        match self {
            DeletionFlow::Idle => None,
            DeletionFlow::Staged(task) | DeletionFlow::Confirming(task) => Some(task),
        }
    }

    /// Whether the delete call is currently in flight
    pub fn is_confirming(&self) -> bool {
        matches!(self, DeletionFlow::Confirming(_))
    }
}

impl AppController {
    /// Open the task form in create mode.
    ///
    /// The form and the delete confirmation are mutually exclusive; the
    /// open is ignored while a deletion is staged.
    pub fn open_create_form(&mut self) {
        if self.state.deletion.staged().is_some() {
            debug!("ignoring form open while a deletion is staged");
            return;
        }
        self.state.form = Some(FormMode::Create);
        self.state.form_error = None;
    }

    /// Open the task form in edit mode for the given task
    pub fn open_edit_form(&mut self, task: Task) {
        if self.state.deletion.staged().is_some() {
            debug!("ignoring form open while a deletion is staged");
            return;
        }
        self.state.form = Some(FormMode::Edit(task));
        self.state.form_error = None;
    }

    /// Close the task form, dropping any in-progress edit target
    pub fn close_form(&mut self) {
        self.state.form = None;
        self.state.form_error = None;
    }

    /// Stage a task for deletion. No network call happens here.
    pub fn request_delete(&mut self, task: Task) {
        if self.state.form.is_some() {
            debug!("ignoring delete request while the task form is open");
            return;
        }
        self.state.deletion.request(task);
    }

    /// Commit a staged deletion against the server.
    ///
    /// Rejected while another mutation holds the busy slot; the stage
    /// survives a failure so the user can retry.
    pub async fn confirm_delete(&mut self) {
        let Some(task_id) = self.state.deletion.staged().map(|task| task.id) else {
            return;
        };
        if !self.state.try_acquire_busy(BusyTarget::Task(task_id)) {
            debug!("rejecting delete confirm: a mutation is already in flight");
            return;
        }
        let Some(task) = self.state.deletion.begin_confirm() else {
            // Already confirming; the busy guard above makes this unreachable
            self.state.release_busy();
            return;
        };

        match self.client.delete_task(task.id).await {
            Ok(()) => {
                self.refresh_tasks().await;
                self.state.deletion.finish(true);
            }
            Err(err) if err.is_unauthorized() => self.expire_session(),
            Err(err) => {
                self.state.board_error = Some(err.user_message());
                self.state.deletion.finish(false);
            }
        }
        self.state.release_busy();
    }

    /// Dismiss a staged deletion. Ignored while the delete is in flight;
    /// a no-op when nothing is staged.
    pub fn cancel_delete(&mut self) {
        self.state.deletion.cancel();
    }

    /// Switch between the login and register panels
    pub fn set_auth_view(&mut self, view: AuthView) {
        self.state.auth_view = view;
    }

    /// An auth form field changed; clear the previously shown error
    pub fn auth_field_edited(&mut self) {
        self.state.auth_error = None;
    }

    /// A task form field changed; clear the previously shown errors
    pub fn task_field_edited(&mut self) {
        self.state.form_error = None;
        self.state.board_error = None;
    }
}
