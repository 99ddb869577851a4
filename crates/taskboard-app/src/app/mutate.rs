/*
[INPUT]:  Task payloads and status changes from the task form and board
[OUTPUT]: Server-side mutations followed by a mandatory task refresh
[POS]:    Mutation layer - serialized create/update/status-change
[UPDATE]: When the mutation protocol or busy-marker rules change
*/

use taskboard_client::{TaskPayload, TaskStatus};
use tracing::debug;

use super::AppController;
use super::state::BusyTarget;
use crate::validation;

impl AppController {
    /// Create a task from the form payload.
    ///
    /// Shared mutation protocol: busy guard, remote call, 401 delegation,
    /// full task refresh on success (the created task is never patched in
    /// locally - a refresh keeps denormalized assignee data consistent),
    /// busy released last. The form closes on success only.
    pub async fn create_task(&mut self, payload: TaskPayload) {
        if let Err(err) = validation::validate_task_title(&payload.title) {
            self.state.form_error = Some(err.to_string());
            return;
        }
        if !self.state.try_acquire_busy(BusyTarget::Create) {
            debug!("rejecting create: a mutation is already in flight");
            return;
        }

        match self.client.create_task(&payload).await {
            Ok(task) => {
                debug!(task_id = task.id, "task created");
                self.refresh_tasks().await;
                self.close_form();
            }
            Err(err) if err.is_unauthorized() => self.expire_session(),
            Err(err) => {
                self.state.board_error = Some(err.user_message());
            }
        }
        self.state.release_busy();
    }

    /// Update a task with a full payload
    pub async fn update_task(&mut self, id: i64, payload: TaskPayload) {
        if let Err(err) = validation::validate_task_title(&payload.title) {
            self.state.form_error = Some(err.to_string());
            return;
        }
        if !self.state.try_acquire_busy(BusyTarget::Task(id)) {
            debug!(task_id = id, "rejecting update: a mutation is already in flight");
            return;
        }

        match self.client.update_task(id, &payload).await {
            Ok(_) => {
                self.refresh_tasks().await;
                self.close_form();
            }
            Err(err) if err.is_unauthorized() => self.expire_session(),
            Err(err) => {
                self.state.board_error = Some(err.user_message());
            }
        }
        self.state.release_busy();
    }

    /// Move a task to another status.
    ///
    /// Accepts any status; which moves are offered is view-layer policy
    /// (see `kanban::offered_transitions`), not enforced here.
    pub async fn set_task_status(&mut self, id: i64, status: TaskStatus) {
        if !self.state.try_acquire_busy(BusyTarget::Task(id)) {
            debug!(task_id = id, "rejecting status change: a mutation is already in flight");
            return;
        }

        match self.client.update_task_status(id, status).await {
            Ok(_) => self.refresh_tasks().await,
            Err(err) if err.is_unauthorized() => self.expire_session(),
            Err(err) => {
                self.state.board_error = Some(err.user_message());
            }
        }
        self.state.release_busy();
    }
}
