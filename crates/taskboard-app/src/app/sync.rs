/*
[INPUT]:  Remote task and user list endpoints
[OUTPUT]: Wholesale-replaced local collections and sync error state
[POS]:    Synchronizer layer - pull-based collection refresh
[UPDATE]: When fetch semantics or error routing change
*/

use super::AppController;

impl AppController {
    /// Refetch the task collection.
    ///
    /// Idempotent and safe to re-issue. Success replaces the collection
    /// wholesale; failure stores the extracted message and leaves the
    /// existing collection untouched; 401 delegates to session expiry.
    pub async fn refresh_tasks(&mut self) {
        self.state.tasks_loading = true;
        let result = self.client.list_tasks().await;
        self.state.tasks_loading = false;

        match result {
            Ok(tasks) => {
                self.state.tasks = tasks;
                self.state.board_error = None;
            }
            Err(err) if err.is_unauthorized() => self.expire_session(),
            Err(err) => {
                self.state.board_error = Some(err.user_message());
            }
        }
    }

    /// Refetch the assignable user collection
    pub async fn refresh_users(&mut self) {
        self.state.users_loading = true;
        let result = self.client.list_users().await;
        self.state.users_loading = false;

        match result {
            Ok(users) => {
                self.state.users = users;
                self.state.board_error = None;
            }
            Err(err) if err.is_unauthorized() => self.expire_session(),
            Err(err) => {
                self.state.board_error = Some(err.user_message());
            }
        }
    }

    /// Refetch both collections, tasks first.
    ///
    /// Runs whenever the identity transitions from absent to present.
    pub async fn refresh_all(&mut self) {
        self.refresh_tasks().await;
        // The first fetch may have expired the session; don't re-issue
        if self.state.identity.is_some() {
            self.refresh_users().await;
        }
    }
}
