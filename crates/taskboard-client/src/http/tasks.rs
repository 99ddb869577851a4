/*
[INPUT]:  Task payloads and task identifiers, session cookie
[OUTPUT]: Task collection reads and mutation confirmations
[POS]:    HTTP layer - task endpoints (require authenticated session)
[UPDATE]: When task endpoints or payload shapes change
*/

use reqwest::Method;

use crate::http::{Result, TaskboardClient};
use crate::types::{StatusPatch, Task, TaskPayload, TaskStatus};

impl TaskboardClient {
    /// Fetch the full task list in server order.
    ///
    /// GET /api/tasks?status=all
    ///
    /// Always asks for everything; filtering is a client-side view concern.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, "/api/tasks?status=all")?;
        self.send_json(builder).await
    }

    /// Create a task; a missing status defaults to `todo` server-side
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, payload: &TaskPayload) -> Result<Task> {
        let builder = self.request(Method::POST, "/api/tasks")?.json(payload);
        self.send_json(builder).await
    }

    /// Replace a task's editable fields
    ///
    /// PUT /api/tasks/{id}
    pub async fn update_task(&self, id: i64, payload: &TaskPayload) -> Result<Task> {
        let endpoint = format!("/api/tasks/{id}");
        let builder = self.request(Method::PUT, &endpoint)?.json(payload);
        self.send_json(builder).await
    }

    /// Change only a task's status
    ///
    /// PATCH /api/tasks/{id}
    pub async fn update_task_status(&self, id: i64, status: TaskStatus) -> Result<Task> {
        let endpoint = format!("/api/tasks/{id}");
        let builder = self
            .request(Method::PATCH, &endpoint)?
            .json(&StatusPatch { status });
        self.send_json(builder).await
    }

    /// Delete a task
    ///
    /// DELETE /api/tasks/{id}
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let endpoint = format!("/api/tasks/{id}");
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_unit(builder).await
    }
}
