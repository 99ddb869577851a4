/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed request bodies for mutation endpoints
[POS]:    Data layer - request payload definitions
[UPDATE]: When API schema changes or new request shapes added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// Body for POST /api/auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for POST /api/auth/register
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body for task create (POST) and update (PUT).
///
/// Absent optional fields are omitted from the JSON body; the server
/// defaults a missing status to `todo` on create and to the task's current
/// status on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Body for PATCH /api/tasks/{id}
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: TaskStatus,
}
