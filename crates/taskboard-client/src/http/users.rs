/*
[INPUT]:  Session cookie
[OUTPUT]: Assignable user directory
[POS]:    HTTP layer - user endpoints (require authenticated session)
[UPDATE]: When user endpoints change
*/

use reqwest::Method;

use crate::http::{Result, TaskboardClient};
use crate::types::Identity;

impl TaskboardClient {
    /// Fetch all users, in server order, for assignee selection
    ///
    /// GET /api/users
    pub async fn list_users(&self) -> Result<Vec<Identity>> {
        let builder = self.request(Method::GET, "/api/users")?;
        self.send_json(builder).await
    }
}
