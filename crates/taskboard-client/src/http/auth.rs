/*
[INPUT]:  Credentials and registration details
[OUTPUT]: Authenticated session cookie and the current identity
[POS]:    HTTP layer - auth endpoints (session lifecycle)
[UPDATE]: When auth endpoints or response envelopes change
*/

use reqwest::Method;
use serde::Deserialize;

use crate::http::{Result, TaskboardClient};
use crate::types::{Identity, LoginRequest, RegisterRequest};

/// Envelope wrapping identity responses from the auth endpoints
#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    user: Identity,
}

impl TaskboardClient {
    /// Fetch the identity bound to the current session cookie
    ///
    /// GET /api/auth/me
    pub async fn me(&self) -> Result<Identity> {
        let builder = self.request(Method::GET, "/api/auth/me")?;
        let envelope: SessionEnvelope = self.send_json(builder).await?;
        Ok(envelope.user)
    }

    /// Log in with email and password, establishing a session cookie
    ///
    /// POST /api/auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let builder = self.request(Method::POST, "/api/auth/login")?.json(&body);
        let envelope: SessionEnvelope = self.send_json(builder).await?;
        Ok(envelope.user)
    }

    /// Register a new account; the server logs the account in on success
    ///
    /// POST /api/auth/register
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Identity> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        let builder = self.request(Method::POST, "/api/auth/register")?.json(&body);
        let envelope: SessionEnvelope = self.send_json(builder).await?;
        Ok(envelope.user)
    }

    /// Invalidate the current session cookie
    ///
    /// POST /api/auth/logout
    pub async fn logout(&self) -> Result<()> {
        let builder = self.request(Method::POST, "/api/auth/logout")?;
        self.send_unit(builder).await
    }
}
