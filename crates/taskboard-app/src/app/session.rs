/*
[INPUT]:  Credentials, registration details, and 401 signals from any call
[OUTPUT]: Identity state transitions and full session resets
[POS]:    Session layer - login/register/logout and the single expiry path
[UPDATE]: When auth flows or reset semantics change
*/

use tracing::{debug, warn};

use super::state::AuthView;
use super::{AppController, SESSION_EXPIRED_MESSAGE};
use crate::validation;

impl AppController {
    /// Resolve the session bound to any existing cookie.
    ///
    /// Run once at startup. A valid session populates the identity and
    /// both collections; any failure resets silently (no auth error), since
    /// an absent session at startup is the normal logged-out state.
    pub async fn check_session(&mut self) {
        self.state.session_loading = true;
        let result = self.client.me().await;
        match result {
            Ok(identity) => {
                debug!(user_id = identity.id, "session resumed");
                self.state.identity = Some(identity);
                self.state.auth_error = None;
                self.refresh_all().await;
            }
            Err(err) => {
                if !err.is_unauthorized() {
                    warn!(error = %err, "session check failed");
                }
                self.reset_session(None);
            }
        }
        self.state.session_loading = false;
    }

    /// Log in with email and password.
    ///
    /// Validates locally first; a validation failure never reaches the
    /// network. Success replaces the identity wholesale and repopulates
    /// both collections.
    pub async fn login(&mut self, email: &str, password: &str) {
        if let Err(err) = validation::validate_login(email, password) {
            self.state.auth_error = Some(err.to_string());
            return;
        }

        match self.client.login(email.trim(), password).await {
            Ok(identity) => {
                self.state.identity = Some(identity);
                self.state.auth_error = None;
                self.state.auth_view = AuthView::Login;
                self.refresh_all().await;
            }
            Err(err) => {
                // A 401 here means bad credentials, not an expired session
                self.state.auth_error = Some(err.user_message());
            }
        }
    }

    /// Register a new account; the server logs it in on success
    pub async fn register(&mut self, name: &str, email: &str, password: &str, confirm: &str) {
        if let Err(err) = validation::validate_registration(name, email, password, confirm) {
            self.state.auth_error = Some(err.to_string());
            return;
        }

        match self
            .client
            .register(name.trim(), email.trim(), password, confirm)
            .await
        {
            Ok(identity) => {
                self.state.identity = Some(identity);
                self.state.auth_error = None;
                self.state.auth_view = AuthView::Login;
                self.refresh_all().await;
            }
            Err(err) => {
                self.state.auth_error = Some(err.user_message());
            }
        }
    }

    /// Log out: best-effort remote call, then an unconditional reset
    pub async fn logout(&mut self) {
        if let Err(err) = self.client.logout().await {
            warn!(error = %err, "logout request failed; resetting session anyway");
        }
        self.reset_session(None);
    }

    /// Clear the identity and everything that depends on it
    pub fn reset_session(&mut self, message: Option<String>) {
        self.state.reset(message);
    }

    /// The single 401 handler: any authenticated call that sees a 401 ends
    /// up here instead of its normal error path.
    pub(crate) fn expire_session(&mut self) {
        debug!("session expired; resetting state");
        self.reset_session(Some(SESSION_EXPIRED_MESSAGE.to_string()));
    }
}
