/*
[INPUT]:  HTTP client and user-initiated operations
[OUTPUT]: Mutated AppState consumed by the presentation layer
[POS]:    Application controller - sole owner of mutable client state
[UPDATE]: When adding controller operations or changing ownership rules
*/

pub mod mutate;
pub mod session;
pub mod state;
pub mod sync;
pub mod workflow;

use taskboard_client::TaskboardClient;

use crate::kanban::{KanbanBoard, categorize};
use state::AppState;

/// Fixed message shown after any authenticated call answers 401
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please log in again.";

/// The session and task state controller.
///
/// Owns all mutable application state and the HTTP client. Operations are
/// the only mutation entry points; the presentation layer reads state
/// between calls and never holds state of its own. Methods take `&mut
/// self`, so operations are serialized by construction; the busy marker
/// additionally rejects user intents queued while a mutation is in flight.
#[derive(Debug)]
pub struct AppController {
    pub(crate) client: TaskboardClient,
    pub(crate) state: AppState,
}

impl AppController {
    /// Create a controller around a configured client.
    ///
    /// Callers are expected to run `check_session` next to pick up any
    /// still-valid session cookie.
    pub fn new(client: TaskboardClient) -> Self {
        Self {
            client,
            state: AppState::new(),
        }
    }

    /// Read access to the state container
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Derive the kanban view from the current collection and filter
    pub fn board(&self) -> KanbanBoard {
        categorize(&self.state.tasks, self.state.filter)
    }

    /// Change the active view filter. Pure presentation: never refetches.
    pub fn set_filter(&mut self, filter: taskboard_client::StatusFilter) {
        self.state.filter = filter;
    }
}
