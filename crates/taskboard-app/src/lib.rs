/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public taskboard controller crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod app;
pub mod config;
pub mod kanban;
pub mod validation;

pub use app::state::{AppState, AuthView, BusyTarget, FormMode};
pub use app::workflow::DeletionFlow;
pub use app::{AppController, SESSION_EXPIRED_MESSAGE};
pub use config::AppConfig;
pub use kanban::{KanbanBoard, KanbanColumn, categorize, offered_transitions};
pub use validation::ValidationError;
