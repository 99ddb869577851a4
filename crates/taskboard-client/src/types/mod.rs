/*
[INPUT]:  API schema definitions
[OUTPUT]: Typed structs and enums for API communication
[POS]:    Data layer - type definitions module wiring
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;

pub use enums::{StatusFilter, TaskStatus};
pub use models::{Identity, Task};
pub use requests::{LoginRequest, RegisterRequest, StatusPatch, TaskPayload};
