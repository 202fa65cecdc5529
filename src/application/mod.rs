// src/application/mod.rs
//
// Application Layer
//
// - Sits between the presentation (CLI) and the services
// - Owns the composition root (AppState)
// - Translates service results into DTOs and ErrorResponses

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
