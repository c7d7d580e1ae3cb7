// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the UI and the services
// - Screens hold view state and translate between DTOs and domain types
// - Errors leave this layer as ErrorResponse values

pub mod dto;
pub mod error_handling;
pub mod screens;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ScreenResult, ToErrorResponse};
pub use screens::*;
pub use state::AppState;
