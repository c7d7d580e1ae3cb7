// src/application/screens/mod.rs
//
// Screen Handlers
//
// RULES:
// - Hold view state only; the profile document stays the source of truth
// - Call services, never repositories
// - Return DTOs, convert failures into ErrorResponse
// - On failure the previous view state is kept

pub mod about;
pub mod favorites;
pub mod home;
pub mod login;
pub mod signup;

pub use about::AboutScreen;
pub use favorites::FavoritesScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use signup::SignupScreen;

use log::warn;

use crate::application::error_handling::{ErrorResponse, ScreenResult};
use crate::application::state::AppState;

/// Header sign-out shared by every signed-in screen
pub(crate) async fn sign_out(state: &AppState) -> ScreenResult<()> {
    state.auth_service.sign_out(&state.session).await.map_err(|e| {
        warn!("Error logging out: {}", e);
        ErrorResponse::from_app_error(e)
    })
}
