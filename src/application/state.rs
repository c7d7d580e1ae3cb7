// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::services::{AuthService, FavoritesService, ProfileService, SearchService, SessionContext};

/// Shared application state.
/// All fields are Arc-wrapped so every screen can hold a handle.
/// Built by the composition root in app::bootstrap.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub session: Arc<SessionContext>,
    pub auth_service: Arc<AuthService>,
    pub favorites_service: Arc<FavoritesService>,
    pub profile_service: Arc<ProfileService>,
    pub search_service: Arc<SearchService>,
}
