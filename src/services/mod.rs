// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod auth_service;
pub mod favorites_service;
pub mod profile_service;
pub mod search_service;
pub mod session;


// Re-export all services and their types
pub use auth_service::AuthService;

pub use favorites_service::{
    AddOutcome,
    ConcurrencyPolicy,
    FavoritesService,
};

pub use profile_service::ProfileService;

pub use search_service::{
    SearchService,
    DEFAULT_LISTING_TERM,
};

pub use session::SessionContext;
