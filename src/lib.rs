// src/lib.rs
// CineFav - Movie search and per-user favorites
//
// Architecture:
// - Domain-centric: favorites rules live in the domain and services
// - Ports: identity, document store and metadata search are async traits
// - Event-driven: services announce completed actions on the event bus
// - Explicit: the signed-in session is passed, never looked up globally
// - Application Layer: screen handlers as the UI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod app;
pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_favorite_entry,
    validate_login,
    validate_profile,
    validate_signup,
    validate_unique_ids,
    AuthError,
    // Favorites
    FavoriteEntry,
    FavoritesList,
    // Forms
    LoginForm,
    // Identity
    Session,
    SignupForm,
    TitleType,
    // Profile
    UserProfile,
    ValidationError,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    DomainEvent,
    EventBus,
    EventLogEntry,
    FavoriteAdded,
    FavoriteAlreadyPresent,
    FavoriteRemoved,
    TitlesSearched,
    UserSignedIn,
    UserSignedOut,
    UserSignedUp,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_in_memory_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    DocumentProfileRepository,
    DocumentStore,
    ProfileRepository,
    ProfileSnapshot,
    SqliteDocumentStore,
    StoredDocument,
    UnreadableFavorite,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AddOutcome,
    AuthService,
    ConcurrencyPolicy,
    FavoritesService,
    ProfileService,
    SearchService,
    SessionContext,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use app::{build_app_state, init_logging, AppConfig};
pub use application::{
    AboutScreen, AppState, ErrorResponse, ErrorType, FavoritesScreen, HomeScreen, LoginScreen,
    SignupScreen,
};

// Re-export application submodules
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{IdentityProvider, MetadataProvider, OmdbClient, SqliteIdentityProvider, TitleSummary};
