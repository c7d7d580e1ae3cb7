// src/app/bootstrap.rs
//
// Composition root
//
// Wires infrastructure, repositories and services into an AppState.
// Nothing else in the crate constructs adapters.

use log::info;
use std::sync::Arc;

use crate::app::config::AppConfig;
use crate::application::state::AppState;
use crate::db::{
    create_connection_pool, get_connection, get_database_path, initialize_database,
    verify_database_integrity, ConnectionPool,
};
use crate::error::AppResult;
use crate::events::create_event_bus;
use crate::integrations::{IdentityProvider, MetadataProvider, OmdbClient, SqliteIdentityProvider};
use crate::repositories::{
    DocumentProfileRepository, DocumentStore, ProfileRepository, SqliteDocumentStore,
};
use crate::services::{
    AuthService, ConcurrencyPolicy, FavoritesService, ProfileService, SearchService,
    SessionContext,
};

/// Initialise `env_logger` from `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Build the full application from configuration
pub fn build_app_state(config: &AppConfig) -> AppResult<AppState> {
    // 1. INFRASTRUCTURE
    let db_path = match &config.db_path {
        Some(path) => path.clone(),
        None => get_database_path()?,
    };
    info!("Opening database at {}", db_path.display());
    let pool = Arc::new(create_connection_pool(&db_path)?);

    let metadata: Arc<dyn MetadataProvider> = Arc::new(OmdbClient::new(
        config.omdb_api_key.clone(),
        config.omdb_base_url.clone(),
        config.omdb_timeout,
    )?);

    build_app_state_with_pool(pool, metadata, config.concurrency_policy)
}

/// Build the application over an existing pool, using the local
/// SQLite identity provider and document store
pub fn build_app_state_with_pool(
    pool: Arc<ConnectionPool>,
    metadata: Arc<dyn MetadataProvider>,
    policy: ConcurrencyPolicy,
) -> AppResult<AppState> {
    // Initialize schema (idempotent)
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }

    // 2. ADAPTERS
    let identity: Arc<dyn IdentityProvider> = Arc::new(SqliteIdentityProvider::new(pool.clone()));
    let store: Arc<dyn DocumentStore> = Arc::new(SqliteDocumentStore::new(pool));
    let profiles: Arc<dyn ProfileRepository> = Arc::new(DocumentProfileRepository::new(store));

    Ok(assemble_app_state(identity, profiles, metadata, policy))
}

/// Wire services over whatever adapters the caller supplies
pub fn assemble_app_state(
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
    metadata: Arc<dyn MetadataProvider>,
    policy: ConcurrencyPolicy,
) -> AppState {
    let event_bus = Arc::new(create_event_bus());

    // 3. SERVICES
    let auth_service = Arc::new(AuthService::new(
        identity,
        profiles.clone(),
        event_bus.clone(),
    ));
    let favorites_service = Arc::new(FavoritesService::new(
        profiles.clone(),
        event_bus.clone(),
        policy,
    ));
    let profile_service = Arc::new(ProfileService::new(profiles));
    let search_service = Arc::new(SearchService::new(metadata, event_bus.clone()));

    // 4. APPLICATION STATE
    AppState {
        event_bus,
        session: Arc::new(SessionContext::new()),
        auth_service,
        favorites_service,
        profile_service,
        search_service,
    }
}
