// src/integrations/mod.rs
//
// External Integrations Module
//
// Identity and metadata search ports with their shipped adapters.
// The document store port lives with the repositories.

pub mod identity;
pub mod local_identity;
pub mod metadata;
pub mod omdb;

pub use identity::IdentityProvider;
pub use local_identity::SqliteIdentityProvider;
pub use metadata::{MetadataProvider, TitleSummary};
pub use omdb::OmdbClient;
