// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - Uniqueness of favorites is decided by the service, never here

pub mod document_store;
pub mod profile_repository;

pub use document_store::{Document, DocumentStore, SqliteDocumentStore, StoredDocument, USERS_COLLECTION};
pub use profile_repository::{
    DocumentProfileRepository, ProfileRepository, ProfileSnapshot, UnreadableFavorite,
};
