// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod credentials;
pub mod favorite;
pub mod profile;
pub mod session;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Favorites
pub use favorite::{
    validate_favorite_entry, validate_unique_ids, FavoriteEntry, FavoritesList, TitleType,
};

// Profile
pub use profile::{validate_profile, UserProfile};

// Identity
pub use session::{AuthError, Session};

// Forms
pub use credentials::{
    validate_login, validate_signup, LoginForm, SignupForm, ValidationError,
    MIN_PASSWORD_LENGTH, MIN_SIGNUP_AGE,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
