// src/integrations/identity.rs
//
// Identity provider port
//
// Implementations own account storage and credential checks. Failures are
// reported as AuthError so callers can tell them apart from local form
// validation.

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account and return the session it starts.
    ///
    /// Fails with `AuthError::EmailInUse` or `AuthError::WeakPassword`.
    async fn create_account(&self, email: &str, password: &str) -> AppResult<Session>;

    /// Fails with `AuthError::UserNotFound` or `AuthError::WrongPassword`.
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session>;

    async fn sign_out(&self, session: &Session) -> AppResult<()>;
}
