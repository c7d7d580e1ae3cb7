// src/integrations/local_identity.rs
//
// Local identity provider backed by the `accounts` table
//
// Passwords are stored as salted SHA-256 digests. Email matching is
// case-insensitive; addresses are trimmed and lowercased before storage.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rusqlite::{params, OptionalExtension};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{with_connection, ConnectionPool};
use crate::domain::{AuthError, Session, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::integrations::identity::IdentityProvider;

pub struct SqliteIdentityProvider {
    pool: Arc<ConnectionPool>,
}

impl SqliteIdentityProvider {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl IdentityProvider for SqliteIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<Session> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword.into());
        }

        let email = Self::normalize_email(email);
        let password = password.to_string();

        let session = with_connection(&self.pool, move |conn| {
            let taken: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = ?1)",
                params![email],
                |row| row.get(0),
            )?;
            if taken {
                return Err(AuthError::EmailInUse.into());
            }

            let user_id = Uuid::new_v4().simple().to_string();
            let salt = Uuid::new_v4().simple().to_string();

            conn.execute(
                "INSERT INTO accounts (user_id, email, password_salt, password_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    user_id,
                    email,
                    salt,
                    Self::digest(&salt, &password),
                    Utc::now().to_rfc3339(),
                ],
            )?;

            Ok(Session::new(user_id, email))
        })
        .await?;

        info!("Created account {}", session.user_id);
        Ok(session)
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        let email = Self::normalize_email(email);
        let password = password.to_string();

        with_connection(&self.pool, move |conn| {
            let row: Option<(String, String, String)> = conn
                .query_row(
                    "SELECT user_id, password_salt, password_hash FROM accounts WHERE email = ?1",
                    params![email],
                    |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                )
                .optional()?;

            let (user_id, salt, hash) = row.ok_or(AppError::Auth(AuthError::UserNotFound))?;

            if Self::digest(&salt, &password) != hash {
                debug!("Password mismatch for {}", user_id);
                return Err(AuthError::WrongPassword.into());
            }

            Ok(Session::new(user_id, email))
        })
        .await
    }

    async fn sign_out(&self, session: &Session) -> AppResult<()> {
        // Sessions live in memory only; nothing to revoke locally
        debug!("Signed out {}", session.user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_in_memory_pool, get_connection, initialize_database};

    fn provider() -> SqliteIdentityProvider {
        let pool = create_in_memory_pool().unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        SqliteIdentityProvider::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn test_create_then_sign_in() {
        let provider = provider();
        let created = provider
            .create_account("ada@example.org", "secret1")
            .await
            .unwrap();

        let session = provider.sign_in("ada@example.org", "secret1").await.unwrap();
        assert_eq!(session.user_id, created.user_id);
        assert_eq!(session.email, "ada@example.org");
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive() {
        let provider = provider();
        provider
            .create_account("  Ada@Example.org ", "secret1")
            .await
            .unwrap();

        let session = provider.sign_in("ADA@example.org", "secret1").await.unwrap();
        assert_eq!(session.email, "ada@example.org");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let provider = provider();
        provider
            .create_account("ada@example.org", "secret1")
            .await
            .unwrap();

        let err = provider
            .create_account("ada@example.org", "other12")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::EmailInUse)));
    }

    #[tokio::test]
    async fn test_weak_password_rejected() {
        let err = provider()
            .create_account("ada@example.org", "abc")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::WeakPassword)));
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let err = provider()
            .sign_in("nobody@example.org", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let provider = provider();
        provider
            .create_account("ada@example.org", "secret1")
            .await
            .unwrap();

        let err = provider
            .sign_in("ada@example.org", "secret2")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::WrongPassword)));
    }

    #[test]
    fn test_digest_depends_on_salt() {
        let a = SqliteIdentityProvider::digest("salt-a", "secret1");
        let b = SqliteIdentityProvider::digest("salt-b", "secret1");
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }
}
