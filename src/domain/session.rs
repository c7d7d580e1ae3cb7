// src/domain/session.rs
//
// Session and identity-provider failures
//
// A Session is the authenticated context established by the identity
// provider. It is passed explicitly to every operation that needs identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authenticated context after a successful sign-in or account creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Stable opaque identifier issued by the identity provider
    pub user_id: String,

    pub email: String,

    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }
}

/// Failures reported by the identity provider.
///
/// Kept apart from local validation so the UI can tell
/// "you typed something wrong" from "the provider said no".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("The following user does not exist")]
    UserNotFound,

    #[error("The password does not match the email address entered")]
    WrongPassword,

    #[error("The email address is already in use")]
    EmailInUse,

    #[error("The password is too weak")]
    WeakPassword,

    #[error("{0}")]
    Other(String),
}
