// src/services/session.rs
//
// Holder for the signed-in session
//
// One SessionContext per running client. Services take it as an argument
// instead of reaching for a global "current user".

use std::sync::{PoisonError, RwLock};

use crate::domain::Session;
use crate::error::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct SessionContext {
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that starts out signed in
    pub fn with_session(session: Session) -> Self {
        Self {
            current: RwLock::new(Some(session)),
        }
    }

    /// Replace whatever session was active
    pub fn begin(&self, session: Session) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Clear the session, returning it if there was one
    pub fn end(&self) -> Option<Session> {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The active session, or `AppError::NotAuthenticated`
    pub fn require(&self) -> AppResult<Session> {
        self.current().ok_or(AppError::NotAuthenticated)
    }
}
