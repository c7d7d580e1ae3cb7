// src/error/types.rs
use crate::domain::{AuthError, DomainError, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Local form checks that failed before any remote call was made
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Errors reported by the identity provider
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("No active session")]
    NotAuthenticated,

    #[error("Remote read failed: {0}")]
    RemoteReadFailed(String),

    #[error("Remote write failed: {0}")]
    RemoteWriteFailed(String),

    #[error("Revision conflict: expected {expected}, found {actual}")]
    Conflict { expected: u64, actual: u64 },

    #[error("Metadata provider error: {0}")]
    MetadataProvider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Wraps a store failure observed while reading a profile.
    ///
    /// Session and conflict errors pass through unchanged.
    pub fn into_read_failure(self) -> AppError {
        match self {
            AppError::NotAuthenticated
            | AppError::Conflict { .. }
            | AppError::RemoteReadFailed(_) => self,
            other => AppError::RemoteReadFailed(other.to_string()),
        }
    }

    /// Wraps a store failure observed while writing a profile.
    pub fn into_write_failure(self) -> AppError {
        match self {
            AppError::NotAuthenticated
            | AppError::Conflict { .. }
            | AppError::RemoteWriteFailed(_) => self,
            other => AppError::RemoteWriteFailed(other.to_string()),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::MetadataProvider(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Other(format!("Blocking task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failure_wraps_storage_errors() {
        let err = AppError::Pool("timed out".to_string()).into_write_failure();
        assert!(matches!(err, AppError::RemoteWriteFailed(ref m) if m.contains("timed out")));
    }

    #[test]
    fn test_write_failure_keeps_conflict() {
        let err = AppError::Conflict { expected: 1, actual: 2 }.into_write_failure();
        assert!(matches!(err, AppError::Conflict { expected: 1, actual: 2 }));
    }

    #[test]
    fn test_read_failure_keeps_not_authenticated() {
        let err = AppError::NotAuthenticated.into_read_failure();
        assert!(matches!(err, AppError::NotAuthenticated));
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::NotFound).unwrap();
        assert_eq!(json, "\"Resource not found\"");
    }
}
