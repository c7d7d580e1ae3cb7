// src/application/error_handling.rs
//
// Error Handling for Screens
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes storage internals
// - Logs errors for debugging

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The identity provider rejected the credentials
    Authentication,

    /// Form input failed local checks
    Validation,

    /// Action needs a signed-in user
    NotAuthenticated,

    /// Reading or writing the profile document failed
    RemoteStorage,

    /// The profile changed since it was read
    Conflict,

    /// Metadata provider failure
    ExternalService,

    /// Other/unknown error
    Internal,
}

/// Result type returned by screen handlers
pub type ScreenResult<T> = Result<T, ErrorResponse>;

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            // Form and provider messages are written for the user already
            AppError::Validation(e) => Self::new(ErrorType::Validation, e.to_string(), None),

            AppError::Auth(e) => Self::new(ErrorType::Authentication, e.to_string(), None),

            AppError::NotAuthenticated => {
                Self::new(ErrorType::NotAuthenticated, "Please sign in first", None)
            }

            AppError::RemoteReadFailed(details) => {
                warn!("Remote read failed: {}", details);
                Self::new(ErrorType::RemoteStorage, "Could not load your data", None)
            }

            AppError::RemoteWriteFailed(details) => {
                warn!("Remote write failed: {}", details);
                Self::new(ErrorType::RemoteStorage, "Could not save your changes", None)
            }

            AppError::Conflict { expected, actual } => Self::new(
                ErrorType::Conflict,
                "Your favorites changed elsewhere, reload and try again",
                Some(format!("expected revision {}, found {}", expected, actual)),
            ),

            AppError::MetadataProvider(details) => {
                warn!("Metadata provider error: {}", details);
                Self::new(
                    ErrorType::ExternalService,
                    "Movie search is unavailable",
                    Some(details),
                )
            }

            AppError::Domain(e) => Self::new(ErrorType::Validation, e.to_string(), None),

            AppError::NotFound => Self::new(ErrorType::Internal, "Resource not found", None),

            other => {
                error!("Internal error: {:?}", other);
                Self::new(
                    ErrorType::Internal,
                    "Something went wrong",
                    Some("Check logs for details".to_string()),
                )
            }
        }
    }

    /// Create validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::Internal, format!("{} not found", resource), None)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> ScreenResult<T>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> ScreenResult<T> {
        self.map_err(ErrorResponse::from_app_error)
    }
}
