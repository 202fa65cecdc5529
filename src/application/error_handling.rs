// src/application/error_handling.rs
//
// Error mapping for the presentation boundary
//
// - Maps internal errors to stable, serializable responses
// - Never exposes SQL or pool internals
// - Logs what it hides

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Sign-in required or token rejected (401)
    Unauthorized,

    /// Signed in without the required rights (403)
    Forbidden,

    /// Backend unreachable
    Network,

    /// Backend answered with an error status
    Backend,

    /// Local storage failure
    Database,

    /// Bad configuration value
    Config,

    /// Anything else
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Validation(message) => Self::validation(message),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Unauthorized => {
                Self::new(ErrorType::Unauthorized, "Authentication required", None)
            }

            AppError::Forbidden(detail) => {
                Self::new(ErrorType::Forbidden, "Access denied", Some(detail))
            }

            AppError::Network(detail) => {
                log::warn!("Backend unreachable: {}", detail);
                Self::new(ErrorType::Network, "Backend unreachable", Some(detail))
            }

            AppError::Http { status, message } => Self::new(
                ErrorType::Backend,
                &format!("Backend returned {}", status),
                Some(message),
            ),

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::Internal,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Config(message) => {
                Self::new(ErrorType::Config, "Invalid configuration", Some(message))
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, &message, None)
            }
        }
    }

    fn new(error_type: ErrorType, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details,
        }
    }

    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, &format!("{} not found", resource), None)
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::validation("Invalid input".to_string());
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn test_backend_status_is_kept() {
        let error = ErrorResponse::from_app_error(AppError::Http {
            status: 409,
            message: "Email déjà utilisé".to_string(),
        });
        assert_eq!(error.error_type, ErrorType::Backend);
        assert_eq!(error.message, "Backend returned 409");
        assert_eq!(error.details.as_deref(), Some("Email déjà utilisé"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Region");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Region not found"));
    }

    #[test]
    fn test_to_error_response_serializes() {
        let result: Result<(), AppError> = Err(AppError::Unauthorized);
        let message = result.to_error_response().unwrap_err();
        assert!(message.contains("unauthorized"));
    }
}
