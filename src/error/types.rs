// src/error/types.rs
use crate::domain::DomainError;
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

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// True for failures where the backend could not be reached at all.
    pub fn is_offline(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// Failures after which a mutation may be recorded on the device instead.
    /// Explicit rejections (4xx other than 401) are surfaced as-is.
    pub fn allows_local_fallback(&self) -> bool {
        match self {
            AppError::Network(_) | AppError::Unauthorized => true,
            AppError::Http { status, .. } => *status >= 500,
            _ => false,
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

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if status == reqwest::StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => AppError::NotFound,
            Some(status) => AppError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None if err.is_decode() => AppError::Other(format!("Malformed backend response: {}", err)),
            None => AppError::Network(err.to_string()),
        }
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Other(format!("Date parse error: {}", err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Other(format!("Background task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_is_offline() {
        assert!(AppError::Network("connection refused".to_string()).is_offline());
        assert!(!AppError::NotFound.is_offline());
    }

    #[test]
    fn test_local_fallback_eligibility() {
        assert!(AppError::Unauthorized.allows_local_fallback());
        assert!(AppError::Http { status: 503, message: String::new() }.allows_local_fallback());
        assert!(!AppError::Http { status: 400, message: String::new() }.allows_local_fallback());
        assert!(!AppError::NotFound.allows_local_fallback());
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::Http {
            status: 500,
            message: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(json, "\"Backend returned 500: boom\"");
    }
}
