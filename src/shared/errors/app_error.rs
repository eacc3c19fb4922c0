use thiserror::Error;

use crate::modules::catalog::infrastructure::external::itunes::FeedShapeError;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The feed document did not have the shape the normalizer requires.
    #[error("Feed shape error: {0}")]
    FeedShape(#[from] FeedShapeError),

    /// A searchable field was configured that does not hold text.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Catalog not ready: {0}")]
    NotReady(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                404 => AppError::NotFound("External resource not found".to_string()),
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl AppError {
    /// Whether the failure came from the upstream feed service rather than
    /// from the data it returned or from local configuration.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AppError::ExternalServiceError(_) | AppError::RateLimitError(_)
        )
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_shape_error_converts() {
        let err: AppError = FeedShapeError::MissingFeed.into();
        assert!(matches!(err, AppError::FeedShape(FeedShapeError::MissingFeed)));
        assert!(err.to_string().starts_with("Feed shape error"));
    }

    #[test]
    fn test_json_error_is_serialization_error() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, AppError::SerializationError(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_transient_errors() {
        assert!(AppError::RateLimitError("slow down".into()).is_transient());
        assert!(AppError::ExternalServiceError("down".into()).is_transient());
        assert!(!AppError::ContractViolation("price".into()).is_transient());
    }
}
