//! Type-safe error codes for API responses.
//!
//! Each error code carries a string identifier for clients, an integer code
//! for logs and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed field validation
    ValidationError,

    /// Request body could not be parsed as the expected JSON document
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    // Store errors (2000-2999)
    /// The document store failed to serve the request
    StoreError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::StoreError => "STORE_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: Client errors
    /// - 2000-2999: Document store errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::StoreError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::StoreError => "Document store error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
