//! # API Error Type
//!
//! Unified error type for the api surface.
//!
//! ## Error Flow
//! ```text
//! orchard-core CoreError / ValidationError
//!        │
//!        ▼
//! ApiError { code, message }  ← serialized for the UI collaborator
//!        │
//!        ▼
//! UI switches on `code`, displays `message`
//! ```
//!
//! Most engine operations cannot fail at all (stale ids are no-ops,
//! quantities clamp); ApiError covers host-level lookups, validation on
//! catalog writes, the empty-cart checkout refusal, and the
//! category-in-use refusal.

use serde::Serialize;

use orchard_core::CoreError;

/// Error returned from api functions.
///
/// ## Serialization
/// ```json
/// { "code": "NOT_FOUND", "message": "Product not found: p42" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Error codes for api responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced entity does not exist.
    NotFound,

    /// Input validation failed.
    ValidationError,

    /// Business rule refused the operation (empty cart, category in use).
    BusinessLogic,

    /// Unexpected internal failure.
    Internal,
}

impl ApiError {
    /// Creates a new api error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors into api errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => ApiError::new(ErrorCode::BusinessLogic, err.to_string()),
            CoreError::CategoryInUse { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::CustomerNotFound(id) => ApiError::not_found("Customer", &id),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
