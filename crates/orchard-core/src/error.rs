//! # Error Types
//!
//! Domain error types for orchard-core.
//!
//! ## Error Philosophy
//! Almost nothing in the order engine errors: stale references are no-ops
//! and out-of-range quantities are clamped, because the caller is a
//! single-user UI holding possibly stale state across modals. The enum
//! below covers the few cases that genuinely refuse:
//!
//! - checkout on an empty cart
//! - deleting a category still assigned to products
//! - host-level lookups of products/customers that do not exist
//! - field validation on catalog writes
//!
//! ## Design Principles
//! 1. `thiserror` derive, never manual Display impls
//! 2. Context in the message (ids, counts), never bare strings
//! 3. Errors are enum variants, not `String`

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business-rule failures from the order engine and catalog.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted with nothing in the cart.
    #[error("Cannot complete payment: cart is empty")]
    EmptyCart,

    /// A category cannot be deleted while products reference it.
    ///
    /// The one refusal in the engine: silently dropping the category would
    /// orphan the products, and silently dropping the products would be
    /// data loss. The UI surfaces this as a warning.
    #[error("Category {category_id} is assigned to {product_count} product(s) and cannot be deleted")]
    CategoryInUse {
        category_id: String,
        product_count: usize,
    },

    /// Product id not present in the catalog (host lookup, e.g. add-to-cart).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Customer id not present in the catalog (host lookup).
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Order id not present in the ledger (host lookup, e.g. details view).
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Validation failure on a catalog write.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures, raised before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (bad SKU characters, bad UUID, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience alias for Results carrying a CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = CoreError::CategoryInUse {
            category_id: "snacks".to_string(),
            product_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Category snacks is assigned to 3 product(s) and cannot be deleted"
        );

        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "Cannot complete payment: cart is empty"
        );
    }

    #[test]
    fn validation_converts_to_core_error() {
        let validation = ValidationError::Required {
            field: "sku".to_string(),
        };
        let core: CoreError = validation.into();
        assert!(matches!(core, CoreError::Validation(_)));
    }
}
