//! # Error Types
//!
//! Domain-specific error types for cemention-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cemention-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations (cart, checkout)      │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  cemention-client errors (separate crate)                              │
//! │  └── ClientError      - HTTP, backend status, config, session          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → CLI (anyhow)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing functions themselves never fail; nothing in
//! [`crate::pricing`] returns these errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by cart and checkout helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Quantity below the minimum order.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart line: 100 bags
    ///      │
    ///      ▼
    /// Click "−" (step 10) → 90 bags
    ///      │
    ///      ▼
    /// BelowMinimumQuantity { requested: 90, min: 100 }
    ///      │
    ///      ▼
    /// UI shows: "Minimum order quantity is 100 bags"
    /// ```
    #[error("Minimum order quantity is {min} bags (requested {requested})")]
    BelowMinimumQuantity { requested: i64, min: i64 },

    /// Quantity is not a multiple of any allowed lot size.
    #[error("Quantity {quantity} must be in multiples of {}", join_multiples(.multiples))]
    InvalidQuantityMultiple { quantity: i64, multiples: Vec<i64> },

    /// Payment method not offered at checkout.
    #[error("Payment method '{0}' is not available at checkout")]
    PaymentMethodNotOffered(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product is not a line in the cart.
    #[error("Product {0} not in cart")]
    ProductNotInCart(String),

    /// Order cannot be found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn join_multiples(multiples: &[i64]) -> String {
    multiples
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before anything is sent to the backend.
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

    /// Invalid format (e.g., invalid GSTIN, invalid email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
