//! # cemention-core: Pricing and Order Rules for Cemention
//!
//! This crate holds the storefront's business rules as pure functions:
//! role-based prices, order totals, cart quantity rules, validation, and
//! the text of invoices and customer notifications.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cemention Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cemention CLI (apps/cli)                      │   │
//! │  │    products ──► cart ──► checkout ──► orders / invoice          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           cemention-client (REST client + storefront)           │   │
//! │  │    ApiClient, Storefront, ClientConfig, TokenStore             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ cemention-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ │   │
//! │  │   │  types  │ │  money  │ │ pricing │ │validation│ │ invoice │ │   │
//! │  │   │  User   │ │  Money  │ │  role   │ │  GSTIN   │ │ notify  │ │   │
//! │  │   │  Order  │ │  Rate   │ │  totals │ │  qty     │ │         │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO AMBIENT SESSION • PURE FUNCTIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (User, Product, CartLine, Order, ...)
//! - [`money`] - Exact decimal money
//! - [`pricing`] - Role prices and order totals
//! - [`cart`] - Quantity stepping and cart summaries
//! - [`validation`] - Form and quantity rules
//! - [`company`] - Seller details printed on invoices and messages
//! - [`invoice`] - Invoice document model
//! - [`notification`] - Order event messages and WhatsApp links
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: pricing takes the session as a value, never reads it
//! 2. **Exact Money**: decimal arithmetic, no rounding until display
//! 3. **No I/O**: the REST client lives in `cemention-client`
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cemention_core::money::Money;
//! use cemention_core::pricing::{role_price, compute_total};
//! use cemention_core::types::{CartLine, PaymentMethod, Role};
//!
//! let unit = role_price(Money::from_rupees(300), Some(Role::Retailer));
//! assert_eq!(unit.to_string(), "₹305.01");
//!
//! let lines = vec![CartLine {
//!     product_id: "p1".into(),
//!     quantity: 100,
//!     price: unit,
//!     brand: "UltraTech".into(),
//!     grade: None,
//! }];
//! let totals = compute_total(&lines, true, PaymentMethod::Upi);
//! assert_eq!(totals.total.to_string(), "₹35991.18");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod company;
pub mod error;
pub mod invoice;
pub mod money;
pub mod notification;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use company::CompanyProfile;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_total, role_price, OrderTotal, PricingContext};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity, in bags, that can sit in a cart line.
pub const MIN_ORDER_QUANTITY: i64 = 100;

/// Bags added or removed by one press of the cart stepper.
pub const QUANTITY_STEP: i64 = 10;

/// GST charged to GST-registered buyers (18%).
pub const GST_RATE: Rate = Rate::from_bps(1800);

/// Surcharge on card payments (2%).
pub const CARD_SURCHARGE_RATE: Rate = Rate::from_bps(200);
