//! # cemention-client: Storefront Client for Cemention
//!
//! Talks to the Cemention storefront backend and runs the shopping flows
//! on top of the pure rules in `cemention-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  apps/cli ─────────► Storefront (THIS CRATE)                           │
//! │                        │   ├── Session { token, user }                  │
//! │                        │   └── PricingContext ──► cemention-core        │
//! │                        ▼                                                │
//! │                      ApiClient ──HTTP/JSON──► <backend>/api             │
//! │                                                                         │
//! │  ClientConfig (client.toml + CEMENTION_* env)                           │
//! │  TokenStore   (bearer token between runs)                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Config file, env overrides, defaults
//! - [`api`] - Typed REST resources
//! - [`session`] - Session and token persistence
//! - [`storefront`] - Catalog, cart, checkout, invoices, admin
//! - [`error`] - Client error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cemention_client::{ApiClient, ClientConfig, Storefront};
//! use cemention_core::PaymentMethod;
//!
//! let config = ClientConfig::load(None)?;
//! let api = ApiClient::new(&config)?;
//! let shop = Storefront::login(api, &credentials).await?;
//!
//! shop.add_to_cart(&product_id, 120).await?;
//! let preview = shop.checkout_preview(PaymentMethod::Upi).await?;
//! println!("Total: {}", preview.totals.total);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod storefront;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{Session, TokenStore};
pub use storefront::{CheckoutPreview, Notification, PricedProduct, Storefront};
