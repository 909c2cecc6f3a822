//! # Pricing
//!
//! Role-based unit prices and order totals.
//!
//! ## Where Pricing Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Session (User) ──► PricingContext { role, is_gst_registered }          │
//! │                            │                                            │
//! │        ┌───────────────────┼────────────────────────┐                   │
//! │        ▼                   ▼                        ▼                   │
//! │  Catalog listing      Add to cart              Checkout                 │
//! │  role_price(base)     CartLine.price =         compute_total(lines,     │
//! │                       role_price(base)           gst flag, method)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are pure: the session is passed in by value as a
//! [`PricingContext`], never read from ambient state.
//!
//! ## Order Total
//! ```text
//! subtotal       = Σ price × quantity
//! gst            = subtotal × 18%   if the user is GST registered, else 0
//! card_surcharge = subtotal × 2%    if paying by card, else 0
//! total          = subtotal + gst + card_surcharge
//! ```
//!
//! Nothing here rounds. Two-decimal display is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartLine, PaymentMethod, Role, User};
use crate::{CARD_SURCHARGE_RATE, GST_RATE};

// =============================================================================
// Role Price
// =============================================================================

/// Derives the unit price a user with `role` pays for a product.
///
/// A missing role (guest) and roles without a markup pay the base price.
///
/// ## Example
/// ```rust
/// use cemention_core::money::Money;
/// use cemention_core::pricing::role_price;
/// use cemention_core::types::Role;
///
/// let base = Money::from_rupees(1000);
/// assert_eq!(role_price(base, Some(Role::Dealer)), base);
/// assert_eq!(role_price(base, Some(Role::Retailer)), Money::from_paise(101_670));
/// assert_eq!(role_price(base, Some(Role::Customer)), Money::from_rupees(1025));
/// assert_eq!(role_price(base, None), base);
/// ```
pub fn role_price(base_price: Money, role: Option<Role>) -> Money {
    match role {
        Some(role) => base_price.marked_up(role.markup()),
        None => base_price,
    }
}

// =============================================================================
// Order Total
// =============================================================================

/// Checkout totals derived from the cart. Never persisted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotal {
    pub subtotal: Money,
    pub gst: Money,
    pub card_surcharge: Money,
    pub total: Money,
}

/// Computes subtotal, GST, card surcharge and grand total.
///
/// ## Example
/// ```rust
/// use cemention_core::money::Money;
/// use cemention_core::pricing::compute_total;
/// use cemention_core::types::{CartLine, PaymentMethod};
///
/// let lines = vec![CartLine {
///     product_id: "p1".into(),
///     quantity: 100,
///     price: Money::from_rupees(300),
///     brand: "UltraTech".into(),
///     grade: None,
/// }];
///
/// let totals = compute_total(&lines, true, PaymentMethod::Cod);
/// assert_eq!(totals.subtotal, Money::from_rupees(30_000));
/// assert_eq!(totals.gst, Money::from_rupees(5_400));
/// assert_eq!(totals.total, Money::from_rupees(35_400));
/// ```
pub fn compute_total(
    lines: &[CartLine],
    is_gst_registered: bool,
    payment_method: PaymentMethod,
) -> OrderTotal {
    let subtotal: Money = lines.iter().map(CartLine::line_total).sum();

    let gst = if is_gst_registered {
        subtotal.apply_rate(GST_RATE)
    } else {
        Money::zero()
    };

    // Card is never offered at checkout, so this branch only fires for
    // orders that already carry "card" (see PaymentMethod::OFFERED).
    let card_surcharge = if payment_method == PaymentMethod::Card {
        subtotal.apply_rate(CARD_SURCHARGE_RATE)
    } else {
        Money::zero()
    };

    OrderTotal {
        subtotal,
        gst,
        card_surcharge,
        total: subtotal + gst + card_surcharge,
    }
}

// =============================================================================
// Pricing Context
// =============================================================================

/// The slice of the session that pricing depends on.
///
/// Built from the authenticated [`User`] and handed to pricing by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingContext {
    /// `None` for a guest browsing the catalog.
    pub role: Option<Role>,
    pub is_gst_registered: bool,
}

impl PricingContext {
    /// Context for a visitor who has not logged in.
    pub const fn guest() -> Self {
        PricingContext {
            role: None,
            is_gst_registered: false,
        }
    }

    pub const fn new(role: Role, is_gst_registered: bool) -> Self {
        PricingContext {
            role: Some(role),
            is_gst_registered,
        }
    }

    /// Role-adjusted unit price for this session.
    pub fn unit_price(&self, base_price: Money) -> Money {
        role_price(base_price, self.role)
    }

    /// Order totals for this session's GST flag.
    pub fn order_total(&self, lines: &[CartLine], payment_method: PaymentMethod) -> OrderTotal {
        compute_total(lines, self.is_gst_registered, payment_method)
    }
}

impl From<&User> for PricingContext {
    fn from(user: &User) -> Self {
        PricingContext::new(user.role, user.is_gst_registered)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
