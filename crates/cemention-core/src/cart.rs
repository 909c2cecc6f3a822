//! # Cart Rules
//!
//! Pure helpers behind the cart page: freezing role prices into lines,
//! stepping quantities, and the cart summary panel.
//!
//! ## Quantity Stepper
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  UltraTech OPC          ₹305.01 per bag       │
//! │                                              │
//! │      [ − ]   120   [ + ]                     │
//! │        │            │                        │
//! │     -10 bags     +10 bags                    │
//! │        │                                     │
//! │   below 100? → "Minimum order quantity is    │
//! │                 100 bags", quantity kept     │
//! └──────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PricingContext;
use crate::types::{CartLine, Product};
use crate::{MIN_ORDER_QUANTITY, QUANTITY_STEP};

/// Direction of a single quantity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increase,
    Decrease,
}

/// Moves `current` one step (10 bags) in `direction`.
///
/// Fails without changing anything when the result would fall below the
/// minimum order quantity.
///
/// ## Example
/// ```rust
/// use cemention_core::cart::{step_quantity, StepDirection};
///
/// assert_eq!(step_quantity(100, StepDirection::Increase).unwrap(), 110);
/// assert_eq!(step_quantity(110, StepDirection::Decrease).unwrap(), 100);
/// assert!(step_quantity(100, StepDirection::Decrease).is_err());
/// ```
pub fn step_quantity(current: i64, direction: StepDirection) -> CoreResult<i64> {
    let next = match direction {
        StepDirection::Increase => current + QUANTITY_STEP,
        StepDirection::Decrease => current - QUANTITY_STEP,
    };
    ensure_minimum(next)?;
    Ok(next)
}

/// Rejects quantities below the minimum order.
pub fn ensure_minimum(quantity: i64) -> CoreResult<()> {
    if quantity < MIN_ORDER_QUANTITY {
        return Err(CoreError::BelowMinimumQuantity {
            requested: quantity,
            min: MIN_ORDER_QUANTITY,
        });
    }
    Ok(())
}

impl CartLine {
    /// Creates a cart line for `product`, freezing the session's role price.
    ///
    /// ## Price Freezing
    /// The price is captured now. If the base price changes later, the
    /// line keeps this price until its quantity is updated.
    pub fn from_product(product: &Product, quantity: i64, pricing: &PricingContext) -> Self {
        CartLine {
            product_id: product.id.clone(),
            quantity,
            price: pricing.unit_price(product.base_price),
            brand: product.brand.clone(),
            grade: Some(product.grade),
        }
    }
}

/// Figures shown in the cart's summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Number of distinct products.
    pub line_count: usize,
    /// Total bags across all lines.
    pub total_bags: i64,
    /// Sum of line totals, before GST or surcharge.
    pub subtotal: Money,
}

/// Summarises cart lines for the cart page.
pub fn cart_summary(lines: &[CartLine]) -> CartSummary {
    CartSummary {
        line_count: lines.len(),
        total_bags: lines.iter().map(|l| l.quantity).sum(),
        subtotal: lines.iter().map(CartLine::line_total).sum(),
    }
}
