//! # Domain Types
//!
//! Core domain types shared by the storefront client and the CLI.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │    Product      │   │    CartLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  productId      │       │
//! │  │  role           │   │  brand, grade   │   │  quantity ≥ 100 │       │
//! │  │  isGstRegistered│   │  basePrice      │   │  price (frozen) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │  RequestOrder   │   │  PaymentMethod  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  items          │   │  brand          │   │  cod, upi,      │       │
//! │  │  totalAmount    │   │  quantity       │   │  netbanking,    │       │
//! │  │  status         │   │  preferredDate  │   │  rtgs, card     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! All records use camelCase JSON field names, matching the storefront
//! backend. Unknown enum strings coming back from the backend map to
//! catch-all variants instead of failing the whole response.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::MIN_ORDER_QUANTITY;

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// - 1800 bps = 18% GST
/// - 200 bps = 2% card surcharge
/// - 167 bps = the retailer markup (×1.0167)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (1800 bps → 0.18).
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (1800 bps → 18).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Role
// =============================================================================

/// A user's pricing tier.
///
/// ## Price Multipliers
/// ```text
/// dealer    ×1.0000  (canonical base price)
/// retailer  ×1.0167
/// customer  ×1.0250
/// admin     ×1.0000  (no markup)
/// unknown   ×1.0000  (no markup)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Dealer,
    Retailer,
    Customer,
    Admin,
    /// Any role string the backend sends that this client does not know.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles a user may pick at registration or an admin may assign.
    pub const ASSIGNABLE: [Role; 4] = [Role::Dealer, Role::Retailer, Role::Customer, Role::Admin];

    /// Markup over the dealer base price for this role.
    pub const fn markup(self) -> Rate {
        match self {
            Role::Retailer => Rate::from_bps(167),
            Role::Customer => Rate::from_bps(250),
            Role::Dealer | Role::Admin | Role::Unknown => Rate::zero(),
        }
    }

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Dealer => "dealer",
            Role::Retailer => "retailer",
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    /// Capitalised name used on invoices ("Customer Type: Retailer").
    pub const fn label(self) -> &'static str {
        match self {
            Role::Dealer => "Dealer",
            Role::Retailer => "Retailer",
            Role::Customer => "Customer",
            Role::Admin => "Admin",
            Role::Unknown => "Unknown",
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dealer" => Ok(Role::Dealer),
            "retailer" => Ok(Role::Retailer),
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            _ => Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: Role::ASSIGNABLE.iter().map(|r| r.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Cement Grade
// =============================================================================

/// Cement grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    /// Ordinary Portland Cement.
    Opc,
    /// Portland Pozzolana Cement.
    Ppc,
    /// Portland Slag Cement.
    Psc,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::Opc, Grade::Ppc, Grade::Psc];

    pub const fn as_str(self) -> &'static str {
        match self {
            Grade::Opc => "OPC",
            Grade::Ppc => "PPC",
            Grade::Psc => "PSC",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OPC" => Ok(Grade::Opc),
            "PPC" => Ok(Grade::Ppc),
            "PSC" => Ok(Grade::Psc),
            _ => Err(ValidationError::NotAllowed {
                field: "grade".to_string(),
                allowed: Grade::ALL.iter().map(|g| g.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cod,
    Upi,
    Netbanking,
    /// RTGS / bank transfer.
    Rtgs,
    /// Card payment. Carries a 2% surcharge but is not offered at checkout.
    Card,
    /// Any method string the backend sends that this client does not know.
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    /// Methods the checkout actually lets the user choose.
    pub const OFFERED: [PaymentMethod; 4] = [
        PaymentMethod::Cod,
        PaymentMethod::Upi,
        PaymentMethod::Netbanking,
        PaymentMethod::Rtgs,
    ];

    pub fn is_offered(self) -> bool {
        PaymentMethod::OFFERED.contains(&self)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Netbanking => "netbanking",
            PaymentMethod::Rtgs => "rtgs",
            PaymentMethod::Card => "card",
            PaymentMethod::Other => "other",
        }
    }

    /// Human-readable label shown at checkout.
    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery (COD)",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Netbanking => "Net Banking",
            PaymentMethod::Rtgs => "RTGS/Bank Transfer",
            PaymentMethod::Card => "Card",
            PaymentMethod::Other => "Other",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cod" => Ok(PaymentMethod::Cod),
            "upi" => Ok(PaymentMethod::Upi),
            "netbanking" => Ok(PaymentMethod::Netbanking),
            "rtgs" => Ok(PaymentMethod::Rtgs),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(ValidationError::NotAllowed {
                field: "payment method".to_string(),
                allowed: PaymentMethod::OFFERED.iter().map(|m| m.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status shared by orders and request orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Completed,
        OrderStatus::Rejected,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Completed => "completed",
            OrderStatus::Rejected => "rejected",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "approved" => Ok(OrderStatus::Approved),
            "completed" => Ok(OrderStatus::Completed),
            "rejected" => Ok(OrderStatus::Rejected),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: OrderStatus::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// An authenticated storefront user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_gst_registered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_registered_name: Option<String>,
    /// Saved addresses; free-form on the backend.
    #[serde(default)]
    pub addresses: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields submitted by the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(default)]
    pub role: Role,
    pub business_name: Option<String>,
    #[serde(default)]
    pub is_gst_registered: bool,
    pub gst_number: Option<String>,
    pub gst_registered_name: Option<String>,
}

/// Login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Product
// =============================================================================

fn default_min_quantity() -> i64 {
    MIN_ORDER_QUANTITY
}

/// A cement product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub brand: String,
    pub grade: Grade,
    /// Dealer price per bag.
    pub base_price: Money,
    pub image: String,
    #[serde(default = "default_min_quantity")]
    pub min_quantity: i64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Display name, e.g. "UltraTech OPC".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.grade)
    }

    /// The editable fields of this product, for an update.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            brand: self.brand.clone(),
            grade: self.grade,
            base_price: self.base_price,
            image: self.image.clone(),
            min_quantity: self.min_quantity,
            stock: self.stock,
        }
    }
}

/// Product fields an admin creates or replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub brand: String,
    pub grade: Grade,
    pub base_price: Money,
    pub image: String,
    #[serde(default = "default_min_quantity")]
    pub min_quantity: i64,
    #[serde(default)]
    pub stock: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// A line in the shopping cart.
///
/// `price` is the role-adjusted unit price frozen when the line was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: i64,
    pub price: Money,
    /// Not persisted by every backend version, so optional on read.
    #[serde(default)]
    pub brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
}

impl CartLine {
    /// Line total (unit price × bags).
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// The server-side cart for one user, lines in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.items.iter().find(|l| l.product_id == product_id)
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Where an order is delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
}

impl fmt::Display for DeliveryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} - {}",
            self.street, self.city, self.state, self.pincode
        )
    }
}

fn default_order_type() -> String {
    "normal".to_string()
}

/// A placed cart order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartLine>,
    pub total_amount: Money,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub delivery_address: DeliveryAddress,
    #[serde(default = "default_order_type")]
    pub order_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<String>,
}

impl Order {
    /// Short reference used on invoices and messages (first 8 chars, upper).
    pub fn reference(&self) -> String {
        self.id.chars().take(8).collect::<String>().to_uppercase()
    }

    /// Total bags across all lines.
    pub fn total_bags(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

/// Body of a place-order request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<CartLine>,
    pub total_amount: Money,
    pub payment_method: PaymentMethod,
    pub delivery_address: DeliveryAddress,
    #[serde(default = "default_order_type")]
    pub order_type: String,
    pub transaction_id: Option<String>,
}

/// A bulk-order inquiry outside the cart flow. Carries no pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOrder {
    pub id: String,
    pub user_id: String,
    pub brand: String,
    pub quantity: i64,
    pub delivery_location: String,
    pub phone: String,
    pub preferred_date: NaiveDate,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of a request-order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOrderDraft {
    pub brand: String,
    pub quantity: i64,
    pub delivery_location: String,
    pub phone: String,
    pub preferred_date: NaiveDate,
}

// =============================================================================
// Unit Tests
// =============================================================================
