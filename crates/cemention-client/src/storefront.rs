//! # Storefront
//!
//! The shopping flows, with pricing applied on the client side.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  priced_catalog()          role_price(base, role) per product           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  add_to_cart(id, qty)      qty ≥ 100, price frozen into the line        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  set_quantity / step_line  re-priced from today's base price            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  checkout_preview(method)  compute_total(lines, gst flag, method)       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  place_order(address, method, txn)                                      │
//! │        ├── method must be offered (cod, upi, netbanking, rtgs)          │
//! │        ├── address validated                                            │
//! │        ├── cart must not be empty                                       │
//! │        └── POST /orders with totalAmount = computed total               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is fixed when the storefront is built. Pricing reads it
//! through [`Session::pricing`], never from shared state.

use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use cemention_core::cart::{cart_summary, step_quantity, CartSummary, StepDirection};
use cemention_core::invoice::Invoice;
use cemention_core::notification::{order_message, whatsapp_link, OrderEvent};
use cemention_core::validation::{
    validate_delivery_address, validate_product_draft, validate_quantity, validate_registration,
    validate_request_order,
};
use cemention_core::{
    Cart, CartLine, CompanyProfile, CoreError, Credentials, DeliveryAddress, Money, NewOrder,
    Order, OrderStatus, OrderTotal, PaymentMethod, PricingContext, Product, ProductDraft,
    Registration, RequestOrder, RequestOrderDraft, Role, User, ValidationError,
};

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::session::Session;

/// A catalog entry with the price this session pays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedProduct {
    pub product: Product,
    pub unit_price: Money,
}

/// What the checkout page shows before the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPreview {
    pub cart: Cart,
    pub summary: CartSummary,
    pub payment_method: PaymentMethod,
    pub totals: OrderTotal,
}

/// A ready-to-send customer message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub event: OrderEvent,
    pub message: String,
    pub link: Url,
}

/// An authenticated storefront session.
#[derive(Debug, Clone)]
pub struct Storefront {
    api: ApiClient,
    session: Session,
}

impl Storefront {
    /// Wraps an existing session, attaching its token to `api`.
    pub fn new(mut api: ApiClient, session: Session) -> Self {
        api.set_token(Some(session.token.clone()));
        Storefront { api, session }
    }

    /// Validates the form, registers, and starts a session.
    pub async fn register(api: ApiClient, form: &Registration) -> ClientResult<Self> {
        validate_registration(form)?;
        let session = api.auth().register(form).await?;
        Ok(Storefront::new(api, session))
    }

    pub async fn login(api: ApiClient, credentials: &Credentials) -> ClientResult<Self> {
        let session = api.auth().login(credentials).await?;
        Ok(Storefront::new(api, session))
    }

    /// Restores a session from a saved token, refreshing the user.
    pub async fn resume(api: ApiClient, token: impl Into<String>) -> ClientResult<Self> {
        let api = api.with_token(token);
        let user = api.auth().me().await?;
        let token = api.token().unwrap_or_default().to_string();

        debug!(user_id = %user.id, role = %user.role, "Session resumed");
        Ok(Storefront::new(api, Session::new(token, user)))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> &User {
        &self.session.user
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn pricing(&self) -> PricingContext {
        self.session.pricing()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The catalog with this session's role prices.
    pub async fn priced_catalog(&self) -> ClientResult<Vec<PricedProduct>> {
        let pricing = self.pricing();
        let products = self.api.products().list().await?;

        Ok(products
            .into_iter()
            .map(|product| PricedProduct {
                unit_price: pricing.unit_price(product.base_price),
                product,
            })
            .collect())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub async fn cart(&self) -> ClientResult<Cart> {
        self.api.cart().get().await
    }

    /// Adds `quantity` bags of a product at this session's role price.
    pub async fn add_to_cart(&self, product_id: &str, quantity: i64) -> ClientResult<Cart> {
        validate_quantity(quantity)?;
        let product = self.api.products().get(product_id).await?;
        let line = CartLine::from_product(&product, quantity, &self.pricing());

        info!(
            product_id = %product_id,
            quantity,
            unit_price = %line.price,
            "Adding to cart"
        );
        self.api.cart().upsert(&line).await
    }

    /// Sets the quantity of a line already in the cart.
    ///
    /// The line is re-priced from the product's current base price, so a
    /// price change since it was added takes effect here.
    pub async fn set_quantity(&self, product_id: &str, quantity: i64) -> ClientResult<Cart> {
        validate_quantity(quantity)?;
        let cart = self.cart().await?;
        if cart.line(product_id).is_none() {
            return Err(CoreError::ProductNotInCart(product_id.to_string()).into());
        }
        self.reprice_line(product_id, quantity).await
    }

    /// Moves a line up or down by one 10-bag step.
    pub async fn step_line(&self, product_id: &str, direction: StepDirection) -> ClientResult<Cart> {
        let cart = self.cart().await?;
        let current = cart
            .line(product_id)
            .map(|l| l.quantity)
            .ok_or_else(|| CoreError::ProductNotInCart(product_id.to_string()))?;

        let next = step_quantity(current, direction)?;
        self.reprice_line(product_id, next).await
    }

    /// Replaces a cart line at today's role price.
    ///
    /// The backend ignores `price` when the product is already in the cart,
    /// so the old line is removed before the new one is posted.
    async fn reprice_line(&self, product_id: &str, quantity: i64) -> ClientResult<Cart> {
        let product = self.api.products().get(product_id).await?;
        let line = CartLine::from_product(&product, quantity, &self.pricing());

        debug!(product_id = %product_id, quantity, unit_price = %line.price, "Re-pricing cart line");
        self.api.cart().remove(product_id).await?;
        self.api.cart().upsert(&line).await
    }

    pub async fn remove_line(&self, product_id: &str) -> ClientResult<()> {
        self.api.cart().remove(product_id).await
    }

    pub async fn clear_cart(&self) -> ClientResult<()> {
        self.api.cart().clear().await
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Totals for the current cart if paid with `payment_method`.
    pub async fn checkout_preview(&self, payment_method: PaymentMethod) -> ClientResult<CheckoutPreview> {
        let cart = self.cart().await?;
        let totals = self.pricing().order_total(&cart.items, payment_method);

        Ok(CheckoutPreview {
            summary: cart_summary(&cart.items),
            cart,
            payment_method,
            totals,
        })
    }

    /// Places an order for everything in the cart.
    pub async fn place_order(
        &self,
        address: DeliveryAddress,
        payment_method: PaymentMethod,
        transaction_id: Option<String>,
    ) -> ClientResult<Order> {
        if !payment_method.is_offered() {
            return Err(CoreError::PaymentMethodNotOffered(payment_method.to_string()).into());
        }
        validate_delivery_address(&address)?;

        let cart = self.cart().await?;
        if cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let totals = self.pricing().order_total(&cart.items, payment_method);
        let order = NewOrder {
            items: cart.items,
            total_amount: totals.total,
            payment_method,
            delivery_address: address,
            order_type: "normal".to_string(),
            transaction_id: transaction_id.filter(|t| !t.trim().is_empty()),
        };

        self.api.orders().place(&order).await
    }

    /// This user's orders, or every order for an admin.
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        self.api.orders().list().await
    }

    pub async fn order(&self, id: &str) -> ClientResult<Order> {
        self.api.orders().get(id).await
    }

    // =========================================================================
    // Request Orders
    // =========================================================================

    pub async fn request_order(&self, draft: &RequestOrderDraft) -> ClientResult<RequestOrder> {
        validate_request_order(draft)?;
        self.api.request_orders().create(draft).await
    }

    pub async fn request_orders(&self) -> ClientResult<Vec<RequestOrder>> {
        self.api.request_orders().list().await
    }

    // =========================================================================
    // Invoices & Notifications
    // =========================================================================

    /// Builds the invoice for an order, billed to whoever placed it.
    ///
    /// Stored order lines carry only product id, quantity and price, so
    /// brand and grade come from the current catalog.
    pub async fn invoice(&self, order_id: &str, seller: &CompanyProfile) -> ClientResult<Invoice> {
        let mut order = self.order(order_id).await?;
        let buyer = self.buyer_of(&order).await?;

        if order.items.iter().any(|l| l.brand.is_empty() || l.grade.is_none()) {
            let catalog = self.api.products().list().await?;
            describe_lines(&mut order.items, &catalog);
        }
        Ok(Invoice::build(&order, &buyer, seller))
    }

    /// Composes the WhatsApp message for `event` on an order.
    pub async fn notification(
        &self,
        order_id: &str,
        event: OrderEvent,
        company: &CompanyProfile,
    ) -> ClientResult<Notification> {
        let order = self.order(order_id).await?;
        let buyer = self.buyer_of(&order).await?;
        let message = order_message(&order, &buyer, event, company);
        let link = whatsapp_link(&buyer.phone, &message)?;

        Ok(Notification {
            event,
            message,
            link,
        })
    }

    async fn buyer_of(&self, order: &Order) -> ClientResult<User> {
        if order.user_id == self.session.user.id || !self.session.is_admin() {
            return Ok(self.session.user.clone());
        }

        let users = self.api.admin().users().await?;
        match users.into_iter().find(|u| u.id == order.user_id) {
            Some(user) => Ok(user),
            None => {
                warn!(order_id = %order.id, user_id = %order.user_id, "Order owner not found");
                Err(ClientError::NotFound(format!("user {}", order.user_id)))
            }
        }
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub async fn users(&self) -> ClientResult<Vec<User>> {
        self.session.require_admin()?;
        self.api.admin().users().await
    }

    pub async fn set_user_role(&self, user_id: &str, role: Role) -> ClientResult<()> {
        self.session.require_admin()?;
        if role == Role::Unknown {
            return Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: Role::ASSIGNABLE.iter().map(|r| r.to_string()).collect(),
            }
            .into());
        }
        self.api.admin().set_role(user_id, role).await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> ClientResult<Product> {
        self.session.require_admin()?;
        validate_product_draft(draft)?;
        self.api.products().create(draft).await
    }

    pub async fn update_product(&self, id: &str, draft: &ProductDraft) -> ClientResult<Product> {
        self.session.require_admin()?;
        validate_product_draft(draft)?;
        self.api.products().update(id, draft).await
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        self.session.require_admin()?;
        self.api.products().delete(id).await
    }

    pub async fn set_order_status(&self, order_id: &str, status: OrderStatus) -> ClientResult<()> {
        self.session.require_admin()?;
        self.api.orders().update_status(order_id, status).await
    }

    pub async fn set_request_status(&self, request_id: &str, status: OrderStatus) -> ClientResult<()> {
        self.session.require_admin()?;
        self.api.request_orders().update_status(request_id, status).await
    }
}

/// Fills in brand and grade for lines that lack them. Products no longer in
/// the catalog keep blank details.
fn describe_lines(lines: &mut [CartLine], catalog: &[Product]) {
    for line in lines {
        let Some(product) = catalog.iter().find(|p| p.id == line.product_id) else {
            debug!(product_id = %line.product_id, "Invoiced product no longer listed");
            continue;
        };
        if line.brand.is_empty() {
            line.brand = product.brand.clone();
        }
        if line.grade.is_none() {
            line.grade = Some(product.grade);
        }
    }
}
