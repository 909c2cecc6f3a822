//! # Order Notifications
//!
//! Customer-facing message text for order events, and WhatsApp
//! click-to-send links that carry it.
//!
//! ## Event Flow
//! ```text
//! order_placed ──► payment_pending ──► payment_received
//!                                            │
//!                                            ▼
//!                        driver_assigned ──► out_for_delivery ──► delivered
//! ```
//!
//! Nothing here sends anything. The caller opens the link or copies
//! the message.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::company::CompanyProfile;
use crate::error::ValidationError;
use crate::types::{Order, User};
use crate::validation::normalize_phone;

/// An order event a customer is told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderEvent {
    OrderPlaced,
    PaymentReceived,
    PaymentPending,
    DriverAssigned,
    OutForDelivery,
    Delivered,
}

impl OrderEvent {
    pub const ALL: [OrderEvent; 6] = [
        OrderEvent::OrderPlaced,
        OrderEvent::PaymentReceived,
        OrderEvent::PaymentPending,
        OrderEvent::DriverAssigned,
        OrderEvent::OutForDelivery,
        OrderEvent::Delivered,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            OrderEvent::OrderPlaced => "order_placed",
            OrderEvent::PaymentReceived => "payment_received",
            OrderEvent::PaymentPending => "payment_pending",
            OrderEvent::DriverAssigned => "driver_assigned",
            OrderEvent::OutForDelivery => "out_for_delivery",
            OrderEvent::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderEvent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        OrderEvent::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "event".to_string(),
                allowed: OrderEvent::ALL.iter().map(|e| e.to_string()).collect(),
            })
    }
}

/// Builds the WhatsApp message for `event` on `order`.
pub fn order_message(
    order: &Order,
    customer: &User,
    event: OrderEvent,
    company: &CompanyProfile,
) -> String {
    let order_id = order.reference();
    let name = &customer.name;
    let amount = order.total_amount;
    let driver = order.driver_name.as_deref().unwrap_or("TBD").to_uppercase();
    let driver_mobile = order.driver_mobile.as_deref().unwrap_or("TBD");
    let footer = format!("For queries: {}", company.phone);

    let body = match event {
        OrderEvent::OrderPlaced => {
            let address = &order.delivery_address;
            format!(
                "*Order Placed Successfully! 🎉*\n\n\
                 Order ID: {order_id}\n\
                 Customer: {name}\n\
                 Role: {role}\n\
                 Total Amount: {amount}\n\
                 Payment Method: {method}\n\
                 Payment Status: {status}\n\n\
                 Delivery Address:\n\
                 {street}\n\
                 {city}, {state}\n\
                 Pincode: {pincode}\n\n\
                 Thank you for choosing {company}!",
                role = customer.role.label(),
                method = order.payment_method.as_str().to_uppercase(),
                status = order
                    .payment_status
                    .as_deref()
                    .unwrap_or("pending")
                    .to_uppercase(),
                street = address.street,
                city = address.city,
                state = address.state,
                pincode = address.pincode,
                company = company.name,
            )
        }
        OrderEvent::PaymentReceived => format!(
            "*Payment Received! ✅*\n\n\
             Order ID: {order_id}\n\
             Customer: {name}\n\
             Amount: {amount}\n\
             Transaction ID: {txn}\n\n\
             Your order is now being processed.\n\
             Invoice has been generated and sent to your email.",
            txn = order.transaction_id.as_deref().unwrap_or("N/A"),
        ),
        OrderEvent::PaymentPending => format!(
            "*Payment Pending ⏳*\n\n\
             Order ID: {order_id}\n\
             Customer: {name}\n\
             Amount: {amount}\n\n\
             Please complete the payment to process your order.\n\n\
             Payment Details:\n\
             UPI: {upi}\n\
             Account: {account}\n\
             IFSC: {ifsc}\n\
             Bank: {bank}",
            upi = company.upi_id,
            account = company.bank_account,
            ifsc = company.bank_ifsc,
            bank = company.bank_name,
        ),
        OrderEvent::DriverAssigned => format!(
            "*Driver Assigned! 🚚*\n\n\
             Order ID: {order_id}\n\
             Customer: {name}\n\n\
             *DRIVER DETAILS:*\n\
             *NAME: {driver}*\n\
             *MOBILE: {driver_mobile}*\n\
             *VEHICLE: {vehicle}*\n\n\
             Your order will be delivered soon.",
            vehicle = order.vehicle_number.as_deref().unwrap_or("TBD"),
        ),
        OrderEvent::OutForDelivery => format!(
            "*Out for Delivery! 🚚*\n\n\
             Order ID: {order_id}\n\
             Customer: {name}\n\n\
             Your order is on the way!\n\n\
             *DRIVER: {driver}*\n\
             *MOBILE: {driver_mobile}*\n\n\
             Please be available at the delivery address."
        ),
        OrderEvent::Delivered => {
            return format!(
                "*Order Delivered Successfully! ✅*\n\n\
                 Order ID: {order_id}\n\
                 Customer: {name}\n\n\
                 Thank you for choosing {company}!\n\n\
                 Please rate your experience and share feedback.\n\n\
                 {footer}\n\
                 Website: {website}",
                company = company.name,
                website = company.website,
            )
        }
    };

    format!("{body}\n\n{footer}")
}

/// Builds a `https://wa.me/<phone>?text=<message>` link.
///
/// `phone` is reduced to its 10-digit mobile number and sent with the
/// `91` country code.
///
/// ## Example
/// ```rust
/// use cemention_core::notification::whatsapp_link;
///
/// let link = whatsapp_link("98230 64024", "Hello there").unwrap();
/// assert_eq!(link.as_str(), "https://wa.me/919823064024?text=Hello+there");
/// ```
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url, ValidationError> {
    let mobile = normalize_phone(phone);
    if mobile.len() != 10 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be a 10-digit mobile number".to_string(),
        });
    }
    let number = format!("91{}", mobile);

    let mut url = Url::parse("https://wa.me/").map_err(|e| ValidationError::InvalidFormat {
        field: "link".to_string(),
        reason: e.to_string(),
    })?;
    url.set_path(&number);
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}
