//! # Invoice
//!
//! A tax invoice built from a placed order, the buyer, and the seller.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       TAX INVOICE                            │
//! │  Cemention, GSTIN 27ABCDE1234F1Z5                            │
//! │                                                              │
//! │  Invoice No: A1B2C3D4          Date: 05-Jan-2025             │
//! │  Customer Type: Retailer       Payment Method: UPI           │
//! │                                                              │
//! │  Bill To: name / business / GSTIN / address / phone          │
//! │                                                              │
//! │  # Product    Grade  Bags  Price/Bag   Amount                │
//! │  1 UltraTech  OPC    100   ₹305.01     ₹30501.00             │
//! │                                                              │
//! │                       Subtotal        ₹30501.00              │
//! │                       GST @ 18%        ₹5490.18   (if reg.)  │
//! │                       Card (2%)            ...    (if > 0)   │
//! │                       Total Amount    ₹35991.18              │
//! │                                                              │
//! │  Payment Status, Delivery Details, Terms & Conditions        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are recomputed from the order lines with
//! [`compute_total`](crate::pricing::compute_total), so the GST row follows
//! the buyer's registration, not whatever total the backend stored.
//! This module only builds the data; the CLI draws it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::company::CompanyProfile;
use crate::money::Money;
use crate::pricing::{compute_total, OrderTotal};
use crate::types::{Order, User};
use crate::MIN_ORDER_QUANTITY;

/// One priced row of the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    /// 1-based row number.
    pub number: usize,
    pub brand: String,
    pub grade: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub amount: Money,
}

/// Who the invoice is billed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTo {
    pub name: String,
    pub business_name: Option<String>,
    /// Only set for GST-registered buyers.
    pub gstin: Option<String>,
    pub address: String,
    pub phone: String,
}

/// Driver and vehicle, once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub driver_name: String,
    pub driver_mobile: String,
    pub vehicle_number: String,
    pub status: String,
}

/// A rendered-ready tax invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_number: String,
    pub date: Option<NaiveDate>,
    pub seller: CompanyProfile,
    pub customer_type: String,
    pub payment_method: String,
    pub bill_to: BillTo,
    pub lines: Vec<InvoiceLine>,
    pub totals: OrderTotal,
    /// Whether the GST row is printed.
    pub show_gst: bool,
    pub payment_status: String,
    pub transaction_id: Option<String>,
    pub delivery: Option<DeliveryDetails>,
    pub terms: Vec<String>,
}

impl Invoice {
    /// Builds the invoice for `order` placed by `buyer`.
    pub fn build(order: &Order, buyer: &User, seller: &CompanyProfile) -> Self {
        let lines = order
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| InvoiceLine {
                number: idx + 1,
                brand: item.brand.clone(),
                grade: item.grade.map(|g| g.to_string()).unwrap_or_default(),
                quantity: item.quantity,
                unit_price: item.price,
                amount: item.line_total(),
            })
            .collect();

        let totals = compute_total(&order.items, buyer.is_gst_registered, order.payment_method);

        let gstin = if buyer.is_gst_registered {
            buyer.gst_number.clone().filter(|g| !g.is_empty())
        } else {
            None
        };

        let delivery = order.driver_name.as_ref().map(|driver| DeliveryDetails {
            driver_name: driver.to_uppercase(),
            driver_mobile: order.driver_mobile.clone().unwrap_or_default(),
            vehicle_number: order.vehicle_number.clone().unwrap_or_default(),
            status: capitalize(order.delivery_status.as_deref().unwrap_or("pending")),
        });

        Invoice {
            invoice_number: order.reference(),
            date: order.created_at.map(|ts| ts.date_naive()),
            seller: seller.clone(),
            customer_type: buyer.role.label().to_string(),
            payment_method: order.payment_method.as_str().to_uppercase(),
            bill_to: BillTo {
                name: buyer.name.clone(),
                business_name: buyer.business_name.clone(),
                gstin,
                address: order.delivery_address.to_string(),
                phone: buyer.phone.clone(),
            },
            lines,
            totals,
            show_gst: buyer.is_gst_registered,
            payment_status: order
                .payment_status
                .as_deref()
                .unwrap_or("pending")
                .to_uppercase(),
            transaction_id: order.transaction_id.clone(),
            delivery,
            terms: standard_terms(seller),
        }
    }

    /// Whether the card surcharge row is printed.
    pub fn show_card_surcharge(&self) -> bool {
        self.totals.card_surcharge.is_positive()
    }
}

/// Terms printed at the foot of every invoice.
pub fn standard_terms(seller: &CompanyProfile) -> Vec<String> {
    vec![
        format!("Minimum order quantity is {} bags", MIN_ORDER_QUANTITY),
        "Orders cannot be cancelled once payment is initiated".to_string(),
        "Delivery within 3-5 business days".to_string(),
        "Final invoice will be generated after order confirmation".to_string(),
        format!("For queries, contact: {}", seller.phone),
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CartLine, DeliveryAddress, Grade, OrderStatus, PaymentMethod, Role};
    use chrono::{TimeZone, Utc};

    fn buyer(gst: bool) -> User {
        User {
            id: "u1".to_string(),
            name: "Asha Traders".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            role: Role::Retailer,
            is_gst_registered: gst,
            business_name: Some("Asha Traders Pvt Ltd".to_string()),
            gst_number: Some("27ABCDE1234F1Z5".to_string()),
            gst_registered_name: None,
            addresses: vec![],
            created_at: None,
        }
    }

    fn order(method: PaymentMethod) -> Order {
        Order {
            id: "a1b2c3d4-e5f6-4711-8899-aabbccddeeff".to_string(),
            user_id: "u1".to_string(),
            items: vec![CartLine {
                product_id: "p1".to_string(),
                quantity: 100,
                price: Money::from_rupees(300),
                brand: "UltraTech".to_string(),
                grade: Some(Grade::Opc),
            }],
            total_amount: Money::from_rupees(30_000),
            payment_method: method,
            status: OrderStatus::Pending,
            delivery_address: DeliveryAddress {
                street: "Plot 4, MIDC".to_string(),
                city: "Jalgaon".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "425003".to_string(),
            },
            order_type: "normal".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap()),
            transaction_id: None,
            payment_status: None,
            driver_name: None,
            driver_mobile: None,
            vehicle_number: None,
            delivery_status: None,
        }
    }

    #[test]
    fn test_build_header_fields() {
        let invoice = Invoice::build(&order(PaymentMethod::Upi), &buyer(false), &CompanyProfile::default());
        assert_eq!(invoice.invoice_number, "A1B2C3D4");
        assert_eq!(invoice.customer_type, "Retailer");
        assert_eq!(invoice.payment_method, "UPI");
        assert_eq!(invoice.payment_status, "PENDING");
        assert_eq!(invoice.date, NaiveDate::from_ymd_opt(2025, 1, 5));
        assert_eq!(invoice.lines.len(), 1);
        assert_eq!(invoice.lines[0].number, 1);
        assert_eq!(invoice.lines[0].grade, "OPC");
        assert_eq!(invoice.terms.len(), 5);
    }

    #[test]
    fn test_unregistered_buyer_has_no_gst_row() {
        let invoice = Invoice::build(&order(PaymentMethod::Cod), &buyer(false), &CompanyProfile::default());
        assert!(!invoice.show_gst);
        assert!(invoice.bill_to.gstin.is_none());
        assert_eq!(invoice.totals.total, Money::from_rupees(30_000));
        assert!(!invoice.show_card_surcharge());
    }

    #[test]
    fn test_registered_buyer_gets_gst_row() {
        let invoice = Invoice::build(&order(PaymentMethod::Cod), &buyer(true), &CompanyProfile::default());
        assert_eq!(invoice.bill_to.gstin.as_deref(), Some("27ABCDE1234F1Z5"));
        assert!(invoice.show_gst);
        assert_eq!(invoice.totals.gst, Money::from_rupees(5_400));
        assert_eq!(invoice.totals.total, Money::from_rupees(35_400));
    }

    #[test]
    fn test_card_order_shows_surcharge() {
        let invoice = Invoice::build(&order(PaymentMethod::Card), &buyer(false), &CompanyProfile::default());
        assert!(invoice.show_card_surcharge());
        assert_eq!(invoice.totals.card_surcharge, Money::from_rupees(600));
        assert_eq!(invoice.totals.total, Money::from_rupees(30_600));
    }

    #[test]
    fn test_delivery_details_when_driver_assigned() {
        let mut order = order(PaymentMethod::Rtgs);
        order.driver_name = Some("Ramesh Patil".to_string());
        order.driver_mobile = Some("9000000001".to_string());
        order.vehicle_number = Some("MH19 AB 1234".to_string());
        order.delivery_status = Some("out_for_delivery".to_string());
        order.payment_status = Some("received".to_string());
        order.transaction_id = Some("UTR123".to_string());

        let invoice = Invoice::build(&order, &buyer(false), &CompanyProfile::default());
        let delivery = invoice.delivery.as_ref().unwrap();
        assert_eq!(delivery.driver_name, "RAMESH PATIL");
        assert_eq!(delivery.status, "Out_for_delivery");
        assert_eq!(delivery.vehicle_number, "MH19 AB 1234");
        assert_eq!(invoice.payment_status, "RECEIVED");
        assert_eq!(invoice.transaction_id.as_deref(), Some("UTR123"));
    }

    #[test]
    fn test_terms_mention_contact_phone() {
        let seller = CompanyProfile {
            phone: "9111111111".to_string(),
            ..CompanyProfile::default()
        };
        let terms = standard_terms(&seller);
        assert_eq!(terms[0], "Minimum order quantity is 100 bags");
        assert_eq!(terms[4], "For queries, contact: 9111111111");
    }
}
