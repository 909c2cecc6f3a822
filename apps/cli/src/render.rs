//! Table output.

use std::fmt::{self, Write};

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use cemention_client::PricedProduct;
use cemention_core::cart::CartSummary;
use cemention_core::invoice::Invoice;
use cemention_core::{Cart, Order, OrderTotal, RequestOrder, User, CARD_SURCHARGE_RATE, GST_RATE};

/// Builds the table, right-aligning every column from `numeric_from` on.
fn finish(builder: Builder, numeric_from: usize) -> String {
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric_from..), Alignment::right());
    table.to_string()
}

pub(crate) fn catalog(products: &[PricedProduct]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Brand", "Grade", "Your price", "Min bags", "Stock"]);

    for item in products {
        let p = &item.product;
        builder.push_record([
            p.id.clone(),
            p.brand.clone(),
            p.grade.to_string(),
            item.unit_price.to_string(),
            p.min_quantity.to_string(),
            p.stock.to_string(),
        ]);
    }

    finish(builder, 3)
}

pub(crate) fn cart(cart: &Cart, summary: &CartSummary) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Product ID", "Product", "Bags", "Unit price", "Amount"]);

    for line in &cart.items {
        let name = match (line.brand.is_empty(), line.grade) {
            (false, Some(grade)) => format!("{} {}", line.brand, grade),
            (false, None) => line.brand.clone(),
            (true, _) => "-".to_string(),
        };
        builder.push_record([
            line.product_id.clone(),
            name,
            line.quantity.to_string(),
            line.price.to_string(),
            line.line_total().to_string(),
        ]);
    }
    builder.push_record([
        String::new(),
        format!("{} line(s)", summary.line_count),
        summary.total_bags.to_string(),
        String::new(),
        summary.subtotal.to_string(),
    ]);

    finish(builder, 2)
}

pub(crate) fn totals(totals: &OrderTotal, show_gst: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Subtotal".to_string(), totals.subtotal.to_string()]);

    if show_gst {
        builder.push_record([
            format!("GST @ {}%", GST_RATE.percentage().normalize()),
            totals.gst.to_string(),
        ]);
    }
    if totals.card_surcharge.is_positive() {
        builder.push_record([
            format!("Card Surcharge ({}%)", CARD_SURCHARGE_RATE.percentage().normalize()),
            totals.card_surcharge.to_string(),
        ]);
    }
    builder.push_record(["Total".to_string(), totals.total.to_string()]);

    finish(builder, 1)
}

pub(crate) fn orders(orders: &[Order]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Ref", "ID", "Date", "Bags", "Total", "Payment", "Status"]);

    for order in orders {
        builder.push_record([
            order.reference(),
            order.id.clone(),
            order
                .created_at
                .map(|ts| ts.format("%d %b %Y").to_string())
                .unwrap_or_default(),
            order.total_bags().to_string(),
            order.total_amount.to_string(),
            order.payment_method.to_string(),
            order.status.to_string(),
        ]);
    }

    finish(builder, 3)
}

pub(crate) fn request_orders(requests: &[RequestOrder]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Brand", "Location", "Preferred date", "Status", "Bags"]);

    for request in requests {
        builder.push_record([
            request.id.clone(),
            request.brand.clone(),
            request.delivery_location.clone(),
            request.preferred_date.to_string(),
            request.status.to_string(),
            request.quantity.to_string(),
        ]);
    }

    finish(builder, 5)
}

pub(crate) fn users(users: &[User]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Email", "Phone", "Role", "GST"]);

    for user in users {
        builder.push_record([
            user.id.clone(),
            user.name.clone(),
            user.email.clone(),
            user.phone.clone(),
            user.role.to_string(),
            user.gst_number.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    finish(builder, 6)
}

/// Full invoice: header, bill-to, line items, totals, terms.
pub(crate) fn invoice(invoice: &Invoice) -> Result<String, fmt::Error> {
    let seller = &invoice.seller;
    let mut out = String::new();

    writeln!(out, "TAX INVOICE")?;
    writeln!(out)?;
    writeln!(out, "{}", seller.legal_name)?;
    writeln!(out, "{}", seller.address)?;
    writeln!(out, "GSTIN: {}", seller.gst_number)?;
    writeln!(out, "Phone: {} | Email: {}", seller.phone, seller.email)?;
    writeln!(out)?;

    let date = invoice
        .date
        .map(|d| d.format("%d-%b-%Y").to_string())
        .unwrap_or_else(|| "-".to_string());
    writeln!(out, "Invoice No: {:<20} Date: {}", invoice.invoice_number, date)?;
    writeln!(
        out,
        "Customer Type: {:<17} Payment Method: {}",
        invoice.customer_type, invoice.payment_method
    )?;
    writeln!(out)?;

    let bill_to = &invoice.bill_to;
    writeln!(out, "Bill To:")?;
    writeln!(out, "  {}", bill_to.name)?;
    if let Some(business) = &bill_to.business_name {
        writeln!(out, "  {}", business)?;
    }
    if let Some(gstin) = &bill_to.gstin {
        writeln!(out, "  GSTIN: {}", gstin)?;
    }
    writeln!(out, "  {}", bill_to.address)?;
    writeln!(out, "  Phone: {}", bill_to.phone)?;

    let mut builder = Builder::default();
    builder.push_record(["S.No", "Product", "Grade", "Bags", "Price/Bag", "Amount"]);
    for line in &invoice.lines {
        builder.push_record([
            line.number.to_string(),
            line.brand.clone(),
            line.grade.clone(),
            line.quantity.to_string(),
            line.unit_price.to_string(),
            line.amount.to_string(),
        ]);
    }
    writeln!(out, "{}", finish(builder, 3))?;
    writeln!(out, "{}", totals(&invoice.totals, invoice.show_gst))?;

    writeln!(out, "Payment Status: {}", invoice.payment_status)?;
    if let Some(txn) = &invoice.transaction_id {
        writeln!(out, "Transaction ID: {}", txn)?;
    }

    if let Some(delivery) = &invoice.delivery {
        writeln!(out)?;
        writeln!(out, "Delivery Details:")?;
        writeln!(out, "  DRIVER NAME: {}", delivery.driver_name)?;
        writeln!(out, "  MOBILE: {}", delivery.driver_mobile)?;
        writeln!(out, "  VEHICLE: {}", delivery.vehicle_number)?;
        writeln!(out, "  Delivery Status: {}", delivery.status)?;
    }

    writeln!(out)?;
    writeln!(out, "Terms & Conditions:")?;
    for (idx, term) in invoice.terms.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, term)?;
    }
    writeln!(out)?;
    writeln!(out, "Thank you for your business!")?;
    writeln!(out, "{} | {} | {}", seller.name, seller.phone, seller.email)?;

    Ok(out)
}
