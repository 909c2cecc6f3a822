//! Command-line surface.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use cemention_core::notification::OrderEvent;
use cemention_core::{Grade, OrderStatus, PaymentMethod, Role};

#[derive(Debug, Parser)]
#[command(name = "cemention", about = "Cemention cement storefront", version, long_about = None)]
pub(crate) struct Cli {
    /// Path to client.toml
    #[arg(long, global = true, env = "CEMENTION_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Create an account and log in
    Register(RegisterArgs),
    /// Log in and save the session token
    Login(LoginArgs),
    /// Forget the saved session token
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List products at your prices
    Products,
    /// Show or change the cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Place an order for the cart
    Checkout(CheckoutArgs),
    /// List orders
    Orders,
    /// Print the invoice for an order
    Invoice(InvoiceArgs),
    /// Compose the WhatsApp message for an order event
    Notify(NotifyArgs),
    /// Bulk order inquiries
    #[command(subcommand)]
    RequestOrder(RequestOrderCommand),
    /// Admin tools
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Client configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

// =============================================================================
// Account
// =============================================================================

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, env = "CEMENTION_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(long)]
    pub phone: String,

    /// dealer, retailer or customer
    #[arg(long, default_value = "customer")]
    pub role: Role,

    #[arg(long)]
    pub business_name: Option<String>,

    /// GSTIN; marks the account GST-registered
    #[arg(long)]
    pub gst_number: Option<String>,

    /// Name the GSTIN is registered to
    #[arg(long, requires = "gst_number")]
    pub gst_name: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "CEMENTION_PASSWORD", hide_env_values = true)]
    pub password: String,
}

// =============================================================================
// Cart & Checkout
// =============================================================================

#[derive(Debug, Subcommand)]
pub(crate) enum CartCommand {
    /// Show cart lines and subtotal
    Show,
    /// Add bags of a product (minimum 100)
    Add { product_id: String, quantity: i64 },
    /// Set the bag count of a line, re-pricing it
    Set { product_id: String, quantity: i64 },
    /// Add 10 bags to a line
    Inc { product_id: String },
    /// Remove 10 bags from a line
    Dec { product_id: String },
    /// Remove a line
    Remove { product_id: String },
    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// cod, upi, netbanking or rtgs
    #[arg(long, default_value = "cod")]
    pub payment: PaymentMethod,

    /// Show totals without placing the order
    #[arg(long)]
    pub preview: bool,

    #[arg(long, required_unless_present = "preview")]
    pub street: Option<String>,

    #[arg(long, required_unless_present = "preview")]
    pub city: Option<String>,

    #[arg(long, required_unless_present = "preview")]
    pub state: Option<String>,

    #[arg(long, required_unless_present = "preview")]
    pub pincode: Option<String>,

    /// UPI/bank reference for prepaid orders
    #[arg(long)]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct InvoiceArgs {
    /// Order id or its 8-character reference
    pub order_id: String,
}

#[derive(Debug, Args)]
pub(crate) struct NotifyArgs {
    pub order_id: String,

    /// order_placed, payment_received, payment_pending, driver_assigned,
    /// out_for_delivery or delivered
    pub event: OrderEvent,
}

// =============================================================================
// Request Orders
// =============================================================================

#[derive(Debug, Subcommand)]
pub(crate) enum RequestOrderCommand {
    /// Submit a bulk inquiry
    Create(RequestOrderArgs),
    /// List your inquiries
    List,
}

#[derive(Debug, Args)]
pub(crate) struct RequestOrderArgs {
    #[arg(long)]
    pub brand: String,

    /// Bags, at least 100
    #[arg(long)]
    pub quantity: i64,

    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub phone: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date: NaiveDate,
}

// =============================================================================
// Admin
// =============================================================================

#[derive(Debug, Subcommand)]
pub(crate) enum AdminCommand {
    /// List all users
    Users,
    /// Change a user's role
    SetRole { user_id: String, role: Role },
    /// Add a product
    ProductAdd(ProductArgs),
    /// Change fields of a product
    ProductUpdate(ProductUpdateArgs),
    /// Delete a product
    ProductDelete { product_id: String },
    /// Set an order's status
    OrderStatus { order_id: String, status: OrderStatus },
    /// Set a request order's status
    RequestStatus { request_id: String, status: OrderStatus },
}

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    #[arg(long)]
    pub brand: String,

    /// OPC, PPC or PSC
    #[arg(long)]
    pub grade: Grade,

    /// Dealer price per bag in rupees
    #[arg(long)]
    pub price: Decimal,

    #[arg(long)]
    pub image: String,

    #[arg(long, default_value_t = 100)]
    pub min_quantity: i64,

    #[arg(long, default_value_t = 0)]
    pub stock: i64,
}

#[derive(Debug, Args)]
pub(crate) struct ProductUpdateArgs {
    pub product_id: String,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub grade: Option<Grade>,

    #[arg(long)]
    pub price: Option<Decimal>,

    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub min_quantity: Option<i64>,

    #[arg(long)]
    pub stock: Option<i64>,
}

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Subcommand)]
pub(crate) enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write the effective configuration to client.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_add() {
        let cli = Cli::try_parse_from(["cemention", "cart", "add", "p-1", "120"]).unwrap();
        match cli.command {
            Commands::Cart(CartCommand::Add { product_id, quantity }) => {
                assert_eq!(product_id, "p-1");
                assert_eq!(quantity, 120);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_checkout_preview_needs_no_address() {
        let cli = Cli::try_parse_from(["cemention", "checkout", "--preview", "--payment", "upi"]).unwrap();
        match cli.command {
            Commands::Checkout(args) => {
                assert!(args.preview);
                assert_eq!(args.payment, PaymentMethod::Upi);
                assert!(args.street.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["cemention", "checkout"]).is_err());
    }

    #[test]
    fn test_parse_admin_status() {
        let cli = Cli::try_parse_from(["cemention", "admin", "order-status", "abc", "approved"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Admin(AdminCommand::OrderStatus { status: OrderStatus::Approved, .. })
        ));

        assert!(Cli::try_parse_from(["cemention", "admin", "set-role", "u1", "wholesaler"]).is_err());
    }

    #[test]
    fn test_parse_notify_event() {
        let cli = Cli::try_parse_from(["cemention", "notify", "abc", "out-for-delivery"]).unwrap();
        match cli.command {
            Commands::Notify(args) => assert_eq!(args.event, OrderEvent::OutForDelivery),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
