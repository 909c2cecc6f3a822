use anyhow::Result;

use cemention_core::DeliveryAddress;

use super::Context;
use crate::cli::CheckoutArgs;
use crate::render;

pub(crate) async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;

    if args.preview {
        let preview = shop.checkout_preview(args.payment).await?;
        if preview.cart.is_empty() {
            println!("Your cart is empty");
            return Ok(());
        }

        println!("{}", render::cart(&preview.cart, &preview.summary));
        println!("Payment: {}", preview.payment_method.label());
        if !preview.payment_method.is_offered() {
            println!("(not available at checkout)");
        }
        println!("{}", render::totals(&preview.totals, shop.pricing().is_gst_registered));
        return Ok(());
    }

    let address = DeliveryAddress {
        street: args.street.unwrap_or_default(),
        city: args.city.unwrap_or_default(),
        state: args.state.unwrap_or_default(),
        pincode: args.pincode.unwrap_or_default(),
    };

    let order = shop
        .place_order(address, args.payment, args.transaction_id)
        .await?;

    println!("Order placed: {} ({})", order.reference(), order.id);
    println!("Total: {}", order.total_amount);
    println!("Payment: {}", order.payment_method.label());
    println!("Deliver to: {}", order.delivery_address);
    Ok(())
}
