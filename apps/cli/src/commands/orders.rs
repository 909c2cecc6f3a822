use anyhow::Result;

use super::Context;
use crate::cli::{InvoiceArgs, NotifyArgs};
use crate::render;

pub(crate) async fn list(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;
    let orders = shop.orders().await?;

    if orders.is_empty() {
        println!("No orders yet");
        return Ok(());
    }
    println!("{}", render::orders(&orders));
    Ok(())
}

pub(crate) async fn invoice(args: InvoiceArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;
    let invoice = shop.invoice(&args.order_id, &ctx.config.company).await?;

    print!("{}", render::invoice(&invoice)?);
    Ok(())
}

pub(crate) async fn notify(args: NotifyArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;
    let note = shop
        .notification(&args.order_id, args.event, &ctx.config.company)
        .await?;

    println!("{}", note.message);
    println!();
    println!("Send via WhatsApp: {}", note.link);
    Ok(())
}
