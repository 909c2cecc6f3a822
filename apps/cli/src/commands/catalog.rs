use anyhow::Result;

use super::Context;
use crate::render;

pub(crate) async fn run(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;
    let products = shop.priced_catalog().await?;

    if products.is_empty() {
        println!("No products available");
        return Ok(());
    }

    println!("Prices for {} accounts", shop.user().role.label());
    println!("{}", render::catalog(&products));
    Ok(())
}
