use anyhow::Result;

use cemention_core::cart::{cart_summary, StepDirection};
use cemention_core::Cart;

use super::Context;
use crate::cli::CartCommand;
use crate::render;

pub(crate) async fn run(command: CartCommand, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;

    let cart = match command {
        CartCommand::Show => shop.cart().await?,
        CartCommand::Add {
            product_id,
            quantity,
        } => shop.add_to_cart(&product_id, quantity).await?,
        CartCommand::Set {
            product_id,
            quantity,
        } => shop.set_quantity(&product_id, quantity).await?,
        CartCommand::Inc { product_id } => shop.step_line(&product_id, StepDirection::Increase).await?,
        CartCommand::Dec { product_id } => shop.step_line(&product_id, StepDirection::Decrease).await?,
        CartCommand::Remove { product_id } => {
            shop.remove_line(&product_id).await?;
            shop.cart().await?
        }
        CartCommand::Clear => {
            shop.clear_cart().await?;
            println!("Cart cleared");
            return Ok(());
        }
    };

    print_cart(&cart);
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }
    println!("{}", render::cart(cart, &cart_summary(&cart.items)));
}
