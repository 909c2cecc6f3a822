use anyhow::Result;

use cemention_core::RequestOrderDraft;

use super::Context;
use crate::cli::RequestOrderCommand;
use crate::render;

pub(crate) async fn run(command: RequestOrderCommand, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;

    match command {
        RequestOrderCommand::Create(args) => {
            let draft = RequestOrderDraft {
                brand: args.brand,
                quantity: args.quantity,
                delivery_location: args.location,
                phone: args.phone,
                preferred_date: args.date,
            };
            let created = shop.request_order(&draft).await?;
            println!(
                "Request submitted: {} bags of {} for {} ({})",
                created.quantity, created.brand, created.preferred_date, created.id
            );
        }
        RequestOrderCommand::List => {
            let requests = shop.request_orders().await?;
            if requests.is_empty() {
                println!("No request orders yet");
            } else {
                println!("{}", render::request_orders(&requests));
            }
        }
    }
    Ok(())
}
