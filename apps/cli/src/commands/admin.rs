use anyhow::Result;

use cemention_core::{Money, ProductDraft};

use super::Context;
use crate::cli::{AdminCommand, ProductArgs, ProductUpdateArgs};
use crate::render;

pub(crate) async fn run(command: AdminCommand, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;

    match command {
        AdminCommand::Users => {
            let users = shop.users().await?;
            println!("{}", render::users(&users));
        }
        AdminCommand::SetRole { user_id, role } => {
            shop.set_user_role(&user_id, role).await?;
            println!("User {} is now {}", user_id, role);
        }
        AdminCommand::ProductAdd(args) => {
            let product = shop.create_product(&new_product(args)).await?;
            println!("Added {} ({})", product.display_name(), product.id);
        }
        AdminCommand::ProductUpdate(args) => {
            let current = shop.api().products().get(&args.product_id).await?;
            let draft = apply_update(current.to_draft(), &args);
            let product = shop.update_product(&args.product_id, &draft).await?;
            println!(
                "Updated {} ({}), base price {}",
                product.display_name(),
                product.id,
                product.base_price
            );
        }
        AdminCommand::ProductDelete { product_id } => {
            shop.delete_product(&product_id).await?;
            println!("Deleted product {}", product_id);
        }
        AdminCommand::OrderStatus { order_id, status } => {
            shop.set_order_status(&order_id, status).await?;
            println!("Order {} marked {}", order_id, status);
        }
        AdminCommand::RequestStatus { request_id, status } => {
            shop.set_request_status(&request_id, status).await?;
            println!("Request order {} marked {}", request_id, status);
        }
    }
    Ok(())
}

fn new_product(args: ProductArgs) -> ProductDraft {
    ProductDraft {
        brand: args.brand,
        grade: args.grade,
        base_price: Money::from_decimal(args.price),
        image: args.image,
        min_quantity: args.min_quantity,
        stock: args.stock,
    }
}

/// Overlays the flags that were given onto the product's current fields.
fn apply_update(mut draft: ProductDraft, args: &ProductUpdateArgs) -> ProductDraft {
    if let Some(brand) = &args.brand {
        draft.brand = brand.clone();
    }
    if let Some(grade) = args.grade {
        draft.grade = grade;
    }
    if let Some(price) = args.price {
        draft.base_price = Money::from_decimal(price);
    }
    if let Some(image) = &args.image {
        draft.image = image.clone();
    }
    if let Some(min_quantity) = args.min_quantity {
        draft.min_quantity = min_quantity;
    }
    if let Some(stock) = args.stock {
        draft.stock = stock;
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use cemention_core::Grade;
    use rust_decimal::Decimal;

    fn current() -> ProductDraft {
        ProductDraft {
            brand: "UltraTech".to_string(),
            grade: Grade::Opc,
            base_price: Money::from_rupees(300),
            image: "https://img.example/u.png".to_string(),
            min_quantity: 100,
            stock: 1000,
        }
    }

    #[test]
    fn test_apply_update_only_touches_given_fields() {
        let args = ProductUpdateArgs {
            product_id: "p1".to_string(),
            brand: None,
            grade: None,
            price: Some(Decimal::new(3205, 1)),
            image: None,
            min_quantity: None,
            stock: Some(750),
        };

        let draft = apply_update(current(), &args);
        assert_eq!(draft.base_price, Money::from_paise(32_050));
        assert_eq!(draft.stock, 750);
        assert_eq!(draft.brand, "UltraTech");
        assert_eq!(draft.min_quantity, 100);
    }
}
