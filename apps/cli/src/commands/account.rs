use anyhow::Result;
use tracing::info;

use cemention_client::Storefront;
use cemention_core::{Credentials, Registration};

use super::Context;
use crate::cli::{LoginArgs, RegisterArgs};

pub(crate) async fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let form = Registration {
        name: args.name,
        email: args.email,
        password: args.password,
        phone: args.phone,
        role: args.role,
        business_name: args.business_name,
        is_gst_registered: args.gst_number.is_some(),
        gst_number: args.gst_number,
        gst_registered_name: args.gst_name,
    };

    let shop = Storefront::register(ctx.api()?, &form).await?;
    ctx.remember(shop.session())?;

    println!("Welcome, {}! Registered as {}.", shop.user().name, shop.user().role);
    Ok(())
}

pub(crate) async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let credentials = Credentials {
        email: args.email,
        password: args.password,
    };

    let shop = Storefront::login(ctx.api()?, &credentials).await?;
    ctx.remember(shop.session())?;

    info!(user_id = %shop.user().id, "Logged in");
    println!("Logged in as {} ({})", shop.user().name, shop.user().role);
    Ok(())
}

pub(crate) fn logout(ctx: &Context) -> Result<()> {
    ctx.tokens.clear()?;
    println!("Logged out");
    Ok(())
}

pub(crate) async fn whoami(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront().await?;
    let user = shop.user();

    println!("Name:     {}", user.name);
    println!("Email:    {}", user.email);
    println!("Phone:    {}", user.phone);
    println!("Role:     {}", user.role.label());
    if let Some(business) = &user.business_name {
        println!("Business: {}", business);
    }
    match (&user.gst_number, user.is_gst_registered) {
        (Some(gst), true) => println!("GSTIN:    {}", gst),
        _ => println!("GSTIN:    not registered"),
    }
    Ok(())
}
