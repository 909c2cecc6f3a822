//! Subcommand handlers.
//!
//! Each handler takes parsed arguments plus the [`Context`] and talks to the
//! backend through a [`Storefront`].

use std::path::PathBuf;

use anyhow::{anyhow, Context as _, Result};

use cemention_client::{ApiClient, ClientConfig, ClientError, Session, Storefront, TokenStore};

use crate::cli::Commands;

mod account;
mod admin;
mod cart;
mod catalog;
mod checkout;
mod config;
mod orders;
mod request_orders;

/// Loaded configuration and session storage shared by every command.
pub(crate) struct Context {
    pub config: ClientConfig,
    pub config_path: Option<PathBuf>,
    pub tokens: TokenStore,
}

impl Context {
    pub fn new(config: ClientConfig, config_path: Option<PathBuf>) -> Result<Self> {
        let token_path = config
            .token_path()
            .ok_or_else(|| anyhow!("No data directory found; set session.token_path in client.toml"))?;

        Ok(Context {
            tokens: TokenStore::new(token_path),
            config,
            config_path,
        })
    }

    pub fn api(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config).context("Failed to build HTTP client")
    }

    /// Resumes the saved session, refreshing the user from the backend.
    pub async fn storefront(&self) -> Result<Storefront> {
        let token = self.tokens.load()?.ok_or(ClientError::NotLoggedIn)?;
        Ok(Storefront::resume(self.api()?, token).await?)
    }

    /// Persists a freshly started session.
    pub fn remember(&self, session: &Session) -> Result<()> {
        self.tokens
            .save(&session.token)
            .with_context(|| format!("Failed to save session to {}", self.tokens.path().display()))
    }
}

pub(crate) async fn run(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Register(args) => account::register(args, ctx).await,
        Commands::Login(args) => account::login(args, ctx).await,
        Commands::Logout => account::logout(ctx),
        Commands::Whoami => account::whoami(ctx).await,
        Commands::Products => catalog::run(ctx).await,
        Commands::Cart(command) => cart::run(command, ctx).await,
        Commands::Checkout(args) => checkout::run(args, ctx).await,
        Commands::Orders => orders::list(ctx).await,
        Commands::Invoice(args) => orders::invoice(args, ctx).await,
        Commands::Notify(args) => orders::notify(args, ctx).await,
        Commands::RequestOrder(command) => request_orders::run(command, ctx).await,
        Commands::Admin(command) => admin::run(command, ctx).await,
        Commands::Config(command) => config::run(command, ctx),
    }
}
