use anyhow::{bail, Result};

use cemention_client::ClientConfig;

use super::Context;
use crate::cli::ConfigCommand;

pub(crate) fn run(command: ConfigCommand, ctx: &Context) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let path = ctx.config_path.clone().or_else(ClientConfig::default_config_path);
            if let Some(path) = path {
                println!("# {}", path.display());
            }
            println!("# session token: {}", ctx.tokens.path().display());
            print!("{}", toml::to_string_pretty(&ctx.config)?);
        }
        ConfigCommand::Init { force } => {
            let path = ctx.config_path.clone().or_else(ClientConfig::default_config_path);
            if let Some(existing) = path.as_ref().filter(|p| p.exists()) {
                if !force {
                    bail!("{} already exists (use --force to overwrite)", existing.display());
                }
            }
            let written = ctx.config.save(path)?;
            println!("Wrote {}", written.display());
        }
    }
    Ok(())
}
