pub mod cli;
pub mod commands;
pub mod services;
pub mod settings;

use anyhow::Result;

use cli::{Cli, Commands};

#[cfg(not(tarpaulin_include))]
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ruwe(args) => commands::ruwe::handle(args).await,
        Commands::Separation(args) => commands::separation::handle(args).await,
        Commands::Qr(args) => commands::qr::handle(args).await,
    }
}
