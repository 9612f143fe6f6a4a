use anyhow::Result;
use clap::Parser;

use astrokit::settings::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    let cli = astrokit::cli::Cli::parse();
    astrokit::run(cli).await?;
    Ok(())
}
