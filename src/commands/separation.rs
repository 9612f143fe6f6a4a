use anyhow::Result;
use astrokit_core::{coords::Separation, types::StarName};

use super::report_not_found;
use crate::{cli::SeparationArgs, services::StarService};

pub fn separation_message(first: &StarName, second: &StarName, separation: &Separation) -> String {
    format!(
        "The angular separation between {} and {} is:\n{}",
        first, second, separation
    )
}

#[cfg(not(tarpaulin_include))]
pub async fn handle(args: SeparationArgs) -> Result<()> {
    let client = astrokit_core::get_client()?;
    let service = StarService::new(&client, &client);

    match service.separation_between(&args.first, &args.second).await {
        Ok(separation) => println!(
            "{}",
            separation_message(&args.first, &args.second, &separation)
        ),
        Err(e) => report_not_found(e)?,
    }
    Ok(())
}
