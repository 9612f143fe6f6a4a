use anyhow::Result;
use astrokit_core::types::StarName;

use super::report_not_found;
use crate::{cli::RuweArgs, services::StarService};

pub fn ruwe_message(name: &StarName, ruwe: f64) -> String {
    format!("The RUWE for {} is: {:.2}", name, ruwe)
}

#[cfg(not(tarpaulin_include))]
pub async fn handle(args: RuweArgs) -> Result<()> {
    let client = astrokit_core::get_client()?;
    let service = StarService::new(&client, &client);

    match service.ruwe_for(&args.star).await {
        Ok(ruwe) => println!("{}", ruwe_message(&args.star, ruwe)),
        Err(e) => report_not_found(e)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruwe_message() {
        let name = StarName::new("Sirius").unwrap();
        assert_eq!(ruwe_message(&name, 1.23456), "The RUWE for Sirius is: 1.23");
        assert_eq!(ruwe_message(&name, 0.9), "The RUWE for Sirius is: 0.90");
    }
}
