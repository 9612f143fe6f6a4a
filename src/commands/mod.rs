use anyhow::Result;
use astrokit_core::client::error::LookupError;

pub mod qr;
pub mod ruwe;
pub mod separation;

/// Print a catalog miss as a plain message, hand any other error back.
fn report_not_found(err: anyhow::Error) -> Result<()> {
    match err.downcast_ref::<LookupError>() {
        Some(not_found) => {
            println!("{}", not_found);
            Ok(())
        }
        None => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_not_found_is_reported() {
        assert!(report_not_found(LookupError::RuweNotFound.into()).is_ok());
        assert!(report_not_found(LookupError::StarNotFound("Vulcan".into()).into()).is_ok());
    }

    #[test]
    fn test_other_errors_propagate() {
        let err = report_not_found(anyhow!("TAP query failed (503)")).unwrap_err();
        assert_eq!(err.to_string(), "TAP query failed (503)");
    }
}
