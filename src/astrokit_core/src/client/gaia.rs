use anyhow::Result;
use tracing::debug;

use super::error::LookupError;
use super::tap::TapTable;
use super::{AstroWebClient, AstrometryCatalog};
use crate::constants::{CONE_SEARCH_RADIUS_DEG, GAIA_SOURCE_TABLE};
use crate::coords::SkyPosition;

/// ADQL cone search returning the RUWE of the first Gaia DR3 source around `position`.
pub fn ruwe_query(position: &SkyPosition) -> String {
    format!(
        "SELECT TOP 1 ruwe FROM {} WHERE 1=CONTAINS(POINT('ICRS', {}, {}), CIRCLE('ICRS', gaia_source.ra, gaia_source.dec, {}))",
        GAIA_SOURCE_TABLE, position.ra_deg, position.dec_deg, CONE_SEARCH_RADIUS_DEG
    )
}

pub fn ruwe_from_table(table: &TapTable) -> Result<f64> {
    match table.first_f64("ruwe")? {
        Some(ruwe) => Ok(ruwe),
        None => Err(LookupError::RuweNotFound.into()),
    }
}

impl AstroWebClient {
    /// Get the RUWE of the Gaia DR3 source matching `position`
    ///
    /// The match is a cone search of [`CONE_SEARCH_RADIUS_DEG`] around the position.
    #[cfg(not(tarpaulin_include))]
    pub async fn get_ruwe(&self, position: &SkyPosition) -> Result<f64> {
        let table = self.tap_query(&self.gaia_url, &ruwe_query(position)).await?;
        let ruwe = ruwe_from_table(&table)?;
        debug!(ruwe, "Gaia DR3 source matched");
        Ok(ruwe)
    }
}

impl AstrometryCatalog for AstroWebClient {
    async fn ruwe_at(&self, position: &SkyPosition) -> Result<f64> {
        self.get_ruwe(position).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruwe_query() {
        let query = ruwe_query(&SkyPosition::new(101.5, -16.25));
        assert_eq!(
            query,
            "SELECT TOP 1 ruwe FROM gaiadr3.gaia_source WHERE 1=CONTAINS(POINT('ICRS', 101.5, -16.25), CIRCLE('ICRS', gaia_source.ra, gaia_source.dec, 0.001))"
        );
    }

    #[test]
    fn test_ruwe_from_table() {
        let table =
            TapTable::parse(r#"{"metadata":[{"name":"ruwe"}],"data":[[0.98]]}"#).unwrap();
        assert_eq!(ruwe_from_table(&table).unwrap(), 0.98);
    }

    #[test]
    fn test_no_source_in_cone() {
        let table = TapTable::parse(r#"{"metadata":[{"name":"ruwe"}],"data":[]}"#).unwrap();
        let err = ruwe_from_table(&table).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LookupError>(),
            Some(&LookupError::RuweNotFound)
        );
    }
}
