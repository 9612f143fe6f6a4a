use anyhow::Result;
use tracing::debug;

use super::error::LookupError;
use super::tap::{adql_string_literal, TapTable};
use super::{AstroWebClient, NameResolver};
use crate::coords::SkyPosition;
use crate::types::StarName;

/// ADQL resolving `name` through SIMBAD's identifier table.
///
/// SIMBAD normalizes `ident.id` comparisons, so "sirius", "Sirius" and
/// "NAME Sirius" all reach the same object.
pub fn resolve_query(name: &StarName) -> String {
    format!(
        "SELECT TOP 1 basic.ra, basic.dec FROM basic JOIN ident ON ident.oidref = basic.oid WHERE ident.id = {}",
        adql_string_literal(name.as_str())
    )
}

/// Extract the ICRS position from a SIMBAD answer, or report the star as unknown.
pub fn position_from_table(name: &StarName, table: &TapTable) -> Result<SkyPosition> {
    if table.is_empty() {
        return Err(LookupError::StarNotFound(name.to_string()).into());
    }
    match (table.first_f64("ra")?, table.first_f64("dec")?) {
        (Some(ra), Some(dec)) => Ok(SkyPosition::new(ra, dec)),
        // Objects without astrometry (e.g. some clusters) have null coordinates.
        _ => Err(LookupError::StarNotFound(name.to_string()).into()),
    }
}

impl AstroWebClient {
    /// Resolve a star name into its ICRS position with SIMBAD.
    ///
    /// # Arguments
    ///
    /// * `name` - Any identifier SIMBAD knows (e.g: "Sirius", "HD 48915")
    ///
    /// # Returns
    ///
    /// The position, or a [`LookupError::StarNotFound`] when SIMBAD has no match.
    #[cfg(not(tarpaulin_include))]
    pub async fn resolve_star(&self, name: &StarName) -> Result<SkyPosition> {
        let table = self.tap_query(&self.simbad_url, &resolve_query(name)).await?;
        let position = position_from_table(name, &table)?;
        debug!(%name, ra = position.ra_deg, dec = position.dec_deg, "Resolved star");
        Ok(position)
    }
}

impl NameResolver for AstroWebClient {
    async fn resolve(&self, name: &StarName) -> Result<SkyPosition> {
        self.resolve_star(name).await
    }
}
