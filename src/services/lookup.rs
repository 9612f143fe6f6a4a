use anyhow::Result;
use tracing::{debug, info};

use astrokit_core::{
    client::{AstrometryCatalog, NameResolver},
    coords::Separation,
    types::StarName,
};

/// Star lookups built on a name resolver and an astrometric catalog.
pub struct StarService<'a, R: NameResolver, C: AstrometryCatalog> {
    resolver: &'a R,
    catalog: &'a C,
}

impl<'a, R: NameResolver, C: AstrometryCatalog> StarService<'a, R, C> {
    pub fn new(resolver: &'a R, catalog: &'a C) -> Self {
        Self { resolver, catalog }
    }

    /// RUWE of the Gaia DR3 source at the resolved position of `name`.
    pub async fn ruwe_for(&self, name: &StarName) -> Result<f64> {
        info!("Resolving {} ...", name);
        let position = self.resolver.resolve(name).await?;
        debug!(ra = position.ra_deg, dec = position.dec_deg, "Querying Gaia DR3");
        self.catalog.ruwe_at(&position).await
    }

    /// Great-circle separation between the resolved positions of two stars.
    pub async fn separation_between(
        &self,
        first: &StarName,
        second: &StarName,
    ) -> Result<Separation> {
        info!("Resolving {} and {} ...", first, second);
        let a = self.resolver.resolve(first).await?;
        let b = self.resolver.resolve(second).await?;
        let degrees = a.angular_separation(&b);
        debug!(degrees, "Computed separation");
        Ok(Separation::from_degrees(degrees))
    }
}
