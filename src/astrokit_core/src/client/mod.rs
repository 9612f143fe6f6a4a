pub mod error;
pub mod gaia;
pub mod simbad;
pub mod tap;

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::debug;

use self::tap::TapTable;
use crate::constants::{GAIA_TAP_URL, REQUEST_TIMEOUT_SECS, SIMBAD_TAP_URL, USER_AGENT};
use crate::coords::SkyPosition;
use crate::types::StarName;

/// Turns a star name into an ICRS position.
#[allow(async_fn_in_trait)]
pub trait NameResolver {
    async fn resolve(&self, name: &StarName) -> Result<SkyPosition>;
}

/// Answers astrometric quality questions about a position on the sky.
#[allow(async_fn_in_trait)]
pub trait AstrometryCatalog {
    async fn ruwe_at(&self, position: &SkyPosition) -> Result<f64>;
}

pub struct AstroWebClient {
    /// The client used to make requests to the TAP services.
    client: reqwest::Client,
    /// Synchronous TAP endpoint of SIMBAD, used for name resolution.
    simbad_url: String,
    /// Synchronous TAP endpoint of the Gaia archive, used for cone searches.
    gaia_url: String,
}

impl AstroWebClient {
    pub fn new() -> Result<AstroWebClient> {
        Self::with_endpoints(SIMBAD_TAP_URL, GAIA_TAP_URL)
    }

    pub fn with_endpoints(simbad_url: &str, gaia_url: &str) -> Result<AstroWebClient> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(AstroWebClient {
            client,
            simbad_url: simbad_url.to_string(),
            gaia_url: gaia_url.to_string(),
        })
    }

    pub fn simbad_url(&self) -> &str {
        &self.simbad_url
    }

    pub fn gaia_url(&self) -> &str {
        &self.gaia_url
    }

    /// Run an ADQL query against the synchronous TAP endpoint at `url`.
    ///
    /// # Arguments
    ///
    /// * `url` - The `/sync` endpoint of the TAP service.
    /// * `adql` - The query text.
    ///
    /// # Returns
    ///
    /// The result table, which may hold zero rows.
    #[cfg(not(tarpaulin_include))]
    async fn tap_query(&self, url: &str, adql: &str) -> Result<TapTable> {
        debug!(%url, %adql, "Running TAP query");

        let params = [
            ("REQUEST", "doQuery"),
            ("LANG", "ADQL"),
            ("FORMAT", "json"),
            ("QUERY", adql),
        ];

        let response = self
            .client
            .post(url)
            .form(&params)
            .send()
            .await
            .with_context(|| format!("Failed to reach TAP service at {}", url))?;

        let status_code = response.status();

        let body = response.text().await?;

        if status_code != 200 {
            bail!("TAP query failed ({}): {}", status_code, body);
        }

        let table = TapTable::parse(&body)?;
        debug!(rows = table.data.len(), "TAP query answered");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let client = AstroWebClient::new().unwrap();
        assert_eq!(client.simbad_url(), SIMBAD_TAP_URL);
        assert_eq!(client.gaia_url(), GAIA_TAP_URL);
    }

    #[test]
    fn test_custom_endpoints() {
        let client =
            AstroWebClient::with_endpoints("http://localhost:1/sim", "http://localhost:2/gaia")
                .unwrap();
        assert_eq!(client.simbad_url(), "http://localhost:1/sim");
        assert_eq!(client.gaia_url(), "http://localhost:2/gaia");
    }
}
