pub mod client;
pub mod constants;
pub mod coords;
pub mod qr;
pub mod types;

use anyhow::Result;

#[cfg(not(tarpaulin_include))]
pub fn get_client() -> Result<client::AstroWebClient> {
    client::AstroWebClient::new()
}
