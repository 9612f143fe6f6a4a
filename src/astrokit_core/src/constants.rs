pub const SIMBAD_TAP_URL: &str = "https://simbad.cds.unistra.fr/simbad/sim-tap/sync";
pub const GAIA_TAP_URL: &str = "https://gea.esac.esa.int/tap-server/tap/sync";
pub const GAIA_SOURCE_TABLE: &str = "gaiadr3.gaia_source";
/// Radius of the Gaia cone search around the resolved position, in degrees.
pub const CONE_SEARCH_RADIUS_DEG: f64 = 0.001;
/// Per-request timeout for catalog queries, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 500;
pub const USER_AGENT: &str = concat!("astrokit/", env!("CARGO_PKG_VERSION"));
