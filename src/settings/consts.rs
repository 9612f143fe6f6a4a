pub const APP_NAME: &str = "astrokit";
pub const APP_ORGANIZATION: &str = "astrokit";
pub const APP_QUALIFIER: &str = "org";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_FILE: &str = "astrokit.log";
