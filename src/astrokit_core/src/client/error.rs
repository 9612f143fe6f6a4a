use thiserror::Error;

/// A lookup that reached the catalog but found nothing to return.
#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("Star '{0}' not found in SIMBAD.")]
    StarNotFound(String),
    #[error("RUWE not found for the specified coordinates.")]
    RuweNotFound,
}
