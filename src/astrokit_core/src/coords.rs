//! ICRS positions and great-circle separations.

use std::fmt;

/// A position on the sky in the ICRS frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    /// Right ascension, in degrees.
    pub ra_deg: f64,
    /// Declination, in degrees.
    pub dec_deg: f64,
}

impl SkyPosition {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Great-circle distance to `other`, in degrees.
    ///
    /// Uses the Vincenty formula, which stays accurate for both tiny and
    /// near-antipodal separations. Identical positions yield exactly `0.0`.
    pub fn angular_separation(&self, other: &Self) -> f64 {
        let (sin_dec1, cos_dec1) = self.dec_deg.to_radians().sin_cos();
        let (sin_dec2, cos_dec2) = other.dec_deg.to_radians().sin_cos();
        let delta_ra = (other.ra_deg - self.ra_deg).to_radians();

        vincenty_angular_separation(sin_dec1, cos_dec1, sin_dec2, cos_dec2, delta_ra).to_degrees()
    }
}

#[inline]
fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = delta_lon.sin_cos();

    let num = ((cos_lat2 * sin_delta_lon).powi(2)
        + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2))
    .sqrt();
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    num.atan2(den)
}

/// An angle split into whole degrees, whole arcminutes and fractional arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    pub degrees: u32,
    pub arcminutes: u32,
    pub arcseconds: f64,
}

impl Separation {
    /// Decompose a non-negative angle given in decimal degrees.
    pub fn from_degrees(separation: f64) -> Self {
        let degrees = separation.trunc();
        let arcminutes = ((separation - degrees) * 60.0).trunc();
        let arcseconds = (separation - degrees - arcminutes / 60.0) * 3600.0;
        Self {
            degrees: degrees as u32,
            arcminutes: arcminutes as u32,
            arcseconds,
        }
    }

    pub fn to_degrees(&self) -> f64 {
        self.degrees as f64 + self.arcminutes as f64 / 60.0 + self.arcseconds / 3600.0
    }
}

impl fmt::Display for Separation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}' {:.2}''",
            self.degrees, self.arcminutes, self.arcseconds
        )
    }
}
