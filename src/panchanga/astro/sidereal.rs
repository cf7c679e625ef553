//! Nirayana (sidereal) longitudes under the Lahiri ayanamsa.

use super::time::centuries;
use super::{moon, norm360, sun};

/// Lahiri ayanamsa at J2000.0 (Spica at 0° Libra), degrees.
const LAHIRI_J2000_DEG: f64 = 23.853;

/// IAU 2006 general precession in ecliptic longitude, arcseconds.
fn general_precession_arcsec(t: f64) -> f64 {
    5028.796_195 * t + 1.105_434_8 * t * t + 0.000_079_64 * t * t * t
        - 0.000_023_857 * t * t * t * t
}

/// Lahiri ayanamsa at `jd`, degrees.
pub fn ayanamsa(jd: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_arcsec(centuries(jd)) / 3600.0
}

pub fn solar_longitude(jd: f64) -> f64 {
    norm360(sun::apparent_longitude(jd) - ayanamsa(jd))
}

pub fn lunar_longitude(jd: f64) -> f64 {
    norm360(moon::apparent_longitude(jd) - ayanamsa(jd))
}
