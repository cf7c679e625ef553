//! Solar position from the low-accuracy theory (geometric mean elements plus
//! equation of centre), accurate to about 0.01°.

use super::norm360;
use super::time::centuries;

/// Longitude of the Moon's ascending node, degrees. Drives the short
/// nutation and aberration corrections.
pub(crate) fn ascending_node(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees, tropical.
pub fn apparent_longitude(jd: f64) -> f64 {
    let t = centuries(jd);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = ascending_node(t).to_radians();
    norm360(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// True obliquity of the ecliptic, degrees.
pub fn obliquity(jd: f64) -> f64 {
    let t = centuries(jd);
    let eps0 = 23.439_291_111 - 0.013_004_167 * t - 0.000_000_163_9 * t * t
        + 0.000_000_503_6 * t * t * t;
    eps0 + 0.002_56 * ascending_node(t).to_radians().cos()
}

/// Right ascension and declination, degrees, of a point on the ecliptic.
pub fn ecliptic_to_equatorial(longitude_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let lambda = longitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();
    (norm360(ra.to_degrees()), dec.to_degrees())
}
