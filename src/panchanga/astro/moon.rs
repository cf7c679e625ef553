//! Lunar longitude from the principal periodic terms of the ELP-2000/82
//! based series (Meeus, ch. 47). Terms are truncated below 0.0003°, which
//! keeps the error within about 10".

use super::norm360;
use super::sun::ascending_node;
use super::time::centuries;

/// Multiples of (D, M, M', F) and the longitude coefficient in 1e-6 degrees.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 59] = [
    (0, 0, 1, 0, 6_288_774),
    (2, 0, -1, 0, 1_274_027),
    (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618),
    (0, 1, 0, 0, -185_116),
    (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793),
    (2, -1, -1, 0, 57_066),
    (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758),
    (0, 1, -1, 0, -40_923),
    (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383),
    (2, 0, 0, -2, 15_327),
    (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980),
    (4, 0, -1, 0, 10_675),
    (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548),
    (2, 1, -1, 0, -7_888),
    (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163),
    (1, 1, 0, 0, 4_987),
    (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994),
    (4, 0, 0, 0, 3_861),
    (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689),
    (2, 0, -1, 2, -2_602),
    (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348),
    (2, -2, 0, 0, 2_236),
    (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069),
    (2, -2, -1, 0, 2_048),
    (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595),
    (4, -1, -1, 0, 1_215),
    (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892),
    (2, 1, 1, 0, -810),
    (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713),
    (2, 2, -1, 0, -700),
    (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596),
    (4, 0, 1, 0, 549),
    (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520),
    (1, 0, -2, 0, -487),
    (2, 1, 0, -2, -399),
    (0, 0, 2, -2, -381),
    (1, 1, 1, 0, 351),
    (3, 0, -2, 0, -340),
    (4, 0, -3, 0, 330),
    (2, -1, 2, 0, 327),
    (0, 2, 1, 0, -323),
    (1, 1, -1, 0, 299),
    (2, 0, 3, 0, 294),
];

/// Geometric ecliptic longitude of the Moon, degrees, mean equinox of date.
pub fn geometric_longitude(jd: f64) -> f64 {
    let t = centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l_prime = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let m_prime = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;

    let mut sum: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, coeff)| {
            let arg = (cd as f64 * d + cm as f64 * m + cmp as f64 * m_prime + cf as f64 * f)
                .to_radians();
            let eccentricity = match cm.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            coeff as f64 * eccentricity * arg.sin()
        })
        .sum();

    sum += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (l_prime - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    norm360(l_prime + sum / 1_000_000.0)
}

/// Nutation in longitude, degrees (principal terms only).
pub fn nutation_in_longitude(jd: f64) -> f64 {
    let t = centuries(jd);
    let omega = ascending_node(t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    (-17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin())
        / 3600.0
}

/// Apparent geocentric ecliptic longitude of the Moon, degrees, tropical.
pub fn apparent_longitude(jd: f64) -> f64 {
    norm360(geometric_longitude(jd) + nutation_in_longitude(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 47.a: 1992-04-12 0h.
    const JD: f64 = 2_448_724.5;

    #[test]
    fn geometric_longitude_matches_reference() {
        assert!((geometric_longitude(JD) - 133.162_655).abs() < 0.001);
    }

    #[test]
    fn apparent_longitude_matches_reference() {
        assert!((apparent_longitude(JD) - 133.167_265).abs() < 0.001);
    }

    #[test]
    fn nutation_is_a_few_arcseconds() {
        let dpsi = nutation_in_longitude(JD) * 3600.0;
        assert!((dpsi - 16.595).abs() < 0.5, "dpsi = {dpsi}");
    }
}
