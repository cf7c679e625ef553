use super::norm360;

/// Julian day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian day for a proleptic Gregorian calendar date at `hours` UT.
///
/// Valid for any year after -4716, including year 0 and negative
/// (astronomical) years.
pub fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
        + hours / 24.0
}

/// Julian centuries since J2000.0.
pub fn centuries(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Greenwich mean sidereal time in degrees.
pub fn gmst_deg(jd: f64) -> f64 {
    let t = centuries(jd);
    norm360(
        280.460_618_37 + 360.985_647_366_29 * (jd - J2000) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Local mean sidereal time in degrees; `longitude_deg` is east-positive.
pub fn lmst_deg(jd: f64, longitude_deg: f64) -> f64 {
    norm360(gmst_deg(jd) + longitude_deg)
}
