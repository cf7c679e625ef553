//! # Astronomy Core
//!
//! Low-precision analytic positions, good to a small fraction of a degree
//! for the Sun and Moon, which is ample for calendar elements that span
//! 6° to 13°20' of arc.
//!
//! - [`time`]: Julian day, centuries, sidereal time
//! - [`sun`]: apparent solar longitude and equatorial coordinates
//! - [`moon`]: apparent lunar longitude from the principal periodic terms
//! - [`sidereal`]: Lahiri ayanamsa and nirayana (sidereal) longitudes
//! - [`riseset`]: horizon crossings under the Hindu rising convention
//! - [`interp`]: inverse Lagrange interpolation and angle unwrapping
//!
//! All instants are Julian days in UT. The difference between UT and
//! dynamical time is below the precision of the series used here.

pub mod interp;
pub mod moon;
pub mod riseset;
pub mod sidereal;
pub mod sun;
pub mod time;

/// Normalize an angle in degrees to `[0, 360)`.
pub fn norm360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Angular separation Moon − Sun, in `[0, 360)`.
pub fn lunar_phase(jd: f64) -> f64 {
    norm360(moon::apparent_longitude(jd) - sun::apparent_longitude(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm360_wraps_both_ways() {
        assert_eq!(norm360(370.0), 10.0);
        assert_eq!(norm360(-10.0), 350.0);
        assert_eq!(norm360(0.0), 0.0);
    }

    #[test]
    fn phase_near_known_full_moon() {
        // Full moon of 2024-04-23 23:49 UT.
        let jd = time::julian_day(2024, 4, 23, 23.0 + 49.0 / 60.0);
        let phase = lunar_phase(jd);
        assert!((phase - 180.0).abs() < 1.0, "phase = {phase}");
    }

    #[test]
    fn phase_near_known_new_moon() {
        // New moon of 2024-04-08 18:21 UT (the total solar eclipse).
        let jd = time::julian_day(2024, 4, 8, 18.0 + 21.0 / 60.0);
        let phase = lunar_phase(jd);
        let dist = phase.min(360.0 - phase);
        assert!(dist < 1.0, "phase = {phase}");
    }
}
