//! Rising and setting under the Hindu convention: the centre of the disc on
//! the geometric horizon, no refraction, geocentric, ecliptic latitude
//! ignored.
//!
//! Events are found by scanning forward in fixed steps until the altitude
//! changes sign, then bisecting the bracketing interval.

use super::sun::{ecliptic_to_equatorial, obliquity};
use super::time::lmst_deg;
use super::{moon, sun};

/// Scan step, days (10 minutes).
const STEP_DAYS: f64 = 1.0 / 144.0;

/// How far ahead to look for an event, days.
const SEARCH_WINDOW_DAYS: f64 = 2.0;

/// Bisection stops below this interval, days (~0.01 s).
const CONVERGENCE_DAYS: f64 = 1.0e-7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Rise,
    Set,
}

/// Geographic observer; longitude east-positive, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
}

/// Altitude of the body's centre above the horizon, degrees.
pub fn altitude(body: Body, jd: f64, observer: Observer) -> f64 {
    let lambda = match body {
        Body::Sun => sun::apparent_longitude(jd),
        Body::Moon => moon::apparent_longitude(jd),
    };
    let (ra, dec) = ecliptic_to_equatorial(lambda, obliquity(jd));
    let hour_angle = (lmst_deg(jd, observer.longitude) - ra).to_radians();
    let phi = observer.latitude.to_radians();
    let dec = dec.to_radians();
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour_angle.cos())
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees()
}

/// First `event` for `body` at or after `start_jd`, or `None` if it does not
/// happen within the search window (polar day or night).
pub fn next_event(body: Body, event: Event, start_jd: f64, observer: Observer) -> Option<f64> {
    let crosses = |before: f64, after: f64| match event {
        Event::Rise => before < 0.0 && after >= 0.0,
        Event::Set => before >= 0.0 && after < 0.0,
    };

    let mut t = start_jd;
    let mut alt = altitude(body, t, observer);
    while t < start_jd + SEARCH_WINDOW_DAYS {
        let next_t = t + STEP_DAYS;
        let next_alt = altitude(body, next_t, observer);
        if crosses(alt, next_alt) {
            return Some(bisect(body, observer, t, next_t));
        }
        t = next_t;
        alt = next_alt;
    }
    None
}

fn bisect(body: Body, observer: Observer, mut lo: f64, mut hi: f64) -> f64 {
    let lo_sign = altitude(body, lo, observer) >= 0.0;
    while hi - lo > CONVERGENCE_DAYS {
        let mid = 0.5 * (lo + hi);
        if (altitude(body, mid, observer) >= 0.0) == lo_sign {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::time::julian_day;

    const BANGALORE: Observer = Observer {
        latitude: 12.9716,
        longitude: 77.5946,
    };

    fn local_hours(jd: f64, midnight_ut: f64, tz: f64) -> f64 {
        (jd - midnight_ut) * 24.0 + tz
    }

    #[test]
    fn bangalore_equinox_day_is_about_twelve_hours() {
        let jd0 = julian_day(2024, 3, 20, 0.0);
        let start = jd0 - 5.5 / 24.0;
        let rise = next_event(Body::Sun, Event::Rise, start, BANGALORE).unwrap();
        let set = next_event(Body::Sun, Event::Set, start, BANGALORE).unwrap();

        let rise_local = local_hours(rise, jd0, 5.5);
        let set_local = local_hours(set, jd0, 5.5);
        // Published (upper limb, refracted) times are ~06:26 and ~18:31; the
        // disc-centre convention shifts each by a couple of minutes.
        assert!((rise_local - 6.47).abs() < 0.1, "rise {rise_local}");
        assert!((set_local - 18.49).abs() < 0.1, "set {set_local}");
        assert!(((set - rise) * 24.0 - 12.0).abs() < 0.15);
    }

    #[test]
    fn sun_is_up_at_local_noon() {
        let jd0 = julian_day(2024, 6, 21, 0.0);
        let noon = jd0 + (12.0 - 5.5) / 24.0;
        assert!(altitude(Body::Sun, noon, BANGALORE) > 60.0);
    }

    #[test]
    fn polar_night_has_no_sunrise() {
        let tromso_north = Observer {
            latitude: 78.22,
            longitude: 15.65,
        };
        let start = julian_day(2024, 12, 21, 0.0);
        assert_eq!(next_event(Body::Sun, Event::Rise, start, tromso_north), None);
    }

    #[test]
    fn moon_rises_and_sets() {
        let jd0 = julian_day(2024, 4, 23, 0.0);
        let start = jd0 - 5.5 / 24.0;
        let rise = next_event(Body::Moon, Event::Rise, start, BANGALORE).unwrap();
        let set = next_event(Body::Moon, Event::Set, start, BANGALORE).unwrap();
        assert!(rise > start && set > start);
        // Full moon: rises around sunset.
        let rise_local = local_hours(rise, jd0, 5.5);
        assert!((17.0..20.5).contains(&rise_local), "moonrise {rise_local}");
    }
}
