//! # Panchanga Calculator
//!
//! Computes the five limbs (tithi, vaara, nakshatra, yoga, karana) and the
//! surrounding calendar attributes for one civil date at one place.
//!
//! Every element is evaluated at local sunrise. Elements that change during
//! the day carry the local time at which they end, in hours from local
//! midnight; values above 24 end on the following civil day. When an element
//! starts and also ends before the next sunrise it is "skipped" (kshaya) and
//! reported as a second [`Span`] on the same [`Element`].
//!
//! The numbers here are plain indices. [`names::SanskritNames`] turns them
//! into text and [`lines`] assembles the panel.

pub mod lines;
pub mod names;

use crate::astro::interp::{inverse_lagrange, unwrap_angles};
use crate::astro::riseset::{next_event, Body, Event, Observer};
use crate::astro::{lunar_phase, moon, sidereal, sun};
use crate::error::{PanchangaError, Result};
use crate::model::Place;
use tracing::debug;

pub use lines::lines;
pub use names::{Category, SanskritNames};

/// Day offsets from sunrise at which motion is sampled.
const QUARTER_DAYS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Julian day of the Kali epoch, the start of the ahargana count.
const KALI_EPOCH_JD: f64 = 588_465.5;

/// Sidereal year, days.
const SIDEREAL_YEAR: f64 = 365.256_364;

const NAKSHATRA_ARC: f64 = 360.0 / 27.0;

/// One calendar element and the local time (hours from midnight) it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub index: u32,
    pub ends: f64,
}

/// An element in force at sunrise, plus the one that starts and ends before
/// the next sunrise, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub current: Span,
    pub skipped: Option<Span>,
}

impl Element {
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        std::iter::once(&self.current).chain(self.skipped.iter())
    }
}

/// Lunar month (amanta) and whether it is intercalary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Masa {
    pub index: u32,
    pub adhika: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ayana {
    Uttarayana,
    Dakshinayana,
}

impl Ayana {
    pub fn index(self) -> u32 {
        match self {
            Ayana::Uttarayana => 0,
            Ayana::Dakshinayana => 1,
        }
    }
}

/// Elapsed years in the three eras the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Years {
    pub kali: i64,
    pub saka: i64,
    pub vikrama: i64,
}

/// All computed values for one day, before name lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Panchanga {
    pub tithi: Element,
    pub nakshatra: Element,
    pub yoga: Element,
    pub karana: u32,
    pub vaara: u32,
    pub masa: Masa,
    pub ritu: u32,
    pub raasi: u32,
    pub ayana: Ayana,
    pub samvatsara: u32,
    pub years: Years,
    pub ahargana: f64,
    /// Local clock hours.
    pub sunrise: f64,
    pub sunset: f64,
    pub moonrise: Option<f64>,
    pub moonset: Option<f64>,
    pub day_duration: f64,
}

/// Sunrise, sunset and the day-relative helpers shared by the element
/// calculations.
struct Day {
    /// 0h UT of the civil date.
    jd: f64,
    tz: f64,
    observer: Observer,
    /// Sunrise, UT Julian day.
    rise: f64,
}

impl Day {
    fn new(jd: f64, place: &Place) -> Result<Self> {
        let observer = Observer {
            latitude: place.latitude,
            longitude: place.longitude,
        };
        let rise = event(Body::Sun, Event::Rise, jd, place.tz_offset, observer).ok_or_else(|| {
            PanchangaError::Astro(format!(
                "the sun does not rise at {:.4}, {:.4} on this date",
                place.latitude, place.longitude
            ))
        })?;
        Ok(Self {
            jd,
            tz: place.tz_offset,
            observer,
            rise,
        })
    }

    /// Local clock hours for a sunrise-relative day offset.
    fn local_hours(&self, offset_days: f64) -> f64 {
        (self.rise + offset_days - self.jd) * 24.0 + self.tz
    }

    fn to_local(&self, jd_ut: f64) -> f64 {
        (jd_ut - self.jd) * 24.0 + self.tz
    }
}

/// First rise or set after local midnight.
fn event(body: Body, kind: Event, jd: f64, tz: f64, observer: Observer) -> Option<f64> {
    next_event(body, kind, jd - tz / 24.0, observer)
}

/// Compute the panchanga for the civil date whose 0h UT is `jd`.
pub fn compute(jd: f64, place: &Place) -> Result<Panchanga> {
    let day = Day::new(jd, place)?;
    let set = event(Body::Sun, Event::Set, jd, day.tz, day.observer).ok_or_else(|| {
        PanchangaError::Astro("the sun does not set on this date".to_string())
    })?;

    let tithi = tithi(&day);
    let masa = masa(&day, tithi.current.index);
    let years = elapsed_years(jd, masa.index);

    let panchanga = Panchanga {
        nakshatra: nakshatra(&day),
        yoga: yoga(&day),
        karana: karana(&day),
        vaara: vaara(jd),
        ritu: ritu(masa.index),
        raasi: raasi(jd),
        ayana: ayana(jd),
        samvatsara: samvatsara(years.kali),
        ahargana: ahargana(jd),
        sunrise: day.to_local(day.rise),
        sunset: day.to_local(set),
        moonrise: event(Body::Moon, Event::Rise, jd, day.tz, day.observer).map(|t| day.to_local(t)),
        moonset: event(Body::Moon, Event::Set, jd, day.tz, day.observer).map(|t| day.to_local(t)),
        day_duration: (set - day.rise) * 24.0,
        tithi,
        masa,
        years,
    };
    debug!(?panchanga, "computed panchanga");
    Ok(panchanga)
}

/// Change in tropical longitude over each sample offset, wrapped to [0, 360).
fn motion(longitude: fn(f64) -> f64, from: f64) -> [f64; 4] {
    let start = longitude(from);
    QUARTER_DAYS.map(|t| (longitude(from + t) - start).rem_euclid(360.0))
}

fn tithi(day: &Day) -> Element {
    let phase = lunar_phase(day.rise);
    let today = (phase / 12.0).ceil() as u32;

    let moon_motion = motion(moon::apparent_longitude, day.rise);
    let sun_motion = motion(sun::apparent_longitude, day.rise);
    let relative: Vec<f64> = moon_motion
        .iter()
        .zip(sun_motion.iter())
        .map(|(m, s)| m - s)
        .collect();

    let end_of = |index: u32| {
        let degrees_left = index as f64 * 12.0 - phase;
        day.local_hours(inverse_lagrange(&QUARTER_DAYS, &relative, degrees_left))
    };

    let tomorrow = (lunar_phase(day.rise + 1.0) / 12.0).ceil() as i64;
    let skipped = ((tomorrow - today as i64).rem_euclid(30) > 1).then(|| Span {
        index: wrap(today + 1, 30),
        ends: end_of(today + 1),
    });

    Element {
        current: Span {
            index: today,
            ends: end_of(today),
        },
        skipped,
    }
}

fn nakshatra(day: &Day) -> Element {
    let offsets = [0.0, 0.25, 0.5, 0.75, 1.0];
    let longitudes = offsets.map(|t| sidereal::lunar_longitude(day.rise + t));
    let nak = (longitudes[0] * 27.0 / 360.0).ceil() as u32;
    let unwrapped = unwrap_angles(&longitudes);

    let end_of = |index: u32| {
        day.local_hours(inverse_lagrange(
            &offsets,
            &unwrapped,
            index as f64 * NAKSHATRA_ARC,
        ))
    };

    let tomorrow = (longitudes[4] * 27.0 / 360.0).ceil() as i64;
    let skipped = ((tomorrow - nak as i64).rem_euclid(27) > 1).then(|| Span {
        index: wrap(nak + 1, 27),
        ends: end_of(nak + 1),
    });

    Element {
        current: Span {
            index: nak,
            ends: end_of(nak),
        },
        skipped,
    }
}

fn yoga_total(jd: f64) -> f64 {
    (sidereal::lunar_longitude(jd) + sidereal::solar_longitude(jd)).rem_euclid(360.0)
}

fn yoga(day: &Day) -> Element {
    let total = yoga_total(day.rise);
    let yog = (total * 27.0 / 360.0).ceil() as u32;

    let moon_motion = motion(moon::apparent_longitude, day.rise);
    let sun_motion = motion(sun::apparent_longitude, day.rise);
    let combined: Vec<f64> = moon_motion
        .iter()
        .zip(sun_motion.iter())
        .map(|(m, s)| m + s)
        .collect();

    let end_of = |index: u32| {
        let degrees_left = index as f64 * NAKSHATRA_ARC - total;
        day.local_hours(inverse_lagrange(&QUARTER_DAYS, &combined, degrees_left))
    };

    let tomorrow = (yoga_total(day.rise + 1.0) * 27.0 / 360.0).ceil() as i64;
    let skipped = ((tomorrow - yog as i64).rem_euclid(27) > 1).then(|| Span {
        index: wrap(yog + 1, 27),
        ends: end_of(yog + 1),
    });

    Element {
        current: Span {
            index: yog,
            ends: end_of(yog),
        },
        skipped,
    }
}

/// Half-tithi at sunrise, 1..=60.
fn karana(day: &Day) -> u32 {
    (lunar_phase(day.rise) / 6.0).ceil() as u32
}

/// Weekday for a 0h UT Julian day, 0 = Sunday.
pub fn vaara(jd: f64) -> u32 {
    (jd + 1.0).ceil().rem_euclid(7.0) as u32
}

/// Solar sign, 1 = Mesha.
pub fn raasi(jd: f64) -> u32 {
    (sidereal::solar_longitude(jd) / 30.0).ceil() as u32
}

pub fn ritu(masa: u32) -> u32 {
    (masa - 1) / 2
}

/// Northward course while the sidereal sun runs Makara through Mithuna.
pub fn ayana(jd: f64) -> Ayana {
    let lon = sidereal::solar_longitude(jd);
    if !(90.0..270.0).contains(&lon) {
        Ayana::Uttarayana
    } else {
        Ayana::Dakshinayana
    }
}

/// Days elapsed since the start of the Kali yuga.
pub fn ahargana(jd: f64) -> f64 {
    jd - KALI_EPOCH_JD
}

/// Instant of the new moon before `jd`, or after it when `next` is set,
/// estimated from the tithi in force at `jd`.
fn new_moon(jd: f64, tithi: u32, next: bool) -> f64 {
    let start = if next {
        jd + 30.0 - tithi as f64
    } else {
        jd - tithi as f64
    };
    let x: Vec<f64> = (0..17).map(|k| -2.0 + k as f64 * 0.25).collect();
    let phases: Vec<f64> = x.iter().map(|dx| lunar_phase(start + dx)).collect();
    start + inverse_lagrange(&x, &unwrap_angles(&phases), 360.0)
}

/// Amanta month: named after the solar sign the sun occupies at the new moon
/// that begins it. When the sun has not changed sign by the following new
/// moon the month is adhika.
fn masa(day: &Day, tithi: u32) -> Masa {
    let last = new_moon(day.rise, tithi, false);
    let next = new_moon(day.rise, tithi, true);
    let this_sign = raasi(last);
    let next_sign = raasi(next);
    Masa {
        index: wrap(this_sign + 1, 12),
        adhika: this_sign == next_sign,
    }
}

pub fn elapsed_years(jd: f64, masa: u32) -> Years {
    let kali = ((ahargana(jd) + (4.0 - masa as f64) * 30.0) / SIDEREAL_YEAR) as i64;
    let saka = kali - 3179;
    Years {
        kali,
        saka,
        vikrama: saka + 135,
    }
}

/// Position in the 60-year Jovian cycle, 0 = Akshaya, 1 = Prabhava.
pub fn samvatsara(kali: i64) -> u32 {
    let k = if kali >= 4009 {
        (kali - 14).rem_euclid(60)
    } else {
        kali
    };
    (k + 27 + (k * 211 - 108) / 18_000).rem_euclid(60) as u32
}

/// Wrap `n + 1`-style successors back to 1 after `size`.
fn wrap(n: u32, size: u32) -> u32 {
    if n > size {
        n - size
    } else {
        n
    }
}
