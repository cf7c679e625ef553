//! Turning a user-supplied place into coordinates and a UTC offset.
//!
//! A place is either a name (`"Mysore"`) or a `"latitude,longitude"` pair.
//! The place recorded in the config resolves from the config without a
//! lookup. Other places go to the geocoder online or to the city table
//! offline. The UTC offset is always computed for the requested date, so
//! daylight saving is honoured.

use crate::config::PlaceConfig;
use crate::data::{City, CityTable};
use crate::error::{PanchangaError, Result};
use crate::geocode;
use crate::model::Place;
use crate::net::Fetcher;
use chrono::{Duration, NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;
use tracing::{debug, info};

const MAX_SUGGESTIONS: usize = 5;
const SUGGESTION_CUTOFF: f64 = 0.6;

/// Parse `"lat,lon"`, optionally wrapped in brackets or parentheses.
pub fn parse_coordinates(place: &str) -> Option<(f64, f64)> {
    let inner = place
        .trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']']);
    let (lat, lon) = inner.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
}

/// UTC offset in hours of `timezone` at local midnight on `date`.
pub fn utc_offset_hours(timezone: &str, date: NaiveDate) -> Result<f64> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| PanchangaError::Timezone(format!("unknown timezone '{}'", timezone)))?;
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    // Midnight skipped by a DST jump: the offset after the jump, read six
    // hours on, holds for the rest of the day.
    let offset = tz
        .offset_from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.offset_from_local_datetime(&(midnight + Duration::hours(6)))
                .earliest()
        })
        .ok_or_else(|| {
            PanchangaError::Timezone(format!("no local midnight in '{}' on {}", timezone, date))
        })?;
    let seconds = offset.fix().local_minus_utc();
    Ok(seconds as f64 / 3600.0)
}

/// City names closest to `place`, best first.
pub fn suggestions(place: &str, cities: &CityTable) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = cities
        .keys()
        .map(|name| (rapidfuzz::fuzz::ratio(place.chars(), name.chars()), name))
        .filter(|(score, _)| *score >= SUGGESTION_CUTOFF)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.clone())
        .collect()
}

/// The table city closest to the given coordinates.
pub fn nearest_city(latitude: f64, longitude: f64, cities: &CityTable) -> Option<(&String, &City)> {
    cities.iter().min_by(|a, b| {
        let da = great_circle_deg(latitude, longitude, a.1.latitude, a.1.longitude);
        let db = great_circle_deg(latitude, longitude, b.1.latitude, b.1.longitude);
        da.total_cmp(&db)
    })
}

fn great_circle_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (p1, p2) = (lat1.to_radians(), lat2.to_radians());
    let dl = (lon2 - lon1).to_radians();
    (p1.sin() * p2.sin() + p1.cos() * p2.cos() * dl.cos())
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

/// Resolves places for one run.
pub struct Resolver<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    config: &'a PlaceConfig,
    cities: &'a CityTable,
    offline: bool,
}

impl<'a, F: Fetcher + ?Sized> Resolver<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a PlaceConfig, cities: &'a CityTable, offline: bool) -> Self {
        Self {
            fetcher,
            config,
            cities,
            offline,
        }
    }

    pub fn resolve(&self, place: &str, date: NaiveDate) -> Result<Place> {
        let city = self.locate(place)?;
        let tz_offset = utc_offset_hours(&city.timezone, date)?;
        info!(place, timezone = %city.timezone, tz_offset, "resolved place");
        Ok(Place {
            latitude: city.latitude,
            longitude: city.longitude,
            tz_offset,
            timezone: city.timezone,
        })
    }

    fn locate(&self, place: &str) -> Result<City> {
        if place == self.config.place {
            debug!(place, "using saved place");
            return Ok(City {
                latitude: self.config.latitude,
                longitude: self.config.longitude,
                timezone: self.config.timezone.clone(),
            });
        }

        if let Some((latitude, longitude)) = parse_coordinates(place) {
            let timezone = if self.offline {
                self.nearest_timezone(latitude, longitude)?
            } else {
                geocode::timezone_at(self.fetcher, latitude, longitude)?
            };
            return Ok(City {
                latitude,
                longitude,
                timezone,
            });
        }

        if !self.offline {
            return geocode::search(self.fetcher, place);
        }

        self.cities
            .get(place)
            .cloned()
            .ok_or_else(|| PanchangaError::PlaceNotFound {
                place: place.to_string(),
                suggestions: suggestions(place, self.cities),
            })
    }

    fn nearest_timezone(&self, latitude: f64, longitude: f64) -> Result<String> {
        let (name, city) = nearest_city(latitude, longitude, self.cities)
            .ok_or_else(|| PanchangaError::Data("city table is empty".to_string()))?;
        debug!(nearest = %name, timezone = %city.timezone, "timezone from nearest city");
        Ok(city.timezone.clone())
    }
}
