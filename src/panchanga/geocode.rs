//! Online place lookup through the Open-Meteo geocoding and forecast APIs.

use crate::data::City;
use crate::error::{PanchangaError, Result};
use crate::net::{Fetcher, Request};
use serde::Deserialize;
use tracing::debug;

const SEARCH_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    name: String,
    latitude: f64,
    longitude: f64,
    timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    timezone: String,
}

pub fn search_request(place: &str) -> Request {
    Request::new(SEARCH_URL)
        .query("name", place)
        .query("count", 1)
        .query("language", "en")
        .query("format", "json")
}

pub fn timezone_request(latitude: f64, longitude: f64) -> Request {
    Request::new(FORECAST_URL)
        .query("latitude", latitude)
        .query("longitude", longitude)
        .query("timezone", "auto")
}

fn get_json<F: Fetcher + ?Sized>(fetcher: &F, request: &Request) -> Result<String> {
    let response = fetcher.get(request)?;
    if !response.is_success() {
        return Err(PanchangaError::Geocode(format!(
            "lookup failed with status {}",
            response.status
        )));
    }
    Ok(response.body)
}

/// Coordinates and timezone of the best match for `place`.
pub fn search<F: Fetcher + ?Sized>(fetcher: &F, place: &str) -> Result<City> {
    let body = get_json(fetcher, &search_request(place))?;
    let parsed: SearchResponse = serde_json::from_str(&body)?;
    let hit = parsed
        .results
        .into_iter()
        .next()
        .ok_or_else(|| PanchangaError::PlaceNotFound {
            place: place.to_string(),
            suggestions: Vec::new(),
        })?;
    debug!(query = place, found = %hit.name, "geocoded");
    let timezone = hit.timezone.ok_or_else(|| {
        PanchangaError::Geocode(format!("no timezone known for '{}'", hit.name))
    })?;
    Ok(City {
        latitude: hit.latitude,
        longitude: hit.longitude,
        timezone,
    })
}

/// IANA timezone id in force at the given coordinates.
pub fn timezone_at<F: Fetcher + ?Sized>(fetcher: &F, latitude: f64, longitude: f64) -> Result<String> {
    let body = get_json(fetcher, &timezone_request(latitude, longitude))?;
    let parsed: ForecastResponse = serde_json::from_str(&body)?;
    Ok(parsed.timezone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{Fetched, StaticFetcher};

    #[test]
    fn search_request_carries_raw_parameters() {
        let request = search_request("New York");
        assert_eq!(request.url, SEARCH_URL);
        assert_eq!(request.query[0], ("name".to_string(), "New York".to_string()));
        assert_eq!(
            timezone_request(-33.87, 151.21).to_string(),
            format!("{}?latitude=-33.87&longitude=151.21&timezone=auto", FORECAST_URL)
        );
    }

    #[test]
    fn search_takes_first_result() {
        let body = r#"{"results":[{"id":1,"name":"Pune","latitude":18.51957,"longitude":73.85535,"timezone":"Asia/Kolkata","country":"India"}],"generationtime_ms":0.5}"#;
        let fetcher = StaticFetcher::new().with(search_request("Pune"), Fetched::ok(body));
        let city = search(&fetcher, "Pune").unwrap();
        assert_eq!(city.timezone, "Asia/Kolkata");
        assert!((city.latitude - 18.51957).abs() < 1e-9);
    }

    #[test]
    fn no_results_is_place_not_found() {
        let fetcher =
            StaticFetcher::new().with(search_request("Qwxz"), Fetched::ok(r#"{"generationtime_ms":0.1}"#));
        match search(&fetcher, "Qwxz") {
            Err(PanchangaError::PlaceNotFound { place, suggestions }) => {
                assert_eq!(place, "Qwxz");
                assert!(suggestions.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn server_error_is_geocode_error() {
        let fetcher = StaticFetcher::new().with(
            search_request("Pune"),
            Fetched {
                status: 500,
                body: String::new(),
            },
        );
        assert!(matches!(
            search(&fetcher, "Pune"),
            Err(PanchangaError::Geocode(_))
        ));
    }

    #[test]
    fn timezone_for_coordinates() {
        let fetcher = StaticFetcher::new().with(
            timezone_request(12.5, 78.6),
            Fetched::ok(r#"{"latitude":12.5,"longitude":78.625,"timezone":"Asia/Kolkata","utc_offset_seconds":19800}"#),
        );
        assert_eq!(timezone_at(&fetcher, 12.5, 78.6).unwrap(), "Asia/Kolkata");
    }
}
