//! Current weather as preformatted terminal text from wttr.in.

use crate::error::Result;
use crate::net::{Fetcher, Request};
use tracing::{debug, warn};

const WTTR_BASE: &str = "http://wttr.in";

/// Current conditions only, no colours, no location header. The place goes in
/// the path, so it is percent-encoded here rather than by the fetcher.
pub fn weather_request(place: &str) -> Request {
    Request::new(format!("{}/{}?0&q&T", WTTR_BASE, path_segment(place)))
}

fn path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Weather panel lines for `place`. A non-success response gives an empty
/// panel; a transport failure is an error.
pub fn fetch<F: Fetcher + ?Sized>(fetcher: &F, place: &str) -> Result<Vec<String>> {
    let response = fetcher.get(&weather_request(place))?;
    if !response.is_success() {
        warn!(status = response.status, "weather unavailable");
        return Ok(Vec::new());
    }

    let mut lines: Vec<String> = response
        .body
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    debug!(lines = lines.len(), "weather fetched");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PanchangaError;
    use crate::net::{Fetched, StaticFetcher};

    const REPORT: &str = "      \\   /     Sunny\n       .-.      +27(29) °C\n\n";

    #[test]
    fn url_requests_plain_current_conditions() {
        assert_eq!(
            weather_request("New York").url,
            "http://wttr.in/New%20York?0&q&T"
        );
        assert_eq!(weather_request("São Paulo").url, "http://wttr.in/S%C3%A3o%20Paulo?0&q&T");
        assert_eq!(weather_request("12.5,78.6").url, "http://wttr.in/12.5,78.6?0&q&T");
    }

    #[test]
    fn splits_body_into_lines() {
        let fetcher = StaticFetcher::new().with(weather_request("Bangalore"), Fetched::ok(REPORT));
        let lines = fetch(&fetcher, "Bangalore").unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Sunny"));
        assert!(lines[0].starts_with("      \\"));
    }

    #[test]
    fn non_success_gives_empty_panel() {
        let fetcher = StaticFetcher::new().with(
            weather_request("Nowhere"),
            Fetched {
                status: 503,
                body: "busy".into(),
            },
        );
        assert!(fetch(&fetcher, "Nowhere").unwrap().is_empty());
    }

    #[test]
    fn transport_failure_propagates() {
        let fetcher = StaticFetcher::new();
        assert!(matches!(
            fetch(&fetcher, "Bangalore"),
            Err(PanchangaError::Http(_))
        ));
    }
}
