//! # Network Layer
//!
//! Weather and geocoding both need one blocking HTTP GET. The [`Fetcher`]
//! trait keeps that behind a seam so the rest of the crate can be tested
//! without a network.
//!
//! ## Implementations
//!
//! - [`http::HttpFetcher`]: production fetcher built on `ureq`, with a 10 s
//!   overall timeout
//! - [`memory::StaticFetcher`]: canned responses keyed by request, for tests
//!
//! Query parameters travel unencoded in a [`Request`]; the production fetcher
//! hands them to `ureq`, which does the percent-encoding.
//!
//! A non-2xx status is not an error at this layer. Callers decide what a
//! 404 means; only transport failures surface as `PanchangaError::Http`.

use crate::error::Result;
use std::fmt;

pub mod http;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

pub use http::HttpFetcher;
#[cfg(any(test, feature = "test_utils"))]
pub use memory::StaticFetcher;

/// A GET request: base URL plus query parameters, encoded by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl Request {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)?;
        for (i, (name, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, name, value)?;
        }
        Ok(())
    }
}

/// Status and decoded body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: String,
}

impl Fetched {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Fetcher {
    fn get(&self, request: &Request) -> Result<Fetched>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_displays_its_query() {
        let request = Request::new("https://example.org/v1/search")
            .query("name", "New York")
            .query("count", 1);
        assert_eq!(
            request.to_string(),
            "https://example.org/v1/search?name=New York&count=1"
        );
        assert_eq!(Request::new("http://a").to_string(), "http://a");
    }

    #[test]
    fn success_range() {
        assert!(Fetched::ok("x").is_success());
        let missing = Fetched {
            status: 404,
            body: String::new(),
        };
        assert!(!missing.is_success());
    }
}
