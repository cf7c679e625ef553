use super::{Fetched, Fetcher, Request};
use crate::error::{PanchangaError, Result};
use once_cell::sync::Lazy;
use std::time::Duration;
use tracing::debug;

const TIMEOUT: Duration = Duration::from_secs(10);

static AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::AgentBuilder::new()
        .timeout(TIMEOUT)
        .user_agent(concat!("panchanga/", env!("CARGO_PKG_VERSION")))
        .build()
});

/// Blocking fetcher over a shared `ureq` agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn get(&self, request: &Request) -> Result<Fetched> {
        debug!(%request, "GET");
        let call = request
            .query
            .iter()
            .fold(AGENT.get(&request.url), |call, (name, value)| {
                call.query(name, value)
            });
        match call.call() {
            Ok(response) => {
                let status = response.status();
                let body = response.into_string()?;
                Ok(Fetched { status, body })
            }
            Err(ureq::Error::Status(status, response)) => {
                debug!(%request, status, "non-success status");
                let body = response.into_string().unwrap_or_default();
                Ok(Fetched { status, body })
            }
            Err(err) => Err(PanchangaError::Http(format!("{}: {}", request.url, err))),
        }
    }
}
