//! # API Facade
//!
//! The single entry point for every panchanga operation, whatever the UI.
//! It dispatches to the command layer and returns structured results; it
//! never prints.
//!
//! ## Generic Over Fetcher
//!
//! `PanchangaApi<F: Fetcher>` is generic over the network backend:
//! - Production: `PanchangaApi<HttpFetcher>`
//! - Testing: `PanchangaApi<StaticFetcher>`
//!
//! API tests check dispatch and return shapes. The logic itself is tested in
//! the command, calendar and layout modules.

use crate::astro::time::julian_day;
use crate::calendar::{self, Panchanga};
use crate::commands;
use crate::config::PlaceConfig;
use crate::data::DataSource;
use crate::error::{PanchangaError, Result};
use crate::location::Resolver;
use crate::model::{Moment, Place};
use crate::net::Fetcher;

pub use crate::commands::report::ReportRequest;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct PanchangaApi<F: Fetcher> {
    fetcher: F,
    data: DataSource,
}

impl<F: Fetcher> PanchangaApi<F> {
    pub fn new(fetcher: F, data: DataSource) -> Self {
        Self { fetcher, data }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolve the place, compute the day and render every panel.
    pub fn report(&self, config: &PlaceConfig, request: &ReportRequest) -> Result<CmdResult> {
        commands::report::run(&self.fetcher, &self.data, config, request)
    }

    /// Resolve `place` for the date of `moment` without computing anything.
    pub fn resolve(&self, config: &PlaceConfig, place: &str, moment: &Moment, offline: bool) -> Result<Place> {
        let date = moment
            .naive_date()
            .ok_or_else(|| PanchangaError::Date(moment.to_string()))?;
        let cities = if offline {
            self.data.cities()?
        } else {
            Default::default()
        };
        Resolver::new(&self.fetcher, config, &cities, offline).resolve(place, date)
    }

    /// Typed panchanga for an already resolved place.
    pub fn panchanga(&self, moment: &Moment, place: &Place) -> Result<Panchanga> {
        calendar::compute(julian_day(moment.year, moment.month, moment.day, 0.0), place)
    }

    /// Panel text for a computed panchanga.
    pub fn panchanga_lines(&self, panchanga: &Panchanga) -> Result<Vec<String>> {
        calendar::lines(panchanga, &self.data.names()?)
    }
}
