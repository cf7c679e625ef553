//! The full report: location, weather and moon panels side by side, with the
//! panchanga panel stacked underneath.

use super::CmdResult;
use crate::astro::{lunar_phase, time::julian_day};
use crate::calendar;
use crate::config::PlaceConfig;
use crate::data::{CityTable, DataSource};
use crate::error::{PanchangaError, Result};
use crate::layout::{self, measure, BlockGroup, BlockOptions, Highlight, TextBlock};
use crate::location::Resolver;
use crate::model::{Hms, Moment, Place};
use crate::moon;
use crate::net::Fetcher;
use crate::weather;
use tracing::{debug, warn};

/// Extra interior columns and rows around the top-level panels.
const PANEL_PAD_WIDTH: usize = 5;
const PANEL_PAD_HEIGHT: usize = 2;

#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub place: String,
    pub moment: Moment,
    pub weather: bool,
    pub moon: bool,
    pub offline: bool,
    pub highlight: Highlight,
}

impl ReportRequest {
    pub fn new(place: impl Into<String>, moment: Moment) -> Self {
        Self {
            place: place.into(),
            moment,
            weather: true,
            moon: true,
            offline: false,
            highlight: Highlight::Plain,
        }
    }
}

pub fn run<F: Fetcher + ?Sized>(
    fetcher: &F,
    data: &DataSource,
    config: &PlaceConfig,
    request: &ReportRequest,
) -> Result<CmdResult> {
    let result = CmdResult::default();
    let date = request
        .moment
        .naive_date()
        .ok_or_else(|| PanchangaError::Date(request.moment.to_string()))?;

    // The city table is only consulted offline, for places other than the saved one.
    let cities = if request.offline && request.place != config.place {
        data.cities()?
    } else {
        CityTable::new()
    };
    let place = Resolver::new(fetcher, config, &cities, request.offline).resolve(&request.place, date)?;

    // Offline only changes how the place is resolved. Weather is still asked
    // for; an unreachable network then leaves the panel empty.
    let weather_lines = if request.weather {
        Some(match weather::fetch(fetcher, &request.place) {
            Err(PanchangaError::Http(err)) if request.offline => {
                warn!(%err, "weather unreachable");
                Vec::new()
            }
            fetched => fetched?,
        })
    } else {
        None
    };

    let jd = julian_day(request.moment.year, request.moment.month, request.moment.day, 0.0);
    let panchanga = calendar::compute(jd, &place)?;
    let names = data.names()?;
    let panchanga_lines = calendar::lines(&panchanga, &names)?;

    let moon_lines = request.moon.then(|| {
        let instant = jd + (request.moment.hours() - place.tz_offset) / 24.0;
        moon::panel(
            lunar_phase(instant),
            place.latitude,
            panchanga.moonrise,
            panchanga.moonset,
        )
    });

    let location = location_lines(&request.place, &place, &request.moment, &panchanga);
    let diagram = compose(
        &location,
        weather_lines.as_deref(),
        moon_lines.as_deref(),
        &panchanga_lines,
        request.highlight,
    )?;

    debug!(rows = diagram.len(), "report composed");
    Ok(result
        .with_diagram(diagram)
        .with_config(PlaceConfig::remember(&request.place, &place))
        .with_panchanga(panchanga)
        .with_place(place))
}

pub fn location_lines(name: &str, place: &Place, moment: &Moment, p: &calendar::Panchanga) -> Vec<String> {
    vec![
        format!("Place: {}", name),
        format!("Latitude: {}", place.latitude),
        format!("Longitude: {}", place.longitude),
        format!("Timezone: {}", place.timezone),
        format!("Time: {}", moment),
        String::new(),
        format!("Sunrise: {}", Hms::from_hours(p.sunrise)),
        format!("Sunset: {}", Hms::from_hours(p.sunset)),
        format!("Day duration: {}", Hms::from_hours(p.day_duration)),
    ]
}

/// Size every top-level panel to the largest of them and lay the
/// panchanga panel underneath at twice that width.
pub fn compose(
    location: &[String],
    weather: Option<&[String]>,
    moon: Option<&[String]>,
    panchanga: &[String],
    highlight: Highlight,
) -> Result<Vec<String>> {
    let mut sizes = vec![measure(location, true)];
    sizes.extend(weather.map(|w| measure(w, false)));
    sizes.extend(moon.map(|m| measure(m, false)));
    let width = sizes.iter().map(|s| s.0).max().unwrap_or(0);
    let height = sizes.iter().map(|s| s.1).max().unwrap_or(0);

    let panel = |strip: bool| {
        let base = if strip {
            BlockOptions::stripped()
        } else {
            BlockOptions::verbatim()
        };
        base.with_width(width + PANEL_PAD_WIDTH)
            .with_height(height + PANEL_PAD_HEIGHT)
    };

    let mut top = vec![TextBlock::build(location, &panel(true))];
    if let Some(lines) = weather {
        top.push(TextBlock::build(lines, &panel(false)));
    }
    if let Some(lines) = moon {
        top.push(TextBlock::build(lines, &panel(false)));
    }
    let bottom = TextBlock::build(panchanga, &BlockOptions::stripped().with_width(2 * width));

    layout::compose::compose(
        &[BlockGroup::new(0, top), BlockGroup::new(1, vec![bottom])],
        highlight,
    )
}
