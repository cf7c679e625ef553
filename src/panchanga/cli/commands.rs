use super::print::{print_diagram, print_messages};
use super::setup::Cli;
use clap::Parser;
use panchanga::api::{PanchangaApi, ReportRequest};
use panchanga::config::PlaceConfig;
use panchanga::data::DataSource;
use panchanga::error::Result;
use panchanga::layout::Highlight;
use panchanga::model::Moment;
use panchanga::net::HttpFetcher;
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = !cli.no_color && std::io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => PlaceConfig::default_path()?,
    };
    let config = PlaceConfig::load_or_create(&config_path)?;

    let moment = match &cli.date {
        Some(date) => Moment::parse(date)?,
        None => Moment::now(),
    };

    let mut request = ReportRequest::new(
        cli.place.clone().unwrap_or_else(|| config.place.clone()),
        moment,
    );
    request.weather = !cli.no_weather;
    request.moon = !cli.no_moon;
    request.offline = cli.offline;
    request.highlight = if color {
        Highlight::Green
    } else {
        Highlight::Plain
    };
    debug!(?request, config = %config_path.display(), "running report");

    let api = PanchangaApi::new(HttpFetcher, DataSource::from_dir(cli.data_dir.clone()));
    let result = api.report(&config, &request)?;

    print_diagram(&result.diagram);
    print_messages(&result.messages);

    if let Some(updated) = &result.config {
        updated.save(&config_path)?;
    }
    Ok(())
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
