use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.2.0" for releases, "0.2.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "panchanga", bin_name = "panchanga", version = get_version())]
#[command(
    about = "Hindu lunisolar calendar (panchanga) with weather and moon phase",
    long_about = None
)]
pub struct Cli {
    /// Data directory with cities.json and sanskrit_names.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Date in DD/MM/YYYY HH:MM:SS format (default now)
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Place name or comma separated coordinates, e.g. "12.5,78.6" (default: last place used)
    #[arg(short, long, value_name = "PLACE", allow_hyphen_values = true)]
    pub place: Option<String>,

    /// Do not display weather info
    #[arg(long)]
    pub no_weather: bool,

    /// Do not display moon info
    #[arg(long)]
    pub no_moon: bool,

    /// Resolve place name offline from the bundled city table
    #[arg(long)]
    pub offline: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Config file (default ~/.panchanga/config.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_place_and_date_unset() {
        let cli = Cli::try_parse_from(["panchanga"]).unwrap();
        assert!(cli.place.is_none());
        assert!(cli.date.is_none());
        assert!(!cli.offline && !cli.no_weather && !cli.no_moon);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "panchanga",
            "-p",
            "Mysore",
            "-d",
            "14/01/2024 06:30:00",
            "--offline",
            "--no-weather",
            "--no-moon",
            "--no-color",
            "--data-dir",
            "/tmp/data",
            "--config",
            "/tmp/c.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.place.as_deref(), Some("Mysore"));
        assert_eq!(cli.date.as_deref(), Some("14/01/2024 06:30:00"));
        assert!(cli.offline && cli.no_weather && cli.no_moon && cli.no_color && cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.json")));
    }

    #[test]
    fn negative_coordinates_are_a_value() {
        let cli = Cli::try_parse_from(["panchanga", "--place", "-33.87,151.21"]).unwrap();
        assert_eq!(cli.place.as_deref(), Some("-33.87,151.21"));
    }
}
