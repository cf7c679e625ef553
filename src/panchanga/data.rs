//! Name and city tables.
//!
//! Both tables ship inside the binary. A data directory given on the command
//! line replaces them with `sanskrit_names.json` and `cities.json` read from
//! that directory.

use crate::calendar::SanskritNames;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const NAMES_FILE: &str = "sanskrit_names.json";
pub const CITIES_FILE: &str = "cities.json";

const BUNDLED_NAMES: &str = include_str!("../../data/sanskrit_names.json");
const BUNDLED_CITIES: &str = include_str!("../../data/cities.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone id.
    pub timezone: String,
}

/// City name to location, sorted by name.
pub type CityTable = BTreeMap<String, City>;

pub fn bundled_names() -> Result<SanskritNames> {
    SanskritNames::from_json(BUNDLED_NAMES)
}

pub fn bundled_cities() -> Result<CityTable> {
    Ok(serde_json::from_str(BUNDLED_CITIES)?)
}

/// Where the tables come from for this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Bundled,
    Dir(PathBuf),
}

impl DataSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map(DataSource::Dir).unwrap_or_default()
    }

    pub fn names(&self) -> Result<SanskritNames> {
        match self {
            DataSource::Bundled => bundled_names(),
            DataSource::Dir(dir) => SanskritNames::from_json(&read(dir, NAMES_FILE)?),
        }
    }

    pub fn cities(&self) -> Result<CityTable> {
        match self {
            DataSource::Bundled => bundled_cities(),
            DataSource::Dir(dir) => Ok(serde_json::from_str(&read(dir, CITIES_FILE)?)?),
        }
    }
}

fn read(dir: &Path, file: &str) -> Result<String> {
    let path = dir.join(file);
    debug!(path = %path.display(), "reading data file");
    Ok(fs::read_to_string(path)?)
}
