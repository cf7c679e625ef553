use crate::error::{PanchangaError, Result};
use crate::model::Place;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIRNAME: &str = ".panchanga";
const CONFIG_FILENAME: &str = "config.json";

/// The last place used, stored in ~/.panchanga/config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceConfig {
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone id.
    pub timezone: String,
}

impl Default for PlaceConfig {
    fn default() -> Self {
        Self {
            place: "Bangalore".to_string(),
            latitude: 12.971600,
            longitude: 77.594597,
            timezone: "Asia/Kolkata".to_string(),
        }
    }
}

impl PlaceConfig {
    /// `~/.panchanga/config.json`.
    pub fn default_path() -> Result<PathBuf> {
        let base = BaseDirs::new().ok_or_else(|| {
            PanchangaError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine home directory",
            ))
        })?;
        Ok(base.home_dir().join(CONFIG_DIRNAME).join(CONFIG_FILENAME))
    }

    /// Load the config at `path`, writing the defaults there first if the
    /// file does not exist.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "creating default config");
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: PlaceConfig = serde_json::from_str(&content)?;
        debug!(place = %config.place, "loaded config");
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Config recording `place` as resolved to `location`.
    pub fn remember(place: &str, location: &Place) -> Self {
        Self {
            place: place.to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone.clone(),
        }
    }
}
