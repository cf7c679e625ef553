use crate::error::{PanchangaError, Result};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tithi,
    Nakshatra,
    Vaara,
    Yoga,
    Karana,
    Masa,
    Samvatsara,
    Ritu,
    Raasi,
    Ayana,
}

impl Category {
    /// Key of the table in `sanskrit_names.json`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Tithi => "tithis",
            Category::Nakshatra => "nakshatras",
            Category::Vaara => "varas",
            Category::Yoga => "yogas",
            Category::Karana => "karanas",
            Category::Masa => "masas",
            Category::Samvatsara => "samvats",
            Category::Ritu => "ritus",
            Category::Raasi => "raashi",
            Category::Ayana => "ayanas",
        }
    }
}

/// The name tables, keyed by category and then by the element index as a
/// string (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SanskritNames {
    tables: HashMap<String, HashMap<String, String>>,
}

impl SanskritNames {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn name(&self, category: Category, index: u32) -> Result<&str> {
        let table = self.tables.get(category.key()).ok_or_else(|| {
            PanchangaError::Data(format!("no '{}' table in name data", category.key()))
        })?;
        table
            .get(&index.to_string())
            .map(String::as_str)
            .ok_or_else(|| {
                PanchangaError::Data(format!("no {} named for index {}", category.key(), index))
            })
    }
}
