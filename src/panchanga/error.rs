use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanchangaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid date '{0}': expected DD/MM/YYYY HH:MM:SS")]
    Date(String),

    #[error("Timezone error: {0}")]
    Timezone(String),

    #[error("Geocoding error: {0}")]
    Geocode(String),

    #[error("{}", place_not_found_message(.place, .suggestions))]
    PlaceNotFound {
        place: String,
        suggestions: Vec<String>,
    },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Astronomy error: {0}")]
    Astro(String),
}

fn place_not_found_message(place: &str, suggestions: &[String]) -> String {
    let mut msg = format!("Supplied place '{}' not found!\n", place);
    if !suggestions.is_empty() {
        msg.push_str("Did you mean any of these?\n");
        for s in suggestions {
            msg.push_str(s);
            msg.push('\n');
        }
    }
    msg
}

pub type Result<T> = std::result::Result<T, PanchangaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_suggestions() {
        let err = PanchangaError::PlaceNotFound {
            place: "Bangalor".into(),
            suggestions: vec!["Bangalore".into(), "Mangalore".into()],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Supplied place 'Bangalor' not found!"));
        assert!(msg.contains("Did you mean any of these?\nBangalore\nMangalore\n"));
    }

    #[test]
    fn not_found_without_suggestions() {
        let err = PanchangaError::PlaceNotFound {
            place: "Xyz".into(),
            suggestions: vec![],
        };
        assert_eq!(err.to_string(), "Supplied place 'Xyz' not found!\n");
    }
}
