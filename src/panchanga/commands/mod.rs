use crate::calendar::Panchanga;
use crate::config::PlaceConfig;
use crate::model::Place;

pub mod report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Rendered box diagram, one entry per terminal line.
    pub diagram: Vec<String>,
    pub panchanga: Option<Panchanga>,
    pub place: Option<Place>,
    /// Config to persist after a successful run.
    pub config: Option<PlaceConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_diagram(mut self, diagram: Vec<String>) -> Self {
        self.diagram = diagram;
        self
    }

    pub fn with_panchanga(mut self, panchanga: Panchanga) -> Self {
        self.panchanga = Some(panchanga);
        self
    }

    pub fn with_place(mut self, place: Place) -> Self {
        self.place = Some(place);
        self
    }

    pub fn with_config(mut self, config: PlaceConfig) -> Self {
        self.config = Some(config);
        self
    }
}
