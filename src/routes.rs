use std::fmt;
use std::str::FromStr;

const TOPICS_SELECTION: &str = "topics_selection";
const LAYERS_SELECTION: &str = "layers_selection";
const QUESTION: &str = "question";

/// Navigation destinations, addressed by path-style identifiers:
/// `topics_selection`, `layers_selection/{topicId}`, `question/{topicId}/{layerId}`.
///
/// A route only carries identifiers; whether they name a real topic or layer
/// is decided by the screen that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    TopicsSelection,
    LayersSelection {
        topic_id: String,
    },
    Question {
        topic_id: String,
        layer_id: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown destination: {0}")]
    UnknownDestination(String),
    #[error("missing parameter `{param}` in {path}")]
    MissingParameter { path: String, param: &'static str },
    #[error("layer id is not a number: {0}")]
    InvalidLayerId(String),
    #[error("unexpected trailing segments in {0}")]
    TrailingSegments(String),
}

impl Route {
    pub fn layers(topic_id: impl Into<String>) -> Self {
        Route::LayersSelection {
            topic_id: topic_id.into(),
        }
    }

    pub fn question(topic_id: impl Into<String>, layer_id: u32) -> Self {
        Route::Question {
            topic_id: topic_id.into(),
            layer_id,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::TopicsSelection => TOPICS_SELECTION.to_string(),
            Route::LayersSelection { topic_id } => format!("{}/{}", LAYERS_SELECTION, topic_id),
            Route::Question { topic_id, layer_id } => {
                format!("{}/{}/{}", QUESTION, topic_id, layer_id)
            }
        }
    }

    /// Where "back" leads from this screen.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::TopicsSelection => None,
            Route::LayersSelection { .. } => Some(Route::TopicsSelection),
            Route::Question { topic_id, .. } => Some(Route::layers(topic_id.clone())),
        }
    }

    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/');
        let head = segments.next().unwrap_or_default();

        let mut param = |name: &'static str| {
            segments
                .next()
                .filter(|segment| !segment.is_empty())
                .ok_or_else(|| RouteError::MissingParameter {
                    path: trimmed.to_string(),
                    param: name,
                })
        };

        let route = match head {
            TOPICS_SELECTION => Route::TopicsSelection,
            LAYERS_SELECTION => Route::layers(param("topicId")?),
            QUESTION => {
                let topic_id = param("topicId")?.to_string();
                let raw_layer = param("layerId")?;
                let layer_id = raw_layer
                    .parse::<u32>()
                    .map_err(|_| RouteError::InvalidLayerId(raw_layer.to_string()))?;
                Route::question(topic_id, layer_id)
            }
            other => return Err(RouteError::UnknownDestination(other.to_string())),
        };

        if segments.next().is_some() {
            return Err(RouteError::TrailingSegments(trimmed.to_string()));
        }
        Ok(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}
