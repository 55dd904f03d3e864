use crate::locale::LocalizedText;
use std::fmt;

/// One line of a question resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// 1-based position inside the owning topic.
    pub id: u32,
    pub name: LocalizedText,
    /// File stem of the question resource, e.g. `love_2`.
    pub resource: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub name: LocalizedText,
    pub icon: &'static str,
    pub layers: Vec<Layer>,
}

impl Topic {
    pub fn layer(&self, layer_id: u32) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == layer_id)
    }
}

/// Messages delivered to the app from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    PoolLoaded {
        session_id: u64,
        questions: Vec<Question>,
    },
    Tick {
        session_id: u64,
        generation: u64,
    },
}
