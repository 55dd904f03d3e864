use std::fmt;
use std::str::FromStr;

/// Display language. Italian is the language every question resource ships in;
/// other languages are optional variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    It,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::It, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    pub fn is_default(self) -> bool {
        self == Locale::default()
    }

    pub fn toggle(self) -> Self {
        match self {
            Locale::It => Locale::En,
            Locale::En => Locale::It,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::It => &IT,
            Locale::En => &EN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts bare language codes and regional tags such as `en_US` or `it-IT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "it" => Ok(Locale::It),
            "en" => Ok(Locale::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// A piece of catalog text available in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub it: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(it: &'static str, en: &'static str) -> Self {
        Self { it, en }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::It => self.it,
            Locale::En => self.en,
        }
    }
}

/// UI labels for one language.
#[derive(Debug)]
pub struct Strings {
    pub app_title: &'static str,
    pub instructions_title: &'static str,
    pub instructions_text_1: &'static str,
    pub instructions_text_2: &'static str,
    pub topic_label: &'static str,
    pub layer_label: &'static str,
    pub button_start: &'static str,
    pub button_next: &'static str,
    pub question_prompt_not_started: &'static str,
    pub end_of_layer: &'static str,
    pub no_questions: &'static str,
    pub loading: &'static str,
    pub error_invalid_topic: &'static str,
    pub error_invalid_layer: &'static str,
    pub back: &'static str,
    pub select: &'static str,
    pub navigate: &'static str,
    pub language: &'static str,
    pub instructions_toggle: &'static str,
    pub quit: &'static str,
    pub footer_text: &'static str,
}

static IT: Strings = Strings {
    app_title: "Strati",
    instructions_title: "Come si gioca",
    instructions_text_1: "Scegli un tema e uno strato. Leggi la domanda ad alta voce e rispondete a turno, senza fretta.",
    instructions_text_2: "Ogni strato scende un po' più in profondità. Tra una domanda e l'altra c'è un breve timer: usatelo per ascoltare.",
    topic_label: "Tema",
    layer_label: "Strato",
    button_start: "Inizia",
    button_next: "Avanti",
    question_prompt_not_started: "Premi Inizia per la prima domanda",
    end_of_layer: "Avete esplorato tutte le domande di questo strato. Premi Avanti per ricominciare.",
    no_questions: "Nessuna domanda disponibile per questo strato",
    loading: "Caricamento...",
    error_invalid_topic: "Tema non valido",
    error_invalid_layer: "Strato non valido",
    back: "Indietro",
    select: "Scegli",
    navigate: "Sposta",
    language: "Lingua",
    instructions_toggle: "Istruzioni",
    quit: "Esci",
    footer_text: "Fatto con cura, per conversazioni vere.",
};

static EN: Strings = Strings {
    app_title: "Strati",
    instructions_title: "How to play",
    instructions_text_1: "Pick a topic and a layer. Read the question out loud and take turns answering, no rush.",
    instructions_text_2: "Each layer goes a little deeper. There is a short timer between questions: use it to listen.",
    topic_label: "Topic",
    layer_label: "Layer",
    button_start: "Start",
    button_next: "Next",
    question_prompt_not_started: "Press Start for the first question",
    end_of_layer: "You have explored every question in this layer. Press Next to start over.",
    no_questions: "No questions available for this layer",
    loading: "Loading...",
    error_invalid_topic: "Invalid topic",
    error_invalid_layer: "Invalid layer",
    back: "Back",
    select: "Select",
    navigate: "Navigate",
    language: "Language",
    instructions_toggle: "Instructions",
    quit: "Quit",
    footer_text: "Made with care, for real conversations.",
};
