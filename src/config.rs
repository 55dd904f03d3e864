//! Runtime configuration read from the environment.
use crate::locale::Locale;
use crate::session::DEFAULT_COUNTDOWN_SECS;
use std::env;
use std::path::PathBuf;

pub const ENV_QUESTIONS_DIR: &str = "STRATI_QUESTIONS_DIR";
pub const ENV_COUNTDOWN_SECS: &str = "STRATI_COUNTDOWN_SECS";
pub const ENV_LOCALE: &str = "STRATI_LOCALE";
pub const ENV_LOG_DIR: &str = "STRATI_LOG_DIR";
pub const ENV_START_ROUTE: &str = "STRATI_START_ROUTE";

/// System locale variables, highest precedence first.
const SYSTEM_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the `<resource>.txt` question files.
    pub questions_dir: PathBuf,
    /// Countdown ceiling in seconds, at least 1.
    pub countdown_secs: u32,
    pub locale: Locale,
    pub log_dir: PathBuf,
    /// Path-style route to open on launch, e.g. `question/love/2`.
    pub start_route: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            questions_dir: PathBuf::from("questions"),
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            locale: Locale::default(),
            log_dir: PathBuf::from("."),
            start_route: None,
        }
    }
}

impl AppConfig {
    /// Environment variables:
    /// - `STRATI_QUESTIONS_DIR` - question resource directory (default: `questions`)
    /// - `STRATI_COUNTDOWN_SECS` - seconds between questions (default: 30)
    /// - `STRATI_LOCALE` - `it` or `en` (default: the system locale from
    ///   `LC_ALL`, `LC_MESSAGES` or `LANG`, else `it`)
    /// - `STRATI_LOG_DIR` - where `strati.log` is written (default: `.`)
    /// - `STRATI_START_ROUTE` - screen to open on launch
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = non_empty(lookup(ENV_QUESTIONS_DIR)) {
            config.questions_dir = PathBuf::from(dir);
        }
        if let Some(secs) = parse::<u32>(lookup(ENV_COUNTDOWN_SECS)) {
            config.countdown_secs = secs.max(1);
        }
        config.locale = parse::<Locale>(lookup(ENV_LOCALE))
            .or_else(|| system_locale(&lookup))
            .unwrap_or_default();
        if let Some(dir) = non_empty(lookup(ENV_LOG_DIR)) {
            config.log_dir = PathBuf::from(dir);
        }
        config.start_route = non_empty(lookup(ENV_START_ROUTE));

        config
    }
}

/// The first system locale variable that is set decides; an unsupported
/// language there means the default locale.
fn system_locale<F>(lookup: &F) -> Option<Locale>
where
    F: Fn(&str) -> Option<String>,
{
    let value = SYSTEM_LOCALE_VARS
        .iter()
        .find_map(|var| non_empty(lookup(*var)))?;
    value.parse().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    non_empty(value)?.trim().parse().ok()
}
