pub mod app;
pub mod catalog;
pub mod config;
pub mod loader;
pub mod locale;
pub mod logger;
pub mod models;
pub mod routes;
pub mod session;
pub mod terminal;
pub mod timer;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::{ActiveSession, App};
pub use catalog::Catalog;
pub use config::AppConfig;
pub use loader::{load_questions, load_questions_async, parse_questions, LoadError};
pub use locale::Locale;
pub use models::{AppEvent, Layer, Question, Topic};
pub use routes::{Route, RouteError};
pub use session::{Advance, Countdown, Display, QuestionSession, DEFAULT_COUNTDOWN_SECS};
pub use ui::draw;
