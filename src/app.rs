use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::loader::load_questions_async;
use crate::locale::Locale;
use crate::models::{AppEvent, Layer, Topic};
use crate::routes::Route;
use crate::session::{Advance, QuestionSession};
use crate::timer::{spawn_countdown, TaskGuard};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc::UnboundedSender;

/// The question session for the layer on screen, together with the tasks
/// feeding it. Dropping it cancels the pool load and any running countdown.
#[derive(Debug)]
pub struct ActiveSession {
    pub id: u64,
    pub topic_id: String,
    pub layer_id: u32,
    pub session: QuestionSession,
    load_task: Option<TaskGuard>,
    timer: Option<TaskGuard>,
}

impl ActiveSession {
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn load_pending(&self) -> bool {
        self.load_task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

pub struct App<'a> {
    catalog: &'a Catalog,
    config: AppConfig,
    locale: Locale,
    route: Route,
    selected_topic: usize,
    selected_layer: usize,
    instructions_expanded: bool,
    session: Option<ActiveSession>,
    next_session_id: u64,
    events_tx: UnboundedSender<AppEvent>,
    rng: StdRng,
    should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog, config: AppConfig, events_tx: UnboundedSender<AppEvent>) -> Self {
        Self::with_rng(catalog, config, events_tx, StdRng::from_entropy())
    }

    pub fn with_rng(
        catalog: &'a Catalog,
        config: AppConfig,
        events_tx: UnboundedSender<AppEvent>,
        rng: StdRng,
    ) -> Self {
        let locale = config.locale;
        Self {
            catalog,
            config,
            locale,
            route: Route::TopicsSelection,
            selected_topic: 0,
            selected_layer: 0,
            instructions_expanded: false,
            session: None,
            next_session_id: 0,
            events_tx,
            rng,
            should_quit: false,
        }
    }

    /// Opens the configured start route, if any. Unparseable routes are
    /// logged and the topic list is shown instead.
    pub fn open_start_route(&mut self) {
        let Some(path) = self.config.start_route.clone() else {
            return;
        };
        match Route::parse(&path) {
            Ok(route) => self.navigate(route),
            Err(e) => tracing::warn!(error = %e, path = %path, "ignoring start route"),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn selected_topic(&self) -> usize {
        self.selected_topic
    }

    pub fn selected_layer(&self) -> usize {
        self.selected_layer
    }

    pub fn instructions_expanded(&self) -> bool {
        self.instructions_expanded
    }

    pub fn session(&self) -> Option<&ActiveSession> {
        self.session.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Topic named by the current route, if it exists in the catalog.
    pub fn current_topic(&self) -> Option<&'a Topic> {
        match &self.route {
            Route::TopicsSelection => None,
            Route::LayersSelection { topic_id } | Route::Question { topic_id, .. } => {
                self.catalog.topic(topic_id)
            }
        }
    }

    pub fn current_layer(&self) -> Option<&'a Layer> {
        match &self.route {
            Route::Question { topic_id, layer_id } => {
                self.catalog.layer(topic_id, *layer_id).map(|(_, layer)| layer)
            }
            _ => None,
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            tracing::info!(from = %self.locale, to = %locale, "locale changed");
            self.locale = locale;
        }
    }

    /// Switches screens. Leaving a question screen discards its session;
    /// entering one starts loading a fresh pool for that layer.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(route = %route, "navigate");
        let catalog = self.catalog;
        self.session = None;

        match &route {
            Route::TopicsSelection => {}
            Route::LayersSelection { topic_id } => {
                // Keep the cursor on the layer we came back from.
                self.selected_layer = match &self.route {
                    Route::Question {
                        topic_id: previous,
                        layer_id,
                    } if previous == topic_id => catalog
                        .topic(topic_id)
                        .and_then(|t| t.layers.iter().position(|l| l.id == *layer_id))
                        .unwrap_or(0),
                    _ => 0,
                };
            }
            Route::Question { topic_id, layer_id } => match catalog.layer(topic_id, *layer_id) {
                Some((_, layer)) => self.session = Some(self.start_session(topic_id, layer)),
                None => {
                    tracing::warn!(topic_id = %topic_id, layer_id, "question screen for unknown layer")
                }
            },
        }

        self.route = route;
    }

    fn start_session(&mut self, topic_id: &str, layer: &Layer) -> ActiveSession {
        self.next_session_id += 1;
        let id = self.next_session_id;

        let tx = self.events_tx.clone();
        let dir = self.config.questions_dir.clone();
        let resource = layer.resource.to_string();
        let locale = self.locale;
        let handle = tokio::spawn(async move {
            let questions = load_questions_async(dir, resource, locale).await;
            let _ = tx.send(AppEvent::PoolLoaded {
                session_id: id,
                questions,
            });
        });

        ActiveSession {
            id,
            topic_id: topic_id.to_string(),
            layer_id: layer.id,
            session: QuestionSession::new(self.config.countdown_secs),
            load_task: Some(TaskGuard::new(handle)),
            timer: None,
        }
    }

    pub fn go_back(&mut self) {
        match self.route.parent() {
            Some(parent) => self.navigate(parent),
            None => self.should_quit = true,
        }
    }

    /// Start/Next on the question screen.
    pub fn advance(&mut self) -> Advance {
        let Some(active) = self.session.as_mut() else {
            return Advance::Blocked;
        };

        let outcome = active.session.advance(&mut self.rng);
        if outcome != Advance::Blocked {
            let countdown = active.session.countdown();
            active.timer = Some(spawn_countdown(
                self.events_tx.clone(),
                active.id,
                countdown.generation(),
                countdown.ticks_to_expire(),
            ));
        }
        outcome
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PoolLoaded {
                session_id,
                questions,
            } => match self.session.as_mut() {
                Some(active) if active.id == session_id => {
                    tracing::info!(
                        topic_id = %active.topic_id,
                        layer_id = active.layer_id,
                        count = questions.len(),
                        "question pool ready"
                    );
                    active.session.set_pool(questions);
                    active.load_task = None;
                }
                _ => tracing::debug!(session_id, "dropping pool for a closed session"),
            },
            AppEvent::Tick {
                session_id,
                generation,
            } => {
                if let Some(active) = self.session.as_mut()
                    && active.id == session_id
                    && active.session.tick(generation)
                    && !active.session.countdown().is_active()
                {
                    active.timer = None;
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.route {
            Route::TopicsSelection => self.handle_topics_key(key),
            Route::LayersSelection { .. } => self.handle_layers_key(key),
            Route::Question { .. } => self.handle_question_key(key),
        }
    }

    fn handle_topics_key(&mut self, key: KeyEvent) {
        let count = self.catalog.topics().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.selected_topic = self.selected_topic.saturating_sub(1),
            KeyCode::Down => {
                if self.selected_topic < count.saturating_sub(1) {
                    self.selected_topic += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(topic) = self.catalog.topics().get(self.selected_topic) {
                    self.navigate(Route::layers(topic.id));
                }
            }
            KeyCode::Char('l') => self.set_locale(self.locale.toggle()),
            KeyCode::Char('i') => self.instructions_expanded = !self.instructions_expanded,
            _ => {}
        }
    }

    fn handle_layers_key(&mut self, key: KeyEvent) {
        let Some(topic) = self.current_topic() else {
            if matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter) {
                self.go_back();
            }
            return;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            KeyCode::Up => self.selected_layer = self.selected_layer.saturating_sub(1),
            KeyCode::Down => {
                if self.selected_layer < topic.layers.len().saturating_sub(1) {
                    self.selected_layer += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(layer) = topic.layers.get(self.selected_layer) {
                    self.navigate(Route::question(topic.id, layer.id));
                }
            }
            _ => {}
        }
    }

    fn handle_question_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.advance() == Advance::Blocked {
                    tracing::debug!("advance not allowed yet");
                }
            }
            _ => {}
        }
    }
}
