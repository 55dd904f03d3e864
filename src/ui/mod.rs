pub mod layout;
mod layers;
mod question;
mod topics;

pub use layers::draw_layers;
pub use layout::{calculate_layers_chunks, calculate_question_chunks, calculate_topics_chunks};
pub use question::{card_text, draw_question};
pub use topics::draw_topics;

use crate::app::App;
use crate::locale::Locale;
use crate::routes::Route;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders whichever screen the app's route points at.
pub fn draw(f: &mut Frame, app: &App) {
    match app.route() {
        Route::TopicsSelection => draw_topics(
            f,
            app.catalog().topics(),
            app.selected_topic(),
            app.locale(),
            app.instructions_expanded(),
        ),
        Route::LayersSelection { .. } => {
            draw_layers(f, app.current_topic(), app.selected_layer(), app.locale())
        }
        Route::Question { .. } => draw_question(
            f,
            app.current_topic(),
            app.current_layer(),
            app.session().map(|active| &active.session),
            app.locale(),
        ),
    }
}

pub(crate) fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", label)),
    ]
}

/// Placeholder for routes naming a topic or layer that does not exist.
pub fn draw_invalid(f: &mut Frame, message: &str, locale: Locale) {
    let strings = locale.strings();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([Constraint::Length(5), Constraint::Length(3)])
        .split(f.area());

    let body = Paragraph::new(message.to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[0]);

    let help = Paragraph::new(Line::from(Vec::from(key_hint("Esc", strings.back))))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
