use crate::locale::{Locale, Strings};
use crate::models::{Layer, Topic};
use crate::session::{Display, QuestionSession};
use crate::ui::layout::calculate_question_chunks;
use crate::ui::{draw_invalid, key_hint};
use crate::utils::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Text shown inside the question card.
pub fn card_text<'s>(session: &'s QuestionSession, strings: &'static Strings) -> &'s str {
    if session.is_loading() {
        return strings.loading;
    }
    match session.current() {
        Display::NotStarted if session.pool().is_empty() => strings.no_questions,
        Display::NotStarted => strings.question_prompt_not_started,
        Display::Question(question) => question.text.as_str(),
        Display::Exhausted => strings.end_of_layer,
    }
}

fn draw_timer(f: &mut Frame, area: Rect, session: &QuestionSession) {
    let countdown = session.countdown();
    if !countdown.is_active() {
        return;
    }
    let timer = Paragraph::new(countdown.remaining().to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default());
    f.render_widget(timer, Rect { y: area.y + 1, height: 1, ..area }.intersection(area));
}

pub fn draw_question(
    f: &mut Frame,
    topic: Option<&Topic>,
    layer: Option<&Layer>,
    session: Option<&QuestionSession>,
    locale: Locale,
) {
    let strings = locale.strings();
    let (topic, layer, session) = match (topic, layer, session) {
        (None, _, _) => {
            draw_invalid(f, strings.error_invalid_topic, locale);
            return;
        }
        (Some(topic), Some(layer), Some(session)) => (topic, layer, session),
        _ => {
            draw_invalid(f, strings.error_invalid_layer, locale);
            return;
        }
    };

    let layout = calculate_question_chunks(f.area());
    let inner_width = layout.header_area.width.saturating_sub(2) as usize;

    let mut header_text = Text::default();
    header_text.push_line(Line::styled(
        truncate_to_width(
            &format!("{}: {}", strings.topic_label, topic.name.get(locale)),
            inner_width,
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    header_text.push_line(Line::styled(
        truncate_to_width(
            &format!(
                "{} {} - {}",
                strings.layer_label,
                layer.id,
                layer.name.get(locale)
            ),
            inner_width,
        ),
        Style::default().fg(Color::Gray),
    ));
    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::LEFT | Borders::RIGHT));
    f.render_widget(header, layout.header_area);

    let (shown, total) = session.progress();
    let card_title = if session.is_started() && total > 0 {
        format!("{}/{}", shown, total)
    } else {
        String::new()
    };
    let card_style = match session.current() {
        Display::Exhausted => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::ITALIC),
        Display::Question(_) => Style::default().add_modifier(Modifier::BOLD),
        Display::NotStarted => Style::default().fg(Color::Gray),
    };

    // Push the text towards the vertical middle of the card.
    let text = card_text(session, strings);
    let inner_height = layout.card_area.height.saturating_sub(2);
    let mut card_text_lines = Text::default();
    for _ in 0..inner_height.saturating_sub(1) / 2 {
        card_text_lines.push_line(Line::from(""));
    }
    card_text_lines.push_line(Line::styled(text, card_style));

    let card = Paragraph::new(card_text_lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(card_title),
        );
    f.render_widget(card, layout.card_area);

    draw_timer(f, layout.timer_left, session);
    draw_timer(f, layout.timer_right, session);

    let label = if session.is_started() {
        strings.button_next
    } else {
        strings.button_start
    };
    let button_style = if session.can_advance() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(label)
        .style(button_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, layout.button_area);

    let mut help_spans = Vec::new();
    help_spans.extend(key_hint("Enter/Space", label));
    help_spans.extend(key_hint("Esc", strings.back));
    help_spans.extend(key_hint("Ctrl+C", strings.quit));
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_card_text_states() {
        let strings = Locale::En.strings();

        let loading = QuestionSession::new(30);
        assert_eq!(card_text(&loading, strings), strings.loading);

        let empty = QuestionSession::with_pool(Vec::new(), 30);
        assert_eq!(card_text(&empty, strings), strings.no_questions);

        let mut session = QuestionSession::with_pool(vec![Question::new("Q1")], 0);
        assert_eq!(card_text(&session, strings), strings.question_prompt_not_started);

        let mut rng = StdRng::seed_from_u64(1);
        session.advance(&mut rng);
        assert_eq!(card_text(&session, strings), "Q1");

        let generation = session.countdown().generation();
        session.tick(generation);
        session.advance(&mut rng);
        assert_eq!(card_text(&session, strings), strings.end_of_layer);
    }
}
