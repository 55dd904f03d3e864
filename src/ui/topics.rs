use crate::locale::Locale;
use crate::models::Topic;
use crate::ui::key_hint;
use crate::ui::layout::calculate_topics_chunks;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn draw_language_switcher(f: &mut Frame, area: Rect, locale: Locale) {
    let mut spans = Vec::new();
    for (i, option) in Locale::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::from(" "));
        }
        let style = if *option == locale {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(option.code().to_uppercase(), style));
    }

    let switcher = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(switcher, area);
}

fn draw_instructions(f: &mut Frame, area: Rect, locale: Locale, expanded: bool) {
    let strings = locale.strings();
    let marker = if expanded { "▾" } else { "▸" };
    let title = format!("{} {}", marker, strings.instructions_title);

    let text = if expanded {
        let mut text = Text::default();
        text.push_line(Line::from(strings.instructions_text_1));
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            strings.instructions_text_2,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text
    } else {
        Text::default()
    };

    let instructions = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(instructions, area);
}

pub fn draw_topics(
    f: &mut Frame,
    topics: &[Topic],
    selected_topic: usize,
    locale: Locale,
    instructions_expanded: bool,
) {
    let strings = locale.strings();
    let layout = calculate_topics_chunks(f.area(), instructions_expanded);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(11)])
        .split(layout.header_area);

    let title = Paragraph::new(strings.app_title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, header_chunks[0]);
    draw_language_switcher(f, header_chunks[1], locale);

    draw_instructions(f, layout.instructions_area, locale, instructions_expanded);

    let items: Vec<ListItem> = topics
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let style = if i == selected_topic {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {}  {}", topic.icon, topic.name.get(locale))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(strings.topic_label),
    );
    f.render_widget(list, layout.list_area);

    let footer = Paragraph::new(strings.footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, layout.footer_area);

    let mut help_spans = Vec::new();
    help_spans.extend(key_hint("↑/↓", strings.navigate));
    help_spans.extend(key_hint("Enter", strings.select));
    help_spans.extend(key_hint("l", strings.language));
    help_spans.extend(key_hint("i", strings.instructions_toggle));
    help_spans.extend(key_hint("Esc", strings.quit));
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
