use crate::locale::Locale;
use crate::models::Topic;
use crate::ui::layout::calculate_layers_chunks;
use crate::ui::{draw_invalid, key_hint};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_layers(f: &mut Frame, topic: Option<&Topic>, selected_layer: usize, locale: Locale) {
    let strings = locale.strings();
    let Some(topic) = topic else {
        draw_invalid(f, strings.error_invalid_topic, locale);
        return;
    };

    let layout = calculate_layers_chunks(f.area());

    let title = Paragraph::new(format!(
        "{}: {} {}",
        strings.topic_label,
        topic.icon,
        topic.name.get(locale)
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let items: Vec<ListItem> = topic
        .layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let selected = i == selected_layer;
            let label_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let name_style = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{} {}", strings.layer_label, layer.id),
                    label_style,
                )),
                Line::from(Span::styled(
                    format!("  {}", layer.name.get(locale)),
                    name_style,
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, layout.list_area);

    let mut help_spans = Vec::new();
    help_spans.extend(key_hint("↑/↓", strings.navigate));
    help_spans.extend(key_hint("Enter", strings.select));
    help_spans.extend(key_hint("Esc", strings.back));
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
