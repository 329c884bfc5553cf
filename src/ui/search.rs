use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Enter anime name or theme...";

/// Render the search input box
///
/// Shows the placeholder while the query is empty and a block cursor at the
/// end of the typed text. The value persists after submission so it can be
/// edited and re-submitted.
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .style(Style::default().fg(Color::Cyan));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if query.is_empty() {
        Line::from(vec![
            Span::styled("█", cursor_style),
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(query.to_string(), Style::default().fg(Color::White)),
            Span::styled("█", cursor_style),
        ])
    };

    f.render_widget(Paragraph::new(input_line).block(block), area);
}
