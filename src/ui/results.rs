use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{app::DisplayState, markdown};

/// Render the result panel for the current display state
pub fn render_results(f: &mut Frame, area: Rect, display: &DisplayState) {
    let text = match display {
        DisplayState::Idle => Text::from(Span::styled(
            "Type a query and press Enter to get recommendations.",
            Style::default().fg(Color::DarkGray),
        )),
        DisplayState::Loading => Text::from(Span::styled(
            "Fetching recommendations...",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        )),
        DisplayState::Error(message) => Text::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
        DisplayState::Success(answer) => markdown::to_text(answer),
    };

    let panel = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Recommendations "));

    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(display: &DisplayState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| render_results(f, f.area(), display))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_loading_state() {
        let rendered = render_to_string(&DisplayState::Loading);
        assert!(rendered.contains("Fetching recommendations..."));
    }

    #[test]
    fn test_error_state() {
        let display = DisplayState::Error("Failed to fetch recommendations.".to_string());
        let rendered = render_to_string(&display);
        assert!(rendered.contains("Failed to fetch recommendations."));
    }

    #[test]
    fn test_success_strips_markup() {
        let display = DisplayState::Success("Hello **world**".to_string());
        let rendered = render_to_string(&display);
        // The marker characters never reach the screen, only the styled text
        assert!(rendered.contains("Hello world"));
        assert!(!rendered.contains("**"));
    }
}
