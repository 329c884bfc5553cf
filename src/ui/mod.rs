//! Terminal layout: header banner, search box, result panel, footer

pub mod card;
pub mod results;
pub mod search;

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub fn render(f: &mut Frame, app: &App) {
    // Fixed chrome rows, result panel takes the rest
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, vertical[0]);
    search::render_search_input(f, vertical[1], &app.query);
    results::render_results(f, vertical[2], &app.display);
    render_footer(f, vertical[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Anime Recommender System",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Discover your next favorite anime with AI-powered recommendations!",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let year = chrono::Utc::now().year();
    let line = Line::from(vec![
        Span::styled(
            format!("© {} Anime Recommender", year),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            "Enter: search  Esc: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
