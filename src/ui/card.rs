use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Anime;

/// Render one anime as a card: artwork reference, genre, synopsis
///
/// Reusable display unit; the main page flow renders the answer text
/// directly, but structured results can be laid out as a row of these.
pub fn render_card(f: &mut Frame, area: Rect, anime: &Anime) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", anime.title));

    let lines = vec![
        Line::from(Span::styled(
            anime.image_ref().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                "Genre: ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(anime.genre.clone()),
        ]),
        Line::default(),
        Line::from(Span::raw(anime.synopsis.clone())),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(card, area);
}
