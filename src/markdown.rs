//! Markdown-lite formatting for recommendation answers
//!
//! The service answers with plain text sprinkled with `**bold**` and
//! `*italic*` markers. Recognized markup is parsed into a small node tree and
//! rendered through ratatui's styled spans; everything else stays literal
//! text, so the answer is never interpreted as markup beyond these markers.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

/// One formatted span within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
}

impl Inline {
    fn into_span(self) -> Span<'static> {
        match self {
            Inline::Text(text) => Span::raw(text),
            Inline::Bold(text) => {
                Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
            }
            Inline::Italic(text) => {
                Span::styled(text, Style::default().add_modifier(Modifier::ITALIC))
            }
        }
    }
}

/// Parse answer text into lines of inline nodes
///
/// Single left-to-right pass, non-recursive: `**` is checked before `*` at
/// the same position, marked spans are not re-scanned, and an unterminated
/// marker is kept as literal text. Line breaks come from `\n`.
pub fn parse(source: &str) -> Vec<Vec<Inline>> {
    source.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut literal = String::new();
    let mut rest = line;

    while let Some(pos) = rest.find('*') {
        literal.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(after_marker) = rest.strip_prefix("**") {
            if let Some(end) = after_marker.find("**") {
                flush_literal(&mut nodes, &mut literal);
                nodes.push(Inline::Bold(after_marker[..end].to_string()));
                rest = &after_marker[end + 2..];
                continue;
            }
        } else if let Some(after_marker) = rest.strip_prefix('*') {
            if let Some(end) = after_marker.find('*') {
                flush_literal(&mut nodes, &mut literal);
                nodes.push(Inline::Italic(after_marker[..end].to_string()));
                rest = &after_marker[end + 1..];
                continue;
            }
        }

        // Unterminated marker, keep the star and move on
        literal.push('*');
        rest = &rest[1..];
    }

    literal.push_str(rest);
    flush_literal(&mut nodes, &mut literal);
    nodes
}

fn flush_literal(nodes: &mut Vec<Inline>, literal: &mut String) {
    if !literal.is_empty() {
        nodes.push(Inline::Text(std::mem::take(literal)));
    }
}

/// Render answer text as styled terminal lines
pub fn to_text(source: &str) -> Text<'static> {
    let lines: Vec<Line<'static>> = parse(source)
        .into_iter()
        .map(|nodes| {
            Line::from(
                nodes
                    .into_iter()
                    .map(Inline::into_span)
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(
            parse("just text"),
            vec![vec![Inline::Text("just text".to_string())]]
        );
    }

    #[test]
    fn test_bold_span() {
        assert_eq!(
            parse("Hello **world**"),
            vec![vec![
                Inline::Text("Hello ".to_string()),
                Inline::Bold("world".to_string()),
            ]]
        );
    }

    #[test]
    fn test_italic_span() {
        assert_eq!(
            parse("an *emphasized* word"),
            vec![vec![
                Inline::Text("an ".to_string()),
                Inline::Italic("emphasized".to_string()),
                Inline::Text(" word".to_string()),
            ]]
        );
    }

    #[test]
    fn test_bold_and_italic_mixed() {
        assert_eq!(
            parse("**Frieren** is a *quiet* show"),
            vec![vec![
                Inline::Bold("Frieren".to_string()),
                Inline::Text(" is a ".to_string()),
                Inline::Italic("quiet".to_string()),
                Inline::Text(" show".to_string()),
            ]]
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(
            parse("first\n\nsecond"),
            vec![
                vec![Inline::Text("first".to_string())],
                vec![],
                vec![Inline::Text("second".to_string())],
            ]
        );
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        assert_eq!(
            parse("a *dangling marker"),
            vec![vec![Inline::Text("a *dangling marker".to_string())]]
        );
    }

    #[test]
    fn test_bold_content_is_not_rescanned() {
        assert_eq!(
            parse("**a *nested* span**"),
            vec![vec![Inline::Bold("a *nested* span".to_string())]]
        );
    }

    #[test]
    fn test_to_text_styles() {
        let text = to_text("Hello **world**");
        assert_eq!(text.lines.len(), 1);

        let spans = &text.lines[0].spans;
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Hello ");
        assert_eq!(spans[1].content, "world");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_to_text_blank_line() {
        let text = to_text("one\n\ntwo");
        assert_eq!(text.lines.len(), 3);
        assert!(text.lines[1].spans.is_empty());
    }
}
