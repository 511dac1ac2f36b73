use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::Field,
    page::Page,
    ui::{components::card::Card, theme::Theme},
};

/// The new quote form, fed from the page's creation inputs.
pub fn render(frame: &mut Frame<'_>, area: Rect, page: &Page, focus: Field, theme: &Theme) {
    let doc = page.document();
    let line = |label: &'static str, value: &str, active: bool| {
        let style = if active {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let cursor = if active { "_" } else { "" };
        Line::from(vec![
            Span::styled(label, style),
            Span::styled(format!("{value}{cursor}"), Style::default().fg(theme.text)),
        ])
    };

    let lines = vec![
        line(
            "New Quote: ",
            doc.value(page.new_quote_input()).unwrap_or_default(),
            focus == Field::Quote,
        ),
        line(
            "Author: ",
            doc.value(page.author_input()).unwrap_or_default(),
            focus == Field::Author,
        ),
    ];

    Card::new("New quote", theme)
        .focused(true)
        .render_with(frame, area, Paragraph::new(lines));
}
