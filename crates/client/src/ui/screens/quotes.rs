use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::{AppState, Field, Mode},
    page::{CardView, Page},
    ui::{components::card::Card, theme::Theme},
};

const CARD_HEIGHT: u16 = 5;
const EDIT_ROWS: u16 = 2;

fn card_height(card: &CardView) -> u16 {
    if card.editing {
        CARD_HEIGHT + EDIT_ROWS
    } else {
        CARD_HEIGHT
    }
}

/// First card to draw so that `selected` is visible in `height` rows.
fn scroll_offset(cards: &[CardView], selected: usize, height: u16) -> usize {
    let mut used = 0u16;
    let mut first = selected.min(cards.len().saturating_sub(1));
    for (index, card) in cards.iter().enumerate().take(first + 1).rev() {
        used = used.saturating_add(card_height(card));
        if used > height {
            break;
        }
        first = index;
    }
    first
}

pub fn render(frame: &mut Frame<'_>, area: Rect, page: &Page, state: &AppState, theme: &Theme) {
    let cards = page.card_views();
    if cards.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No quotes yet. Press n to add one.",
            Style::default().fg(theme.text_muted),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let editing = match &state.mode {
        Mode::Edit { id, field } => Some((id, *field)),
        _ => None,
    };

    let mut y = area.y;
    for (index, card) in cards
        .iter()
        .enumerate()
        .skip(scroll_offset(&cards, state.selected, area.height))
    {
        let height = card_height(card);
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        y += height;

        let focus = editing
            .filter(|(id, _)| **id == card.id)
            .map(|(_, field)| field);
        let title = format!("#{}", card.id);
        Card::new(&title, theme)
            .focused(index == state.selected)
            .render_with(frame, rect, card_body(card, focus, theme));
    }
}

fn card_body<'a>(card: &'a CardView, focus: Option<Field>, theme: &Theme) -> Paragraph<'a> {
    let mut lines = vec![
        Line::from(Span::styled(
            card.quote.as_str(),
            Style::default().fg(theme.text).add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("- {}", card.author),
            Style::default().fg(theme.text_muted),
        )),
        Line::from(vec![
            Span::styled("Likes: ", Style::default().fg(theme.text_muted)),
            Span::styled(card.likes.as_str(), Style::default().fg(theme.positive)),
        ]),
    ];

    if card.editing {
        let field_line = |label: &'a str, value: &'a str, active: bool| {
            let style = if active {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text_muted)
            };
            let cursor = if active { "_" } else { "" };
            Line::from(vec![
                Span::styled(label, style),
                Span::raw(format!("{value}{cursor}")),
            ])
        };
        lines.push(field_line(
            "Edit Quote: ",
            card.edit_quote.as_str(),
            focus == Some(Field::Quote),
        ));
        lines.push(field_line(
            "Edit Author: ",
            card.edit_author.as_str(),
            focus == Some(Field::Author),
        ));
    }

    Paragraph::new(lines).wrap(Wrap { trim: true })
}
