use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::{ToastLevel, ToastState},
    ui::theme::Theme,
};

const MAX_WIDTH: u16 = 48;
const MAX_MESSAGE_LINES: u16 = 3;

impl ToastLevel {
    fn style(self, theme: &Theme) -> Style {
        match self {
            Self::Info => Style::default().fg(theme.text),
            Self::Success => Style::default().fg(theme.positive),
            Self::Error => Style::default().fg(theme.error),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Info => " Quotes ",
            Self::Success => " Saved ",
            Self::Error => " Server ",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Self::Info => "- ",
            Self::Success => "+ ",
            Self::Error => "! ",
        }
    }
}

/// Bottom-right box over the quote list, clear of the one-line hint bar.
/// Long messages (server errors mostly) wrap onto a few lines.
pub fn toast_area(area: Rect, toast: &ToastState) -> Rect {
    let text_len = (toast.level.marker().len() + toast.message.chars().count()) as u16;
    let width = text_len.saturating_add(2).min(MAX_WIDTH).min(area.width);
    let inner = width.saturating_sub(2).max(1);
    let lines = text_len.div_ceil(inner).clamp(1, MAX_MESSAGE_LINES);
    let height = (lines + 2).min(area.height.saturating_sub(1));

    let x = area.x + area.width.saturating_sub(width);
    let y = area
        .y
        .saturating_add(area.height.saturating_sub(height + 1));
    Rect { x, y, width, height }.intersection(area)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, toast: Option<&ToastState>, theme: &Theme) {
    let Some(toast) = toast else {
        return;
    };
    let rect = toast_area(area, toast);
    if rect.is_empty() {
        return;
    }
    let style = toast.level.style(theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(toast.level.title(), style.add_modifier(Modifier::BOLD)));
    let line = Line::from(vec![
        Span::styled(toast.level.marker(), style.add_modifier(Modifier::BOLD)),
        Span::styled(toast.message.as_str(), style),
    ]);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: true }).block(block),
        rect,
    );
}
