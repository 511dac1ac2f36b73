pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, Mode},
    page::Page,
};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, page: &Page, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let compose_height = if matches!(state.mode, Mode::Compose(_)) {
        4
    } else {
        0
    };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Quotes
            Constraint::Length(compose_height),
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], page, state, &theme);
    screens::quotes::render(frame, layout[1], page, state, &theme);
    if let Mode::Compose(field) = state.mode {
        screens::compose::render(frame, layout[2], page, field, &theme);
    }
    render_bottom_bar(frame, layout[3], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, page: &Page, state: &AppState, theme: &Theme) {
    let doc = page.document();
    let line = Line::from(vec![
        Span::styled("Server", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.base_url)),
        Span::styled("Quotes", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", page.list().len())),
        Span::styled(
            doc.text_content(page.sort_button()),
            Style::default().fg(theme.accent),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = match state.mode {
        Mode::Browse => components::hints::common::browsing(),
        Mode::Compose(_) | Mode::Edit { .. } => components::hints::common::form_editing(),
    };
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}
