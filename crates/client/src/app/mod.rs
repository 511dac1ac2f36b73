use std::time::Duration;

use api_types::quote::QuoteId;
use crossterm::event::{self, Event, KeyEvent};

use crate::{
    client::Client,
    config::AppConfig,
    dispatch::UiEvent,
    dom::NodeId,
    error::{AppError, Result},
    page::{CardView, Page},
    render::Role,
    runtime::{Completion, Runtime},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Quote,
    Author,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Quote => Self::Author,
            Self::Author => Self::Quote,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    /// Filling the new quote form.
    Compose(Field),
    /// Filling the edit form of a card.
    Edit { id: QuoteId, field: Field },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: Mode,
    pub selected: usize,
    pub toast: Option<ToastState>,
    pub base_url: String,
}

pub struct App {
    page: Page,
    runtime: Runtime<Client>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        Ok(Self::with_parts(
            Page::new()?,
            Runtime::new(client),
            config.base_url,
        ))
    }

    fn with_parts(page: Page, runtime: Runtime<Client>, base_url: String) -> Self {
        Self {
            page,
            runtime,
            state: AppState {
                mode: Mode::Browse,
                selected: 0,
                toast: None,
                base_url,
            },
            should_quit: false,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(50);
        let commands = self.page.load();
        self.runtime.spawn_all(commands);

        while !self.should_quit {
            while let Some(completion) = self.runtime.try_next() {
                self.apply(completion);
            }

            terminal
                .draw(|frame| ui::render(frame, &self.page, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn apply(&mut self, completion: Completion) {
        if let Some(toast) = toast_for(&completion) {
            self.state.toast = Some(toast);
        }
        self.page.apply(completion);
        self.clamp_selection();
    }

    fn dispatch(&mut self, event: UiEvent) {
        let commands = self.page.dispatch(event);
        self.runtime.spawn_all(commands);
        self.clamp_selection();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let typing = self.state.mode != Mode::Browse;
        let action = map_key(key, typing);
        if action != AppAction::None {
            self.state.toast = None;
        }

        match self.state.mode.clone() {
            Mode::Browse => self.handle_browse(action),
            Mode::Compose(field) => self.handle_compose(action, field),
            Mode::Edit { id, field } => self.handle_edit(action, id, field),
        }
    }

    fn handle_browse(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::Up => self.state.selected = self.state.selected.saturating_sub(1),
            AppAction::Down => {
                self.state.selected = self.state.selected.saturating_add(1);
                self.clamp_selection();
            }
            AppAction::Like => self.click_selected(Role::LikeButton),
            AppAction::Delete => self.click_selected(Role::DeleteButton),
            AppAction::Edit => {
                if let Some(card) = self.selected_card() {
                    self.click_selected(Role::EditButton);
                    self.state.mode = Mode::Edit {
                        id: card.id,
                        field: Field::Quote,
                    };
                }
            }
            AppAction::Compose => self.state.mode = Mode::Compose(Field::Quote),
            AppAction::ToggleSort => self.dispatch(UiEvent::Click(self.page.sort_button())),
            _ => {}
        }
    }

    fn handle_compose(&mut self, action: AppAction, field: Field) {
        let input = match field {
            Field::Quote => self.page.new_quote_input(),
            Field::Author => self.page.author_input(),
        };
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => self.state.mode = Mode::Browse,
            AppAction::NextField => self.state.mode = Mode::Compose(field.next()),
            AppAction::Input(ch) => self.edit_value(input, |value| value.push(ch)),
            AppAction::Backspace => self.edit_value(input, |value| {
                value.pop();
            }),
            AppAction::Submit => {
                self.dispatch(UiEvent::Submit(self.page.new_quote_form()));
                for input in [self.page.new_quote_input(), self.page.author_input()] {
                    self.dispatch(UiEvent::Input {
                        node: input,
                        value: String::new(),
                    });
                }
                self.state.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    fn handle_edit(&mut self, action: AppAction, id: QuoteId, field: Field) {
        let role = match field {
            Field::Quote => Role::EditTextInput,
            Field::Author => Role::EditAuthorInput,
        };
        let Some(input) = self.page.card_element(&id, role) else {
            // The card went away, e.g. a sort toggle re-rendered the list.
            self.state.mode = Mode::Browse;
            return;
        };
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => {
                if let Err(err) = self.page.close_edit(&id) {
                    tracing::warn!(%id, "failed to close edit form: {err}");
                }
                self.state.mode = Mode::Browse;
            }
            AppAction::NextField => {
                self.state.mode = Mode::Edit {
                    id,
                    field: field.next(),
                }
            }
            AppAction::Input(ch) => self.edit_value(input, |value| value.push(ch)),
            AppAction::Backspace => self.edit_value(input, |value| {
                value.pop();
            }),
            AppAction::Submit => {
                if let Some(form) = self.page.card_element(&id, Role::EditForm) {
                    self.dispatch(UiEvent::Submit(form));
                }
                self.state.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    fn edit_value(&mut self, input: NodeId, change: impl FnOnce(&mut String)) {
        let mut value = self
            .page
            .document()
            .value(input)
            .unwrap_or_default()
            .to_string();
        change(&mut value);
        self.dispatch(UiEvent::Input { node: input, value });
    }

    fn selected_card(&self) -> Option<CardView> {
        self.page
            .card_views()
            .into_iter()
            .nth(self.state.selected)
    }

    fn click_selected(&mut self, role: Role) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if let Some(target) = self.page.card_element(&card.id, role) {
            self.dispatch(UiEvent::Click(target));
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.page.list().len();
        self.state.selected = self.state.selected.min(len.saturating_sub(1));
    }
}

/// Message shown to the user for a finished call, if any.
fn toast_for(completion: &Completion) -> Option<ToastState> {
    let error = |what: &str, err: &dyn std::fmt::Display| ToastState {
        message: format!("{what} failed: {err}"),
        level: ToastLevel::Error,
    };
    match completion {
        Completion::Listed { result: Err(err), .. } => Some(error("Loading quotes", err)),
        Completion::Created(Ok(_)) => Some(ToastState {
            message: "Quote added".to_string(),
            level: ToastLevel::Success,
        }),
        Completion::Created(Err(err)) => Some(error("Adding quote", err)),
        Completion::LikesIncremented { result: Err(err), .. } => Some(error("Like", err)),
        Completion::Edited { result: Err(err), .. } => Some(error("Edit", err)),
        Completion::Deleted { result: Ok(()), .. } => Some(ToastState {
            message: "Quote deleted".to_string(),
            level: ToastLevel::Info,
        }),
        Completion::Deleted { result: Err(err), .. } => Some(error("Delete", err)),
        _ => None,
    }
}
