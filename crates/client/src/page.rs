//! The quote page: document, displayed list, listeners and UI state.
//!
//! Every user action goes through [`Page::dispatch`], which applies the
//! visible change right away and returns the remote calls to make. Results
//! of those calls come back through [`Page::apply`]. A failed call is logged
//! and leaves the page as it is; nothing is rolled back or retried.

use api_types::quote::QuoteId;

use crate::{
    dispatch::{CardAction, EventKind, Handler, Listeners, UiEvent, resolve_card_action},
    dom::{Document, DomError, NodeId},
    list::ListController,
    render::{EDIT_AUTHOR_INPUT, EDIT_TEXT_INPUT, Role},
    runtime::{Command, Completion},
    state::{SortMode, UiState},
};

pub const NEW_QUOTE_FORM_ID: &str = "new-quote-form";
pub const NEW_QUOTE_INPUT_ID: &str = "new-quote";
pub const AUTHOR_INPUT_ID: &str = "author";
pub const SORT_BUTTON_ID: &str = "sort-button";
pub const QUOTE_LIST_ID: &str = "quote-list";

/// What a card currently shows, read back from the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: QuoteId,
    pub quote: String,
    pub author: String,
    pub likes: String,
    pub editing: bool,
    pub edit_quote: String,
    pub edit_author: String,
}

#[derive(Debug)]
pub struct Page {
    doc: Document,
    list: ListController,
    listeners: Listeners,
    state: UiState,
    new_quote_form: NodeId,
    new_quote_input: NodeId,
    author_input: NodeId,
    sort_button: NodeId,
}

fn element(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Result<NodeId, DomError> {
    let node = doc.create_element(tag);
    for (name, value) in attrs {
        doc.set_attr(node, name, *value)?;
    }
    doc.append_child(parent, node)?;
    Ok(node)
}

impl Page {
    /// Builds the page skeleton and wires its three entry points: the
    /// creation form, the sort toggle and the delegated list listener.
    pub fn new() -> Result<Self, DomError> {
        let mut doc = Document::new();
        let root = doc.root();

        let new_quote_form = element(&mut doc, root, "form", &[("id", NEW_QUOTE_FORM_ID)])?;
        let new_quote_input = element(
            &mut doc,
            new_quote_form,
            "input",
            &[
                ("name", "quote"),
                ("type", "text"),
                ("id", NEW_QUOTE_INPUT_ID),
                ("placeholder", "Learn. Love. Code."),
                ("value", ""),
            ],
        )?;
        let author_input = element(
            &mut doc,
            new_quote_form,
            "input",
            &[
                ("name", "author"),
                ("type", "text"),
                ("id", AUTHOR_INPUT_ID),
                ("placeholder", "Flatiron School"),
                ("value", ""),
            ],
        )?;
        let submit = element(&mut doc, new_quote_form, "button", &[("type", "submit")])?;
        doc.set_text(submit, "Submit")?;

        let sort_button = element(&mut doc, root, "button", &[("id", SORT_BUTTON_ID)])?;
        let state = UiState::default();
        doc.set_text(sort_button, state.sort_mode().label())?;

        let container = element(&mut doc, root, "ul", &[("id", QUOTE_LIST_ID)])?;

        let mut listeners = Listeners::default();
        listeners.bind(new_quote_form, EventKind::Submit, Handler::CreateSubmit);
        listeners.bind(sort_button, EventKind::Click, Handler::SortToggle);
        listeners.bind(container, EventKind::Click, Handler::QuoteList);

        Ok(Self {
            doc,
            list: ListController::new(container),
            listeners,
            state,
            new_quote_form,
            new_quote_input,
            author_input,
            sort_button,
        })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn list(&self) -> &ListController {
        &self.list
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn sort_mode(&self) -> SortMode {
        self.state.sort_mode()
    }

    pub fn quote_list(&self) -> NodeId {
        self.list.container()
    }

    pub fn new_quote_form(&self) -> NodeId {
        self.new_quote_form
    }

    pub fn new_quote_input(&self) -> NodeId {
        self.new_quote_input
    }

    pub fn author_input(&self) -> NodeId {
        self.author_input
    }

    pub fn sort_button(&self) -> NodeId {
        self.sort_button
    }

    /// Element with `role` on `id`'s card.
    pub fn card_element(&self, id: &QuoteId, role: Role) -> Option<NodeId> {
        self.list.element_for(&self.doc, id, role)
    }

    pub fn card_view(&self, id: &QuoteId) -> Option<CardView> {
        let text = |role| {
            self.card_element(id, role)
                .map(|node| self.doc.text_content(node))
                .unwrap_or_default()
        };
        let value = |role| {
            self.card_element(id, role)
                .and_then(|node| self.doc.value(node))
                .unwrap_or_default()
                .to_string()
        };
        let form = self.card_element(id, Role::EditForm)?;

        Some(CardView {
            id: id.clone(),
            quote: text(Role::QuoteText),
            author: text(Role::QuoteAuthor),
            likes: text(Role::LikeCount),
            editing: !self.doc.is_hidden(form),
            edit_quote: value(Role::EditTextInput),
            edit_author: value(Role::EditAuthorInput),
        })
    }

    /// Cards in display order.
    pub fn card_views(&self) -> Vec<CardView> {
        self.list
            .quotes()
            .iter()
            .filter_map(|quote| self.card_view(&quote.id))
            .collect()
    }

    /// Initial fetch, rendered in the current sort mode.
    pub fn load(&self) -> Vec<Command> {
        vec![Command::ListQuotes {
            mode: self.state.sort_mode(),
        }]
    }

    /// Delivers `event` to its target and the target's ancestors, running
    /// every matching listener. Returns the remote calls to make.
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Command> {
        let (kind, target) = match event {
            UiEvent::Input { node, value } => {
                if let Err(err) = self.doc.set_value(node, value) {
                    tracing::debug!("ignoring input: {err}");
                }
                return Vec::new();
            }
            UiEvent::Click(node) => (EventKind::Click, node),
            UiEvent::Submit(node) => (EventKind::Submit, node),
        };

        if !self.doc.contains(target) {
            tracing::debug!(?target, "event target is no longer in the document");
            return Vec::new();
        }

        let mut commands = Vec::new();
        for current in self.doc.ancestors(target) {
            if !self.doc.contains(current) {
                continue;
            }
            for handler in self.listeners.handlers(current, kind) {
                match self.handle(handler, target, current) {
                    Ok(Some(command)) => commands.push(command),
                    Ok(None) => {}
                    Err(err) => tracing::warn!(?handler, "failed to handle {kind:?}: {err}"),
                }
            }
        }
        commands
    }

    fn handle(
        &mut self,
        handler: Handler,
        target: NodeId,
        current: NodeId,
    ) -> Result<Option<Command>, DomError> {
        match handler {
            Handler::QuoteList => {
                let Some((action, element)) = resolve_card_action(&self.doc, target, current)
                else {
                    return Ok(None);
                };
                let Some(id) = self.quote_id_of(element) else {
                    tracing::debug!(?element, "clicked element is not inside a card");
                    return Ok(None);
                };
                tracing::debug!(%id, ?action, "card action");
                match action {
                    CardAction::Like => self.like(&id),
                    CardAction::Delete => self.delete(&id),
                    CardAction::ToggleEdit => self.open_edit(&id),
                }
            }
            Handler::EditSubmit => self.submit_edit(current),
            Handler::CreateSubmit => Ok(Some(self.submit_create())),
            Handler::SortToggle => self.toggle_sort().map(Some),
        }
    }

    fn quote_id_of(&self, node: NodeId) -> Option<QuoteId> {
        let card = self
            .doc
            .ancestors(node)
            .into_iter()
            .find(|ancestor| self.doc.parent(*ancestor) == Some(self.list.container()))?;
        self.list
            .quotes()
            .iter()
            .find(|quote| self.list.card_for(&quote.id) == Some(card))
            .map(|quote| quote.id.clone())
    }

    fn like(&mut self, id: &QuoteId) -> Result<Option<Command>, DomError> {
        let Some(current) = self.list.displayed_likes(&self.doc, id) else {
            tracing::warn!(%id, "like counter is missing or unreadable");
            return Ok(None);
        };
        self.list
            .update_likes_display(&mut self.doc, id, current.saturating_add(1))?;
        Ok(Some(Command::IncrementLikes {
            id: id.clone(),
            current,
        }))
    }

    fn delete(&mut self, id: &QuoteId) -> Result<Option<Command>, DomError> {
        self.list.remove_card_for(&mut self.doc, id)?;
        self.listeners.prune(&self.doc);
        Ok(Some(Command::DeleteQuote { id: id.clone() }))
    }

    fn open_edit(&mut self, id: &QuoteId) -> Result<Option<Command>, DomError> {
        let Some(form) = self.card_element(id, Role::EditForm) else {
            return Ok(None);
        };
        self.doc.set_hidden(form, false)?;
        if self
            .listeners
            .bind(form, EventKind::Submit, Handler::EditSubmit)
        {
            tracing::debug!(%id, "edit form submit bound");
        }
        Ok(None)
    }

    /// Hides `id`'s edit form without saving. The submit listener stays
    /// bound for the next time the form is opened. Returns whether the
    /// form was open.
    pub fn close_edit(&mut self, id: &QuoteId) -> Result<bool, DomError> {
        let Some(form) = self.card_element(id, Role::EditForm) else {
            return Ok(false);
        };
        let was_open = !self.doc.is_hidden(form);
        self.doc.set_hidden(form, true)?;
        Ok(was_open)
    }

    fn submit_edit(&mut self, form: NodeId) -> Result<Option<Command>, DomError> {
        let Some(id) = self.quote_id_of(form) else {
            return Ok(None);
        };
        let input_value = |name: &str| {
            self.doc
                .find_by_attr(form, "name", name)
                .and_then(|input| self.doc.value(input))
                .unwrap_or_default()
                .to_string()
        };
        let text = input_value(EDIT_TEXT_INPUT);
        let author = input_value(EDIT_AUTHOR_INPUT);

        self.list
            .update_text_display(&mut self.doc, &id, &text, &author)?;
        self.doc.set_hidden(form, true)?;
        Ok(Some(Command::EditQuote { id, text, author }))
    }

    fn submit_create(&self) -> Command {
        let value = |node| self.doc.value(node).unwrap_or_default().to_string();
        Command::CreateQuote {
            text: value(self.new_quote_input),
            author: value(self.author_input),
        }
    }

    fn toggle_sort(&mut self) -> Result<Command, DomError> {
        let mode = self.state.toggle_sort();
        self.doc.set_text(self.sort_button, mode.label())?;
        self.list.clear(&mut self.doc)?;
        self.listeners.prune(&self.doc);
        tracing::debug!(?mode, "sort mode toggled");
        Ok(Command::ListQuotes { mode })
    }

    /// Feeds the result of a remote call back into the page.
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Listed {
                mode,
                result: Ok(quotes),
            } => {
                if mode != self.state.sort_mode() {
                    tracing::debug!(?mode, "discarding listing for a previous sort mode");
                    return;
                }
                if let Err(err) = self.render_all(quotes, mode) {
                    tracing::warn!("failed to render quotes: {err}");
                }
            }
            Completion::Listed { result: Err(err), .. } => {
                tracing::warn!(op = "list", "failed to fetch quotes: {err}");
            }
            Completion::Created(Ok(quote)) => {
                let id = quote.id.clone();
                match self.list.append_one(&mut self.doc, quote) {
                    Ok(Some(_)) => tracing::info!(%id, "quote created"),
                    Ok(None) => {}
                    Err(err) => tracing::warn!(%id, "failed to display created quote: {err}"),
                }
            }
            Completion::Created(Err(err)) => {
                tracing::warn!(op = "create", "failed to create quote: {err}");
            }
            Completion::LikesIncremented { id, result } => match result {
                Ok(_) => tracing::debug!(%id, "like saved"),
                Err(err) => tracing::warn!(op = "like", %id, "failed to save like: {err}"),
            },
            Completion::Edited { id, result } => match result {
                Ok(_) => tracing::debug!(%id, "edit saved"),
                Err(err) => tracing::warn!(op = "edit", %id, "failed to save edit: {err}"),
            },
            Completion::Deleted { id, result } => match result {
                Ok(()) => tracing::debug!(%id, "delete saved"),
                Err(err) => tracing::warn!(op = "delete", %id, "failed to delete quote: {err}"),
            },
        }
    }

    fn render_all(
        &mut self,
        quotes: Vec<api_types::quote::Quote>,
        mode: SortMode,
    ) -> Result<(), DomError> {
        let container = self.list.container();
        self.listeners
            .bind(container, EventKind::Click, Handler::QuoteList);
        self.list.render_all(&mut self.doc, quotes, mode)?;
        self.listeners.prune(&self.doc);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use api_types::quote::Quote;

    use super::*;
    use crate::client::ClientError;

    fn quote(id: u64, text: &str, author: &str, likes: u64) -> Quote {
        Quote {
            id: QuoteId::Number(id),
            quote: text.to_string(),
            author: author.to_string(),
            likes,
        }
    }

    fn loaded(quotes: Vec<Quote>) -> Page {
        let mut page = Page::new().unwrap();
        page.apply(Completion::Listed {
            mode: SortMode::InsertionOrder,
            result: Ok(quotes),
        });
        page
    }

    fn sample() -> Vec<Quote> {
        vec![
            quote(1, "Be yourself.", "Oscar Wilde", 3),
            quote(2, "It is a truth universally acknowledged.", "Jane Austen", 0),
            quote(3, "Never put off till tomorrow.", "Mark Twain", 7),
        ]
    }

    fn displayed_ids(page: &Page) -> Vec<String> {
        page.card_views().into_iter().map(|card| card.id.to_string()).collect()
    }

    fn button(page: &Page, id: u64, role: Role) -> NodeId {
        page.card_element(&QuoteId::Number(id), role).unwrap()
    }

    #[test]
    fn new_page_wires_entry_points() {
        let page = Page::new().unwrap();
        let doc = page.document();

        assert_eq!(doc.element_by_id(QUOTE_LIST_ID), Some(page.quote_list()));
        assert_eq!(doc.text_content(page.sort_button()), "Sort by author name: OFF");
        assert_eq!(page.listeners().count(page.quote_list(), EventKind::Click), 1);
        assert_eq!(page.load(), vec![Command::ListQuotes { mode: SortMode::InsertionOrder }]);
    }

    #[test]
    fn listing_renders_in_server_order() {
        let page = loaded(sample());
        assert_eq!(displayed_ids(&page), vec!["1", "2", "3"]);
        assert_eq!(page.listeners().count(page.quote_list(), EventKind::Click), 1);
    }

    #[test]
    fn like_updates_display_before_the_remote_call() {
        let mut page = loaded(sample());

        let commands = page.dispatch(UiEvent::Click(button(&page, 1, Role::LikeButton)));

        assert_eq!(page.card_view(&QuoteId::Number(1)).unwrap().likes, "4");
        assert_eq!(
            commands,
            vec![Command::IncrementLikes {
                id: QuoteId::Number(1),
                current: 3
            }]
        );
    }

    #[test]
    fn clicking_the_counter_inside_the_like_button_likes() {
        let mut page = loaded(sample());

        let commands = page.dispatch(UiEvent::Click(button(&page, 3, Role::LikeCount)));

        assert_eq!(page.card_view(&QuoteId::Number(3)).unwrap().likes, "8");
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn double_like_sends_each_observed_count() {
        let mut page = loaded(sample());
        let like = button(&page, 1, Role::LikeButton);

        let mut commands = page.dispatch(UiEvent::Click(like));
        commands.extend(page.dispatch(UiEvent::Click(like)));

        assert_eq!(page.card_view(&QuoteId::Number(1)).unwrap().likes, "5");
        assert_eq!(
            commands,
            vec![
                Command::IncrementLikes { id: QuoteId::Number(1), current: 3 },
                Command::IncrementLikes { id: QuoteId::Number(1), current: 4 },
            ]
        );
    }

    #[test]
    fn failed_like_is_not_rolled_back() {
        let mut page = loaded(sample());
        page.dispatch(UiEvent::Click(button(&page, 1, Role::LikeButton)));

        page.apply(Completion::LikesIncremented {
            id: QuoteId::Number(1),
            result: Err(ClientError::InvalidResponse("down".to_string())),
        });

        assert_eq!(page.card_view(&QuoteId::Number(1)).unwrap().likes, "4");
    }

    #[test]
    fn delete_removes_the_card_immediately() {
        let mut page = loaded(sample());
        let delete = button(&page, 2, Role::DeleteButton);

        let commands = page.dispatch(UiEvent::Click(delete));

        assert_eq!(displayed_ids(&page), vec!["1", "3"]);
        assert!(!page.document().contains(delete));
        assert_eq!(commands, vec![Command::DeleteQuote { id: QuoteId::Number(2) }]);

        page.apply(Completion::Deleted {
            id: QuoteId::Number(2),
            result: Err(ClientError::NotFound(QuoteId::Number(2))),
        });
        assert_eq!(displayed_ids(&page), vec!["1", "3"]);
    }

    #[test]
    fn clicks_on_removed_cards_are_ignored() {
        let mut page = loaded(sample());
        let like = button(&page, 2, Role::LikeButton);
        page.dispatch(UiEvent::Click(button(&page, 2, Role::DeleteButton)));

        assert!(page.dispatch(UiEvent::Click(like)).is_empty());
    }

    #[test]
    fn edit_round_trip_updates_text_and_hides_form() {
        let mut page = loaded(vec![quote(1, "old", "Mark Twain", 0)]);
        let id = QuoteId::Number(1);

        assert!(page.dispatch(UiEvent::Click(button(&page, 1, Role::EditButton))).is_empty());
        assert!(page.card_view(&id).unwrap().editing);

        let input = button(&page, 1, Role::EditTextInput);
        page.dispatch(UiEvent::Input {
            node: input,
            value: "new".to_string(),
        });
        let form = button(&page, 1, Role::EditForm);
        let commands = page.dispatch(UiEvent::Submit(form));

        let card = page.card_view(&id).unwrap();
        assert_eq!(card.quote, "new");
        assert_eq!(card.author, "Mark Twain");
        assert!(!card.editing);
        assert_eq!(
            commands,
            vec![Command::EditQuote {
                id,
                text: "new".to_string(),
                author: "Mark Twain".to_string()
            }]
        );
    }

    #[test]
    fn reopening_edit_does_not_bind_submit_twice() {
        let mut page = loaded(vec![quote(1, "old", "Mark Twain", 0)]);
        let edit = button(&page, 1, Role::EditButton);
        let form = button(&page, 1, Role::EditForm);

        let mut edits = 0;
        for _ in 0..2 {
            page.dispatch(UiEvent::Click(edit));
            edits += page
                .dispatch(UiEvent::Submit(form))
                .iter()
                .filter(|command| matches!(command, Command::EditQuote { .. }))
                .count();
        }

        assert_eq!(edits, 2);
        assert_eq!(page.listeners().count(form, EventKind::Submit), 1);
    }

    #[test]
    fn closing_edit_hides_the_form_and_keeps_one_submit_listener() {
        let mut page = loaded(vec![quote(1, "old", "Mark Twain", 0)]);
        let id = QuoteId::Number(1);
        let form = button(&page, 1, Role::EditForm);

        page.dispatch(UiEvent::Click(button(&page, 1, Role::EditButton)));
        assert!(page.close_edit(&id).unwrap());
        assert!(!page.card_view(&id).unwrap().editing);
        assert!(!page.close_edit(&id).unwrap());

        page.dispatch(UiEvent::Click(button(&page, 1, Role::EditButton)));
        assert!(page.card_view(&id).unwrap().editing);
        assert_eq!(page.listeners().count(form, EventKind::Submit), 1);
        assert!(!page.close_edit(&QuoteId::Number(9)).unwrap());
    }

    #[test]
    fn submitting_a_form_never_opened_does_nothing() {
        let mut page = loaded(vec![quote(1, "old", "Mark Twain", 0)]);
        let form = button(&page, 1, Role::EditForm);
        assert!(page.dispatch(UiEvent::Submit(form)).is_empty());
    }

    #[test]
    fn create_appends_only_on_success() {
        let mut page = loaded(sample());
        page.dispatch(UiEvent::Input {
            node: page.new_quote_input(),
            value: "Stay hungry.".to_string(),
        });
        page.dispatch(UiEvent::Input {
            node: page.author_input(),
            value: "Steve Jobs".to_string(),
        });

        let commands = page.dispatch(UiEvent::Submit(page.new_quote_form()));
        assert_eq!(
            commands,
            vec![Command::CreateQuote {
                text: "Stay hungry.".to_string(),
                author: "Steve Jobs".to_string()
            }]
        );
        assert_eq!(displayed_ids(&page), vec!["1", "2", "3"]);

        page.apply(Completion::Created(Err(ClientError::InvalidResponse(
            "missing field `id`".to_string(),
        ))));
        assert_eq!(displayed_ids(&page), vec!["1", "2", "3"]);

        page.apply(Completion::Created(Ok(quote(4, "Stay hungry.", "Steve Jobs", 0))));
        assert_eq!(displayed_ids(&page), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn sort_toggle_refetches_and_flips_label() {
        let mut page = loaded(sample());

        let commands = page.dispatch(UiEvent::Click(page.sort_button()));

        assert_eq!(commands, vec![Command::ListQuotes { mode: SortMode::AuthorSorted }]);
        assert_eq!(
            page.document().text_content(page.sort_button()),
            "Sort by author name: ON"
        );
        assert!(page.list().is_empty());

        page.apply(Completion::Listed {
            mode: SortMode::AuthorSorted,
            result: Ok(sample()),
        });
        assert_eq!(displayed_ids(&page), vec!["2", "3", "1"]);
    }

    #[test]
    fn toggle_back_shows_fresh_insertion_order_without_local_edits() {
        let mut page = loaded(sample());
        page.dispatch(UiEvent::Click(page.sort_button()));
        page.apply(Completion::Listed {
            mode: SortMode::AuthorSorted,
            result: Ok(sample()),
        });
        page.dispatch(UiEvent::Click(button(&page, 1, Role::LikeButton)));
        assert_eq!(page.card_view(&QuoteId::Number(1)).unwrap().likes, "4");

        let commands = page.dispatch(UiEvent::Click(page.sort_button()));
        assert_eq!(commands, vec![Command::ListQuotes { mode: SortMode::InsertionOrder }]);
        page.apply(Completion::Listed {
            mode: SortMode::InsertionOrder,
            result: Ok(sample()),
        });

        assert_eq!(displayed_ids(&page), vec!["1", "2", "3"]);
        assert_eq!(page.card_view(&QuoteId::Number(1)).unwrap().likes, "3");
        assert_eq!(
            page.document().text_content(page.sort_button()),
            "Sort by author name: OFF"
        );
    }

    #[test]
    fn stale_listing_is_discarded() {
        let mut page = loaded(sample());
        page.dispatch(UiEvent::Click(page.sort_button()));
        page.dispatch(UiEvent::Click(page.sort_button()));

        page.apply(Completion::Listed {
            mode: SortMode::AuthorSorted,
            result: Ok(sample()),
        });
        assert!(page.list().is_empty());

        page.apply(Completion::Listed {
            mode: SortMode::InsertionOrder,
            result: Ok(sample()),
        });
        assert_eq!(displayed_ids(&page), vec!["1", "2", "3"]);
    }

    #[test]
    fn completions_for_removed_cards_change_nothing() {
        let mut page = loaded(sample());
        page.dispatch(UiEvent::Click(button(&page, 1, Role::DeleteButton)));
        let before = page.document().outer_html(page.quote_list());

        page.apply(Completion::LikesIncremented {
            id: QuoteId::Number(1),
            result: Ok(quote(1, "Be yourself.", "Oscar Wilde", 4)),
        });
        page.apply(Completion::Edited {
            id: QuoteId::Number(1),
            result: Ok(quote(1, "changed", "Oscar Wilde", 4)),
        });

        assert_eq!(page.document().outer_html(page.quote_list()), before);
    }

    #[test]
    fn removed_cards_leave_no_listeners_behind() {
        let mut page = loaded(sample());
        page.dispatch(UiEvent::Click(button(&page, 1, Role::EditButton)));
        let bound = page.listeners().len();

        page.dispatch(UiEvent::Click(button(&page, 1, Role::DeleteButton)));

        assert_eq!(page.listeners().len(), bound - 1);
    }
}
