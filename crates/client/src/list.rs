//! The displayed quote list.
//!
//! [`ListController`] keeps the quotes currently shown, in display order,
//! and is the only code that adds or removes children of the list
//! container. Each quote becomes an `<li class="quote-card">` holding the
//! rendered card.

use std::collections::HashMap;

use api_types::quote::{Quote, QuoteId};

use crate::{
    dom::{Document, DomError, NodeId, VElement, VNode},
    render::{self, ID_ATTR, ROLE_ATTR, Role},
    state::SortMode,
};

#[derive(Debug)]
pub struct ListController {
    container: NodeId,
    quotes: Vec<Quote>,
    cards: HashMap<QuoteId, NodeId>,
}

impl ListController {
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            quotes: Vec::new(),
            cards: HashMap::new(),
        }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Quotes in display order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, id: &QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|quote| &quote.id == id)
    }

    pub fn card_for(&self, id: &QuoteId) -> Option<NodeId> {
        self.cards.get(id).copied()
    }

    /// Replaces the whole list with `quotes`, arranged for `mode`.
    pub fn render_all(
        &mut self,
        doc: &mut Document,
        mut quotes: Vec<Quote>,
        mode: SortMode,
    ) -> Result<(), DomError> {
        self.clear(doc)?;
        mode.arrange(&mut quotes);
        for quote in quotes {
            self.append_one(doc, quote)?;
        }
        Ok(())
    }

    /// Appends a card for `quote` after the existing ones.
    ///
    /// Returns `None` without touching the document when a card with the
    /// same id is already shown.
    pub fn append_one(&mut self, doc: &mut Document, quote: Quote) -> Result<Option<NodeId>, DomError> {
        if self.cards.contains_key(&quote.id) {
            tracing::warn!(id = %quote.id, "quote already displayed, skipping duplicate");
            return Ok(None);
        }

        let card = render::quote_card(&quote)
            .nodes()
            .iter()
            .cloned()
            .fold(
                VElement::new("li")
                    .attr("class", "quote-card")
                    .attr(ID_ATTR, quote.id.to_string()),
                |li, node| li.child(node),
            );
        let card = doc.instantiate(&VNode::from(card));
        doc.append_child(self.container, card)?;

        self.cards.insert(quote.id.clone(), card);
        self.quotes.push(quote);
        Ok(Some(card))
    }

    /// Removes the card for `id`. Returns `false` if it was not displayed.
    pub fn remove_card_for(&mut self, doc: &mut Document, id: &QuoteId) -> Result<bool, DomError> {
        let Some(card) = self.cards.remove(id) else {
            return Ok(false);
        };
        self.quotes.retain(|quote| &quote.id != id);
        if doc.contains(card) {
            doc.remove(card)?;
        }
        Ok(true)
    }

    /// Rewrites only the like counter of `id`'s card.
    pub fn update_likes_display(
        &mut self,
        doc: &mut Document,
        id: &QuoteId,
        likes: u64,
    ) -> Result<bool, DomError> {
        let Some(counter) = self.element_for(doc, id, Role::LikeCount) else {
            return Ok(false);
        };
        doc.set_text(counter, likes.to_string())?;
        if let Some(quote) = self.quotes.iter_mut().find(|quote| &quote.id == id) {
            quote.likes = likes;
        }
        Ok(true)
    }

    /// Rewrites only the quote and author text of `id`'s card.
    pub fn update_text_display(
        &mut self,
        doc: &mut Document,
        id: &QuoteId,
        text: &str,
        author: &str,
    ) -> Result<bool, DomError> {
        let (Some(text_node), Some(author_node)) = (
            self.element_for(doc, id, Role::QuoteText),
            self.element_for(doc, id, Role::QuoteAuthor),
        ) else {
            return Ok(false);
        };
        doc.set_text(text_node, text)?;
        doc.set_text(author_node, author)?;
        if let Some(quote) = self.quotes.iter_mut().find(|quote| &quote.id == id) {
            quote.quote = text.to_string();
            quote.author = author.to_string();
        }
        Ok(true)
    }

    /// Like count currently shown on `id`'s card.
    pub fn displayed_likes(&self, doc: &Document, id: &QuoteId) -> Option<u64> {
        let counter = self.element_for(doc, id, Role::LikeCount)?;
        doc.text_content(counter).trim().parse().ok()
    }

    /// Element with `role` inside `id`'s card.
    pub fn element_for(&self, doc: &Document, id: &QuoteId, role: Role) -> Option<NodeId> {
        let card = self.card_for(id)?;
        doc.find(card, |node| doc.attr(node, ROLE_ATTR) == Some(role.as_str()))
    }

    /// Empties the container and forgets every displayed quote.
    pub fn clear(&mut self, doc: &mut Document) -> Result<(), DomError> {
        doc.clear_children(self.container)?;
        self.quotes.clear();
        self.cards.clear();
        Ok(())
    }
}
