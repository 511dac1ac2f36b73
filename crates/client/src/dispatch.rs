//! Event delegation.
//!
//! Listeners are plain `(event, handler)` records attached to document
//! nodes, not closures. A click on any card element bubbles to the list
//! container, whose single [`Handler::QuoteList`] listener resolves the
//! clicked element's `data-role` through [`CARD_ACTIONS`].

use std::collections::HashMap;

use crate::{
    dom::{Document, NodeId},
    render::{ROLE_ATTR, Role},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}

/// Input reported by a host against the page's document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Click(NodeId),
    Submit(NodeId),
    /// The user changed an input's value.
    Input { node: NodeId, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Delegated click handling for every card in the list.
    QuoteList,
    EditSubmit,
    CreateSubmit,
    SortToggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Like,
    Delete,
    ToggleEdit,
}

pub const CARD_ACTIONS: &[(Role, CardAction)] = &[
    (Role::LikeButton, CardAction::Like),
    (Role::DeleteButton, CardAction::Delete),
    (Role::EditButton, CardAction::ToggleEdit),
];

pub fn card_action(role: Role) -> Option<CardAction> {
    CARD_ACTIONS
        .iter()
        .find(|(candidate, _)| *candidate == role)
        .map(|(_, action)| *action)
}

/// Walks from `target` up to `container` and returns the first element
/// whose role maps to a card action, together with that element.
pub fn resolve_card_action(
    doc: &Document,
    target: NodeId,
    container: NodeId,
) -> Option<(CardAction, NodeId)> {
    for node in doc.ancestors(target) {
        if node == container {
            break;
        }
        let action = doc
            .attr(node, ROLE_ATTR)
            .and_then(Role::parse)
            .and_then(card_action);
        if let Some(action) = action {
            return Some((action, node));
        }
    }
    None
}

#[derive(Debug, Default)]
pub struct Listeners {
    bound: HashMap<NodeId, Vec<(EventKind, Handler)>>,
}

impl Listeners {
    /// Attaches `handler` to `node` unless it is already attached.
    /// Returns `true` when a new listener was added.
    pub fn bind(&mut self, node: NodeId, event: EventKind, handler: Handler) -> bool {
        let listeners = self.bound.entry(node).or_default();
        if listeners.contains(&(event, handler)) {
            return false;
        }
        listeners.push((event, handler));
        true
    }

    pub fn handlers(&self, node: NodeId, event: EventKind) -> Vec<Handler> {
        self.bound
            .get(&node)
            .map(|listeners| {
                listeners
                    .iter()
                    .filter(|(kind, _)| *kind == event)
                    .map(|(_, handler)| *handler)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count(&self, node: NodeId, event: EventKind) -> usize {
        self.handlers(node, event).len()
    }

    /// Drops listeners of nodes that left the document.
    pub fn prune(&mut self, doc: &Document) {
        self.bound.retain(|node, _| doc.contains(*node));
    }

    pub fn len(&self) -> usize {
        self.bound.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::{VElement, VNode};

    use super::*;

    #[test]
    fn bind_is_idempotent_per_event_and_handler() {
        let mut listeners = Listeners::default();
        let mut doc = Document::new();
        let form = doc.create_element("form");

        assert!(listeners.bind(form, EventKind::Submit, Handler::EditSubmit));
        assert!(!listeners.bind(form, EventKind::Submit, Handler::EditSubmit));
        assert!(listeners.bind(form, EventKind::Click, Handler::SortToggle));
        assert_eq!(listeners.count(form, EventKind::Submit), 1);
        assert_eq!(listeners.len(), 2);
    }

    #[test]
    fn prune_forgets_removed_nodes() {
        let mut listeners = Listeners::default();
        let mut doc = Document::new();
        let form = doc.create_element("form");
        doc.append_child(doc.root(), form).unwrap();
        listeners.bind(form, EventKind::Submit, Handler::EditSubmit);

        doc.remove(form).unwrap();
        listeners.prune(&doc);

        assert!(listeners.is_empty());
    }

    #[test]
    fn nested_targets_resolve_to_the_enclosing_button() {
        let mut doc = Document::new();
        let container = doc.create_element("ul");
        doc.append_child(doc.root(), container).unwrap();
        let button = doc.instantiate(&VNode::from(
            VElement::new("button")
                .attr(ROLE_ATTR, Role::LikeButton.as_str())
                .text("Likes: ")
                .child(VElement::new("span").attr(ROLE_ATTR, Role::LikeCount.as_str()).text("3")),
        ));
        doc.append_child(container, button).unwrap();
        let span = doc.children(button)[1];

        assert_eq!(
            resolve_card_action(&doc, span, container),
            Some((CardAction::Like, button))
        );
        assert_eq!(resolve_card_action(&doc, container, container), None);
    }

    #[test]
    fn non_action_roles_do_not_dispatch() {
        assert_eq!(card_action(Role::QuoteText), None);
        assert_eq!(card_action(Role::SaveButton), None);
        assert_eq!(card_action(Role::DeleteButton), Some(CardAction::Delete));
    }
}
