//! Quote card markup.
//!
//! Every element the page needs to find again carries the quote id in
//! `data-id` and its purpose in `data-role`. No behavior lives here; the
//! dispatcher looks elements up by role after the card is inserted.

use api_types::quote::Quote;

use crate::dom::{VElement, VNode};

pub const ROLE_ATTR: &str = "data-role";
pub const ID_ATTR: &str = "data-id";

/// Input names inside a card's edit form.
pub const EDIT_TEXT_INPUT: &str = "edited-quote";
pub const EDIT_AUTHOR_INPUT: &str = "edited-quote-author";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    QuoteText,
    QuoteAuthor,
    LikeButton,
    LikeCount,
    EditButton,
    DeleteButton,
    EditForm,
    EditTextInput,
    EditAuthorInput,
    SaveButton,
}

impl Role {
    const ALL: [Role; 10] = [
        Role::QuoteText,
        Role::QuoteAuthor,
        Role::LikeButton,
        Role::LikeCount,
        Role::EditButton,
        Role::DeleteButton,
        Role::EditForm,
        Role::EditTextInput,
        Role::EditAuthorInput,
        Role::SaveButton,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuoteText => "quote-text",
            Self::QuoteAuthor => "quote-author",
            Self::LikeButton => "like",
            Self::LikeCount => "like-count",
            Self::EditButton => "edit",
            Self::DeleteButton => "delete",
            Self::EditForm => "edit-form",
            Self::EditTextInput => "edit-text",
            Self::EditAuthorInput => "edit-author",
            Self::SaveButton => "save-edit",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw)
    }
}

/// Rendered content of one card: the display view and its hidden edit form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment(Vec<VNode>);

impl Fragment {
    pub fn nodes(&self) -> &[VNode] {
        &self.0
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.0 {
            node.write_html(&mut out);
        }
        out
    }
}

fn tagged(tag: &str, role: Role, id: &str) -> VElement {
    VElement::new(tag)
        .attr(ID_ATTR, id)
        .attr(ROLE_ATTR, role.as_str())
}

/// Renders `quote` into a card body. Identical input gives identical markup.
pub fn quote_card(quote: &Quote) -> Fragment {
    let id = quote.id.to_string();
    let text_input_id = format!("edit-quote-{id}");
    let author_input_id = format!("edit-author-{id}");

    let view = VElement::new("blockquote")
        .attr("class", "blockquote")
        .child(
            tagged("p", Role::QuoteText, &id)
                .attr("class", "mb-0")
                .text(quote.quote.as_str()),
        )
        .child(
            tagged("footer", Role::QuoteAuthor, &id)
                .attr("class", "blockquote-footer")
                .text(quote.author.as_str()),
        )
        .child(VElement::new("br"))
        .child(
            tagged("button", Role::LikeButton, &id)
                .attr("class", "btn-success")
                .text("Likes: ")
                .child(tagged("span", Role::LikeCount, &id).text(quote.likes.to_string())),
        )
        .child(
            tagged("button", Role::EditButton, &id)
                .attr("class", "btn-success")
                .text("Edit"),
        )
        .child(
            tagged("button", Role::DeleteButton, &id)
                .attr("class", "btn-danger")
                .text("Delete"),
        );

    let form = tagged("form", Role::EditForm, &id)
        .attr("class", "edit-quote-form")
        .flag("hidden")
        .child(
            VElement::new("div")
                .attr("class", "form-group")
                .child(
                    VElement::new("label")
                        .attr("for", text_input_id.as_str())
                        .text("Edit Quote"),
                )
                .child(
                    tagged("input", Role::EditTextInput, &id)
                        .attr("name", EDIT_TEXT_INPUT)
                        .attr("type", "text")
                        .attr("class", "form-control")
                        .attr("id", text_input_id.as_str())
                        .attr("value", quote.quote.as_str()),
                ),
        )
        .child(
            VElement::new("div")
                .attr("class", "form-group")
                .child(
                    VElement::new("label")
                        .attr("for", author_input_id.as_str())
                        .text("Author"),
                )
                .child(
                    tagged("input", Role::EditAuthorInput, &id)
                        .attr("name", EDIT_AUTHOR_INPUT)
                        .attr("type", "text")
                        .attr("class", "form-control")
                        .attr("id", author_input_id.as_str())
                        .attr("value", quote.author.as_str()),
                ),
        )
        .child(
            tagged("button", Role::SaveButton, &id)
                .attr("type", "submit")
                .attr("class", "btn btn-primary")
                .text("Save"),
        );

    Fragment(vec![view.into(), form.into()])
}
