//! Process-wide UI state.

use api_types::quote::Quote;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Order returned by the last list fetch.
    #[default]
    InsertionOrder,
    /// Ascending by [`author_sort_key`].
    AuthorSorted,
}

impl SortMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::InsertionOrder => Self::AuthorSorted,
            Self::AuthorSorted => Self::InsertionOrder,
        }
    }

    /// Text of the sort toggle button for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::InsertionOrder => "Sort by author name: OFF",
            Self::AuthorSorted => "Sort by author name: ON",
        }
    }

    /// Puts `quotes` in this mode's display order.
    pub fn arrange(self, quotes: &mut [Quote]) {
        if self == Self::AuthorSorted {
            sort_by_author(quotes);
        }
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    sort: SortMode,
}

impl UiState {
    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    /// Flips the sort mode and returns the new one.
    pub fn toggle_sort(&mut self) -> SortMode {
        self.sort = self.sort.toggled();
        self.sort
    }
}

/// Token after the first space of `author`, used as a last name.
///
/// `"Jane Austen"` gives `Austen`, but `"Austen Jane"` gives `Jane` and a
/// single-word author gives nothing. Authors without a key sort first.
pub fn author_sort_key(author: &str) -> Option<&str> {
    author.split(' ').nth(1)
}

/// Stable sort on [`author_sort_key`]; equal keys keep their relative order.
pub fn sort_by_author(quotes: &mut [Quote]) {
    quotes.sort_by(|a, b| author_sort_key(&a.author).cmp(&author_sort_key(&b.author)));
}

#[cfg(test)]
mod tests {
    use api_types::quote::QuoteId;

    use super::*;

    fn quotes(authors: &[&str]) -> Vec<Quote> {
        authors
            .iter()
            .enumerate()
            .map(|(i, author)| Quote {
                id: QuoteId::Number(i as u64 + 1),
                quote: format!("quote {i}"),
                author: author.to_string(),
                likes: 0,
            })
            .collect()
    }

    fn authors(quotes: &[Quote]) -> Vec<&str> {
        quotes.iter().map(|q| q.author.as_str()).collect()
    }

    #[test]
    fn sorts_by_second_token() {
        let mut list = quotes(&["Oscar Wilde", "Jane Austen", "Mark Twain"]);
        sort_by_author(&mut list);
        assert_eq!(authors(&list), vec!["Jane Austen", "Mark Twain", "Oscar Wilde"]);
    }

    #[test]
    fn already_ascending_is_unchanged() {
        let mut list = quotes(&["Jane Austen", "Mark Twain", "Oscar Wilde"]);
        sort_by_author(&mut list);
        assert_eq!(authors(&list), vec!["Jane Austen", "Mark Twain", "Oscar Wilde"]);
    }

    #[test]
    fn reversed_names_sort_on_first_name() {
        let mut list = quotes(&["Twain Mark", "Austen Jane"]);
        sort_by_author(&mut list);
        assert_eq!(author_sort_key("Twain Mark"), Some("Mark"));
        assert_eq!(authors(&list), vec!["Austen Jane", "Twain Mark"]);
    }

    #[test]
    fn ties_keep_relative_order() {
        let mut list = quotes(&["Anne Smith", "Zed Jones", "Bob Smith", "Cat Smith"]);
        sort_by_author(&mut list);
        assert_eq!(
            authors(&list),
            vec!["Zed Jones", "Anne Smith", "Bob Smith", "Cat Smith"]
        );
    }

    #[test]
    fn single_word_authors_sort_first() {
        let mut list = quotes(&["Mark Twain", "Voltaire", "Jane Austen"]);
        sort_by_author(&mut list);
        assert_eq!(authors(&list), vec!["Voltaire", "Jane Austen", "Mark Twain"]);
    }

    #[test]
    fn toggle_flips_between_modes() {
        let mut state = UiState::default();
        assert_eq!(state.sort_mode(), SortMode::InsertionOrder);
        assert_eq!(state.toggle_sort(), SortMode::AuthorSorted);
        assert_eq!(state.sort_mode().label(), "Sort by author name: ON");
        assert_eq!(state.toggle_sort(), SortMode::InsertionOrder);
        assert_eq!(state.sort_mode().label(), "Sort by author name: OFF");
    }
}
