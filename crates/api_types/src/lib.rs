use serde::{Deserialize, Serialize};

/// Error body returned by the quote store on non-success responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub mod quote {
    use std::fmt;

    use super::*;

    /// Identifier assigned by the quote store.
    ///
    /// json-server style stores hand out numbers, others use strings; both are
    /// accepted and the identifier is otherwise opaque to the client. The
    /// [`Display`](fmt::Display) form is what ends up in URL paths and
    /// `data-id` attributes.
    #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum QuoteId {
        Number(u64),
        Text(String),
    }

    impl QuoteId {
        /// Parses an identifier taken from a path segment or attribute.
        ///
        /// Digit-only values become [`QuoteId::Number`] so they compare equal
        /// to the identifiers decoded from JSON numbers.
        pub fn parse(raw: &str) -> Self {
            match raw.parse::<u64>() {
                Ok(n) => Self::Number(n),
                Err(_) => Self::Text(raw.to_string()),
            }
        }
    }

    impl fmt::Display for QuoteId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Number(n) => write!(f, "{n}"),
                Self::Text(s) => f.write_str(s),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Quote {
        pub id: QuoteId,
        pub quote: String,
        pub author: String,
        #[serde(default)]
        pub likes: u64,
    }

    /// Request body for creating a quote.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct QuoteNew {
        pub quote: String,
        pub author: String,
        #[serde(default)]
        pub likes: u64,
    }

    /// Partial update body. Absent fields are left untouched by the store.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct QuotePatch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub quote: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub author: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub likes: Option<u64>,
    }

    impl QuotePatch {
        pub fn likes(likes: u64) -> Self {
            Self {
                likes: Some(likes),
                ..Self::default()
            }
        }

        pub fn text(quote: impl Into<String>, author: impl Into<String>) -> Self {
            Self {
                quote: Some(quote.into()),
                author: Some(author.into()),
                likes: None,
            }
        }
    }
}
