//! Quote collection held by the server.
//!
//! Records keep insertion order. When opened from a file the collection is
//! written back after every mutation using the json-server `db.json` layout
//! (`{"quotes": [...]}`).

use std::path::{Path, PathBuf};

use api_types::quote::{Quote, QuoteId, QuoteNew, QuotePatch};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("quote \"{0}\" not found")]
    NotFound(QuoteId),
    #[error("no numeric quote ids left")]
    IdsExhausted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

type ResultStore<T> = Result<T, StoreError>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    quotes: Vec<Quote>,
}

#[derive(Debug)]
pub struct Store {
    quotes: Vec<Quote>,
    /// `None` once the largest numeric id has been handed out.
    next_id: Option<u64>,
    path: Option<PathBuf>,
}

impl Default for Store {
    fn default() -> Self {
        Self::with_quotes(Vec::new())
    }
}

impl Store {
    /// In-memory store seeded with `quotes`.
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        let next_id = next_id_after(&quotes);
        Self {
            quotes,
            next_id,
            path: None,
        }
    }

    /// Opens a file-backed store. A missing file starts an empty collection.
    pub async fn open(path: impl AsRef<Path>) -> ResultStore<Self> {
        let path = path.as_ref().to_path_buf();
        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str::<Snapshot>(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Snapshot::default(),
            Err(err) => return Err(err.into()),
        };

        let mut store = Self::with_quotes(snapshot.quotes);
        store.path = Some(path);
        Ok(store)
    }

    pub fn list(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn get(&self, id: &QuoteId) -> ResultStore<&Quote> {
        self.quotes
            .iter()
            .find(|quote| &quote.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    pub async fn insert(&mut self, new: QuoteNew) -> ResultStore<Quote> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        let quote = Quote {
            id: QuoteId::Number(id),
            quote: new.quote,
            author: new.author,
            likes: new.likes,
        };
        self.next_id = id.checked_add(1);
        self.quotes.push(quote.clone());
        self.persist().await?;
        Ok(quote)
    }

    pub async fn patch(&mut self, id: &QuoteId, patch: QuotePatch) -> ResultStore<Quote> {
        let quote = self
            .quotes
            .iter_mut()
            .find(|quote| &quote.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if let Some(text) = patch.quote {
            quote.quote = text;
        }
        if let Some(author) = patch.author {
            quote.author = author;
        }
        if let Some(likes) = patch.likes {
            quote.likes = likes;
        }

        let updated = quote.clone();
        self.persist().await?;
        Ok(updated)
    }

    pub async fn remove(&mut self, id: &QuoteId) -> ResultStore<Quote> {
        let index = self
            .quotes
            .iter()
            .position(|quote| &quote.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let removed = self.quotes.remove(index);
        self.persist().await?;
        Ok(removed)
    }

    async fn persist(&self) -> ResultStore<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_string_pretty(&Snapshot {
            quotes: self.quotes.clone(),
        })?;
        tokio::fs::write(path, payload).await?;
        Ok(())
    }
}

fn next_id_after(quotes: &[Quote]) -> Option<u64> {
    quotes
        .iter()
        .filter_map(|quote| match quote.id {
            QuoteId::Number(n) => Some(n),
            QuoteId::Text(_) => None,
        })
        .max()
        .map_or(Some(1), |max| max.checked_add(1))
}
