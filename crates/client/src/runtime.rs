//! Runs remote calls off the interaction path.
//!
//! The page emits [`Command`]s; [`Runtime::spawn`] runs each on its own task
//! and the result comes back as a [`Completion`] on a channel. Whoever owns
//! the page drains completions and hands them to
//! [`Page::apply`](crate::page::Page::apply), so the page is only ever
//! touched from one place.

use std::sync::Arc;

use api_types::quote::{Quote, QuoteId};
use tokio::sync::mpsc;

use crate::{
    client::{ClientError, QuoteStore},
    page::Page,
    state::SortMode,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch the whole collection and render it in `mode`.
    ListQuotes { mode: SortMode },
    CreateQuote { text: String, author: String },
    /// `current` is the count displayed when the like was clicked.
    IncrementLikes { id: QuoteId, current: u64 },
    EditQuote { id: QuoteId, text: String, author: String },
    DeleteQuote { id: QuoteId },
}

impl Command {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ListQuotes { .. } => "list",
            Self::CreateQuote { .. } => "create",
            Self::IncrementLikes { .. } => "like",
            Self::EditQuote { .. } => "edit",
            Self::DeleteQuote { .. } => "delete",
        }
    }
}

#[derive(Debug)]
pub enum Completion {
    Listed {
        mode: SortMode,
        result: Result<Vec<Quote>, ClientError>,
    },
    Created(Result<Quote, ClientError>),
    LikesIncremented {
        id: QuoteId,
        result: Result<Quote, ClientError>,
    },
    Edited {
        id: QuoteId,
        result: Result<Quote, ClientError>,
    },
    Deleted {
        id: QuoteId,
        result: Result<(), ClientError>,
    },
}

/// Performs the remote call for `command`.
pub async fn execute<S: QuoteStore>(store: &S, command: Command) -> Completion {
    match command {
        Command::ListQuotes { mode } => Completion::Listed {
            mode,
            result: store.list_quotes().await,
        },
        Command::CreateQuote { text, author } => {
            Completion::Created(store.create_quote(&text, &author).await)
        }
        Command::IncrementLikes { id, current } => {
            let result = store.increment_likes(&id, current).await;
            Completion::LikesIncremented { id, result }
        }
        Command::EditQuote { id, text, author } => {
            let result = store.edit_quote(&id, &text, &author).await;
            Completion::Edited { id, result }
        }
        Command::DeleteQuote { id } => {
            let result = store.delete_quote(&id).await;
            Completion::Deleted { id, result }
        }
    }
}

pub struct Runtime<S> {
    store: Arc<S>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    pending: usize,
}

impl<S: QuoteStore> Runtime<S> {
    pub fn new(store: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store: Arc::new(store),
            tx,
            rx,
            pending: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Calls spawned whose completion has not been taken yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Starts the remote call for `command` without waiting for it.
    pub fn spawn(&mut self, command: Command) {
        tracing::debug!(kind = command.kind(), "starting remote call");
        self.pending += 1;
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let completion = execute(store.as_ref(), command).await;
            if tx.send(completion).is_err() {
                tracing::debug!("completion dropped, runtime is gone");
            }
        });
    }

    pub fn spawn_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.spawn(command);
        }
    }

    /// Next finished call, if one is ready.
    pub fn try_next(&mut self) -> Option<Completion> {
        let completion = self.rx.try_recv().ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(completion)
    }

    /// Waits for the next finished call. `None` when nothing is in flight.
    pub async fn next(&mut self) -> Option<Completion> {
        if self.pending == 0 {
            return None;
        }
        let completion = self.rx.recv().await?;
        self.pending -= 1;
        Some(completion)
    }

    /// Applies completions to `page` until no call is in flight.
    pub async fn settle(&mut self, page: &mut Page) {
        while let Some(completion) = self.next().await {
            page.apply(completion);
        }
    }
}
