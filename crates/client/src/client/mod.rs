use std::future::Future;

use api_types::{
    ErrorResponse,
    quote::{Quote, QuoteId, QuoteNew, QuotePatch},
};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::{AppError, Result};

/// Path of the quote collection, relative to the base URL.
pub const COLLECTION: &str = "quotes";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("quote {0} not found")]
    NotFound(QuoteId),
    #[error("server error {status}: {message}")]
    Server { status: StatusCode, message: String },
}

/// The four remote operations the page depends on.
///
/// [`Client`] talks HTTP; tests substitute an in-process store.
pub trait QuoteStore: Send + Sync + 'static {
    fn list_quotes(&self) -> impl Future<Output = std::result::Result<Vec<Quote>, ClientError>> + Send;

    fn create_quote(
        &self,
        text: &str,
        author: &str,
    ) -> impl Future<Output = std::result::Result<Quote, ClientError>> + Send;

    /// Sends `current_likes + 1`; the count is the one observed by the caller.
    fn increment_likes(
        &self,
        id: &QuoteId,
        current_likes: u64,
    ) -> impl Future<Output = std::result::Result<Quote, ClientError>> + Send;

    fn edit_quote(
        &self,
        id: &QuoteId,
        text: &str,
        author: &str,
    ) -> impl Future<Output = std::result::Result<Quote, ClientError>> + Send;

    fn delete_quote(
        &self,
        id: &QuoteId,
    ) -> impl Future<Output = std::result::Result<(), ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct Client {
    collection: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|err| AppError::BaseUrl(format!("{base_url}: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::BaseUrl(format!("{base_url}: not a base URL")));
        }
        // Without the trailing slash `join` would replace the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let collection = base_url
            .join(COLLECTION)
            .map_err(|err| AppError::BaseUrl(format!("{base_url}: {err}")))?;

        Ok(Self { collection, http })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn quote_url(&self, id: &QuoteId) -> Url {
        let mut url = self.collection.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }

    pub async fn list_quotes(&self) -> std::result::Result<Vec<Quote>, ClientError> {
        let body = self.send(self.http.get(self.collection.clone()), None).await?;
        parse_body(&body)
    }

    pub async fn create_quote(
        &self,
        text: &str,
        author: &str,
    ) -> std::result::Result<Quote, ClientError> {
        let payload = QuoteNew {
            quote: text.to_string(),
            author: author.to_string(),
            likes: 0,
        };
        let body = self
            .send(self.http.post(self.collection.clone()).json(&payload), None)
            .await?;
        parse_body(&body)
    }

    pub async fn increment_likes(
        &self,
        id: &QuoteId,
        current_likes: u64,
    ) -> std::result::Result<Quote, ClientError> {
        self.patch(id, &QuotePatch::likes(current_likes.saturating_add(1)))
            .await
    }

    pub async fn edit_quote(
        &self,
        id: &QuoteId,
        text: &str,
        author: &str,
    ) -> std::result::Result<Quote, ClientError> {
        self.patch(id, &QuotePatch::text(text, author)).await
    }

    pub async fn delete_quote(&self, id: &QuoteId) -> std::result::Result<(), ClientError> {
        let body = self
            .send(self.http.delete(self.quote_url(id)), Some(id))
            .await?;
        if body.trim().is_empty() {
            return Ok(());
        }
        parse_body::<serde_json::Value>(&body).map(|_| ())
    }

    async fn patch(
        &self,
        id: &QuoteId,
        patch: &QuotePatch,
    ) -> std::result::Result<Quote, ClientError> {
        let body = self
            .send(self.http.patch(self.quote_url(id)).json(patch), Some(id))
            .await?;
        parse_body(&body)
    }

    /// Sends `request` and returns the body of a successful response.
    async fn send(
        &self,
        request: RequestBuilder,
        id: Option<&QuoteId>,
    ) -> std::result::Result<String, ClientError> {
        let res = request.send().await?;
        let status = res.status();
        let body = res.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(ClientError::NotFound(id.clone()));
        }

        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(ClientError::Server { status, message })
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> std::result::Result<T, ClientError> {
    serde_json::from_str(body).map_err(|err| ClientError::InvalidResponse(err.to_string()))
}

impl QuoteStore for Client {
    async fn list_quotes(&self) -> std::result::Result<Vec<Quote>, ClientError> {
        Client::list_quotes(self).await
    }

    async fn create_quote(
        &self,
        text: &str,
        author: &str,
    ) -> std::result::Result<Quote, ClientError> {
        Client::create_quote(self, text, author).await
    }

    async fn increment_likes(
        &self,
        id: &QuoteId,
        current_likes: u64,
    ) -> std::result::Result<Quote, ClientError> {
        Client::increment_likes(self, id, current_likes).await
    }

    async fn edit_quote(
        &self,
        id: &QuoteId,
        text: &str,
        author: &str,
    ) -> std::result::Result<Quote, ClientError> {
        Client::edit_quote(self, id, text, author).await
    }

    async fn delete_quote(&self, id: &QuoteId) -> std::result::Result<(), ClientError> {
        Client::delete_quote(self, id).await
    }
}
