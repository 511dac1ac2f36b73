//! Quotes API endpoints

use api_types::quote::{Quote, QuoteId, QuoteNew, QuotePatch};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{ServerError, server::ServerState};

/// Handle requests for listing every quote, in insertion order
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Quote>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Quote>, ServerError> {
    let store = state.store.read().await;
    let quote = store.get(&QuoteId::parse(&id))?;
    Ok(Json(quote.clone()))
}

/// Handle requests for creating a new `Quote`
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<QuoteNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Quote>), ServerError> {
    let Json(payload) = payload?;
    let quote = state.store.write().await.insert(payload).await?;
    tracing::debug!(id = %quote.id, "quote created");
    Ok((StatusCode::CREATED, Json(quote)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<QuotePatch>, JsonRejection>,
) -> Result<Json<Quote>, ServerError> {
    let Json(payload) = payload?;
    let quote = state
        .store
        .write()
        .await
        .patch(&QuoteId::parse(&id), payload)
        .await?;
    Ok(Json(quote))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServerError> {
    let removed = state
        .store
        .write()
        .await
        .remove(&QuoteId::parse(&id))
        .await?;
    tracing::debug!(id = %removed.id, "quote deleted");
    Ok(Json(json!({})))
}
