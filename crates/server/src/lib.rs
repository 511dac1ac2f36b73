use api_types::ErrorResponse;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};

pub use server::{ServerState, run_with_listener, spawn_with_listener};
pub use store::{Store, StoreError};

mod quotes;
mod server;
mod store;

pub enum ServerError {
    Store(StoreError),
    Generic(String),
}

fn status_for_store_error(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::IdsExhausted => StatusCode::INSUFFICIENT_STORAGE,
        StoreError::Io(_) | StoreError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_store_error(err: StoreError) -> String {
    match err {
        StoreError::Io(io_err) => {
            tracing::error!("failed to persist quotes: {io_err}");
            "internal server error".to_string()
        }
        StoreError::Json(json_err) => {
            tracing::error!("failed to encode quotes: {json_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Store(err) => (status_for_store_error(&err), message_for_store_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Generic(value.body_text())
    }
}
