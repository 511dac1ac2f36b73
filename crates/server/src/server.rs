use axum::{Router, routing::get};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{quotes, store::Store};

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<RwLock<Store>>,
}

pub(crate) fn router(state: ServerState) -> Router {
    Router::new()
        .route("/quotes", get(quotes::list).post(quotes::create))
        .route(
            "/quotes/{id}",
            get(quotes::get_one)
                .patch(quotes::update)
                .delete(quotes::remove),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    store: Store,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Quote store listening on {}", addr);

    let state = ServerState {
        store: Arc::new(RwLock::new(store)),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    store: Store,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(store, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
