use server::Store;
use settings::Database;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "quotes={level},server={level}",
            level = settings.app.level
        ))
        .init();

    let store = open_store(&settings.server.database).await?;
    tracing::info!(quotes = store.list().len(), "quote store ready");

    let bind = settings
        .server
        .bind
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tokio::select! {
        res = server::run_with_listener(store, listener) => {
            if let Err(err) = res {
                tracing::error!("server failed: {err}");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }

    Ok(())
}

async fn open_store(config: &Database) -> Result<Store, server::StoreError> {
    match config {
        Database::Memory => Ok(Store::default()),
        Database::Json(path) => Store::open(path).await,
    }
}
