use std::{fs::OpenOptions, sync::Mutex};

use quotes_client::{app, config, error::Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(&config.log_level))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}
