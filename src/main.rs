//! Product API server binary.
//!
//! Loads `.env` if present, builds the configuration from environment
//! variables, and runs the HTTP server until SIGTERM/Ctrl+C.

use product_api::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    product_api::start_server(config).await?;

    Ok(())
}
