use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use iljeong_server::config::ServerConfig;
use iljeong_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = ServerConfig::load()?;

    let state = match config.seed_path() {
        Some(path) => AppState::from_seed_file(&path)?,
        None => AppState::new(),
    };

    let app = iljeong_server::app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("iljeong-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
