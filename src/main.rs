use std::sync::Arc;

use arogya_gateway::{config::Config, logging, routes, state::AppState};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(&config));

    let app = routes::create_router()
        .with_state(state)
        .layer(routes::cors_layer(config.allowed_origin.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!("🚀 Arogya gateway running at http://{}", config.bind_addr);
    info!(
        translation = %config.translation_url,
        dialogue = %config.dialogue_url,
        alerts = %config.alerts_file,
        "upstreams configured"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if signal::ctrl_c().await.is_ok() {
                info!("🛑 Received Ctrl+C, shutting down");
            }
        })
        .await?;

    Ok(())
}
