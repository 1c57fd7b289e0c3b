use std::net::SocketAddr;

use tracing::info;

use ai_service::config::Config;
use ai_service::create_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!("Starting AI service on {}:{}", config.host, config.port);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("AI service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
