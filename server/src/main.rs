#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, compression = config.compression, "parking console listening");
    axum::serve(listener, app).await?;
    Ok(())
}
