use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use funnx_backend::config::RelayConfig;
use funnx_backend::routes::configure_routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Arc::new(RelayConfig::from_env());
    let routes = configure_routes(config);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    info!("starting server on http://127.0.0.1:{}", port);
    warp::serve(routes).run(([127, 0, 0, 1], port)).await;
}
