#![recursion_limit = "256"]

mod routes;
mod state;

use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let upstream_url = std::env::var("UPSTREAM_API_URL")
        .unwrap_or_else(|_| state::DEFAULT_UPSTREAM_URL.into());
    // Server-side credential for deployments that do not forward caller
    // keys; caller Authorization headers still take precedence.
    let relay_api_key = std::env::var("RELAY_API_KEY").ok().filter(|key| !key.is_empty());

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .expect("http client build failed");

    let state = state::AppState::new(http, upstream_url, relay_api_key);

    let app = routes::app(state).expect("router build failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "trace embed relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
