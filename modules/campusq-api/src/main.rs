use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_client::OpenAi;
use campusq_common::Config;
use search_client::GoogleSearcher;

mod news;
mod predictor;
mod rest;

use news::NewsService;
use predictor::Predictor;

pub struct AppState {
    pub predictor: Predictor,
    pub news: NewsService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // REST API
        .route("/api/request", post(rest::api_request))
        .route("/api/news", get(rest::api_news))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("campusq=info".parse()?))
        .init();

    let config = Config::from_env();

    let model = OpenAi::new(&config.openai_api_key, &config.openai_model);
    let searcher = GoogleSearcher::new(&config.search_api_key, &config.search_engine_id);

    let state = Arc::new(AppState {
        predictor: Predictor::new(Arc::new(model), Arc::new(searcher)),
        news: NewsService::new(&config.news_feed_url),
    });

    let app = router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("campusq API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
