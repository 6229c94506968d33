use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, warn};

use campusq_common::PredictionRequest;

use crate::AppState;

// --- Handlers ---

pub async fn api_request(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PredictionRequest>,
) -> impl IntoResponse {
    match state.predictor.predict(&body).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!(id = body.id, error = %e, "Failed to process prediction request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Internal server error"})),
            )
                .into_response()
        }
    }
}

/// News never errors to the caller: any feed failure becomes an empty list.
pub async fn api_news(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let news = match state.news.latest().await {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "Failed to load news feed");
            Vec::new()
        }
    };

    Json(serde_json::json!({ "news": news }))
}
