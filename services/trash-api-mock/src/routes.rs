//! HTTP routes mirroring the detection API wire contract

use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::state::StateHandle;

pub const STATUS_PATH: &str = "/status";
pub const TRASH_COUNT_PATH: &str = "/trash-count";

/// Payload accepted by `POST /log-trash-count`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashData {
    pub count: u64,
}

/// Build the mock axum router
pub fn build_router(state: StateHandle, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route(STATUS_PATH, get(status_handler))
        .route(TRASH_COUNT_PATH, get(trash_count_handler))
        .route("/log-trash-count", post(log_trash_count_handler))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn index_handler() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Trash Detection API" }))
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

async fn status_handler(State(state): State<StateHandle>) -> Response {
    let (fault, delay, status) = {
        let mut s = state.write().await;
        s.record_hit(STATUS_PATH);
        (s.faults.status, s.response_delay, s.status.clone())
    };
    tracing::debug!("GET {} (fault={:?}, delay={:?})", STATUS_PATH, fault, delay);

    delay_response(delay).await;
    match fault {
        Some(code) => fault_response(code),
        None => Json(json!({ "status": status })).into_response(),
    }
}

async fn trash_count_handler(State(state): State<StateHandle>) -> Response {
    let (fault, delay, count) = {
        let mut s = state.write().await;
        s.record_hit(TRASH_COUNT_PATH);
        (s.faults.trash_count, s.response_delay, s.count)
    };
    tracing::debug!(
        "GET {} (fault={:?}, delay={:?})",
        TRASH_COUNT_PATH,
        fault,
        delay
    );

    delay_response(delay).await;
    match fault {
        Some(code) => fault_response(code),
        None => Json(json!({ "count": count })).into_response(),
    }
}

async fn log_trash_count_handler(
    State(state): State<StateHandle>,
    Json(data): Json<TrashData>,
) -> impl IntoResponse {
    tracing::info!("Received trash count data: {}", data.count);
    state.write().await.count = data.count;
    Json(json!({ "status": "success", "data": data }))
}

async fn delay_response(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn fault_response(code: u16) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "detail": "injected fault" }))).into_response()
}
