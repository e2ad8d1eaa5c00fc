//! axum front for the proxy handler.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use super::ProxyHandler;
use crate::domain::AppError;

/// Router exposing the handler at `path` for every method.
///
/// Non-POST methods reach the handler so it can answer 405 itself. Bodies are
/// unbounded; payload size is the upstream's call.
pub fn router(handler: Arc<ProxyHandler>, path: &str) -> Router {
    Router::new()
        .route(path, any(proxy_request))
        .layer(DefaultBodyLimit::disable())
        .with_state(handler)
}

async fn proxy_request(
    State(handler): State<Arc<ProxyHandler>>,
    method: Method,
    body: Bytes,
) -> Response {
    let result = tokio::task::spawn_blocking(move || handler.handle(&method, &body)).await;

    match result {
        Ok(response) => {
            let status =
                StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(response.body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "proxy worker failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error processing request", "message": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Serve the proxy until the process is stopped.
pub async fn serve(
    handler: Arc<ProxyHandler>,
    bind: SocketAddr,
    path: &str,
) -> Result<(), AppError> {
    let listener = TcpListener::bind(bind).await?;
    info!(address = %listener.local_addr()?, path, "proxy listening");
    axum::serve(listener, router(handler, path)).await?;
    Ok(())
}
