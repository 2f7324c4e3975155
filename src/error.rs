//! Host error types.
//!
//! ERROR HANDLING
//! ==============
//! Proxy failures map to `502 Bad Gateway` with a small JSON body so the
//! client sees an ordinary non-OK response and shows its load/create error.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The upstream snippet API could not be reached or its body not read.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "snippet proxy failed");
        (StatusCode::BAD_GATEWAY, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
