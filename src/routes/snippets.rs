//! `/api/snippets` pass-through to the upstream snippet API.
//!
//! The browser keeps talking to the fixed relative endpoint; these handlers
//! forward the query string or JSON body unchanged and relay the upstream
//! status, content type, and body back. Nothing is cached or retried.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Append the raw query string, if any, to the upstream collection URL.
pub(crate) fn upstream_url(base: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{base}?{q}"),
        _ => base.to_owned(),
    }
}

/// `GET /api/snippets[?category=...]`
pub async fn list_snippets(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream_url, query.as_deref());
    tracing::debug!(%url, "forwarding snippet list");
    let resp = state.http.get(&url).send().await?;
    relay(resp).await
}

/// `POST /api/snippets`
pub async fn create_snippet(State(state): State<AppState>, body: Bytes) -> Result<Response, ProxyError> {
    tracing::debug!(bytes = body.len(), "forwarding snippet create");
    let resp = state
        .http
        .post(&state.upstream_url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .header(reqwest::header::ACCEPT, "application/json")
        .body(body)
        .send()
        .await?;
    relay(resp).await
}

async fn relay(resp: reqwest::Response) -> Result<Response, ProxyError> {
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| HeaderValue::from_str(v).ok());
    if !status.is_success() {
        tracing::info!(%status, "upstream snippet API returned non-success");
    }
    let body = resp.bytes().await?;

    let mut response = (status, body).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "snippets_test.rs"]
mod tests;
