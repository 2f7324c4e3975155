//! REST API helpers for the snippet endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the board only loads
//! snippets once hydrated in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; the board turns
//! any error into a transient notification and keeps its prior state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Category, NewSnippet, Snippet};

/// Fixed snippet collection endpoint.
pub const SNIPPETS_ENDPOINT: &str = "/api/snippets";

#[cfg(any(test, feature = "hydrate"))]
fn snippets_url(filter: Option<Category>) -> String {
    match filter {
        Some(category) => format!("{SNIPPETS_ENDPOINT}?category={}", category.as_str()),
        None => SNIPPETS_ENDPOINT.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16) -> String {
    format!("snippet list failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_failed_message(status: u16) -> String {
    format!("snippet create failed: {status}")
}

/// Fetch snippets from `GET /api/snippets`, optionally scoped to one category.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a snippet array.
pub async fn fetch_snippets(filter: Option<Category>) -> Result<Vec<Snippet>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = snippets_url(filter);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<Vec<Snippet>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        Err("not available on server".to_owned())
    }
}

/// Create a snippet via `POST /api/snippets`.
///
/// The response body is not inspected beyond the status code.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn create_snippet(payload: &NewSnippet) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SNIPPETS_ENDPOINT)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
