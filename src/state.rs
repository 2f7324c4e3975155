//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the pooled HTTP client used to reach the upstream snippet API
//! and the upstream collection URL. Snippets themselves are never stored here.

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream `/api/snippets` collection URL, without trailing slash.
    pub upstream_url: String,
}

impl AppState {
    #[must_use]
    pub fn new(config: &HostConfig) -> Self {
        Self { http: reqwest::Client::new(), upstream_url: config.upstream_url.clone() }
    }
}
