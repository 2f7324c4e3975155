//! Networking modules for the snippet REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `types` defines the wire schema, and
//! `snippet_client` runs board effects against the browser (HTTP, clipboard,
//! timers) and feeds the outcomes back into board state.

pub mod api;
pub mod snippet_client;
pub mod types;
