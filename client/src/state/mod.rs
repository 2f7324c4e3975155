//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The board is one state record (`snippets`) transformed by reducer-style
//! operations; `notification` holds the toast model and its fixed messages.

pub mod notification;
pub mod snippets;
