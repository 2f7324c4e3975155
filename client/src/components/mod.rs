//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the snippet board while reading/writing the shared
//! `BoardHandle` from Leptos context.

pub mod filter_bar;
pub mod notification_toast;
pub mod snippet_card;
pub mod snippet_form;
pub mod snippet_list;
