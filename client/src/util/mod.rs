//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clipboard, timers)
//! from page and component logic to improve reuse and testability.

pub mod clipboard;
pub mod notification_timer;
