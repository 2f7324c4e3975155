//! Effect runner bridging board state with the browser.
//!
//! `BoardHandle` applies a reducer transition to the shared board signal and
//! performs the `BoardEffect`s it returns: REST calls and clipboard writes run
//! as local async tasks, and their outcomes are dispatched back as further
//! transitions. Notification clears go through the board's single
//! `NotificationTimer`.
//!
//! Network and clipboard effects are gated behind `#[cfg(feature = "hydrate")]`;
//! during SSR they are dropped and the hydrated client issues them again on
//! mount.

use leptos::prelude::*;

use crate::state::snippets::{BoardEffect, SnippetBoardState};
use crate::util::notification_timer::NotificationTimer;

/// Shared board state plus the machinery to run its effects.
#[derive(Clone, Copy)]
pub struct BoardHandle {
    pub state: RwSignal<SnippetBoardState>,
    timer: NotificationTimer,
}

impl BoardHandle {
    #[must_use]
    pub fn new(initial: SnippetBoardState) -> Self {
        Self { state: RwSignal::new(initial), timer: NotificationTimer::new() }
    }

    /// Apply `transition` to the board and run the effects it requests.
    pub fn dispatch(&self, transition: impl FnOnce(&mut SnippetBoardState) -> Vec<BoardEffect>) {
        let effects = self.state.try_update(transition).unwrap_or_default();
        self.perform(effects);
    }

    /// Apply a transition that has no effects.
    pub fn update(&self, transition: impl FnOnce(&mut SnippetBoardState)) {
        self.state.update(transition);
    }

    fn perform(&self, effects: Vec<BoardEffect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: BoardEffect) {
        let handle = *self;
        match effect {
            BoardEffect::ScheduleNotificationClear { notification_id, after } => {
                self.timer.schedule(after, move || {
                    handle.update(|s| s.clear_notification(notification_id));
                });
            }
            #[cfg(feature = "hydrate")]
            BoardEffect::FetchSnippets { request_id, filter } => {
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_snippets(filter).await {
                        Ok(items) => handle.dispatch(|s| s.load_succeeded(request_id, items)),
                        Err(e) => {
                            log::warn!("snippet load {request_id} failed: {e}");
                            handle.dispatch(|s| s.load_failed(request_id));
                        }
                    }
                });
            }
            #[cfg(feature = "hydrate")]
            BoardEffect::CreateSnippet(payload) => {
                leptos::task::spawn_local(async move {
                    match crate::net::api::create_snippet(&payload).await {
                        Ok(()) => handle.dispatch(SnippetBoardState::create_succeeded),
                        Err(e) => {
                            log::warn!("snippet create failed: {e}");
                            handle.dispatch(SnippetBoardState::create_failed);
                        }
                    }
                });
            }
            #[cfg(feature = "hydrate")]
            BoardEffect::WriteClipboard(text) => {
                leptos::task::spawn_local(async move {
                    match crate::util::clipboard::write_text(&text).await {
                        Ok(()) => handle.dispatch(SnippetBoardState::copy_succeeded),
                        Err(e) => {
                            log::warn!("clipboard write failed: {e}");
                            handle.dispatch(SnippetBoardState::copy_failed);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            other => {
                let _ = (other, handle);
            }
        }
    }
}
