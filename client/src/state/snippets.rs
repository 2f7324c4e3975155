//! Snippet board state: draft form, loaded collection, filter, page, and
//! the live notification.
//!
//! DESIGN
//! ======
//! Every operation is a transition on `SnippetBoardState` that returns the
//! side effects it wants performed as `BoardEffect` values. The state itself
//! never touches the network, clipboard, or timers, so all board behavior is
//! testable without a browser. `net::snippet_client` executes the effects and
//! reports outcomes back through the `*_succeeded` / `*_failed` transitions.
//!
//! Loads are tagged with a monotonic request id. Only the outcome of the most
//! recently issued load is applied; late responses from superseded filter
//! changes are dropped.

#[cfg(test)]
#[path = "snippets_test.rs"]
mod snippets_test;

use std::ops::Range;
use std::time::Duration;

use super::notification::{self, NOTIFICATION_TTL, Notification, NotificationKind};
use crate::net::types::{Category, NewSnippet, Snippet};

/// Snippets shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Side effect requested by a state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEffect {
    /// `GET /api/snippets`, scoped to `filter` when set.
    FetchSnippets { request_id: u64, filter: Option<Category> },
    /// `POST /api/snippets` with the validated draft.
    CreateSnippet(NewSnippet),
    /// Write text to the system clipboard.
    WriteClipboard(String),
    /// Clear notification `notification_id` once `after` has elapsed,
    /// replacing any clear scheduled earlier.
    ScheduleNotificationClear { notification_id: u64, after: Duration },
}

/// Draft form input names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Category,
    Code,
}

impl DraftField {
    /// Resolve a form control `name` attribute.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(DraftField::Title),
            "description" => Some(DraftField::Description),
            "category" => Some(DraftField::Category),
            "code" => Some(DraftField::Code),
            _ => None,
        }
    }
}

/// In-progress form input for a new snippet. Raw strings, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftForm {
    pub title: String,
    pub description: String,
    /// Raw `<select>` value; empty until a category is chosen.
    pub category: String,
    pub code: String,
}

impl DraftForm {
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Category => &self.category,
            DraftField::Code => &self.code,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Category => self.category = value,
            DraftField::Code => self.code = value,
        }
    }

    /// Build the create payload, or `None` when any field is empty or the
    /// category is not a known one. Values are sent verbatim, untrimmed.
    #[must_use]
    pub fn to_payload(&self) -> Option<NewSnippet> {
        if self.title.is_empty() || self.description.is_empty() || self.code.is_empty() {
            return None;
        }
        let category = self.category.parse::<Category>().ok()?;
        Some(NewSnippet {
            title: self.title.clone(),
            description: self.description.clone(),
            category,
            code: self.code.clone(),
        })
    }
}

/// Number of pages needed for `len` items, `ceil(len / page_size)`.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Index range of the items on 1-based `page`. Empty past the end.
#[must_use]
pub fn page_range(len: usize, page_size: usize, page: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Complete client-side state of the snippet board.
#[derive(Clone, Debug)]
pub struct SnippetBoardState {
    pub draft: DraftForm,
    /// Snippets from the latest applied load, already filtered server-side.
    pub snippets: Vec<Snippet>,
    /// Active category filter; `None` shows every category.
    pub filter: Option<Category>,
    /// Current 1-based page.
    pub page: usize,
    pub page_size: usize,
    pub notification: Option<Notification>,
    /// True while the latest issued load is in flight.
    pub loading: bool,
    /// True while a create request is in flight.
    pub create_pending: bool,
    latest_load: u64,
    next_notification_id: u64,
}

impl Default for SnippetBoardState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl SnippetBoardState {
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            draft: DraftForm::default(),
            snippets: Vec::new(),
            filter: None,
            page: 1,
            page_size: page_size.max(1),
            notification: None,
            loading: false,
            create_pending: false,
            latest_load: 0,
            next_notification_id: 0,
        }
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Initial load when the board mounts.
    pub fn mount(&mut self) -> Vec<BoardEffect> {
        self.request_load()
    }

    /// Issue a load for the current filter and reset the page cursor.
    pub fn request_load(&mut self) -> Vec<BoardEffect> {
        self.latest_load += 1;
        self.loading = true;
        self.page = 1;
        vec![BoardEffect::FetchSnippets { request_id: self.latest_load, filter: self.filter }]
    }

    pub fn load_succeeded(&mut self, request_id: u64, snippets: Vec<Snippet>) -> Vec<BoardEffect> {
        if request_id != self.latest_load {
            return Vec::new();
        }
        self.loading = false;
        self.snippets = snippets;
        self.page = self.page.clamp(1, self.total_pages().max(1));
        Vec::new()
    }

    /// Keep the previous collection and surface an error.
    pub fn load_failed(&mut self, request_id: u64) -> Vec<BoardEffect> {
        if request_id != self.latest_load {
            return Vec::new();
        }
        self.loading = false;
        self.notify(notification::LOAD_FAILED, NotificationKind::Error)
    }

    /// Switch the category filter. Re-selecting the active filter does nothing.
    pub fn set_filter(&mut self, filter: Option<Category>) -> Vec<BoardEffect> {
        if self.filter == filter {
            return Vec::new();
        }
        self.filter = filter;
        self.request_load()
    }

    // =========================================================================
    // DRAFT
    // =========================================================================

    pub fn update_draft_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// Validate the draft and request its creation.
    ///
    /// An incomplete draft yields only an error notification. A submit while a
    /// create is already in flight is ignored.
    pub fn submit_draft(&mut self) -> Vec<BoardEffect> {
        if self.create_pending {
            return Vec::new();
        }
        let Some(payload) = self.draft.to_payload() else {
            return self.notify(notification::DRAFT_INCOMPLETE, NotificationKind::Error);
        };
        self.create_pending = true;
        vec![BoardEffect::CreateSnippet(payload)]
    }

    /// Clear the draft, reload the current filter, and confirm.
    pub fn create_succeeded(&mut self) -> Vec<BoardEffect> {
        self.create_pending = false;
        self.draft = DraftForm::default();
        let mut effects = self.request_load();
        effects.extend(self.notify(notification::SNIPPET_CREATED, NotificationKind::Success));
        effects
    }

    /// Keep the draft so the user can retry by hand.
    pub fn create_failed(&mut self) -> Vec<BoardEffect> {
        self.create_pending = false;
        self.notify(notification::CREATE_FAILED, NotificationKind::Error)
    }

    // =========================================================================
    // CLIPBOARD
    // =========================================================================

    pub fn request_copy(&mut self, code: impl Into<String>) -> Vec<BoardEffect> {
        vec![BoardEffect::WriteClipboard(code.into())]
    }

    pub fn copy_succeeded(&mut self) -> Vec<BoardEffect> {
        self.notify(notification::CODE_COPIED, NotificationKind::Success)
    }

    pub fn copy_failed(&mut self) -> Vec<BoardEffect> {
        self.notify(notification::COPY_FAILED, NotificationKind::Error)
    }

    // =========================================================================
    // NOTIFICATION
    // =========================================================================

    /// Replace the live notification and schedule its auto-clear.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> Vec<BoardEffect> {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notification = Some(Notification { id, message: message.into(), kind });
        vec![BoardEffect::ScheduleNotificationClear { notification_id: id, after: NOTIFICATION_TTL }]
    }

    /// Clear notification `id` if it is still the live one.
    pub fn clear_notification(&mut self, id: u64) {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
        }
    }

    // =========================================================================
    // PAGINATION
    // =========================================================================

    /// Move `delta` pages, clamped to `[1, total_pages]`.
    pub fn go_to_page(&mut self, delta: i64) {
        let last = i64::try_from(self.total_pages().max(1)).unwrap_or(i64::MAX);
        let current = i64::try_from(self.page).unwrap_or(i64::MAX);
        let target = current.saturating_add(delta).clamp(1, last);
        self.page = usize::try_from(target).unwrap_or(1);
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.snippets.len(), self.page_size)
    }

    /// Snippets on the current page.
    #[must_use]
    pub fn visible_snippets(&self) -> &[Snippet] {
        &self.snippets[page_range(self.snippets.len(), self.page_size, self.page)]
    }

    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }
}
