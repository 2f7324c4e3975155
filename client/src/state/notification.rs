//! Transient status notification shown above the board.
//!
//! DESIGN
//! ======
//! Each notification carries an id so a scheduled auto-clear can only remove
//! the notification it was scheduled for, never a newer replacement.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::time::Duration;

/// How long a notification stays visible before it clears itself.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

pub const LOAD_FAILED: &str = "Erreur lors du chargement";
pub const DRAFT_INCOMPLETE: &str = "Tous les champs sont obligatoires.";
pub const SNIPPET_CREATED: &str = "Snippet ajouté avec succès ✅";
pub const CREATE_FAILED: &str = "Erreur lors de l'ajout";
pub const CODE_COPIED: &str = "Code copié !";
pub const COPY_FAILED: &str = "Échec de la copie";

/// Outcome flavor, drives the toast color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

/// A single live notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Monotonic id, unique per board instance.
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// CSS modifier class for the toast.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
        }
    }
}
