//! Toast notifications shared through context

use crate::models::AdminError;
use crate::utils::sleep_ms;
use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use std::collections::VecDeque;

/// How long a toast stays visible
pub const TOAST_DURATION_MS: u32 = 4_000;
/// Maximum number of toasts to keep in history
const MAX_TOAST_HISTORY: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub dismissed: bool,
}

/// Bounded toast history
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    entries: VecDeque<ToastEntry>,
    next_id: u64,
}

impl ToastList {
    /// Add a toast and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(ToastEntry {
            id,
            kind,
            message: message.into(),
            dismissed: false,
        });

        while self.entries.len() > MAX_TOAST_HISTORY {
            self.entries.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.dismissed = true;
        }
    }

    /// Visible toasts, oldest first
    pub fn active(&self) -> Vec<ToastEntry> {
        self.entries.iter().filter(|entry| !entry.dismissed).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Handle for raising toasts from any component under the provider
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<ToastList>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Error toast carrying the error's user-facing message
    pub fn admin_error(&self, error: &AdminError) {
        self.error(error.user_message());
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().dismiss(id);
    }

    pub fn active(&self) -> Vec<ToastEntry> {
        self.toasts.read().active()
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(kind, message);

        // outlives the page that raised it
        spawn_forever(async move {
            sleep_ms(TOAST_DURATION_MS).await;
            toasts.write().dismiss(id);
        });
    }
}

/// Install the toast queue; call once at the application root
pub fn use_toast_provider() -> Toaster {
    let toasts = use_context_provider(|| Signal::new(ToastList::default()));
    Toaster { toasts }
}

/// Hook for raising toasts
pub fn use_toast() -> Toaster {
    Toaster {
        toasts: use_context::<Signal<ToastList>>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut list = ToastList::default();
        let first = list.push(ToastKind::Success, "User deleted successfully");
        let second = list.push(ToastKind::Error, "Failed to delete user");
        assert_ne!(first, second);
        assert_eq!(list.active().len(), 2);

        list.dismiss(first);
        let active = list.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, ToastKind::Error);
        assert_eq!(active[0].message, "Failed to delete user");
    }

    #[test]
    fn test_history_is_capped() {
        let mut list = ToastList::default();
        for i in 0..25 {
            list.push(ToastKind::Success, format!("toast {}", i));
        }
        assert_eq!(list.len(), MAX_TOAST_HISTORY);
        assert_eq!(list.active()[0].message, "toast 15");
    }

    #[test]
    fn test_dismiss_unknown_id_is_ignored() {
        let mut list = ToastList::default();
        list.push(ToastKind::Success, "ok");
        list.dismiss(99);
        assert_eq!(list.active().len(), 1);
    }
}
