//! Toast Notifications
//!
//! Transient messages; each one closes itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toast lifetime
const AUTO_CLOSE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Warning => "toast warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn items(&self) -> ReadSignal<Vec<Toast>> {
        self.items.read_only()
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.items.update(|items| items.push(Toast { id, kind, message: message.into() }));

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_CLOSE_MS).await;
            items.try_update(|items| items.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

/// Get the toast queue from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queue_is_empty_and_dismiss_is_by_id() {
        let owner = Owner::new();
        owner.with(|| {
            let toasts = Toasts::default();
            assert!(toasts.items().get_untracked().is_empty());

            toasts.items.set(vec![
                Toast { id: 1, kind: ToastKind::Success, message: "saved".into() },
                Toast { id: 2, kind: ToastKind::Error, message: "failed".into() },
            ]);
            toasts.dismiss(1);
            let left = toasts.items().get_untracked();
            assert_eq!(left.len(), 1);
            assert_eq!(left[0].kind.class(), "toast error");
        });
    }
}
