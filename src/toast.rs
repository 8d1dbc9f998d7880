//! Toast Notifications
//!
//! Every failure in this app degrades to a toast; nothing is fatal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Toast queue shared through [`crate::context::AppContext`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                level,
                message: message.into(),
            })
        });

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            items.update(|items| items.retain(|toast| toast.id != id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
