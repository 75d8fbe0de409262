use dioxus::prelude::*;

use crate::client::constant::MAX_TOASTS;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded, ordered list of visible toasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Adds a toast and returns its id, dropping the oldest when full.
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Toast { id, kind, message });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }

        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Toast context provided by the app root.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            queue: Signal::new(ToastQueue::default()),
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.queue.read().items().to_vec()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    fn show(&mut self, kind: ToastKind, message: String) {
        let id = self.queue.write().push(kind, message);

        #[cfg(feature = "web")]
        {
            use crate::client::constant::TOAST_DURATION_MS;

            let mut toasts = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                toasts.dismiss(id);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = id;
    }
}
