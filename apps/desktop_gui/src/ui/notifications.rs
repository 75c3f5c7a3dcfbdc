//! Toasts and modal error dialogs raised by the lookup handler.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use client_core::Notifier;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
    dialogs: VecDeque<String>,
}

impl Notifications {
    pub fn push_toast_at(&mut self, message: impl Into<String>, now: Instant) {
        self.toasts.push_back(Toast {
            message: message.into(),
            expires_at: now + TOAST_LIFETIME,
        });
    }

    /// Drops toasts whose lifetime has passed.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Dialog currently shown; later ones wait until it is dismissed.
    pub fn current_dialog(&self) -> Option<&str> {
        self.dialogs.front().map(String::as_str)
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialogs.pop_front();
    }
}

impl Notifier for Notifications {
    fn toast(&mut self, message: &str) {
        self.push_toast_at(message, Instant::now());
    }

    fn error_dialog(&mut self, message: &str) {
        self.dialogs.push_back(message.to_string());
    }
}
