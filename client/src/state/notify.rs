//! Transient notifications raised by widgets mounted in a shell.
//!
//! DESIGN
//! ======
//! Widgets never touch shell internals; they receive a `Notifier` from
//! context and push messages into it. Each shell instance provides its own
//! queue, so two role areas never share toasts.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// How long a toast stays on screen before it expires.
pub const NOTIFICATION_TTL_MS: u64 = 4_000;

/// Upper bound on simultaneously visible toasts; the oldest is dropped.
pub const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Warning => "toast--warning",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Ordered set of live notifications, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    /// Append a notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message: message.into(), severity });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a notification; unknown ids are ignored (it may have expired).
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Context handle exposed to mounted widgets.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(NotificationQueue::default()) }
    }

    pub fn queue(self) -> RwSignal<NotificationQueue> {
        self.queue
    }

    /// Show `message` and schedule its expiry.
    pub fn notify(self, message: impl Into<String>, severity: Severity) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, severity));
        self.schedule_expiry(id);
    }

    pub fn dismiss(self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn schedule_expiry(self, id: u64) {
        #[cfg(feature = "hydrate")]
        {
            let queue = self.queue;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(u32::try_from(NOTIFICATION_TTL_MS).unwrap_or(u32::MAX)).await;
                let _ = queue.try_update(|q| q.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Report a widget outcome through the enclosing shell, or the log when
/// the widget is mounted outside any shell.
///
/// Takes the notifier captured at mount time, since context lookups are not
/// available once an async task has resumed.
pub fn report(notifier: Option<Notifier>, message: impl Into<String>, severity: Severity) {
    let message = message.into();
    match notifier {
        Some(notifier) => notifier.notify(message, severity),
        None if severity == Severity::Error => log::error!("{message}"),
        None => log::info!("{message}"),
    }
}
