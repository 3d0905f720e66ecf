// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` owns the ordered stack of active toasts, enforces the
//! capacity limit and schedules a one-shot removal for every toast that
//! auto-dismisses.

use super::config::{ToastConfig, ToastConfigUpdate};
use super::notification::{Toast, ToastId, ToastKind, ToastOptions};
use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

/// Messages for toast state changes, for hosts that route input through an
/// update loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Dismiss every toast.
    DismissAll,
    /// Tick for checking auto-dismiss deadlines.
    Tick,
}

#[derive(Debug)]
struct Shared {
    /// Active toasts, newest first.
    toasts: watch::Sender<VecDeque<Toast>>,
    config: watch::Sender<ToastConfig>,
}

/// Handle to the application's toast stack.
///
/// Cloning is cheap and every clone sees the same toasts. Create one per
/// application and pass it to whoever needs to notify the shopper.
#[derive(Debug, Clone)]
pub struct ToastManager {
    shared: Arc<Shared>,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    /// Creates an empty manager with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ToastConfig::default())
    }

    /// Creates an empty manager with the given configuration.
    #[must_use]
    pub fn with_config(config: ToastConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                toasts: watch::Sender::new(VecDeque::new()),
                config: watch::Sender::new(config),
            }),
        }
    }

    /// Adds a toast and returns its ID.
    ///
    /// The toast goes to the front of the stack. If the stack then holds more
    /// than `max_toasts` entries, the oldest ones are dropped. A toast that
    /// is not persistent and has a non-zero duration removes itself once the
    /// duration has elapsed.
    pub fn add(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        let config = self.config();
        let toast = Toast::new(message.into(), options, &config);
        let id = toast.id().clone();
        let expiry = toast.auto_dismiss_after();
        let capacity = config.max_toasts;

        debug!(id = %id, kind = %toast.kind(), "toast added");
        self.shared.toasts.send_modify(|toasts| {
            toasts.push_front(toast);
            if capacity.is_exceeded_by(toasts.len()) {
                let evicted = toasts.len() - capacity.value();
                toasts.truncate(capacity.value());
                debug!(evicted, capacity = capacity.value(), "toast stack full, dropped oldest");
            }
        });

        if let Some(delay) = expiry {
            self.schedule_expiry(id.clone(), delay);
        }
        id
    }

    /// Adds a success toast. Any kind set in `options` is overridden.
    pub fn success(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.add(message, options.kind(ToastKind::Success))
    }

    /// Adds an error toast. Any kind set in `options` is overridden.
    pub fn error(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.add(message, options.kind(ToastKind::Error))
    }

    /// Adds a warning toast. Any kind set in `options` is overridden.
    pub fn warning(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.add(message, options.kind(ToastKind::Warning))
    }

    /// Adds an info toast. Any kind set in `options` is overridden.
    pub fn info(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.add(message, options.kind(ToastKind::Info))
    }

    /// Removes a toast by its ID.
    ///
    /// Returns `true` if the toast was found. Unknown IDs are ignored.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.shared.toasts.send_if_modified(|toasts| {
            match toasts.iter().position(|t| t.id().as_str() == id) {
                Some(pos) => {
                    toasts.remove(pos);
                    true
                }
                None => false,
            }
        });
        if removed {
            debug!(id, "toast removed");
        } else {
            trace!(id, "toast already gone");
        }
        removed
    }

    /// Removes every toast and returns how many were removed. Pending expiry
    /// timers become no-ops.
    pub fn clear(&self) -> usize {
        let mut cleared = 0;
        self.shared.toasts.send_if_modified(|toasts| {
            cleared = toasts.len();
            toasts.clear();
            cleared > 0
        });
        if cleared > 0 {
            debug!(cleared, "toasts cleared");
        } else {
            trace!("clear ignored, no toasts");
        }
        cleared
    }

    /// Removes every toast whose auto-dismiss deadline has passed.
    ///
    /// Expiry normally happens on a timer task. Hosts without a Tokio runtime
    /// call this periodically instead. Returns the number of toasts removed.
    pub fn tick(&self) -> usize {
        let now = Instant::now();
        let mut expired = 0;
        self.shared.toasts.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|t| !t.is_expired_at(now));
            expired = before - toasts.len();
            expired > 0
        });
        if expired > 0 {
            debug!(expired, "expired toasts pruned");
        }
        expired
    }

    /// Handles a toast message.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(id);
            }
            Message::DismissAll => {
                self.clear();
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Shallow-merges `update` into the configuration.
    ///
    /// Existing toasts keep the settings they were created with.
    pub fn update_config(&self, update: ToastConfigUpdate) {
        self.shared.config.send_modify(|config| config.apply(update));
        debug!(config = ?self.config(), "toast config updated");
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> ToastConfig {
        *self.shared.config.borrow()
    }

    /// Returns a snapshot of the active toasts, newest first.
    #[must_use]
    pub fn active(&self) -> Vec<Toast> {
        self.shared.toasts.borrow().iter().cloned().collect()
    }

    /// Returns the toast with the given ID, if it is still active.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Toast> {
        self.shared
            .toasts
            .borrow()
            .iter()
            .find(|t| t.id().as_str() == id)
            .cloned()
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.toasts.borrow().len()
    }

    /// Returns whether no toast is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.toasts.borrow().is_empty()
    }

    /// Subscribes to changes of the active toast stack.
    #[must_use]
    pub fn subscribe_toasts(&self) -> watch::Receiver<VecDeque<Toast>> {
        self.shared.toasts.subscribe()
    }

    /// Subscribes to configuration changes.
    #[must_use]
    pub fn subscribe_config(&self) -> watch::Receiver<ToastConfig> {
        self.shared.config.subscribe()
    }

    /// Spawns the one-shot removal for `id`.
    ///
    /// The task only holds a weak reference: dropping every manager handle
    /// turns pending timers into no-ops.
    fn schedule_expiry(&self, id: ToastId, delay: Duration) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(id = %id, "no async runtime, toast expiry left to tick()");
            return;
        };

        let deadline = Instant::now() + delay;
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(shared) = shared.upgrade() {
                trace!(id = %id, "toast expiry fired");
                ToastManager { shared }.remove(&id);
            }
        });
    }
}
