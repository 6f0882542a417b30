//! Global Application State
//!
//! Reactive state shared by every page: configuration and the toast stack.

use leptos::*;
use tokponla::{Config, Notification, Notifier};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Runtime configuration (limits, toast durations, assistant script)
    pub config: StoredValue<Config>,
    /// Toasts currently on screen, oldest first
    pub toasts: RwSignal<Vec<ToastEntry>>,
    next_key: StoredValue<u64>,
}

/// A toast on screen. `key` is unique across all notifiers.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub key: u64,
    pub notification: Notification,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        config: store_value(Config::default()),
        toasts: create_rw_signal(Vec::new()),
        next_key: store_value(0),
    };

    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Show notifications; each clears itself after its level's duration
    pub fn publish(&self, notifications: Vec<Notification>) {
        for notification in notifications {
            let key = self.next_key.get_value();
            self.next_key.set_value(key + 1);

            let ms = self
                .config
                .with_value(|c| Notifier::display_ms(notification.level, &c.notifications));
            self.toasts.update(|t| t.push(ToastEntry { key, notification }));

            let toasts = self.toasts;
            gloo_timers::callback::Timeout::new(ms, move || {
                toasts.update(|t| t.retain(|e| e.key != key));
            })
            .forget();
        }
    }

    /// Drain a notifier into the toast stack
    pub fn publish_from(&self, notifier: &mut Notifier) {
        self.publish(notifier.drain());
    }

    pub fn dismiss(&self, key: u64) {
        self.toasts.update(|t| t.retain(|e| e.key != key));
    }
}
